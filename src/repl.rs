// Line-by-line command loop
use crate::command::Command;
use crate::error::Result;
use crate::model::TaskList;
use crate::storage::Storage;
use crate::ui::Ui;
use std::io::BufRead;

/// Reads commands until `bye` or end of input. A failed command is reported
/// through `ui` and the loop moves on; only a failure to read `input` ends it
/// early.
pub fn run<R: BufRead>(
    input: R,
    tasks: &mut TaskList,
    ui: &mut dyn Ui,
    storage: &dyn Storage,
) -> Result<()> {
    ui.greet();

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                tracing::debug!(error = %e, "rejected input");
                ui.error(&e);
                continue;
            }
        };

        let exit = command.is_exit();
        if let Err(e) = command.execute(tasks, ui, storage) {
            if e.is_storage_failure() {
                tracing::error!(error = %e, "failed to save tasks");
            }
            ui.error(&e);
        }
        if exit {
            break;
        }
    }
    Ok(())
}
