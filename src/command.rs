use crate::error::{Error, Result};
use crate::model::{Task, TaskList};
use crate::storage::Storage;
use crate::ui::Ui;

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Task),
    List,
    Mark(usize),
    Unmark(usize),
    Delete(usize),
    Exit,
}

impl Command {
    /// Parse a full input line. The keyword is its first whitespace-delimited
    /// token.
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().ok_or(Error::UnknownInput)?;

        let command = match keyword {
            "todo" | "deadline" | "event" => Command::Add(Task::from_input(keyword, line)?),
            "list" => Command::List,
            "bye" => Command::Exit,
            "mark" => Command::Mark(parse_index(keyword, tokens.next())?),
            "unmark" => Command::Unmark(parse_index(keyword, tokens.next())?),
            "delete" => Command::Delete(parse_index(keyword, tokens.next())?),
            _ => return Err(Error::UnknownInput),
        };
        tracing::debug!(?command, "parsed command");
        Ok(command)
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    /// Apply the command to `tasks`, notify `ui`, and persist through
    /// `storage` when the list changed.
    ///
    /// There is no rollback: if the write fails the in-memory change stays
    /// and the error is returned.
    pub fn execute(self, tasks: &mut TaskList, ui: &mut dyn Ui, storage: &dyn Storage) -> Result<()> {
        match self {
            Command::Add(task) => {
                tasks.add_task(task);
                if let Some(added) = tasks.last() {
                    ui.task_added(added, tasks.count());
                }
                storage.write(tasks)
            }
            Command::List => {
                ui.task_list(tasks);
                Ok(())
            }
            Command::Mark(index) => {
                let task = tasks.get_mut(index)?;
                task.mark_done();
                ui.task_marked(task);
                storage.write(tasks)
            }
            Command::Unmark(index) => {
                let task = tasks.get_mut(index)?;
                task.mark_undone();
                ui.task_unmarked(task);
                storage.write(tasks)
            }
            Command::Delete(index) => {
                let removed = tasks.remove(index)?;
                ui.task_removed(&removed, tasks.count());
                storage.write(tasks)
            }
            Command::Exit => {
                ui.farewell();
                Ok(())
            }
        }
    }
}

fn parse_index(keyword: &str, token: Option<&str>) -> Result<usize> {
    let raw = token.ok_or_else(|| Error::MissingIndex(keyword.to_string()))?;
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::InvalidIndex(raw.to_string())),
    }
}
