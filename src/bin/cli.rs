use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tally::config::Config;
use tally::storage::{LocalStorage, Storage};
use tally::ui::Console;

/// Track todos, deadlines and events from the terminal.
///
/// Commands: todo, deadline, event, list, mark, unmark, delete, bye
#[derive(Parser, Debug)]
#[command(name = "tally", version, about)]
struct Cli {
    /// Task file to use instead of the configured or default one
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Config file (default: ~/.config/tally/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    tally::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let data_path = cli
        .data_file
        .or(config.data_file)
        .or_else(LocalStorage::default_path)
        .context("could not determine where to store tasks; pass --data-file")?;

    let storage = LocalStorage::new(data_path);
    let mut tasks = storage
        .load()
        .with_context(|| format!("failed to load {}", storage.path().display()))?;

    let mut console = Console::stdout(config.color && !cli.no_color);
    tally::repl::run(io::stdin().lock(), &mut tasks, &mut console, &storage)?;
    Ok(())
}
