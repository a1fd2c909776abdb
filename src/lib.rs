pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod repl;
pub mod storage;
pub mod ui;

pub use error::{Error, Result};
