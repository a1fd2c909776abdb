// File: ./src/model/mod.rs
// Aggregates the split model files
pub mod date;
pub mod item;
pub mod parser;

pub use date::{DATE_FORMAT, DateError, parse_date_time};
pub use item::{Task, TaskKind, TaskList};
