// File: ./src/error.rs
//! Error types for tally
//!
//! Every failure a command can produce is a variant here. The session loop
//! prints them and keeps reading input; none of them end the process.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The input was the bare keyword with nothing after it
    #[error("The description of a {0} cannot be empty.")]
    NoDescription(String),

    /// A required marker such as `/by ` is missing
    #[error("Not enough arguments for {keyword}. Usage: {usage}")]
    InsufficientArguments { keyword: String, usage: String },

    /// A field is present structurally but has no content
    #[error("{0} cannot be empty.")]
    EmptyArgument(&'static str),

    #[error("Invalid date: '{0}'. Expected a date like 2/12/2019 1800")]
    InvalidDate(String),

    #[error("Event ends ({end}) before it starts ({start}).")]
    EventEndsBeforeStart {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Please give the number of the task to {0}.")]
    MissingIndex(String),

    #[error("'{0}' is not a valid task number.")]
    InvalidIndex(String),

    #[error("There is no task {index}; the list has {count}.")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("I'm sorry, but I don't know what that means :-(")]
    UnknownInput,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn insufficient_arguments(keyword: impl Into<String>, usage: impl Into<String>) -> Self {
        Self::InsufficientArguments {
            keyword: keyword.into(),
            usage: usage.into(),
        }
    }

    /// True for failures that came from the storage medium rather than from
    /// the text the user typed.
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Serialization(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_description_message_names_keyword() {
        let err = Error::NoDescription("todo".to_string());
        assert_eq!(err.to_string(), "The description of a todo cannot be empty.");
    }

    #[test]
    fn insufficient_arguments_message_includes_usage() {
        let err = Error::insufficient_arguments("deadline", "deadline [task] /by [date]");
        assert_eq!(
            err.to_string(),
            "Not enough arguments for deadline. Usage: deadline [task] /by [date]"
        );
    }

    #[test]
    fn empty_argument_message_names_field() {
        assert_eq!(
            Error::EmptyArgument("Task Name").to_string(),
            "Task Name cannot be empty."
        );
    }

    #[test]
    fn io_errors_are_storage_failures() {
        let err: Error = std::io::Error::other("disk full").into();
        assert!(err.is_storage_failure());
        assert!(!Error::UnknownInput.is_storage_failure());
    }
}
