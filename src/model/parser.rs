// File: ./src/model/parser.rs
// Builds tasks from free-text add commands
use crate::error::{Error, Result};
use crate::model::date::parse_date_time;
use crate::model::item::Task;
use chrono::NaiveDateTime;
use std::slice::SliceIndex;

pub const BY_MARKER: &str = "/by ";
pub const FROM_MARKER: &str = "/from ";
pub const TO_MARKER: &str = "/to ";

pub const DEADLINE_USAGE: &str = "deadline [task] /by [date]";
pub const EVENT_USAGE: &str = "event [task] /from [startDate] /to [endDate]";

impl Task {
    /// Parse an add command. `keyword` selects the variant and `input` is the
    /// whole line, keyword included.
    ///
    /// One separating space after the keyword and one before each marker are
    /// dropped; the description keeps the rest exactly as typed. Markers are
    /// matched literally and only their first occurrence counts.
    pub fn from_input(keyword: &str, input: &str) -> Result<Task> {
        match keyword {
            "todo" => {
                let args = arguments(keyword, input)?;
                Ok(Task::todo(args))
            }
            "deadline" => {
                let args = arguments(keyword, input)?;
                let by = find_marker(args, BY_MARKER, keyword, DEADLINE_USAGE)?;

                let description = before_marker(args, by);
                let due_text = field(args, by + BY_MARKER.len()..);
                require(description, "Task Name")?;
                require(due_text, "Start Date")?;

                Ok(Task::deadline(description, parse_date(due_text)?))
            }
            "event" => {
                let args = arguments(keyword, input)?;
                let from = find_marker(args, FROM_MARKER, keyword, EVENT_USAGE)?;
                let to = find_marker(args, TO_MARKER, keyword, EVENT_USAGE)?;
                if to < from {
                    return Err(Error::insufficient_arguments(keyword, EVENT_USAGE));
                }

                let description = before_marker(args, from);
                let start_text = field(args, from + FROM_MARKER.len()..to);
                let end_text = field(args, to + TO_MARKER.len()..);
                require(description, "Task Name")?;
                require(start_text, "Start Date")?;
                require(end_text, "End Date")?;

                let start = parse_date(start_text)?;
                let end = parse_date(end_text)?;
                if end < start {
                    return Err(Error::EventEndsBeforeStart { start, end });
                }

                Ok(Task::event(description, start, end))
            }
            _ => Err(Error::UnknownInput),
        }
    }
}

/// Everything after the keyword and its one separating space. Fails with
/// `NoDescription` when nothing follows.
fn arguments<'a>(keyword: &str, input: &'a str) -> Result<&'a str> {
    let rest = input
        .trim_start()
        .strip_prefix(keyword)
        .ok_or(Error::UnknownInput)?;
    if rest.is_empty() {
        return Err(Error::NoDescription(keyword.to_string()));
    }

    // "todoist" is not "todo"
    let args = rest
        .strip_prefix(char::is_whitespace)
        .ok_or(Error::UnknownInput)?;
    if args.is_empty() {
        return Err(Error::NoDescription(keyword.to_string()));
    }
    Ok(args)
}

/// Text up to `marker_at`, minus the single space that separates it from the
/// marker.
fn before_marker(args: &str, marker_at: usize) -> &str {
    let text = args.get(..marker_at).unwrap_or("");
    text.strip_suffix(' ').unwrap_or(text)
}

fn find_marker(args: &str, marker: &str, keyword: &str, usage: &str) -> Result<usize> {
    args.find(marker)
        .ok_or_else(|| Error::insufficient_arguments(keyword, usage))
}

/// Trimmed date text from `args`; out-of-bounds ranges yield an empty field.
fn field<R>(args: &str, range: R) -> &str
where
    R: SliceIndex<str, Output = str>,
{
    args.get(range).map_or("", str::trim)
}

fn require(value: &str, name: &'static str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::EmptyArgument(name));
    }
    Ok(())
}

fn parse_date(text: &str) -> Result<NaiveDateTime> {
    parse_date_time(text).map_err(|_| Error::InvalidDate(text.to_string()))
}
