// File: ./src/model/item.rs
// Task and TaskList definitions
use crate::error::{Error, Result};
use crate::model::date::format_date_time;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Variant-specific payload of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskKind {
    Todo,
    Deadline {
        due: NaiveDateTime,
    },
    Event {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl TaskKind {
    /// Single-letter tag shown in listings.
    pub fn symbol(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    description: String,
    #[serde(default)]
    is_done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self::with_kind(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, due: NaiveDateTime) -> Self {
        Self::with_kind(description, TaskKind::Deadline { due })
    }

    pub fn event(description: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self::with_kind(description, TaskKind::Event { start, end })
    }

    fn with_kind(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            is_done: false,
            kind,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn mark_done(&mut self) {
        self.is_done = true;
    }

    pub fn mark_undone(&mut self) {
        self.is_done = false;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.is_done { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", self.kind.symbol(), check, self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { due } => write!(f, " (by: {})", format_date_time(due)),
            TaskKind::Event { start, end } => write!(
                f,
                " (from: {} to: {})",
                format_date_time(start),
                format_date_time(end)
            ),
        }
    }
}

/// Ordered collection of tasks. Positions exposed to users are 1-based.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Task> {
        let slot = self.slot(index)?;
        Ok(&self.tasks[slot])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Task> {
        let slot = self.slot(index)?;
        Ok(&mut self.tasks[slot])
    }

    pub fn remove(&mut self, index: usize) -> Result<Task> {
        let slot = self.slot(index)?;
        Ok(self.tasks.remove(slot))
    }

    pub fn last(&self) -> Option<&Task> {
        self.tasks.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    // Maps a 1-based position to a vec offset.
    fn slot(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.tasks.len() {
            return Err(Error::IndexOutOfRange {
                index,
                count: self.tasks.len(),
            });
        }
        Ok(index - 1)
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
