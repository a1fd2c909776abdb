// Console rendering of command results
use crate::error::Error;
use crate::model::{Task, TaskList};
use crossterm::style::Stylize;
use std::io::{self, Write};

/// Notification sink for the session. Nothing here returns a value: a
/// message that fails to print is dropped.
pub trait Ui {
    fn greet(&mut self);
    fn task_added(&mut self, task: &Task, count: usize);
    fn task_removed(&mut self, task: &Task, count: usize);
    fn task_marked(&mut self, task: &Task);
    fn task_unmarked(&mut self, task: &Task);
    fn task_list(&mut self, tasks: &TaskList);
    fn error(&mut self, error: &Error);
    fn farewell(&mut self);
}

pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl Console<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl AsRef<str>) {
        let _ = writeln!(self.out, "{}", text.as_ref());
    }

    fn task_line(&self, task: &Task) -> String {
        let text = task.to_string();
        if self.color && task.is_done() {
            format!("{}", text.green())
        } else {
            text
        }
    }

    fn count_line(count: usize) -> String {
        let noun = if count == 1 { "task" } else { "tasks" };
        format!("Now you have {count} {noun} in the list.")
    }
}

impl<W: Write> Ui for Console<W> {
    fn greet(&mut self) {
        self.line("Hello! What can I do for you?");
    }

    fn task_added(&mut self, task: &Task, count: usize) {
        let task_line = self.task_line(task);
        self.line("Got it. I've added this task:");
        self.line(format!("  {task_line}"));
        self.line(Self::count_line(count));
    }

    fn task_removed(&mut self, task: &Task, count: usize) {
        let task_line = self.task_line(task);
        self.line("Noted. I've removed this task:");
        self.line(format!("  {task_line}"));
        self.line(Self::count_line(count));
    }

    fn task_marked(&mut self, task: &Task) {
        let task_line = self.task_line(task);
        self.line("Nice! I've marked this task as done:");
        self.line(format!("  {task_line}"));
    }

    fn task_unmarked(&mut self, task: &Task) {
        let task_line = self.task_line(task);
        self.line("OK, I've marked this task as not done yet:");
        self.line(format!("  {task_line}"));
    }

    fn task_list(&mut self, tasks: &TaskList) {
        if tasks.is_empty() {
            self.line("Your list is empty.");
            return;
        }
        self.line("Here are the tasks in your list:");
        for (i, task) in tasks.iter().enumerate() {
            let task_line = self.task_line(task);
            self.line(format!("{}.{}", i + 1, task_line));
        }
    }

    fn error(&mut self, error: &Error) {
        let text = format!("OOPS!!! {error}");
        if self.color {
            self.line(format!("{}", text.red()));
        } else {
            self.line(text);
        }
    }

    fn farewell(&mut self) {
        self.line("Bye. Hope to see you again soon!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Console<Vec<u8>>)) -> String {
        let mut console = Console::new(Vec::new(), false);
        f(&mut console);
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn added_message_shows_task_and_count() {
        let out = render(|c| c.task_added(&Task::todo("read book"), 1));
        assert_eq!(
            out,
            "Got it. I've added this task:\n  [T][ ] read book\nNow you have 1 task in the list.\n"
        );
    }

    #[test]
    fn list_is_numbered_from_one() {
        let tasks = TaskList::from(vec![Task::todo("a"), Task::todo("b")]);
        let out = render(|c| c.task_list(&tasks));
        assert!(out.contains("1.[T][ ] a\n"));
        assert!(out.contains("2.[T][ ] b\n"));
    }

    #[test]
    fn empty_list_says_so() {
        assert_eq!(render(|c| c.task_list(&TaskList::new())), "Your list is empty.\n");
    }

    #[test]
    fn errors_are_prefixed_without_color_codes() {
        let out = render(|c| c.error(&Error::UnknownInput));
        assert_eq!(out, "OOPS!!! I'm sorry, but I don't know what that means :-(\n");
    }
}
