use std::io::Cursor;
use tally::model::TaskList;
use tally::repl;
use tally::storage::{LocalStorage, Storage};
use tally::ui::Console;

fn run_session(input: &str, storage: &LocalStorage) -> (TaskList, String) {
    let mut tasks = storage.load().unwrap();
    let mut console = Console::new(Vec::new(), false);
    repl::run(Cursor::new(input), &mut tasks, &mut console, storage).unwrap();
    (tasks, String::from_utf8(console.into_inner()).unwrap())
}

#[test]
fn errors_do_not_end_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalStorage::new(dir.path().join("tasks.json"));

    let input = "todo\n\
                 deadline return book\n\
                 blah\n\
                 todo read book\n\
                 \n\
                 deadline return book /by 2/12/2019 1800\n\
                 mark 2\n\
                 list\n\
                 bye\n\
                 todo never added\n";
    let (tasks, out) = run_session(input, &storage);

    assert_eq!(tasks.count(), 2);
    assert!(out.starts_with("Hello! What can I do for you?\n"));
    assert!(out.contains("OOPS!!! The description of a todo cannot be empty."));
    assert!(out.contains("OOPS!!! Not enough arguments for deadline."));
    assert!(out.contains("OOPS!!! I'm sorry, but I don't know what that means :-("));
    assert!(out.contains("1.[T][ ] read book\n"));
    assert!(out.contains("2.[D][X] return book (by: Dec 02 2019 18:00)\n"));
    assert!(out.ends_with("Bye. Hope to see you again soon!\n"));
    assert!(!out.contains("never added"));
}

#[test]
fn tasks_survive_between_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalStorage::new(dir.path().join("tasks.json"));

    run_session(
        "todo a\nevent standup /from 1/3/2024 0900 /to 1/3/2024 0915\ntodo b\ndelete 1\n",
        &storage,
    );

    let (tasks, out) = run_session("list\n", &storage);
    assert_eq!(tasks.count(), 2);
    assert!(out.contains("1.[E][ ] standup (from: Mar 01 2024 09:00 to: Mar 01 2024 09:15)\n"));
    assert!(out.contains("2.[T][ ] b\n"));
}

#[test]
fn end_of_input_stops_without_farewell() {
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalStorage::new(dir.path().join("tasks.json"));

    let (tasks, out) = run_session("todo a", &storage);
    assert_eq!(tasks.count(), 1);
    assert!(!out.contains("Bye."));
}
