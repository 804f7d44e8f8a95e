//! Tests for the ordered working collection.

use super::fixtures::{backlog, collection, id_of, titles, week};
use crate::board::domain::{BoardDomainError, TaskCollection};
use crate::task::domain::TaskStatus;
use rstest::rstest;

#[rstest]
fn new_rejects_duplicate_ids() {
    let task = week("Standup", TaskStatus::NotStarted);
    let duplicate = task.clone();
    let result = TaskCollection::new(vec![task.clone(), duplicate]);

    assert_eq!(result, Err(BoardDomainError::DuplicateTask(task.id())));
}

#[rstest]
fn column_and_backlog_views_preserve_sequence_order() {
    let tasks = collection(vec![
        week("A", TaskStatus::Done),
        backlog("B", TaskStatus::Done),
        week("C", TaskStatus::InProgress),
        week("D", TaskStatus::Done),
        backlog("E", TaskStatus::NotStarted),
    ]);

    assert_eq!(titles(tasks.tasks_in_column(TaskStatus::Done)), vec!["A", "D"]);
    assert_eq!(titles(tasks.tasks_in_column(TaskStatus::InProgress)), vec!["C"]);
    assert!(tasks.tasks_in_column(TaskStatus::Blocked).is_empty());
    assert_eq!(titles(tasks.tasks_in_backlog()), vec!["B", "E"]);
}

#[rstest]
#[case(0, 2, vec!["B", "C", "A", "D"])]
#[case(3, 0, vec!["D", "A", "B", "C"])]
#[case(1, 1, vec!["A", "B", "C", "D"])]
fn array_move_shifts_elements_between(
    #[case] from: usize,
    #[case] to: usize,
    #[case] expected: Vec<&str>,
) {
    let mut tasks = collection(vec![
        week("A", TaskStatus::NotStarted),
        week("B", TaskStatus::NotStarted),
        week("C", TaskStatus::NotStarted),
        week("D", TaskStatus::NotStarted),
    ]);

    assert!(tasks.array_move(from, to));
    assert_eq!(titles(&tasks), expected);
}

#[rstest]
fn array_move_out_of_range_is_rejected() {
    let mut tasks = collection(vec![week("A", TaskStatus::NotStarted)]);
    assert!(!tasks.array_move(0, 3));
    assert_eq!(titles(&tasks), vec!["A"]);
}

#[rstest]
fn push_replace_and_remove_keep_ids_unique() {
    let mut tasks = collection(vec![week("A", TaskStatus::NotStarted)]);
    let extra = backlog("B", TaskStatus::Blocked);
    tasks.push(extra.clone()).expect("new id");

    assert_eq!(
        tasks.push(extra.clone()),
        Err(BoardDomainError::DuplicateTask(extra.id()))
    );

    let a = id_of(&tasks, "A");
    let mut edited = tasks.get(a).cloned().expect("task A present");
    edited.assign_list(crate::task::domain::TaskList::Backlog);
    assert!(tasks.replace(edited));
    assert_eq!(titles(tasks.tasks_in_backlog()), vec!["A", "B"]);

    assert_eq!(tasks.remove(a).map(|task| task.id()), Some(a));
    assert!(tasks.remove(a).is_none());
    assert_eq!(tasks.len(), 1);
}
