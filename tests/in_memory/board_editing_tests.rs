//! Editor and drag controller round trips through the in-memory store.

use super::helpers::{MemoryEditor, board};
use cadence::board::{
    domain::DropTargetKind,
    services::{
        BacklogQuery, DragSessionConfig, DragSessionController, FieldFilter, SortKey, SortOrder,
    },
};
use cadence::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{Task, TaskDraft, TaskList, TaskPriority, TaskStatus},
    ports::TaskStore,
};
use eyre::eyre;
use rstest::rstest;

fn titles<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<&'a str> {
    tasks.into_iter().map(Task::title).collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn committed_drops_survive_a_reload(
    board: (MemoryEditor, InMemoryTaskStore),
) -> eyre::Result<()> {
    let (editor, store) = board;
    let mut working = editor.load().await?;
    let roadmap = editor
        .create(&mut working, TaskDraft::for_column("Roadmap", TaskStatus::InProgress)?)
        .await?;
    editor
        .create(&mut working, TaskDraft::new("Expense report")?)
        .await?;

    let mut controller = DragSessionController::new(working);
    eyre::ensure!(controller.drag_start(roadmap), "drag did not start");
    let blocked = DropTargetKind::column(TaskStatus::Blocked);
    controller.drag_over(roadmap, &blocked);
    let outcome = controller
        .drag_end(roadmap, Some(&blocked))
        .ok_or_else(|| eyre!("drop was ignored"))?;
    let mut dropped = controller.into_collection();
    let persisted = editor.commit_drop(&mut dropped, &outcome).await?;

    let reloaded = editor.load().await?;
    assert!(persisted);
    assert_eq!(reloaded.get(roadmap), dropped.get(roadmap));
    assert_eq!(titles(reloaded.tasks_in_column(TaskStatus::Blocked)), vec!["Roadmap"]);
    assert_eq!(store.list().await?.len(), 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn uncommitted_drops_are_lost_on_reload(
    board: (MemoryEditor, InMemoryTaskStore),
) -> eyre::Result<()> {
    let (editor, _store) = board;
    let mut working = editor.load().await?;
    let chore = editor
        .create(&mut working, TaskDraft::new("Renew domain")?)
        .await?;

    let mut controller = DragSessionController::new(working);
    eyre::ensure!(controller.drag_start(chore), "drag did not start");
    let done = DropTargetKind::column(TaskStatus::Done);
    controller.drag_over(chore, &done);
    controller.drag_end(chore, Some(&done));

    let reloaded = editor.load().await?;
    let stored = reloaded.get(chore).ok_or_else(|| eyre!("task missing"))?;
    assert_eq!(stored.list(), TaskList::Backlog);
    assert_eq!(stored.status(), TaskStatus::NotStarted);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn restoring_cancel_leaves_nothing_to_commit(
    board: (MemoryEditor, InMemoryTaskStore),
) -> eyre::Result<()> {
    let (editor, _store) = board;
    let mut working = editor.load().await?;
    let standup = editor
        .create(&mut working, TaskDraft::for_column("Standup", TaskStatus::NotStarted)?)
        .await?;

    let mut controller = DragSessionController::with_config(
        working,
        DragSessionConfig::default().with_restore_on_cancel(true),
    );
    eyre::ensure!(controller.drag_start(standup), "drag did not start");
    controller.drag_over(standup, &DropTargetKind::Backlog);
    eyre::ensure!(controller.drag_cancel(), "no drag to cancel");

    let after_cancel = controller.into_collection();
    assert_eq!(after_cancel, editor.load().await?);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn backlog_query_runs_over_loaded_tasks(
    board: (MemoryEditor, InMemoryTaskStore),
) -> eyre::Result<()> {
    let (editor, _store) = board;
    let mut working = editor.load().await?;
    for (title, priority) in [
        ("Audit access logs", TaskPriority::High),
        ("Order swag", TaskPriority::Low),
        ("Audit vendor list", TaskPriority::VeryHigh),
    ] {
        editor
            .create(&mut working, TaskDraft::new(title)?.with_priority(priority))
            .await?;
    }
    editor
        .create(
            &mut working,
            TaskDraft::for_column("Audit on-call rota", TaskStatus::InProgress)?,
        )
        .await?;

    let query = BacklogQuery::new()
        .with_search("audit")
        .with_status(FieldFilter::Only(TaskStatus::NotStarted))
        .with_sort(SortOrder::descending(SortKey::Priority));
    let shown = query.apply(working.tasks_in_backlog());

    assert_eq!(titles(shown), vec!["Audit vendor list", "Audit access logs"]);
    Ok(())
}
