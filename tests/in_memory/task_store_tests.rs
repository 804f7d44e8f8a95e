//! Store contract tests for the in-memory adapter.

use super::helpers::{store, task};
use cadence::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{TaskList, TaskPatch, TaskStatus},
    ports::{TaskStore, TaskStoreError},
};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_tasks_in_insertion_order(store: InMemoryTaskStore) -> eyre::Result<()> {
    let first = task("Hire designer", TaskList::Backlog, TaskStatus::NotStarted)?;
    let second = task("Quarterly review", TaskList::Week, TaskStatus::InProgress)?;

    store.create(&first).await?;
    store.create(&second).await?;

    assert_eq!(store.list().await?, vec![first, second]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_create_is_rejected(store: InMemoryTaskStore) -> eyre::Result<()> {
    let original = task("Hire designer", TaskList::Backlog, TaskStatus::NotStarted)?;
    store.create(&original).await?;

    let result = store.create(&original).await;

    assert!(matches!(
        result,
        Err(TaskStoreError::DuplicateTask(id)) if id == original.id()
    ));
    assert_eq!(store.list().await?.len(), 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_record_without_moving_it(store: InMemoryTaskStore) -> eyre::Result<()> {
    let first = task("Hire designer", TaskList::Backlog, TaskStatus::NotStarted)?;
    let second = task("Quarterly review", TaskList::Week, TaskStatus::InProgress)?;
    store.create(&first).await?;
    store.create(&second).await?;

    let mut edited = first.clone();
    edited.apply_patch(
        TaskPatch::for_membership(TaskList::Week, TaskStatus::Done),
        &DefaultClock,
    )?;
    let persisted = store.update(&edited).await?;

    assert_eq!(persisted, edited);
    assert_eq!(store.list().await?, vec![edited, second]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_ids_are_reported(store: InMemoryTaskStore) -> eyre::Result<()> {
    let ghost = task("Never saved", TaskList::Backlog, TaskStatus::NotStarted)?;

    let update = store.update(&ghost).await;
    let delete = store.delete(ghost.id()).await;

    assert!(matches!(update, Err(TaskStoreError::NotFound(id)) if id == ghost.id()));
    assert!(matches!(delete, Err(TaskStoreError::NotFound(id)) if id == ghost.id()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clones_share_state(store: InMemoryTaskStore) -> eyre::Result<()> {
    let handle = store.clone();
    let saved = task("Hire designer", TaskList::Backlog, TaskStatus::NotStarted)?;

    handle.create(&saved).await?;
    store.delete(saved.id()).await?;

    assert!(handle.list().await?.is_empty());
    Ok(())
}
