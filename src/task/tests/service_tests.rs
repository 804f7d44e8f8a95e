//! Service orchestration tests for task CRUD.

use std::sync::Arc;

use crate::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{TaskDraft, TaskId, TaskList, TaskPatch, TaskPriority, TaskStatus},
    ports::{MockTaskStore, TaskStoreError},
    services::{TaskService, TaskServiceError},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TaskService<InMemoryTaskStore, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskService::new(Arc::new(InMemoryTaskStore::new()), Arc::new(DefaultClock))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_persists_and_lists_in_insertion_order(service: TestService) {
    let first = service
        .create(TaskDraft::new("Sprint planning").expect("valid draft"))
        .await
        .expect("task creation should succeed");
    let second = service
        .create(TaskDraft::for_column("Incident review", TaskStatus::InProgress).expect("valid draft"))
        .await
        .expect("task creation should succeed");

    let listed = service.list().await.expect("list should succeed");

    assert_eq!(listed, vec![first, second]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_applies_patch_without_mutating_input(service: TestService) {
    let created = service
        .create(TaskDraft::new("Perf calibration").expect("valid draft"))
        .await
        .expect("task creation should succeed");

    let updated = service
        .update(
            &created,
            TaskPatch::new()
                .with_priority(TaskPriority::High)
                .with_list(TaskList::Week),
        )
        .await
        .expect("update should succeed");

    assert_eq!(created.priority(), TaskPriority::Medium);
    assert_eq!(updated.priority(), TaskPriority::High);
    assert_eq!(updated.list(), TaskList::Week);
    assert_eq!(service.list().await.expect("list should succeed"), vec![updated]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn set_status_changes_only_status(service: TestService) {
    let created = service
        .create(TaskDraft::for_column("Ship release notes", TaskStatus::NotStarted).expect("valid draft"))
        .await
        .expect("task creation should succeed");

    let updated = service
        .set_status(&created, TaskStatus::Done)
        .await
        .expect("status change should succeed");

    assert_eq!(updated.status(), TaskStatus::Done);
    assert_eq!(updated.list(), TaskList::Week);
    assert_eq!(updated.title(), created.title());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_blank_title_before_reaching_store(service: TestService) {
    let created = service
        .create(TaskDraft::new("Team health survey").expect("valid draft"))
        .await
        .expect("task creation should succeed");

    let result = service
        .update(&created, TaskPatch::new().with_title(" "))
        .await;

    assert!(matches!(result, Err(TaskServiceError::Domain(_))));
    assert_eq!(service.list().await.expect("list should succeed"), vec![created]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_task_and_reports_missing_ids(service: TestService) {
    let created = service
        .create(TaskDraft::new("Archive docs").expect("valid draft"))
        .await
        .expect("task creation should succeed");

    service
        .delete(created.id())
        .await
        .expect("delete should succeed");
    let missing = TaskId::new();
    let result = service.delete(missing).await;

    assert!(service.list().await.expect("list should succeed").is_empty());
    assert!(matches!(
        result,
        Err(TaskServiceError::Store(TaskStoreError::NotFound(id))) if id == missing
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_failures_surface_as_store_errors() {
    let mut store = MockTaskStore::new();
    store.expect_create().returning(|_| {
        Err(TaskStoreError::persistence(std::io::Error::other(
            "connection reset",
        )))
    });
    let service = TaskService::new(Arc::new(store), Arc::new(DefaultClock));

    let result = service
        .create(TaskDraft::new("Offsite agenda").expect("valid draft"))
        .await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Store(TaskStoreError::Persistence(_)))
    ));
}
