//! Service orchestration tests for task lifecycle operations.

use std::sync::Arc;

use crate::ordering::domain::OrderIndex;
use crate::project::domain::ProjectId;
use crate::task::{
    adapters::memory::InMemoryTaskStore,
    domain::TaskStatus,
    ports::{SubtaskRepository, TaskNoteRepository, TaskRepository, TaskRepositoryError},
    services::{CreateTaskRequest, EditTaskRequest, TaskLifecycleError, TaskService},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService =
    TaskService<InMemoryTaskStore, InMemoryTaskStore, InMemoryTaskStore, DefaultClock>;

struct Harness {
    service: TestService,
    store: InMemoryTaskStore,
}

#[fixture]
fn harness() -> Harness {
    let store = InMemoryTaskStore::new();
    let service = TaskService::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(DefaultClock),
    );
    Harness { service, store }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_appends_to_the_sibling_group(harness: Harness) {
    let project = ProjectId::new();

    let first = harness
        .service
        .create(CreateTaskRequest::new(project, "Plan launch video"))
        .await
        .expect("first create should succeed");
    let second = harness
        .service
        .create(CreateTaskRequest::new(project, "Draft reward tiers"))
        .await
        .expect("second create should succeed");
    let nested = harness
        .service
        .create(CreateTaskRequest::new(project, "Storyboard").with_parent(first.id()))
        .await
        .expect("nested create should succeed");

    assert_eq!(first.order_index(), OrderIndex::new(0));
    assert_eq!(second.order_index(), OrderIndex::new(1));
    // A different sibling group starts its own numbering.
    assert_eq!(nested.order_index(), OrderIndex::new(0));
    assert_eq!(nested.parent_id(), Some(first.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_parent_from_another_project(harness: Harness) {
    let project = ProjectId::new();
    let other_project = ProjectId::new();
    let parent = harness
        .service
        .create(CreateTaskRequest::new(other_project, "Foreign parent"))
        .await
        .expect("parent create should succeed");

    let result = harness
        .service
        .create(CreateTaskRequest::new(project, "Nested").with_parent(parent.id()))
        .await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::ParentOutsideProject { .. })
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_missing_parent(harness: Harness) {
    let project = ProjectId::new();
    let ghost = crate::task::domain::TaskId::new();

    let result = harness
        .service
        .create(CreateTaskRequest::new(project, "Nested").with_parent(ghost))
        .await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::ParentNotFound(id)) if id == ghost
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_replaces_user_visible_fields(harness: Harness) {
    let project = ProjectId::new();
    let task = harness
        .service
        .create(
            CreateTaskRequest::new(project, "Plan launch video")
                .with_description("rough outline"),
        )
        .await
        .expect("create should succeed");

    let due = chrono::NaiveDate::from_ymd_opt(2026, 9, 1).expect("valid date");
    let edited = harness
        .service
        .edit(
            task.id(),
            EditTaskRequest::new("Plan teaser video")
                .with_description("three cuts")
                .with_due_date(due),
        )
        .await
        .expect("edit should succeed");

    assert_eq!(edited.title(), "Plan teaser video");
    assert_eq!(edited.description(), Some("three cuts"));
    assert_eq!(edited.due_date(), Some(due));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn change_status_persists(harness: Harness) {
    let project = ProjectId::new();
    let task = harness
        .service
        .create(CreateTaskRequest::new(project, "Plan launch video"))
        .await
        .expect("create should succeed");

    harness
        .service
        .change_status(task.id(), TaskStatus::InProgress)
        .await
        .expect("status change should succeed");

    let stored = harness
        .store
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(stored.status(), TaskStatus::InProgress);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_cascades_to_subtasks_and_notes(harness: Harness) {
    let project = ProjectId::new();
    let doomed = harness
        .service
        .create(CreateTaskRequest::new(project, "Doomed"))
        .await
        .expect("create should succeed");
    let survivor = harness
        .service
        .create(CreateTaskRequest::new(project, "Survivor"))
        .await
        .expect("create should succeed");
    harness
        .service
        .add_subtask(doomed.id(), "Child checklist item")
        .await
        .expect("subtask create should succeed");
    harness
        .service
        .add_note(doomed.id(), "Child note")
        .await
        .expect("note create should succeed");
    let kept_subtask = harness
        .service
        .add_subtask(survivor.id(), "Kept checklist item")
        .await
        .expect("subtask create should succeed");

    harness
        .service
        .delete(doomed.id())
        .await
        .expect("delete should succeed");

    let remaining = harness
        .store
        .list_by_project(project)
        .await
        .expect("list should succeed");
    assert_eq!(remaining.len(), 1);
    let doomed_subtasks = harness
        .store
        .list_subtasks(doomed.id())
        .await
        .expect("list should succeed");
    let doomed_notes = harness
        .store
        .list_notes(doomed.id())
        .await
        .expect("list should succeed");
    assert!(doomed_subtasks.is_empty());
    assert!(doomed_notes.is_empty());
    let kept = harness
        .store
        .list_subtasks(survivor.id())
        .await
        .expect("list should succeed");
    assert_eq!(kept.first().map(crate::task::domain::Subtask::id), Some(kept_subtask.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_task_reports_not_found(harness: Harness) {
    let ghost = crate::task::domain::TaskId::new();

    let result = harness.service.delete(ghost).await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Repository(
            TaskRepositoryError::TaskNotFound(id)
        )) if id == ghost
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn load_tree_nests_children_in_display_order(harness: Harness) {
    let project = ProjectId::new();
    let root_a = harness
        .service
        .create(CreateTaskRequest::new(project, "Production"))
        .await
        .expect("create should succeed");
    let root_b = harness
        .service
        .create(CreateTaskRequest::new(project, "Marketing"))
        .await
        .expect("create should succeed");
    let child = harness
        .service
        .create(CreateTaskRequest::new(project, "Factory quote").with_parent(root_a.id()))
        .await
        .expect("create should succeed");

    let forest = harness
        .service
        .load_tree(project)
        .await
        .expect("tree load should succeed");

    let roots: Vec<_> = forest.iter().map(|node| node.task().id()).collect();
    assert_eq!(roots, vec![root_a.id(), root_b.id()]);
    let first = forest.first().expect("first root");
    let children: Vec<_> = first.children().iter().map(|node| node.task().id()).collect();
    assert_eq!(children, vec![child.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn subtask_completion_round_trips(harness: Harness) {
    let project = ProjectId::new();
    let task = harness
        .service
        .create(CreateTaskRequest::new(project, "Pack rewards"))
        .await
        .expect("create should succeed");
    let subtask = harness
        .service
        .add_subtask(task.id(), "Print address labels")
        .await
        .expect("subtask create should succeed");

    let completed = harness
        .service
        .set_subtask_completed(subtask.id(), true)
        .await
        .expect("completion should succeed");

    assert!(completed.completed());
    let listed = harness
        .service
        .subtasks_of(task.id())
        .await
        .expect("list should succeed");
    assert!(listed.iter().all(crate::task::domain::Subtask::completed));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn child_rows_require_an_existing_task(harness: Harness) {
    let ghost = crate::task::domain::TaskId::new();

    let subtask_result = harness.service.add_subtask(ghost, "Orphan").await;
    let note_result = harness.service.add_note(ghost, "Orphan").await;

    assert!(matches!(
        subtask_result,
        Err(TaskLifecycleError::Repository(
            TaskRepositoryError::TaskNotFound(_)
        ))
    ));
    assert!(matches!(
        note_result,
        Err(TaskLifecycleError::Repository(
            TaskRepositoryError::TaskNotFound(_)
        ))
    ));
}
