//! Integration tests for manual reordering through the order-index port.

use std::sync::Arc;

use super::helpers::{App, app};
use crowdplan::auth::domain::UserId;
use crowdplan::ordering::{
    domain::entries_of,
    services::{MoveOutcome, OrderSequencer},
};
use crowdplan::project::{domain::BrandLine, services::CreateProjectRequest};
use crowdplan::task::{domain::Task, services::CreateTaskRequest};
use crowdplan::task::ports::TaskRepository;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moving_a_task_up_swaps_display_positions(app: App) {
    let project = app
        .project_service
        .create(CreateProjectRequest::new(
            UserId::new(),
            "Winter campaign",
            BrandLine::BrandA,
        ))
        .await
        .expect("project create should succeed");
    for title in ["First", "Second", "Third"] {
        app.task_service
            .create(CreateTaskRequest::new(project.id(), title))
            .await
            .expect("task create should succeed");
    }

    let loaded = app
        .tasks
        .list_by_project(project.id())
        .await
        .expect("list should succeed");
    let entries = entries_of(&loaded, Task::id);
    let sequencer = OrderSequencer::new(Arc::new(app.tasks.clone()));

    let outcome = sequencer
        .move_up(&entries, 1)
        .await
        .expect("move should succeed");
    assert_eq!(outcome, MoveOutcome::Moved);

    let refetched = app
        .tasks
        .list_by_project(project.id())
        .await
        .expect("list should succeed");
    let titles: Vec<&str> = refetched.iter().map(Task::title).collect();
    assert_eq!(titles, vec!["Second", "First", "Third"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn boundary_moves_change_nothing(app: App) {
    let project = app
        .project_service
        .create(CreateProjectRequest::new(
            UserId::new(),
            "Winter campaign",
            BrandLine::BrandA,
        ))
        .await
        .expect("project create should succeed");
    for title in ["First", "Second"] {
        app.task_service
            .create(CreateTaskRequest::new(project.id(), title))
            .await
            .expect("task create should succeed");
    }
    let loaded = app
        .tasks
        .list_by_project(project.id())
        .await
        .expect("list should succeed");
    let entries = entries_of(&loaded, Task::id);
    let sequencer = OrderSequencer::new(Arc::new(app.tasks.clone()));

    let up = sequencer
        .move_up(&entries, 0)
        .await
        .expect("boundary move should succeed");
    let down = sequencer
        .move_down(&entries, 1)
        .await
        .expect("boundary move should succeed");

    assert_eq!(up, MoveOutcome::Boundary);
    assert_eq!(down, MoveOutcome::Boundary);
    let refetched = app
        .tasks
        .list_by_project(project.id())
        .await
        .expect("list should succeed");
    let titles: Vec<&str> = refetched.iter().map(Task::title).collect();
    assert_eq!(titles, vec!["First", "Second"]);
}
