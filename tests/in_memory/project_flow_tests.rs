//! Integration tests for project lifecycle, sharing, and duplication.

use super::helpers::{App, app};
use crowdplan::auth::domain::UserId;
use crowdplan::ordering::domain::OrderIndex;
use crowdplan::project::{
    domain::{BrandLine, Schedule},
    ports::SectionStore,
    services::CreateProjectRequest,
};
use crowdplan::task::ports::{SubtaskRepository, TaskRepository};
use crowdplan::task::services::CreateTaskRequest;
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn shared_view_round_trip(app: App) {
    let owner = UserId::new();
    let project = app
        .project_service
        .create(CreateProjectRequest::new(
            owner,
            "Winter campaign",
            BrandLine::BrandA,
        ))
        .await
        .expect("project create should succeed");

    let shared = app
        .project_service
        .enable_sharing(project.id())
        .await
        .expect("sharing should succeed");
    let token = shared.share_token().expect("token issued").clone();
    let via_link = app
        .project_service
        .find_shared(&token)
        .await
        .expect("lookup should succeed");
    assert_eq!(via_link.map(|p| p.id()), Some(project.id()));

    app.project_service
        .disable_sharing(project.id())
        .await
        .expect("disable should succeed");
    let revoked = app
        .project_service
        .find_shared(&token)
        .await
        .expect("lookup should succeed");
    assert!(revoked.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplication_copies_the_whole_project_tree(app: App) {
    let owner = UserId::new();
    let source = app
        .project_service
        .create(CreateProjectRequest::new(
            owner,
            "Autumn lamp campaign",
            BrandLine::BrandB,
        ))
        .await
        .expect("project create should succeed");
    let task = app
        .task_service
        .create(CreateTaskRequest::new(source.id(), "Mould design"))
        .await
        .expect("task create should succeed");
    app.task_service
        .create(CreateTaskRequest::new(source.id(), "Copywriting"))
        .await
        .expect("task create should succeed");
    app.task_service
        .add_subtask(task.id(), "Collect vendor quotes")
        .await
        .expect("subtask create should succeed");
    let schedule = Schedule::new(
        source.id(),
        owner,
        "Sample production",
        OrderIndex::ZERO,
        &DefaultClock,
    );
    app.sections
        .schedules
        .insert(&schedule)
        .await
        .expect("schedule insert should succeed");

    let report = app
        .replicator
        .duplicate(source.id(), owner)
        .await
        .expect("duplication should succeed");

    assert!(report.is_complete());
    let destination = report.project();
    assert_eq!(destination.name(), "Autumn lamp campaign copy");

    let copied_tasks = app
        .tasks
        .list_by_project(destination.id())
        .await
        .expect("list should succeed");
    assert_eq!(copied_tasks.len(), 2);
    let copied_parent = copied_tasks
        .iter()
        .find(|t| t.title() == "Mould design")
        .expect("copied task present");
    let copied_subtasks = app
        .tasks
        .list_subtasks(copied_parent.id())
        .await
        .expect("list should succeed");
    assert_eq!(copied_subtasks.len(), 1);

    let copied_schedules = app
        .sections
        .schedules
        .list_by_project(destination.id())
        .await
        .expect("list should succeed");
    assert_eq!(copied_schedules.len(), 1);

    // The source is untouched.
    let source_tasks = app
        .tasks
        .list_by_project(source.id())
        .await
        .expect("list should succeed");
    assert_eq!(source_tasks.len(), 2);
}
