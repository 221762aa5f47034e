//! Integration tests for the task hierarchy over the in-memory adapters.

use super::helpers::{App, app};
use crowdplan::auth::domain::UserId;
use crowdplan::project::{domain::BrandLine, services::CreateProjectRequest};
use crowdplan::task::services::CreateTaskRequest;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_tasks_come_back_as_a_display_ordered_forest(app: App) {
    let project = app
        .project_service
        .create(CreateProjectRequest::new(
            UserId::new(),
            "Winter campaign",
            BrandLine::BrandA,
        ))
        .await
        .expect("project create should succeed");

    let production = app
        .task_service
        .create(CreateTaskRequest::new(project.id(), "Production"))
        .await
        .expect("task create should succeed");
    let marketing = app
        .task_service
        .create(CreateTaskRequest::new(project.id(), "Marketing"))
        .await
        .expect("task create should succeed");
    let quote = app
        .task_service
        .create(CreateTaskRequest::new(project.id(), "Factory quote").with_parent(production.id()))
        .await
        .expect("task create should succeed");

    let forest = app
        .task_service
        .load_tree(project.id())
        .await
        .expect("tree load should succeed");

    let roots: Vec<_> = forest.iter().map(|node| node.task().id()).collect();
    assert_eq!(roots, vec![production.id(), marketing.id()]);
    let first_root = forest.first().expect("first root");
    let children: Vec<_> = first_root
        .children()
        .iter()
        .map(|node| node.task().id())
        .collect();
    assert_eq!(children, vec![quote.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_parent_leaves_children_as_promoted_roots(app: App) {
    let project = app
        .project_service
        .create(CreateProjectRequest::new(
            UserId::new(),
            "Winter campaign",
            BrandLine::BrandA,
        ))
        .await
        .expect("project create should succeed");
    let parent = app
        .task_service
        .create(CreateTaskRequest::new(project.id(), "Production"))
        .await
        .expect("task create should succeed");
    let child = app
        .task_service
        .create(CreateTaskRequest::new(project.id(), "Factory quote").with_parent(parent.id()))
        .await
        .expect("task create should succeed");

    app.task_service
        .delete(parent.id())
        .await
        .expect("delete should succeed");

    let forest = app
        .task_service
        .load_tree(project.id())
        .await
        .expect("tree load should succeed");
    let roots: Vec<_> = forest.iter().map(|node| node.task().id()).collect();
    assert_eq!(roots, vec![child.id()]);
}
