//! Then steps for project duplication BDD scenarios.

use super::world::{DuplicationWorld, run_async};
use crowdplan::project::domain::Section;
use crowdplan::project::ports::{ProjectRepository, SectionStore};
use crowdplan::project::services::{ReplicationError, ReplicationReport};
use crowdplan::task::ports::{SubtaskRepository, TaskRepository};
use rstest_bdd_macros::then;

fn report_of(world: &DuplicationWorld) -> Result<&ReplicationReport, eyre::Report> {
    world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing duplication result in scenario world"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected duplication failure: {err}"))
}

#[then(r#"the duplicate is named "{expected}""#)]
fn duplicate_is_named(world: &DuplicationWorld, expected: String) -> Result<(), eyre::Report> {
    let report = report_of(world)?;
    if report.project().name() != expected {
        return Err(eyre::eyre!(
            "expected duplicate name '{expected}', found '{}'",
            report.project().name()
        ));
    }
    Ok(())
}

#[then("the duplicate carries {task_count:u64} tasks, {subtask_count:u64} subtask, and {schedule_count:u64} schedule row")]
fn duplicate_carries_rows(
    world: &DuplicationWorld,
    task_count: u64,
    subtask_count: u64,
    schedule_count: u64,
) -> Result<(), eyre::Report> {
    let report = report_of(world)?;
    let destination = report.project().id();

    let tasks = run_async(world.tasks.list_by_project(destination))
        .map_err(|err| eyre::eyre!("list copied tasks: {err}"))?;
    let mut subtasks = 0_u64;
    for task in &tasks {
        let children = run_async(world.tasks.list_subtasks(task.id()))
            .map_err(|err| eyre::eyre!("list copied subtasks: {err}"))?;
        subtasks += u64::try_from(children.len())?;
    }
    let schedules = run_async(world.schedules.list_by_project(destination))
        .map_err(|err| eyre::eyre!("list copied schedules: {err}"))?;

    eyre::ensure!(
        u64::try_from(tasks.len())? == task_count,
        "expected {task_count} copied tasks, found {}",
        tasks.len()
    );
    eyre::ensure!(
        subtasks == subtask_count,
        "expected {subtask_count} copied subtasks, found {subtasks}"
    );
    eyre::ensure!(
        u64::try_from(schedules.len())? == schedule_count,
        "expected {schedule_count} copied schedule rows, found {}",
        schedules.len()
    );
    Ok(())
}

#[then("every copied subtask points at a copied task")]
fn subtasks_point_at_copies(world: &DuplicationWorld) -> Result<(), eyre::Report> {
    let report = report_of(world)?;
    let destination = report.project().id();
    let tasks = run_async(world.tasks.list_by_project(destination))
        .map_err(|err| eyre::eyre!("list copied tasks: {err}"))?;
    let source_task = world
        .first_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing first task in scenario world"))?;

    for task in &tasks {
        let children = run_async(world.tasks.list_subtasks(task.id()))
            .map_err(|err| eyre::eyre!("list copied subtasks: {err}"))?;
        for child in children {
            eyre::ensure!(
                child.task_id() == task.id(),
                "copied subtask points at task {}, expected {}",
                child.task_id(),
                task.id()
            );
            eyre::ensure!(
                child.task_id() != source_task.id(),
                "copied subtask still points at the source task"
            );
        }
    }
    Ok(())
}

#[then("the duplicate still exists")]
fn duplicate_still_exists(world: &DuplicationWorld) -> Result<(), eyre::Report> {
    let report = report_of(world)?;
    let found = run_async(world.projects.find_by_id(report.project().id()))
        .map_err(|err| eyre::eyre!("look up duplicate: {err}"))?;
    eyre::ensure!(found.is_some(), "expected the duplicate project to exist");
    Ok(())
}

#[then("the schedules section is reported incomplete")]
fn schedules_reported_incomplete(world: &DuplicationWorld) -> Result<(), eyre::Report> {
    let report = report_of(world)?;
    eyre::ensure!(
        report.incomplete_sections().contains(&Section::Schedules),
        "expected the schedules section among incomplete sections, found {:?}",
        report.incomplete_sections()
    );
    Ok(())
}

#[then("duplication fails because the source is missing")]
fn duplication_fails_source_missing(world: &DuplicationWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing duplication result in scenario world"))?;
    if !matches!(result, Err(ReplicationError::SourceNotFound(_))) {
        return Err(eyre::eyre!(
            "expected a source-not-found error, got {result:?}"
        ));
    }
    Ok(())
}
