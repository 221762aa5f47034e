//! Given steps for project duplication BDD scenarios.

use super::world::{DuplicationWorld, run_async};
use crowdplan::ordering::domain::OrderIndex;
use crowdplan::project::domain::{BrandLine, NewProject, Project, Schedule};
use crowdplan::project::ports::{ProjectRepository, SectionStore};
use crowdplan::task::domain::{NewTask, Subtask, Task};
use crowdplan::task::ports::{SubtaskRepository, TaskRepository};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;

#[given(r#"a project named "{name}" with {task_count:u64} tasks and {schedule_count:u64} schedule row"#)]
fn seeded_project(
    world: &mut DuplicationWorld,
    name: String,
    task_count: u64,
    schedule_count: u64,
) -> Result<(), eyre::Report> {
    let project = Project::create(
        NewProject {
            name,
            description: None,
            brand: BrandLine::BrandA,
            owner: world.owner,
        },
        &DefaultClock,
    )
    .wrap_err("construct source project")?;
    run_async(world.projects.insert(&project)).wrap_err("insert source project")?;

    for position in 0..task_count {
        let task = Task::create(
            NewTask {
                project_id: project.id(),
                parent_id: None,
                title: format!("Task {position}"),
                description: None,
                due_date: None,
                order_index: OrderIndex::new(i64::try_from(position)?),
            },
            &DefaultClock,
        )
        .wrap_err("construct source task")?;
        run_async(world.tasks.insert(&task)).wrap_err("insert source task")?;
        if world.first_task.is_none() {
            world.first_task = Some(task);
        }
    }

    for position in 0..schedule_count {
        let row = Schedule::new(
            project.id(),
            world.owner,
            format!("Milestone {position}"),
            OrderIndex::new(i64::try_from(position)?),
            &DefaultClock,
        );
        run_async(world.schedules.insert(&row)).wrap_err("insert source schedule")?;
    }

    world.source = Some(project);
    Ok(())
}

#[given("the first task has {subtask_count:u64} subtask")]
fn seeded_subtasks(
    world: &mut DuplicationWorld,
    subtask_count: u64,
) -> Result<(), eyre::Report> {
    let task = world
        .first_task
        .clone()
        .ok_or_else(|| eyre::eyre!("missing first task in scenario world"))?;
    for position in 0..subtask_count {
        let subtask = Subtask::create(task.id(), format!("Checklist {position}"), &DefaultClock)
            .wrap_err("construct source subtask")?;
        run_async(world.tasks.insert_subtask(&subtask)).wrap_err("insert source subtask")?;
    }
    Ok(())
}

#[given("the schedule store rejects inserts")]
fn schedule_store_rejects(world: &mut DuplicationWorld) {
    world.reject_schedule_inserts = true;
}
