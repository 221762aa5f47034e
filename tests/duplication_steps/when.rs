//! When steps for project duplication BDD scenarios.

use super::world::{DuplicationWorld, run_async};
use crowdplan::project::domain::ProjectId;
use rstest_bdd_macros::when;

#[when("the project is duplicated")]
fn duplicate_the_project(world: &mut DuplicationWorld) -> Result<(), eyre::Report> {
    let source = world
        .source
        .clone()
        .ok_or_else(|| eyre::eyre!("missing source project in scenario world"))?;
    let replicator = world.replicator();
    world.last_result = Some(run_async(replicator.duplicate(source.id(), world.owner)));
    Ok(())
}

#[when("a project that does not exist is duplicated")]
fn duplicate_a_missing_project(world: &mut DuplicationWorld) {
    let replicator = world.replicator();
    world.last_result = Some(run_async(
        replicator.duplicate(ProjectId::new(), world.owner),
    ));
}
