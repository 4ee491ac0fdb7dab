//! When steps for task board BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskdesk::task::services::CreateTaskRequest;

#[when(r#""{viewer}" lists tasks"#)]
fn list_tasks(world: &mut BoardWorld, viewer: String) -> Result<(), eyre::Report> {
    let actor = world.user(&viewer)?;
    world.listing = run_async(world.services.tasks.list(&actor)).wrap_err("list tasks")?;
    Ok(())
}

#[when(r#""{actor}" creates task "{title}""#)]
fn create_task(world: &mut BoardWorld, actor: String, title: String) -> Result<(), eyre::Report> {
    let user = world.user(&actor)?;
    let result = run_async(
        world
            .services
            .tasks
            .create(&user, CreateTaskRequest::new(title, 1)),
    );
    world.last_failure = result.err().map(|err| err.kind());
    Ok(())
}

#[when(r#""{actor}" sets the status of "{title}" to "{status}""#)]
fn set_status(
    world: &mut BoardWorld,
    actor: String,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let user = world.user(&actor)?;
    let task_id = world.task(&title)?;
    let result = run_async(world.services.tasks.update_status(&user, task_id, &status));
    world.last_failure = result.err().map(|err| err.kind());
    Ok(())
}

#[when(r#""{actor}" posts "{content}" to "{title}""#)]
fn post_message(
    world: &mut BoardWorld,
    actor: String,
    content: String,
    title: String,
) -> Result<(), eyre::Report> {
    let user = world.user(&actor)?;
    let task_id = world.task(&title)?;
    let result = run_async(world.services.messages.post(&user, task_id, content));
    world.last_failure = result.err().map(|err| err.kind());
    Ok(())
}

#[when(r#""{actor}" posts an empty message to "{title}""#)]
fn post_empty_message(
    world: &mut BoardWorld,
    actor: String,
    title: String,
) -> Result<(), eyre::Report> {
    let user = world.user(&actor)?;
    let task_id = world.task(&title)?;
    let result = run_async(world.services.messages.post(&user, task_id, ""));
    world.last_failure = result.err().map(|err| err.kind());
    Ok(())
}
