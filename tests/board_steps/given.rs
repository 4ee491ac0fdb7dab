//! Given steps for task board BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskdesk::identity::domain::Role;
use taskdesk::task::services::CreateTaskRequest;

#[given(r#"a user "{name}" with role "{role}""#)]
fn user_with_role(world: &mut BoardWorld, name: String, role: String) -> Result<(), eyre::Report> {
    world.ensure_ready()?;
    let parsed = Role::try_from(role.as_str())?;
    let user = run_async(world.services.users.ensure_user(&name, "secret", parsed))
        .wrap_err("create scenario user")?;
    world.users.insert(name, user);
    Ok(())
}

#[given(r#""{creator}" created task "{title}" assigned to "{assignee}""#)]
fn assigned_task(
    world: &mut BoardWorld,
    creator: String,
    title: String,
    assignee: String,
) -> Result<(), eyre::Report> {
    let author = world.user(&creator)?;
    let assignee_id = world.user(&assignee)?.id().value();
    let request = CreateTaskRequest::new(title.clone(), 1).with_assignee_id(assignee_id);
    let task = run_async(world.services.tasks.create(&author, request))
        .wrap_err("create assigned task for scenario")?;
    world.tasks.insert(title, task.id());
    Ok(())
}

#[given(r#""{creator}" created unassigned task "{title}""#)]
fn unassigned_task(
    world: &mut BoardWorld,
    creator: String,
    title: String,
) -> Result<(), eyre::Report> {
    let author = world.user(&creator)?;
    let task = run_async(
        world
            .services
            .tasks
            .create(&author, CreateTaskRequest::new(title.clone(), 1)),
    )
    .wrap_err("create open task for scenario")?;
    world.tasks.insert(title, task.id());
    Ok(())
}
