//! Then steps for task board BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use taskdesk::error::ErrorKind;
use taskdesk::task::services::TaskLifecycleError;

#[then(r#"the listing contains "{title}""#)]
fn listing_contains(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.listing.iter().any(|row| row.title.as_str() == title),
        "expected {title} in listing"
    );
    Ok(())
}

#[then(r#"the listing does not contain "{title}""#)]
fn listing_omits(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    eyre::ensure!(
        !world.listing.iter().any(|row| row.title.as_str() == title),
        "{title} should be hidden"
    );
    Ok(())
}

#[then(r#"the listing marks "{title}" as lower"#)]
fn listing_marks_lower(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let row = world
        .listing
        .iter()
        .find(|row| row.title.as_str() == title)
        .ok_or_else(|| eyre::eyre!("{title} missing from listing"))?;
    eyre::ensure!(row.is_lower, "{title} should be marked lower");
    eyre::ensure!(!row.is_mine, "{title} should not be marked mine");
    Ok(())
}

#[then(r#"opening "{title}" as "{viewer}" is denied"#)]
fn opening_is_denied(world: &BoardWorld, title: String, viewer: String) -> Result<(), eyre::Report> {
    let actor = world.user(&viewer)?;
    let task_id = world.task(&title)?;
    let result = run_async(world.services.tasks.get(&actor, task_id));
    eyre::ensure!(
        matches!(result, Err(TaskLifecycleError::AccessDenied)),
        "expected AccessDenied, got {result:?}"
    );
    Ok(())
}

#[then("the request is denied")]
fn request_denied(world: &BoardWorld) -> Result<(), eyre::Report> {
    expect_failure(world, ErrorKind::AccessDenied)
}

#[then("the request fails with an invalid reference")]
fn request_invalid_reference(world: &BoardWorld) -> Result<(), eyre::Report> {
    expect_failure(world, ErrorKind::InvalidReference)
}

#[then("the request fails validation")]
fn request_invalid(world: &BoardWorld) -> Result<(), eyre::Report> {
    expect_failure(world, ErrorKind::Validation)
}

#[then(r#"task "{title}" has status "{status}""#)]
fn task_has_status(world: &BoardWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let auditor = world.auditor()?;
    let task_id = world.task(&title)?;
    let view = run_async(world.services.tasks.get(&auditor, task_id)).wrap_err("read task")?;
    eyre::ensure!(
        view.status == status,
        "expected status {status}, found {}",
        view.status
    );
    Ok(())
}

#[then(r#"the thread of "{title}" as seen by "{viewer}" has {count:usize} messages"#)]
fn thread_has_messages(
    world: &mut BoardWorld,
    title: String,
    viewer: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let actor = world.user(&viewer)?;
    let task_id = world.task(&title)?;
    world.thread =
        run_async(world.services.messages.list(&actor, task_id)).wrap_err("read thread")?;
    eyre::ensure!(
        world.thread.len() == count,
        "expected {count} messages, found {}",
        world.thread.len()
    );
    Ok(())
}

#[then(r#"message {position:usize} of "{title}" is "{content}" by "{author}""#)]
fn message_at(
    world: &BoardWorld,
    position: usize,
    title: String,
    content: String,
    author: String,
) -> Result<(), eyre::Report> {
    let message = position
        .checked_sub(1)
        .and_then(|index| world.thread.get(index))
        .ok_or_else(|| eyre::eyre!("no message {position} in thread of {title}"))?;
    eyre::ensure!(message.content.as_str() == content, "unexpected content at {position}");
    eyre::ensure!(message.user == author, "unexpected author at {position}");
    Ok(())
}

fn expect_failure(world: &BoardWorld, expected: ErrorKind) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.last_failure == Some(expected),
        "expected {expected:?}, got {:?}",
        world.last_failure
    );
    Ok(())
}
