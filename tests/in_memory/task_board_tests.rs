//! Task board behaviour through the wired services.

use super::helpers::{Workspace, workspace};
use taskdesk::access::{AccessPolicy, StatusChangeRule};
use taskdesk::error::ErrorKind;
use taskdesk::identity::domain::Role;
use taskdesk::task::{
    domain::TaskId,
    services::{CreateTaskRequest, TaskLifecycleError, TaskPatch},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn manager_assigns_and_employee_progresses_task(
    #[future] workspace: Workspace,
) -> Result<(), eyre::Report> {
    let ctx = workspace.await;
    let manager = ctx.user("manager", Role::Manager).await;
    let employee = ctx.user("employee1", Role::Employee).await;
    let tasks = &ctx.services.tasks;

    let created = tasks
        .create(
            &manager,
            CreateTaskRequest::new("Подключить чат", 1)
                .with_short_description("WebSocket")
                .with_assignee_id(employee.id().value()),
        )
        .await?;
    tasks
        .update_status(&employee, created.id(), "в работе")
        .await?;

    let view = tasks.get(&employee, created.id()).await?;
    eyre::ensure!(view.status == "в работе");
    eyre::ensure!(view.assignee.as_ref().map(|name| name.as_str()) == Some("employee1"));
    eyre::ensure!(view.created_by.as_ref().map(|name| name.as_str()) == Some("manager"));
    eyre::ensure!(view.updated_at >= view.created_at);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_status_name_leaves_task_untouched(
    #[future] workspace: Workspace,
) -> Result<(), eyre::Report> {
    let ctx = workspace.await;
    let manager = ctx.user("manager", Role::Manager).await;
    let tasks = &ctx.services.tasks;
    let created = tasks.create(&manager, CreateTaskRequest::new("Docs", 1)).await?;

    let result = tasks.update_status(&manager, created.id(), "archived").await;

    let Err(err) = result else {
        eyre::bail!("unknown status accepted");
    };
    eyre::ensure!(matches!(err, TaskLifecycleError::InvalidStatus(ref name) if name == "archived"));
    eyre::ensure!(err.kind() == ErrorKind::InvalidReference);
    eyre::ensure!(tasks.get(&manager, created.id()).await?.status == "сделать");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_task_reports_not_found_for_every_role(
    #[future] workspace: Workspace,
) -> Result<(), eyre::Report> {
    let ctx = workspace.await;
    let employee = ctx.user("employee1", Role::Employee).await;
    let tasks = &ctx.services.tasks;
    let missing = TaskId::from_persisted(404);

    let edit = tasks
        .update_fields(&employee, missing, TaskPatch::new().with_title("x"))
        .await;
    let status = tasks.update_status(&employee, missing, "готово").await;
    let read = tasks.get(&employee, missing).await;

    eyre::ensure!(matches!(edit, Err(TaskLifecycleError::NotFound(_))));
    eyre::ensure!(matches!(status, Err(TaskLifecycleError::NotFound(_))));
    eyre::ensure!(matches!(read, Err(TaskLifecycleError::NotFound(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn zero_assignee_returns_task_to_open_pool(
    #[future] workspace: Workspace,
) -> Result<(), eyre::Report> {
    let ctx = workspace.await;
    let ceo = ctx.user("ceo", Role::Ceo).await;
    let employee = ctx.user("employee2", Role::Employee).await;
    let tasks = &ctx.services.tasks;

    let created = tasks
        .create(
            &ceo,
            CreateTaskRequest::new("Канбан", 1).with_assignee_id(ceo.id().value()),
        )
        .await?;
    eyre::ensure!(tasks.list(&employee).await?.is_empty());

    tasks
        .update_fields(&ceo, created.id(), TaskPatch::new().with_assignee_id(0))
        .await?;

    let listing = tasks.list(&employee).await?;
    let open = listing
        .first()
        .ok_or_else(|| eyre::eyre!("open task should be listed"))?;
    eyre::ensure!(open.assignee.is_none());
    eyre::ensure!(open.is_mine);
    eyre::ensure!(!open.is_lower);

    let creator_view = tasks.get(&ceo, created.id()).await?;
    eyre::ensure!(creator_view.assignee.is_none());
    let creator_listing = tasks.list(&ceo).await?;
    eyre::ensure!(creator_listing.len() == 1);
    eyre::ensure!(creator_listing.iter().all(|summary| summary.is_mine));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_marks_lower_ranked_assignees(
    #[future] workspace: Workspace,
) -> Result<(), eyre::Report> {
    let ctx = workspace.await;
    let manager = ctx.user("manager", Role::Manager).await;
    let employee = ctx.user("employee1", Role::Employee).await;
    let tasks = &ctx.services.tasks;
    tasks
        .create(
            &manager,
            CreateTaskRequest::new("UI", 1).with_assignee_id(employee.id().value()),
        )
        .await?;

    let for_manager = tasks.list(&manager).await?;
    let for_employee = tasks.list(&employee).await?;

    let seen_by_manager = for_manager
        .first()
        .ok_or_else(|| eyre::eyre!("manager should see the task"))?;
    let seen_by_employee = for_employee
        .first()
        .ok_or_else(|| eyre::eyre!("assignee should see the task"))?;
    eyre::ensure!(seen_by_manager.is_lower && !seen_by_manager.is_mine);
    eyre::ensure!(seen_by_employee.is_mine && !seen_by_employee.is_lower);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn managers_only_rule_blocks_employee_status_changes() -> Result<(), eyre::Report> {
    let workspace = Workspace::with_policy(AccessPolicy::new(StatusChangeRule::ManagersOnly))
        .with_statuses()
        .await;
    let manager = workspace.user("manager", Role::Manager).await;
    let employee = workspace.user("employee1", Role::Employee).await;
    let tasks = &workspace.services.tasks;
    let created = tasks
        .create(
            &manager,
            CreateTaskRequest::new("Review", 1).with_assignee_id(employee.id().value()),
        )
        .await?;

    let by_employee = tasks.update_status(&employee, created.id(), "готово").await;
    let by_manager = tasks.update_status(&manager, created.id(), "готово").await;

    eyre::ensure!(matches!(by_employee, Err(TaskLifecycleError::AccessDenied)));
    eyre::ensure!(by_manager.is_ok());
    Ok(())
}
