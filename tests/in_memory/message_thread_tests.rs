//! Chat threads through the wired services.

use super::helpers::{Workspace, workspace};
use rstest::rstest;
use taskdesk::identity::domain::Role;
use taskdesk::message::services::MessageThreadError;
use taskdesk::task::{domain::TaskId, services::CreateTaskRequest};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn thread_is_chronological_with_author_names(
    #[future] workspace: Workspace,
) -> Result<(), eyre::Report> {
    let ctx = workspace.await;
    let manager = ctx.user("manager", Role::Manager).await;
    let employee = ctx.user("employee1", Role::Employee).await;
    let task = ctx
        .services
        .tasks
        .create(
            &manager,
            CreateTaskRequest::new("Чат", 1).with_assignee_id(employee.id().value()),
        )
        .await?;
    let messages = &ctx.services.messages;

    messages.post(&employee, task.id(), "Начал интеграцию").await?;
    messages.post(&manager, task.id(), "Жду PR").await?;
    messages.post(&employee, task.id(), "Готово").await?;

    let thread = messages.list(&manager, task.id()).await?;
    let lines: Vec<(&str, &str)> = thread
        .iter()
        .map(|view| (view.user.as_str(), view.content.as_str()))
        .collect();
    eyre::ensure!(
        lines
            == [
                ("employee1", "Начал интеграцию"),
                ("manager", "Жду PR"),
                ("employee1", "Готово"),
            ]
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn thread_of_hidden_task_is_denied(
    #[future] workspace: Workspace,
) -> Result<(), eyre::Report> {
    let ctx = workspace.await;
    let manager = ctx.user("manager", Role::Manager).await;
    let employee = ctx.user("employee2", Role::Employee).await;
    let task = ctx
        .services
        .tasks
        .create(
            &manager,
            CreateTaskRequest::new("Канбан", 1).with_assignee_id(manager.id().value()),
        )
        .await?;
    let messages = &ctx.services.messages;

    let read = messages.list(&employee, task.id()).await;
    let write = messages.post(&employee, task.id(), "hi").await;

    eyre::ensure!(matches!(read, Err(MessageThreadError::AccessDenied)));
    eyre::ensure!(matches!(write, Err(MessageThreadError::AccessDenied)));
    eyre::ensure!(messages.list(&manager, task.id()).await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn posting_to_missing_task_is_not_found(
    #[future] workspace: Workspace,
) -> Result<(), eyre::Report> {
    let ctx = workspace.await;
    let admin = ctx.user("admin", Role::Admin).await;

    let result = ctx
        .services
        .messages
        .post(&admin, TaskId::from_persisted(77), "hello")
        .await;

    eyre::ensure!(matches!(result, Err(MessageThreadError::NotFound(_))));
    Ok(())
}
