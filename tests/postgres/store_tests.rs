//! Round trips through the `PostgreSQL` adapters.

use super::helpers::{BoxError, context};
use pg_embedded_setup_unpriv::TestCluster;
use pg_embedded_setup_unpriv::test_support::shared_test_cluster;
use rstest::rstest;
use taskdesk::identity::{
    domain::Role,
    services::{RegisterUserRequest, UserDirectoryError},
};
use taskdesk::task::services::{CreateTaskRequest, TaskPatch};

#[rstest]
fn seeding_statuses_is_idempotent(
    shared_test_cluster: &'static TestCluster,
) -> Result<(), BoxError> {
    let ctx = context(shared_test_cluster)?;
    ctx.run(async {
        let appended = ctx.services.statuses.seed_defaults().await?;
        let names: Vec<String> = ctx
            .services
            .statuses
            .list()
            .await?
            .iter()
            .map(|status| status.name().as_str().to_owned())
            .collect();

        assert_eq!(appended, 0);
        assert_eq!(names, ["сделать", "в работе", "на проверке", "готово"]);
        Ok::<(), BoxError>(())
    })
}

#[rstest]
fn duplicate_username_maps_to_taken(
    shared_test_cluster: &'static TestCluster,
) -> Result<(), BoxError> {
    let ctx = context(shared_test_cluster)?;
    ctx.run(async {
        let admin = ctx.user("admin", Role::Admin).await?;
        ctx.services
            .users
            .register(&admin, RegisterUserRequest::new("dup", "pw"))
            .await?;
        let second = ctx
            .services
            .users
            .register(&admin, RegisterUserRequest::new("dup", "pw"))
            .await;

        assert!(matches!(second, Err(UserDirectoryError::UsernameTaken(_))));
        Ok::<(), BoxError>(())
    })
}

#[rstest]
fn task_edits_persist_including_unassignment(
    shared_test_cluster: &'static TestCluster,
) -> Result<(), BoxError> {
    let ctx = context(shared_test_cluster)?;
    ctx.run(async {
        let manager = ctx.user("manager", Role::Manager).await?;
        let employee = ctx.user("employee", Role::Employee).await?;
        let tasks = &ctx.services.tasks;
        let todo = ctx.first_status().await?;

        let created = tasks
            .create(
                &manager,
                CreateTaskRequest::new("task", todo)
                    .with_description("long form")
                    .with_assignee_id(employee.id().value()),
            )
            .await?;
        tasks
            .update_status(&employee, created.id(), "на проверке")
            .await?;
        tasks
            .update_fields(
                &manager,
                created.id(),
                TaskPatch::new().with_title("renamed").with_assignee_id(0),
            )
            .await?;

        let view = tasks.get(&manager, created.id()).await?;
        assert_eq!(view.title.as_str(), "renamed");
        assert_eq!(view.status, "на проверке");
        assert_eq!(view.description.as_deref(), Some("long form"));
        assert!(view.assignee_id.is_none());
        assert!(view.updated_at >= view.created_at);
        Ok::<(), BoxError>(())
    })
}

#[rstest]
fn thread_is_returned_in_posting_order(
    shared_test_cluster: &'static TestCluster,
) -> Result<(), BoxError> {
    let ctx = context(shared_test_cluster)?;
    ctx.run(async {
        let manager = ctx.user("manager", Role::Manager).await?;
        let todo = ctx.first_status().await?;
        let task = ctx
            .services
            .tasks
            .create(&manager, CreateTaskRequest::new("chat", todo))
            .await?;
        let messages = &ctx.services.messages;

        for body in ["first", "second", "third"] {
            messages.post(&manager, task.id(), body).await?;
        }

        let thread = messages.list(&manager, task.id()).await?;
        let bodies: Vec<&str> = thread.iter().map(|view| view.content.as_str()).collect();
        assert_eq!(bodies, ["first", "second", "third"]);
        assert!(thread.iter().all(|view| view.user == manager.username().as_str()));
        Ok::<(), BoxError>(())
    })
}
