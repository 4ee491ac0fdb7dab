//! Service tests for visibility-gated message threads.

use std::sync::Arc;

use crate::identity::{
    adapters::memory::InMemoryUserRepository,
    domain::{NewUser, PasswordHash, Role, User, Username},
    ports::UserRepository,
};
use crate::message::{
    adapters::memory::InMemoryMessageRepository,
    domain::{MessageContent, MessageDomainError},
    services::{MessageThreadError, MessageThreadService},
};
use crate::status::domain::StatusId;
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, Task, TaskId, TaskText, TaskTitle},
    ports::TaskRepository,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestThread = MessageThreadService<
    InMemoryMessageRepository,
    InMemoryTaskRepository,
    InMemoryUserRepository,
    DefaultClock,
>;

struct Harness {
    thread: TestThread,
    tasks: Arc<InMemoryTaskRepository>,
    users: Arc<InMemoryUserRepository>,
}

impl Harness {
    async fn user(&self, name: &str, role: Role) -> User {
        let new_user = NewUser::new(
            Username::new(name).expect("valid username"),
            role,
            PasswordHash::from_encoded("$argon2id$test"),
            &DefaultClock,
        );
        self.users.insert(new_user).await.expect("user insert")
    }

    async fn task(&self, creator: &User, assignee: Option<&User>) -> Task {
        let text = TaskText {
            title: TaskTitle::new("Thread host").expect("valid title"),
            short_description: String::new(),
            description: None,
        };
        let new_task = NewTask::new(
            text,
            StatusId::from_persisted(1),
            creator.id(),
            assignee.map(User::id),
            &DefaultClock,
        );
        self.tasks.insert(new_task).await.expect("task insert")
    }
}

#[fixture]
fn harness() -> Harness {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let users = Arc::new(InMemoryUserRepository::new());
    let thread = MessageThreadService::new(
        Arc::new(InMemoryMessageRepository::new()),
        Arc::clone(&tasks),
        Arc::clone(&users),
        Arc::new(DefaultClock),
    );
    Harness {
        thread,
        tasks,
        users,
    }
}

#[rstest]
#[case("")]
#[case(" \n ")]
fn blank_content_is_rejected(#[case] value: &str) {
    assert_eq!(MessageContent::new(value), Err(MessageDomainError::EmptyContent));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn posted_messages_are_listed_oldest_first(harness: Harness) -> eyre::Result<()> {
    let manager = harness.user("mona", Role::Manager).await;
    let employee = harness.user("bob", Role::Employee).await;
    let task = harness.task(&manager, Some(&employee)).await;

    harness.thread.post(&manager, task.id(), "Please start").await?;
    let last = harness.thread.post(&employee, task.id(), "On it").await?;

    let listed = harness.thread.list(&manager, task.id()).await?;
    let authors: Vec<&str> = listed.iter().map(|view| view.user.as_str()).collect();

    eyre::ensure!(authors == ["mona", "bob"]);
    eyre::ensure!(listed.last().map(|view| view.id) == Some(last.id()));
    eyre::ensure!(listed.last().map(|view| view.content.as_str()) == Some("On it"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn hidden_task_thread_is_denied(harness: Harness) -> eyre::Result<()> {
    let ceo = harness.user("olga", Role::Ceo).await;
    let manager = harness.user("mona", Role::Manager).await;
    let carol = harness.user("carol", Role::Employee).await;
    let task = harness.task(&ceo, Some(&manager)).await;
    harness.thread.post(&manager, task.id(), "private note").await?;

    let read = harness.thread.list(&carol, task.id()).await;
    let write = harness.thread.post(&carol, task.id(), "let me in").await;

    eyre::ensure!(matches!(read, Err(MessageThreadError::AccessDenied)));
    eyre::ensure!(matches!(write, Err(MessageThreadError::AccessDenied)));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_task_is_not_found(harness: Harness) -> eyre::Result<()> {
    let employee = harness.user("bob", Role::Employee).await;

    let result = harness.thread.list(&employee, TaskId::from_persisted(77)).await;

    eyre::ensure!(matches!(result, Err(MessageThreadError::NotFound(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_post_is_rejected_after_access_check(harness: Harness) -> eyre::Result<()> {
    let manager = harness.user("mona", Role::Manager).await;
    let task = harness.task(&manager, None).await;

    let result = harness.thread.post(&manager, task.id(), "   ").await;

    eyre::ensure!(matches!(
        result,
        Err(MessageThreadError::Domain(MessageDomainError::EmptyContent))
    ));
    eyre::ensure!(harness.thread.list(&manager, task.id()).await?.is_empty());
    Ok(())
}
