//! Demo data set for trying the service out.

use super::{BootstrapError, Services, Stores};
use crate::identity::domain::{Role, User};
use crate::status::domain::StatusId;
use crate::task::services::CreateTaskRequest;
use std::collections::HashMap;
use tracing::info;

const DEMO_USERS: [(&str, &str, Role); 5] = [
    ("admin", "admin123", Role::Admin),
    ("ceo", "ceo123", Role::Ceo),
    ("manager", "manager123", Role::Manager),
    ("employee1", "emp123", Role::Employee),
    ("employee2", "emp456", Role::Employee),
];

struct DemoTask {
    title: &'static str,
    short: &'static str,
    description: &'static str,
    status: &'static str,
    creator: &'static str,
    assignee: Option<&'static str>,
}

const DEMO_TASKS: [DemoTask; 5] = [
    DemoTask {
        title: "Настроить канбан",
        short: "Базовая доска и колонки",
        description: "Создать колонки и проверить dnd.",
        status: "сделать",
        creator: "manager",
        assignee: Some("manager"),
    },
    DemoTask {
        title: "Подключить чат",
        short: "Messages API",
        description: "Проверить отправку и чтение сообщений.",
        status: "в работе",
        creator: "manager",
        assignee: Some("employee1"),
    },
    DemoTask {
        title: "UI: список пользователей",
        short: "Таблица + сортировка",
        description: "Сделать таблицу с ролями.",
        status: "на проверке",
        creator: "ceo",
        assignee: Some("employee2"),
    },
    DemoTask {
        title: "Документация",
        short: "PROJECT.md",
        description: "Собрать описание проекта.",
        status: "готово",
        creator: "admin",
        assignee: Some("admin"),
    },
    DemoTask {
        title: "Общие задачи",
        short: "Нет исполнителя",
        description: "Любой может взять.",
        status: "сделать",
        creator: "manager",
        assignee: None,
    },
];

/// Author and body, keyed by index into the demo task list.
const DEMO_MESSAGES: [(&str, usize, &str); 5] = [
    ("manager", 0, "Собрал колонки, осталось стили доделать."),
    ("employee1", 1, "Я подключил чат, проверь, пожалуйста."),
    ("manager", 1, "Принял, сейчас протестирую."),
    ("ceo", 2, "Нужна сортировка по роли, добавьте."),
    ("employee2", 2, "Добавил сортировку, посмотри."),
];

/// Loads demo users, tasks, and messages.
///
/// Users are created only when missing. Tasks and messages are skipped
/// when the task store already holds data.
///
/// # Errors
///
/// Returns [`BootstrapError`] when a seeding step fails.
pub async fn seed_demo_data(services: &Services, stores: &Stores) -> Result<(), BootstrapError> {
    let mut users: HashMap<&str, User> = HashMap::new();
    for (username, password, role) in DEMO_USERS {
        let user = services.users.ensure_user(username, password, role).await?;
        users.insert(username, user);
    }

    if !stores.tasks.list_all().await?.is_empty() {
        info!("task store not empty; demo tasks skipped");
        return Ok(());
    }

    let statuses: HashMap<String, StatusId> = services
        .statuses
        .list()
        .await?
        .into_iter()
        .map(|status| (status.name().as_str().to_owned(), status.id()))
        .collect();

    let mut task_ids = Vec::with_capacity(DEMO_TASKS.len());
    for demo in &DEMO_TASKS {
        let creator = demo_user(&users, demo.creator)?;
        let status_id = statuses
            .get(demo.status)
            .ok_or_else(|| BootstrapError::MissingStatus(demo.status.to_owned()))?;
        let mut request = CreateTaskRequest::new(demo.title, status_id.value())
            .with_short_description(demo.short)
            .with_description(demo.description);
        if let Some(assignee) = demo.assignee {
            request = request.with_assignee_id(demo_user(&users, assignee)?.id().value());
        }
        let task = services.tasks.create(creator, request).await?;
        task_ids.push(task.id());
    }

    for (author, task_index, content) in DEMO_MESSAGES {
        let Some(task_id) = task_ids.get(task_index) else {
            continue;
        };
        let user = demo_user(&users, author)?;
        services.messages.post(user, *task_id, content).await?;
    }

    info!(
        users = DEMO_USERS.len(),
        tasks = task_ids.len(),
        messages = DEMO_MESSAGES.len(),
        "demo data loaded"
    );
    Ok(())
}

fn demo_user<'a>(users: &'a HashMap<&str, User>, name: &str) -> Result<&'a User, BootstrapError> {
    users
        .get(name)
        .ok_or_else(|| BootstrapError::MissingUser(name.to_owned()))
}
