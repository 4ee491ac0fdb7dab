//! `PostgreSQL` repository implementation for task lifecycle storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::database::DbPool;
use crate::identity::domain::UserId;
use crate::status::domain::StatusId;
use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskText, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: DbPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, task: NewTask) -> TaskRepositoryResult<Task> {
        let text = task.text();
        let new_row = NewTaskRow {
            title: text.title.as_str().to_owned(),
            short_description: text.short_description.clone(),
            description: text.description.clone(),
            status_id: task.status_id().value(),
            created_by: task.creator_id().value(),
            assignee_id: task.assignee_id().map(UserId::value),
            created_at: task.created_at(),
            updated_at: task.created_at(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let text = task.text();
        let changes = TaskChangeset {
            title: text.title.as_str().to_owned(),
            short_description: text.short_description.clone(),
            description: text.description.clone(),
            status_id: task.status_id().value(),
            assignee_id: task.assignee_id().map(UserId::value),
            updated_at: task.updated_at(),
        };

        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.filter(tasks::id.eq(task_id.value())))
                .set(&changes)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.value()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            tasks::table
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?
                .into_iter()
                .map(row_to_task)
                .collect()
        })
        .await
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        short_description,
        description,
        status_id,
        created_by,
        assignee_id,
        created_at,
        updated_at,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::from_persisted(id),
        text: TaskText {
            title: TaskTitle::new(title).map_err(TaskRepositoryError::persistence)?,
            short_description,
            description,
        },
        status_id: StatusId::from_persisted(status_id),
        creator_id: UserId::from_persisted(created_by),
        assignee_id: assignee_id.map(UserId::from_persisted),
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}
