//! `PostgreSQL` repository implementation for message storage.

use super::{
    models::{MessageRow, NewMessageRow},
    schema::messages,
};
use crate::database::DbPool;
use crate::identity::domain::UserId;
use crate::message::{
    domain::{Message, MessageContent, MessageId, NewMessage, PersistedMessageData},
    ports::{MessageRepository, MessageRepositoryError, MessageRepositoryResult},
};
use crate::task::domain::TaskId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed message repository.
#[derive(Debug, Clone)]
pub struct PostgresMessageRepository {
    pool: DbPool,
}

impl PostgresMessageRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> MessageRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> MessageRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(MessageRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(MessageRepositoryError::persistence)?
    }
}

#[async_trait]
impl MessageRepository for PostgresMessageRepository {
    async fn insert(&self, message: NewMessage) -> MessageRepositoryResult<Message> {
        let new_row = NewMessageRow {
            task_id: message.task_id().value(),
            user_id: message.author_id().value(),
            content: message.content().as_str().to_owned(),
            created_at: message.created_at(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(messages::table)
                .values(&new_row)
                .returning(MessageRow::as_returning())
                .get_result(connection)
                .map_err(MessageRepositoryError::persistence)?;
            row_to_message(row)
        })
        .await
    }

    async fn list_by_task(&self, task_id: TaskId) -> MessageRepositoryResult<Vec<Message>> {
        self.run_blocking(move |connection| {
            messages::table
                .filter(messages::task_id.eq(task_id.value()))
                .order((messages::created_at.asc(), messages::id.asc()))
                .select(MessageRow::as_select())
                .load::<MessageRow>(connection)
                .map_err(MessageRepositoryError::persistence)?
                .into_iter()
                .map(row_to_message)
                .collect()
        })
        .await
    }
}

fn row_to_message(row: MessageRow) -> MessageRepositoryResult<Message> {
    let MessageRow {
        id,
        task_id,
        user_id,
        content,
        created_at,
    } = row;

    Ok(Message::from_persisted(PersistedMessageData {
        id: MessageId::from_persisted(id),
        task_id: TaskId::from_persisted(task_id),
        author_id: UserId::from_persisted(user_id),
        content: MessageContent::new(content).map_err(MessageRepositoryError::persistence)?,
        created_at,
    }))
}
