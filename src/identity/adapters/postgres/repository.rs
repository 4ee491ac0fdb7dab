//! `PostgreSQL` repository implementation for user storage.

use super::{
    models::{NewUserRow, UserChangeset, UserRow},
    schema::users,
};
use crate::database::DbPool;
use crate::identity::{
    domain::{NewUser, PasswordHash, PersistedUserData, Role, User, UserId, Username},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed user repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: DbPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> UserRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> UserRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(UserRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(UserRepositoryError::persistence)?
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, user: NewUser) -> UserRepositoryResult<User> {
        let username = user.username().clone();
        let new_row = NewUserRow {
            username: user.username().as_str().to_owned(),
            password_hash: user.password_hash().as_str().to_owned(),
            role: user.role().as_str().to_owned(),
            created_at: user.created_at(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(users::table)
                .values(&new_row)
                .returning(UserRow::as_returning())
                .get_result(connection)
                .map_err(|err| map_unique_violation(err, &username))?;
            row_to_user(row)
        })
        .await
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<()> {
        let user_id = user.id();
        let username = user.username().clone();
        let changes = UserChangeset {
            username: user.username().as_str().to_owned(),
            password_hash: user.password_hash().as_str().to_owned(),
            role: user.role().as_str().to_owned(),
        };

        self.run_blocking(move |connection| {
            let affected = diesel::update(users::table.filter(users::id.eq(user_id.value())))
                .set(&changes)
                .execute(connection)
                .map_err(|err| map_unique_violation(err, &username))?;
            if affected == 0 {
                return Err(UserRepositoryError::NotFound(user_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::id.eq(id.value()))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn find_by_username(&self, username: &Username) -> UserRepositoryResult<Option<User>> {
        let lookup = username.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::username.eq(lookup))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn list(&self) -> UserRepositoryResult<Vec<User>> {
        self.run_blocking(move |connection| {
            users::table
                .order((users::username.asc(), users::id.asc()))
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(UserRepositoryError::persistence)?
                .into_iter()
                .map(row_to_user)
                .collect()
        })
        .await
    }
}

fn map_unique_violation(err: DieselError, username: &Username) -> UserRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            UserRepositoryError::DuplicateUsername(username.clone())
        }
        other => UserRepositoryError::persistence(other),
    }
}

fn row_to_user(row: UserRow) -> UserRepositoryResult<User> {
    let UserRow {
        id,
        username,
        password_hash,
        role,
        created_at,
    } = row;

    let data = PersistedUserData {
        id: UserId::from_persisted(id),
        username: Username::new(username).map_err(UserRepositoryError::persistence)?,
        role: Role::try_from(role.as_str()).map_err(UserRepositoryError::persistence)?,
        password_hash: PasswordHash::from_encoded(password_hash),
        created_at,
    };
    Ok(User::from_persisted(data))
}
