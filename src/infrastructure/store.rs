//! Persistence surface and its SQLite implementation.
//!
//! The application services depend on the three dyn-safe traits defined
//! here, never on SQL. [`SqliteStore`] implements all of them over a
//! single `sqlx` pool. Ids are stored as hyphenated TEXT and timestamps
//! as integer microseconds since the Unix epoch, which keeps `ORDER BY
//! created_at` exact.
//!
//! Email uniqueness is enforced by a UNIQUE index; a violation surfaces
//! as [`StoreError::DuplicateEmail`] so the authenticator can translate
//! it into a conflict. Referential existence (task for a comment, user
//! for a task) is checked by the application layer, not the schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{Comment, CommentWithAuthor, DomainError, PublicUser, Task, TaskStatus, User};

/// Persistence-layer errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The UNIQUE index on `users.email` rejected an insert.
    #[error("a user with this email already exists")]
    DuplicateEmail,

    /// Any other database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored row failed to convert back into a domain value.
    #[error("corrupt row: {0}")]
    Corrupt(String),
}

impl From<StoreError> for DomainError {
    fn from(error: StoreError) -> Self {
        // DuplicateEmail is matched explicitly by the authenticator before
        // this blanket conversion applies.
        Self::storage(error)
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations for users.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a new user. Fails with [`StoreError::DuplicateEmail`] when
    /// the email is already taken.
    async fn insert_user(&self, user: &User) -> StoreResult<()>;

    /// Finds a user by id.
    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;

    /// Finds a user by exact email.
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;
}

/// Persistence operations for tasks.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Inserts a new task.
    async fn insert_task(&self, task: &Task) -> StoreResult<()>;

    /// Finds a task by id.
    async fn find_task_by_id(&self, id: Uuid) -> StoreResult<Option<Task>>;

    /// Lists tasks in creation order, optionally restricted to one status.
    async fn list_tasks(&self, status: Option<TaskStatus>) -> StoreResult<Vec<Task>>;

    /// Persists the mutable fields of an existing task.
    async fn update_task(&self, task: &Task) -> StoreResult<()>;

    /// Deletes a task together with its comments.
    async fn delete_task(&self, id: Uuid) -> StoreResult<()>;
}

/// Persistence operations for comments.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Inserts a new comment.
    async fn insert_comment(&self, comment: &Comment) -> StoreResult<()>;

    /// Lists a task's comments newest-first, each joined with its
    /// author's public identity.
    async fn list_comments_for_task(&self, task_id: Uuid) -> StoreResult<Vec<CommentWithAuthor>>;
}

/// Schema bootstrap, idempotent.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id            TEXT PRIMARY KEY,
    email         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at    INTEGER NOT NULL,
    updated_at    INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS tasks (
    id          TEXT PRIMARY KEY,
    title       TEXT NOT NULL,
    description TEXT NOT NULL,
    status      TEXT NOT NULL,
    creator_id  TEXT NOT NULL,
    created_at  INTEGER NOT NULL,
    updated_at  INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS comments (
    id         TEXT PRIMARY KEY,
    task_id    TEXT NOT NULL,
    author_id  TEXT NOT NULL,
    text       TEXT NOT NULL,
    created_at INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks(status);
CREATE INDEX IF NOT EXISTS idx_comments_task_id ON comments(task_id);
";

/// SQLite-backed implementation of all three stores.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connects to the given SQLite URL, creating the database file if
    /// needed, and bootstraps the schema.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] when the URL is invalid or the
    /// connection or schema bootstrap fails.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let options: SqliteConnectOptions = database_url
            .parse::<SqliteConnectOptions>()?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        Self::with_pool(pool).await
    }

    /// Opens a private in-memory database.
    ///
    /// The pool is pinned to a single, never-recycled connection: every
    /// handle must see the same in-memory database.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] when the connection or schema
    /// bootstrap fails.
    pub async fn in_memory() -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> StoreResult<Self> {
        sqlx::raw_sql(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }
}

// =============================================================================
// Row types
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    email: String,
    password_hash: String,
    created_at: i64,
    updated_at: i64,
}

#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
    id: String,
    title: String,
    description: String,
    status: String,
    creator_id: String,
    created_at: i64,
    updated_at: i64,
}

#[derive(Debug, sqlx::FromRow)]
struct CommentWithAuthorRow {
    id: String,
    task_id: String,
    author_id: String,
    text: String,
    created_at: i64,
    author_email: String,
}

fn parse_id(value: &str) -> StoreResult<Uuid> {
    Uuid::parse_str(value).map_err(|error| StoreError::Corrupt(format!("bad uuid: {error}")))
}

fn parse_timestamp(micros: i64) -> StoreResult<DateTime<Utc>> {
    DateTime::from_timestamp_micros(micros)
        .ok_or_else(|| StoreError::Corrupt(format!("bad timestamp: {micros}")))
}

impl TryFrom<UserRow> for User {
    type Error = StoreError;

    fn try_from(row: UserRow) -> StoreResult<Self> {
        Ok(Self {
            id: parse_id(&row.id)?,
            email: row.email,
            password_hash: row.password_hash,
            created_at: parse_timestamp(row.created_at)?,
            updated_at: parse_timestamp(row.updated_at)?,
        })
    }
}

impl TryFrom<TaskRow> for Task {
    type Error = StoreError;

    fn try_from(row: TaskRow) -> StoreResult<Self> {
        let status = row
            .status
            .parse::<TaskStatus>()
            .map_err(|error| StoreError::Corrupt(error.to_string()))?;
        Ok(Self {
            id: parse_id(&row.id)?,
            title: row.title,
            description: row.description,
            status,
            creator_id: parse_id(&row.creator_id)?,
            created_at: parse_timestamp(row.created_at)?,
            updated_at: parse_timestamp(row.updated_at)?,
        })
    }
}

impl TryFrom<CommentWithAuthorRow> for CommentWithAuthor {
    type Error = StoreError;

    fn try_from(row: CommentWithAuthorRow) -> StoreResult<Self> {
        let author_id = parse_id(&row.author_id)?;
        Ok(Self {
            comment: Comment {
                id: parse_id(&row.id)?,
                task_id: parse_id(&row.task_id)?,
                author_id,
                text: row.text,
                created_at: parse_timestamp(row.created_at)?,
            },
            author: PublicUser {
                id: author_id,
                email: row.author_email,
            },
        })
    }
}

fn map_insert_error(error: sqlx::Error) -> StoreError {
    match &error {
        sqlx::Error::Database(db) if db.kind() == sqlx::error::ErrorKind::UniqueViolation => {
            StoreError::DuplicateEmail
        }
        _ => StoreError::Database(error),
    }
}

// =============================================================================
// Trait implementations
// =============================================================================

#[async_trait]
impl UserStore for SqliteStore {
    async fn insert_user(&self, user: &User) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO users (id, email, password_hash, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at.timestamp_micros())
        .bind(user.updated_at.timestamp_micros())
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;
        Ok(())
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, password_hash, created_at, updated_at FROM users WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;
        row.map(User::try_from).transpose()
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, password_hash, created_at, updated_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        row.map(User::try_from).transpose()
    }
}

#[async_trait]
impl TaskStore for SqliteStore {
    async fn insert_task(&self, task: &Task) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO tasks (id, title, description, status, creator_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(task.id.to_string())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status.as_str())
        .bind(task.creator_id.to_string())
        .bind(task.created_at.timestamp_micros())
        .bind(task.updated_at.timestamp_micros())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_task_by_id(&self, id: Uuid) -> StoreResult<Option<Task>> {
        let row = sqlx::query_as::<_, TaskRow>(
            "SELECT id, title, description, status, creator_id, created_at, updated_at \
             FROM tasks WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;
        row.map(Task::try_from).transpose()
    }

    async fn list_tasks(&self, status: Option<TaskStatus>) -> StoreResult<Vec<Task>> {
        let rows = match status {
            Some(status) => {
                sqlx::query_as::<_, TaskRow>(
                    "SELECT id, title, description, status, creator_id, created_at, updated_at \
                     FROM tasks WHERE status = ? ORDER BY created_at ASC, rowid ASC",
                )
                .bind(status.as_str())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, TaskRow>(
                    "SELECT id, title, description, status, creator_id, created_at, updated_at \
                     FROM tasks ORDER BY created_at ASC, rowid ASC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        rows.into_iter().map(Task::try_from).collect()
    }

    async fn update_task(&self, task: &Task) -> StoreResult<()> {
        sqlx::query(
            "UPDATE tasks SET title = ?, description = ?, status = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status.as_str())
        .bind(task.updated_at.timestamp_micros())
        .bind(task.id.to_string())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_task(&self, id: Uuid) -> StoreResult<()> {
        // Cascade: the task's comments go with it, in one transaction.
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM comments WHERE task_id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl CommentStore for SqliteStore {
    async fn insert_comment(&self, comment: &Comment) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO comments (id, task_id, author_id, text, created_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(comment.id.to_string())
        .bind(comment.task_id.to_string())
        .bind(comment.author_id.to_string())
        .bind(&comment.text)
        .bind(comment.created_at.timestamp_micros())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_comments_for_task(&self, task_id: Uuid) -> StoreResult<Vec<CommentWithAuthor>> {
        // rowid breaks ties between comments created in the same microsecond
        let rows = sqlx::query_as::<_, CommentWithAuthorRow>(
            "SELECT c.id, c.task_id, c.author_id, c.text, c.created_at, \
                    u.email AS author_email \
             FROM comments c JOIN users u ON u.id = c.author_id \
             WHERE c.task_id = ? \
             ORDER BY c.created_at DESC, c.rowid DESC",
        )
        .bind(task_id.to_string())
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(CommentWithAuthor::try_from).collect()
    }
}
