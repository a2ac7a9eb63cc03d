//! Repository Module
//!
//! CRUD operations over the SQLite tables, as free functions taking a pool.

pub mod cafe;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound("Row not found".into()),
            e => RepoError::Database(e.to_string()),
        }
    }
}

pub type RepoResult<T> = Result<T, RepoError>;
