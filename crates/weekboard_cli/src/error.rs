//! CLI error type.

use std::error::Error;
use std::fmt::{Display, Formatter};
use weekboard_core::db::DbError;
use weekboard_core::{StoreError, TaskIdError};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub enum CliError {
    /// Path or environment resolution failure.
    Config(String),
    /// Logging could not be started.
    Logging(String),
    /// Argument rejected before reaching core.
    InvalidInput(String),
    /// Writing command output failed.
    Io(std::io::Error),
    Db(DbError),
    Store(StoreError),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(message) => write!(f, "configuration error: {message}"),
            Self::Logging(message) => write!(f, "logging error: {message}"),
            Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
            Self::Io(err) => write!(f, "output error: {err}"),
            Self::Db(err) => write!(f, "database error: {err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<DbError> for CliError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<StoreError> for CliError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<TaskIdError> for CliError {
    fn from(value: TaskIdError) -> Self {
        Self::InvalidInput(value.to_string())
    }
}
