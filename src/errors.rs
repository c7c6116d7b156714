//! Unified error type for every data-access operation in the crate.

use thiserror::Error;

/// Errors raised by configuration, seeding and query operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Input rejected before it reached the database
    #[error("Validation error: {message}")]
    Validation {
        /// Why the input was rejected
        message: String,
    },

    /// A required row does not exist
    #[error("{entity} not found: {key}")]
    NotFound {
        /// Entity kind, e.g. `"Artist"`
        entity: &'static str,
        /// The lookup key that matched nothing
        key: String,
    },

    /// Any failure reported by `SeaORM` or the underlying driver
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a [`Error::NotFound`] keyed by anything displayable.
    pub fn not_found(entity: &'static str, key: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// Shorthand for a [`Error::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
