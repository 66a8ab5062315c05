//! Error types and presentation-safe message mapping.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves as
//! the top-level error type that wraps domain-specific errors. Domain errors are expected
//! outcomes the chat layer reports back to the user verbatim, while infrastructure errors
//! (database, object store, configuration) are logged and replaced by a generic message
//! through `AppError::user_message`.

pub mod config;
pub mod internal;
pub mod referral;
pub mod storage;
pub mod validation;

use thiserror::Error;

use crate::error::{
    config::ConfigError, internal::InternalError, referral::ReferralError, storage::StorageError,
    validation::ValidationError,
};

/// Generic message returned to users for failures they cannot act on.
const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong, please try again later";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion so that repositories and adapters can be
/// called with `?` from the service layer.
#[derive(Error, Debug)]
pub enum AppError {
    /// Input rejected by a domain rule before any side effect happened.
    ///
    /// Shown to the user verbatim.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Object store operation failed.
    ///
    /// Logged with bucket and key, replaced by a generic message for the user.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Relational store operation failed.
    ///
    /// Raised for connection errors, constraint violations and failed transactions.
    /// Any transaction in flight has been rolled back by the time this is returned.
    #[error(transparent)]
    Persistence(#[from] sea_orm::DbErr),

    /// Invitation code could not be redeemed.
    ///
    /// Shown to the user verbatim.
    #[error(transparent)]
    Referral(#[from] ReferralError),

    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Stored data could not be converted into a domain model.
    #[error(transparent)]
    Internal(#[from] InternalError),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for logging
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Converts the error into text that can be shown to a chat user.
    ///
    /// Domain errors carry their own message. Every other error is logged at error level
    /// with full details and replaced by a generic message to avoid leaking bucket names,
    /// keys or SQL to the user.
    ///
    /// # Returns
    /// - `String` - Presentation-safe error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Referral(err) => err.to_string(),
            Self::NotFound(msg) => msg.clone(),
            err => {
                tracing::error!("{}", err);
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }

    /// Returns true when the error is a unique constraint violation in the database.
    ///
    /// Used to detect a lost race on a unique index, for example two processes assigning
    /// the same racing number on one stage.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Persistence(err) => matches!(
                err.sql_err(),
                Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
            ),
            _ => false,
        }
    }
}
