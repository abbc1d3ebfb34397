//! Unified error handling for Kyugo Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Kyugo Core operations.
///
/// This enum wraps all possible errors that can occur when using kyugo-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum KyugoError {
    /// Errors from the domain layer (invalid kinds, names, paths).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (templates, filesystem, collisions).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl KyugoError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in kyugo".into(),
                "Please report this issue at: https://github.com/go-kyugo/kyugo-cli/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` when the error means the destination file was already present.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::AlreadyExists { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Conflict,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type KyugoResult<T> = Result<T, KyugoError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> KyugoResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> KyugoResult<T> {
        self.map_err(|e| KyugoError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}
