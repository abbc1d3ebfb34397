//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No template with this name in the store.
    #[error("Template not found: {name}")]
    TemplateMissing { name: String },

    /// Template rendering failed.
    #[error("Template '{template}' failed to render: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Destination file is already present. Never overwritten.
    #[error("File already exists: {path}")]
    AlreadyExists { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A multi-file artefact stopped halfway; `written` stays on disk.
    #[error("Wrote {} file(s) but failed on {failed}: {reason}", written.len())]
    PartialWrite {
        written: Vec<PathBuf>,
        failed: PathBuf,
        reason: String,
    },

    /// A shared in-memory store was poisoned by a panicking writer.
    #[error("In-memory store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateMissing { name } => vec![
                format!("No template named '{}' is available", name),
                "Try: kyugo kinds to see what can be generated".into(),
                "Check templates.dir if you use template overrides".into(),
            ],
            Self::RenderingFailed { template, .. } => vec![
                format!("Template '{}' could not be rendered", template),
                "Templates may only use Name, StructName, FuncName, ModelName and Table".into(),
            ],
            Self::AlreadyExists { path } => vec![
                format!("Remove or rename {} first", path.display()),
                "Or choose a different name".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::PartialWrite { written, .. } => {
                let mut out = vec!["These files were written and left in place:".to_string()];
                out.extend(written.iter().map(|p| format!("  • {}", p.display())));
                out.push("Delete them before retrying".into());
                out
            }
            Self::StoreLockError => vec![
                "A previous operation panicked while holding the store".into(),
                "Recreate the store before retrying".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateMissing { .. } => ErrorCategory::NotFound,
            Self::AlreadyExists { .. } => ErrorCategory::Conflict,
            Self::RenderingFailed { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. } | Self::PartialWrite { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_write_lists_persisted_files() {
        let err = ApplicationError::PartialWrite {
            written: vec![PathBuf::from("database/migrations/1_users.up.sql")],
            failed: PathBuf::from("database/migrations/1_users.down.sql"),
            reason: "disk full".into(),
        };
        assert!(err.to_string().starts_with("Wrote 1 file(s)"));
        assert!(err
            .suggestions()
            .iter()
            .any(|s| s.contains("1_users.up.sql")));
    }
}
