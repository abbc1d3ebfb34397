// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

use super::value_objects::ArtefactKind;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reported once, possibly logged and displayed)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("unknown artefact kind: {0}")]
    InvalidKind(String),

    #[error("invalid name '{raw}': {reason}")]
    InvalidName { raw: String, reason: &'static str },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path leaves the project root: {path}")]
    PathEscapesRoot { path: String },

    // ========================================================================
    // Plan Violations
    // ========================================================================
    #[error("Duplicate path in generation plan: {path}")]
    DuplicatePath { path: String },

    #[error("Generation plan for '{name}' contains no files")]
    EmptyPlan { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidKind(kind) => {
                let mut out = vec![
                    format!("'{}' is not something kyugo can create", kind),
                    "Supported kinds:".into(),
                ];
                out.extend(ArtefactKind::ALL.iter().map(|k| format!("  • {k}")));
                out.push("Example: kyugo create controller user".into());
                out
            }
            Self::InvalidName { raw, .. } => vec![
                format!("Name '{}' cannot be used for a file", raw),
                "Use letters, digits, hyphens and underscores".into(),
                "Examples: user, user_profile, order-item".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidKind(_) | Self::InvalidName { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}
