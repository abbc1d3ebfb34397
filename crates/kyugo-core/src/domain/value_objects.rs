//! Domain value objects: the closed set of artefact kinds.
//!
//! # Design
//!
//! `ArtefactKind` is a pure value type with no identity. It knows its own name, its template name and the extension of
//! the files it produces. Where those files land is decided in `layout.rs`.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here and to `ArtefactKind::ALL`
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a destination directory in `layout.rs`
//! 4. Ship a template named after the kind in `kyugo-adapters/templates`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ArtefactKind ─────────────────────────────────────────────────────────────

/// A category of file that `kyugo create` knows how to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtefactKind {
    Controller,
    Model,
    Repository,
    Service,
    Middleware,
    Migration,
    Seed,
    Dto,
    Validation,
}

impl ArtefactKind {
    /// Every kind, in the order they are listed to users.
    pub const ALL: [Self; 9] = [
        Self::Controller,
        Self::Model,
        Self::Repository,
        Self::Service,
        Self::Middleware,
        Self::Migration,
        Self::Seed,
        Self::Dto,
        Self::Validation,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::Model => "model",
            Self::Repository => "repository",
            Self::Service => "service",
            Self::Middleware => "middleware",
            Self::Migration => "migration",
            Self::Seed => "seed",
            Self::Dto => "dto",
            Self::Validation => "validation",
        }
    }

    /// Name of the template rendered for this kind.
    ///
    /// For migrations this is the "up" half; the down half is looked up
    /// separately (see [`MIGRATION_DOWN_TEMPLATE`]).
    pub const fn template_name(&self) -> &'static str {
        self.as_str()
    }

    /// Extension (without dot) of the generated files.
    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::Migration => "sql",
            _ => "go",
        }
    }

    /// Migrations produce an up/down pair instead of a single file.
    pub const fn is_paired(self) -> bool {
        matches!(self, Self::Migration)
    }

    /// Only controllers are wired into the route file after generation.
    pub const fn registers_route(self) -> bool {
        matches!(self, Self::Controller)
    }
}

/// Optional template for the down half of a migration.
pub const MIGRATION_DOWN_TEMPLATE: &str = "migration_down";

/// Body used for the down half of a migration when no
/// [`MIGRATION_DOWN_TEMPLATE`] is available.
pub const DEFAULT_MIGRATION_DOWN: &str = "\
-- TODO: implement down migration for {{ Table }}
-- This migration was generated automatically; edit as needed.
";

impl fmt::Display for ArtefactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtefactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "controller" => Ok(Self::Controller),
            "model" => Ok(Self::Model),
            "repository" => Ok(Self::Repository),
            "service" => Ok(Self::Service),
            "middleware" => Ok(Self::Middleware),
            "migration" => Ok(Self::Migration),
            "seed" => Ok(Self::Seed),
            "dto" => Ok(Self::Dto),
            "validation" => Ok(Self::Validation),
            other => Err(DomainError::InvalidKind(other.to_string())),
        }
    }
}
