// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Kyugo.
//!
//! This module contains pure generation logic with no I/O. Filesystem
//! access, templating and the clock are reached through ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Route patching works on an in-memory string
//! - **Immutable values**: `TemplateData` cannot be edited after derivation
//! - **Closed kinds**: an unknown kind never gets past `FromStr`
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod layout;
pub mod migration;
pub mod naming;
pub mod route_patch;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{GenerationPlan, PlannedFile, RelativePath, TemplateData};
pub use error::DomainError;
pub use migration::MigrationStamp;
pub use route_patch::{
    ControllerRegistration, ImportEdit, PatchResult, RegisterFault, RoutePatch,
};
pub use value_objects::{ArtefactKind, DEFAULT_MIGRATION_DOWN, MIGRATION_DOWN_TEMPLATE};
