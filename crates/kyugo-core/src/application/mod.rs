//! Application layer for Kyugo.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService, RouteRegistrar,
//!   TemplateService, ProjectLocator)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Naming, layout and route patching live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    GenerateRequest, GenerateService, GenerationReport, ProjectContext, ProjectLocator,
    RouteOutcome, RouteRegistrar, SkipReason, TemplateService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Clock, Filesystem, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
