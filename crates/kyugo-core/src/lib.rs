//! Kyugo Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `kyugo`
//! artefact generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            kyugo-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GenerateService, RouteRegistrar,      │
//! │   TemplateService, ProjectLocator)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateStore, Renderer,   │
//! │  Clock)                                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     kyugo-adapters (Infrastructure)     │
//! │ (LocalFilesystem, EmbeddedTemplateStore,│
//! │  JinjaRenderer, SystemClock)            │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ArtefactKind, TemplateData, layout,    │
//! │  route patching)                        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kyugo_core::{
//!     application::{GenerateRequest, GenerateService},
//!     domain::ArtefactKind,
//! };
//!
//! // 1. Wire adapters into the service
//! let service = GenerateService::new(store, renderer, filesystem, clock);
//!
//! // 2. Describe what to generate
//! let request = GenerateRequest::new("/srv/app", "example.com/app", ArtefactKind::Controller, "user");
//!
//! // 3. Generate (writes the controller and wires it into http/route/route.go)
//! let report = service.generate(&request)?;
//! ```

// Domain layer (pure logic, no I/O)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateRequest, GenerateService, GenerationReport, ProjectContext, ProjectLocator,
        RouteOutcome, RouteRegistrar, TemplateService,
        ports::{Clock, Filesystem, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        ArtefactKind, ControllerRegistration, GenerationPlan, MigrationStamp, PlannedFile,
        RelativePath, TemplateData,
    };
    pub use crate::error::{KyugoError, KyugoResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
