//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a controller" or "find the project".

pub mod generate_service;
pub mod project_locator;
pub mod route_registrar;
pub mod template_service;

pub use generate_service::{GenerateRequest, GenerateService, GenerationReport};
pub use project_locator::{ProjectContext, ProjectLocator};
pub use route_registrar::{RouteOutcome, RouteRegistrar, SkipReason};
pub use template_service::TemplateService;
