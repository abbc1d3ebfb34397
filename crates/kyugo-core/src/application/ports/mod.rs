//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `kyugo-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateStore`: Template lookup by name
//!   - `TemplateRenderer`: Template rendering
//!   - `Clock`: Wall-clock time for migration stamps
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Clock, Filesystem, TemplateRenderer, TemplateStore};

#[cfg(test)]
pub use output::{MockClock, MockFilesystem, MockTemplateRenderer, MockTemplateStore};
