//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `kyugo-adapters` crate provides implementations.

use chrono::NaiveDateTime;
use std::path::Path;

use crate::domain::TemplateData;
use crate::error::KyugoResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `kyugo_adapters::filesystem::LocalFilesystem` (production)
/// - `kyugo_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Paths are absolute, already joined onto the project root
/// - `create_new` is the collision check; there is no separate
///   check-then-write window
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> KyugoResult<()>;

    /// Create a file that must not exist yet.
    ///
    /// Fails with `ApplicationError::AlreadyExists` if it does.
    fn create_new(&self, path: &Path, content: &str) -> KyugoResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> KyugoResult<String>;

    /// Replace the contents of a file so readers see either the old or the
    /// new text, never a mix.
    fn replace(&self, path: &Path, content: &str) -> KyugoResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Names of the entries directly inside `path`. Empty if it is missing.
    fn list_dir(&self, path: &Path) -> KyugoResult<Vec<String>>;
}

/// Port for template lookup.
///
/// Implemented by:
/// - `kyugo_adapters::template_store::EmbeddedTemplateStore` (built-ins plus
///   an optional override directory)
pub trait TemplateStore: Send + Sync {
    /// Source text of the template called `name`.
    fn get(&self, name: &str) -> KyugoResult<String>;

    fn contains(&self, name: &str) -> bool;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `kyugo_adapters::renderer::JinjaRenderer` (minijinja)
pub trait TemplateRenderer: Send + Sync {
    /// Render `source` with the name variants in `data`.
    ///
    /// `name` is only used in error messages. Undefined variables and
    /// malformed syntax are errors.
    fn render(&self, name: &str, source: &str, data: &TemplateData) -> KyugoResult<String>;
}

/// Port for the current local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

#[cfg(test)]
mockall::mock! {
    pub Filesystem {}
    impl Filesystem for Filesystem {
        fn create_dir_all(&self, path: &Path) -> KyugoResult<()>;
        fn create_new(&self, path: &Path, content: &str) -> KyugoResult<()>;
        fn read_to_string(&self, path: &Path) -> KyugoResult<String>;
        fn replace(&self, path: &Path, content: &str) -> KyugoResult<()>;
        fn exists(&self, path: &Path) -> bool;
        fn list_dir(&self, path: &Path) -> KyugoResult<Vec<String>>;
    }
}

#[cfg(test)]
mockall::mock! {
    pub TemplateStore {}
    impl TemplateStore for TemplateStore {
        fn get(&self, name: &str) -> KyugoResult<String>;
        fn contains(&self, name: &str) -> bool;
    }
}

#[cfg(test)]
mockall::mock! {
    pub TemplateRenderer {}
    impl TemplateRenderer for TemplateRenderer {
        fn render(&self, name: &str, source: &str, data: &TemplateData) -> KyugoResult<String>;
    }
}

#[cfg(test)]
mockall::mock! {
    pub Clock {}
    impl Clock for Clock {
        fn now(&self) -> NaiveDateTime;
    }
}
