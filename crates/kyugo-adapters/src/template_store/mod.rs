//! Template store adapters.

mod embedded;

pub use embedded::EmbeddedTemplateStore;
