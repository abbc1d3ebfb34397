//! Template Service - name-based template rendering.
//!
//! Pairs a store with a renderer so callers ask for "the controller
//! template" instead of juggling source text. Separated from
//! GenerateService for single responsibility.

use tracing::debug;

use crate::{
    application::ports::{TemplateRenderer, TemplateStore},
    domain::TemplateData,
    error::KyugoResult,
};

/// Service for template operations.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(store: Box<dyn TemplateStore>, renderer: Box<dyn TemplateRenderer>) -> Self {
        Self { store, renderer }
    }

    /// Render the template called `name`.
    pub fn render(&self, name: &str, data: &TemplateData) -> KyugoResult<String> {
        let source = self.store.get(name)?;
        debug!(template = name, "Rendering template");
        self.renderer.render(name, &source, data)
    }

    /// Render `name` if the store has it, otherwise render `fallback`.
    pub fn render_or_fallback(
        &self,
        name: &str,
        fallback: &str,
        data: &TemplateData,
    ) -> KyugoResult<String> {
        if self.store.contains(name) {
            self.render(name, data)
        } else {
            debug!(template = name, "Template absent, using built-in fallback");
            self.renderer.render(name, fallback, data)
        }
    }
}
