//! Template store backed by the compiled-in catalog.

use std::{collections::BTreeMap, path::Path};

use tracing::info;

use kyugo_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::KyugoResult,
};

use crate::{builtin_templates, template_loader::FilesystemTemplateLoader};

/// Immutable name → source map, resolved once at startup.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedTemplateStore {
    templates: BTreeMap<String, String>,
}

impl EmbeddedTemplateStore {
    /// Create a store with the built-in templates loaded.
    pub fn builtin() -> Self {
        Self {
            templates: builtin_templates::BUILTIN
                .iter()
                .map(|(name, source)| (name.to_string(), source.to_string()))
                .collect(),
        }
    }

    /// Built-ins, then every `*.tmpl` under `dir` on top.
    pub fn with_overrides(dir: &Path) -> KyugoResult<Self> {
        let mut store = Self::builtin();
        let overrides = FilesystemTemplateLoader::new(dir).load_all()?;
        info!(
            count = overrides.len(),
            dir = %dir.display(),
            "Template overrides loaded"
        );
        store.templates.extend(overrides);
        Ok(store)
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn get(&self, name: &str) -> KyugoResult<String> {
        self.templates.get(name).cloned().ok_or_else(|| {
            ApplicationError::TemplateMissing {
                name: name.to_string(),
            }
            .into()
        })
    }

    fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }
}
