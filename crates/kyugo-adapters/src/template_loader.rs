//! Filesystem-based template overrides.
//!
//! Discovers `*.tmpl` files under a directory tree. Each file's stem is the
//! template name it provides, so `controller.tmpl` replaces the built-in
//! controller and `migration_down.tmpl` adds the optional down template.
//!
//! # Directory layout expected
//!
//! ```text
//! templates/
//! ├── controller.tmpl
//! ├── migration_down.tmpl
//! └── sql/
//!     └── migration.tmpl      ← nesting is allowed, only the stem matters
//! ```

use std::{
    collections::BTreeMap,
    fs,
    path::PathBuf,
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use kyugo_core::error::{KyugoError, KyugoResult};

const TEMPLATE_EXTENSION: &str = "tmpl";

/// Loads template sources from a directory.
#[derive(Debug, Clone)]
pub struct FilesystemTemplateLoader {
    templates_dir: PathBuf,
}

impl FilesystemTemplateLoader {
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    /// Read every template under the directory.
    ///
    /// A missing directory is a configuration error. Unreadable entries are
    /// skipped with a warning. When two files share a stem, the one visited
    /// last in the (name-sorted, depth-first) walk wins.
    #[instrument(skip(self), fields(dir = %self.templates_dir.display()))]
    pub fn load_all(&self) -> KyugoResult<BTreeMap<String, String>> {
        if !self.templates_dir.is_dir() {
            return Err(KyugoError::Configuration {
                message: format!(
                    "templates directory not found: {}",
                    self.templates_dir.display()
                ),
            });
        }

        let mut templates = BTreeMap::new();
        let walker = WalkDir::new(&self.templates_dir)
            .min_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXTENSION)
            {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                warn!(path = %path.display(), "Skipping template with non UTF-8 name");
                continue;
            };

            match fs::read_to_string(path) {
                Ok(source) => {
                    debug!(template = name, path = %path.display(), "Loaded template override");
                    if templates.insert(name.to_string(), source).is_some() {
                        warn!(template = name, "Template defined more than once; last one wins");
                    }
                }
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable template"),
            }
        }

        Ok(templates)
    }
}
