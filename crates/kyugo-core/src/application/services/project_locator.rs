//! Project root and module path discovery.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::{application::ports::Filesystem, domain::layout};

/// Where generation happens and which module the controllers belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    pub root: PathBuf,
    pub module_path: String,
    /// Whether the manifest was actually found at `root`.
    pub manifest_found: bool,
}

/// Resolves the project root from the working directory.
///
/// The root is the working directory if it holds the manifest, otherwise
/// its parent. Running from inside e.g. `http/` therefore works one level
/// deep.
pub struct ProjectLocator {
    filesystem: Arc<dyn Filesystem>,
    manifest: String,
    fallback_module: String,
}

impl ProjectLocator {
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        manifest: impl Into<String>,
        fallback_module: impl Into<String>,
    ) -> Self {
        Self {
            filesystem,
            manifest: manifest.into(),
            fallback_module: fallback_module.into(),
        }
    }

    pub fn locate(&self, cwd: &Path) -> ProjectContext {
        let root = if self.filesystem.exists(&cwd.join(&self.manifest)) {
            cwd.to_path_buf()
        } else {
            cwd.parent().unwrap_or(cwd).to_path_buf()
        };

        let manifest = root.join(&self.manifest);
        let manifest_found = self.filesystem.exists(&manifest);
        let module_path = if manifest_found {
            self.module_from(&manifest)
        } else {
            warn!(manifest = %self.manifest, root = %root.display(), "Manifest not found");
            self.fallback_module.clone()
        };

        debug!(root = %root.display(), module = %module_path, "Project located");
        ProjectContext {
            root,
            module_path,
            manifest_found,
        }
    }

    fn module_from(&self, manifest: &Path) -> String {
        match self.filesystem.read_to_string(manifest) {
            Ok(text) => layout::parse_module_directive(&text).unwrap_or_else(|| {
                warn!(manifest = %manifest.display(), "No module directive, using fallback");
                self.fallback_module.clone()
            }),
            Err(e) => {
                warn!(error = %e, "Could not read manifest, using fallback module path");
                self.fallback_module.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;

    fn locator(fs: MockFilesystem) -> ProjectLocator {
        ProjectLocator::new(Arc::new(fs), "go.mod", "kyugo.dev/app")
    }

    #[test]
    fn manifest_in_cwd() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p == Path::new("/srv/shop/go.mod"));
        fs.expect_read_to_string()
            .returning(|_| Ok("module github.com/acme/shop\n\ngo 1.22\n".into()));

        let ctx = locator(fs).locate(Path::new("/srv/shop"));
        assert_eq!(ctx.root, PathBuf::from("/srv/shop"));
        assert_eq!(ctx.module_path, "github.com/acme/shop");
        assert!(ctx.manifest_found);
    }

    #[test]
    fn manifest_in_parent() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p == Path::new("/srv/shop/go.mod"));
        fs.expect_read_to_string()
            .returning(|_| Ok("module github.com/acme/shop\n".into()));

        let ctx = locator(fs).locate(Path::new("/srv/shop/http"));
        assert_eq!(ctx.root, PathBuf::from("/srv/shop"));
        assert_eq!(ctx.module_path, "github.com/acme/shop");
    }

    #[test]
    fn no_manifest_uses_parent_and_fallback() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_read_to_string().never();

        let ctx = locator(fs).locate(Path::new("/srv/shop/http"));
        assert_eq!(ctx.root, PathBuf::from("/srv/shop"));
        assert_eq!(ctx.module_path, "kyugo.dev/app");
        assert!(!ctx.manifest_found);
    }

    #[test]
    fn manifest_without_module_uses_fallback() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string().returning(|_| Ok("go 1.22\n".into()));

        let ctx = locator(fs).locate(Path::new("/srv/shop"));
        assert_eq!(ctx.module_path, "kyugo.dev/app");
        assert!(ctx.manifest_found);
    }
}
