//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use kyugo_core::{
    application::{ApplicationError, ports::Filesystem},
    error::KyugoResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can keep one handle and give
/// another to the service under test.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path, content.into());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

fn insert_ancestors(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> KyugoResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn create_new(&self, path: &Path, content: &str) -> KyugoResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.files.contains_key(path) {
            return Err(ApplicationError::AlreadyExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> KyugoResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }

    fn replace(&self, path: &Path, content: &str) -> KyugoResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn list_dir(&self, path: &Path) -> KyugoResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner
            .files
            .keys()
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kyugo_core::error::KyugoError;

    #[test]
    fn create_new_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.create_new(Path::new("/a/b.go"), "x").is_err());
        fs.create_dir_all(Path::new("/a")).unwrap();
        fs.create_new(Path::new("/a/b.go"), "x").unwrap();
        assert!(fs.create_new(Path::new("/a/b.go"), "y").unwrap_err().is_already_exists());
    }

    #[test]
    fn clones_share_storage() {
        let fs = MemoryFilesystem::new().with_file("/app/go.mod", "module x\n");
        let other = fs.clone();
        other.replace(Path::new("/app/go.mod"), "module y\n").unwrap();
        assert_eq!(fs.read_file(Path::new("/app/go.mod")).unwrap(), "module y\n");
        assert!(fs.exists(Path::new("/app")));
    }

    #[test]
    fn poisoned_lock_is_reported_not_panicked() {
        let fs = MemoryFilesystem::new().with_file("/app/go.mod", "module x\n");
        let held = fs.clone();
        let _ = std::thread::spawn(move || {
            let _guard = held.inner.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        let err = fs.read_to_string(Path::new("/app/go.mod")).unwrap_err();
        assert!(matches!(
            err,
            KyugoError::Application(ApplicationError::StoreLockError)
        ));
        assert!(fs.create_new(Path::new("/app/x.go"), "").is_err());
        assert!(!fs.exists(Path::new("/app/go.mod")));
    }

    #[test]
    fn list_dir_only_returns_direct_children() {
        let fs = MemoryFilesystem::new()
            .with_file("/m/1_a.up.sql", "")
            .with_file("/m/sub/2_b.up.sql", "");
        assert_eq!(fs.list_dir(Path::new("/m")).unwrap(), vec!["1_a.up.sql"]);
    }
}
