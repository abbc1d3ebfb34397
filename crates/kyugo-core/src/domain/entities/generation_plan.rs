use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::{entities::common::RelativePath, error::DomainError, value_objects::ArtefactKind};

/// Files a single `create` call will write, fully rendered.
///
/// This is the output of the rendering step. It contains no business
/// logic, only data, and is what `--dry-run` prints.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    kind: ArtefactKind,
    files: Vec<PlannedFile>,
}

impl GenerationPlan {
    pub fn new(kind: ArtefactKind) -> Self {
        Self {
            kind,
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, file: PlannedFile) {
        self.files.push(file);
    }

    pub fn with_file(mut self, file: PlannedFile) -> Self {
        self.add_file(file);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyPlan {
                name: self.kind.to_string(),
            });
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            let path = file.relative_path();
            if !seen.insert(path.clone()) {
                return Err(DomainError::DuplicatePath {
                    path: path.display().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn kind(&self) -> ArtefactKind {
        self.kind
    }

    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub dir: RelativePath,
    pub file_name: String,
    pub content: String,
}

impl PlannedFile {
    pub fn new(dir: RelativePath, file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            dir,
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// Path of the file relative to the project root.
    pub fn relative_path(&self) -> PathBuf {
        self.dir.as_path().join(&self.file_name)
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(dir: &str, name: &str) -> PlannedFile {
        PlannedFile::new(RelativePath::try_new(dir).unwrap(), name, "x")
    }

    #[test]
    fn empty_plan_is_invalid() {
        let plan = GenerationPlan::new(ArtefactKind::Dto);
        assert!(matches!(plan.validate(), Err(DomainError::EmptyPlan { .. })));
    }

    #[test]
    fn duplicate_paths_are_invalid() {
        let plan = GenerationPlan::new(ArtefactKind::Migration)
            .with_file(file("database/migrations", "1_a.up.sql"))
            .with_file(file("database/migrations", "1_a.up.sql"));
        assert!(matches!(
            plan.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn relative_path_joins_dir_and_name() {
        let f = file("http/controller/user", "user.go");
        assert_eq!(f.relative_path(), PathBuf::from("http/controller/user/user.go"));
        assert_eq!(f.size(), 1);
    }
}
