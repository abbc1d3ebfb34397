//! Project layout conventions.
//!
//! Where each artefact kind lives inside a kyugo project, and the fixed
//! locations of the route file and the module manifest.

use crate::domain::{
    entities::RelativePath, error::DomainError, value_objects::ArtefactKind,
};

/// Route file patched after a controller is generated.
pub const ROUTE_FILE: &str = "http/route/route.go";

/// Manifest that marks the project root.
pub const MANIFEST_FILE: &str = "go.mod";

/// Directory of migration files; stamps are checked against its contents.
pub const MIGRATIONS_DIR: &str = "database/migrations";

/// Destination directory for `kind`, relative to the project root.
///
/// Controllers and services get a package directory of their own named
/// after the artefact.
pub fn destination_dir(kind: ArtefactKind, name: &str) -> Result<RelativePath, DomainError> {
    let base = RelativePath::try_new(base_dir(kind))?;
    match kind {
        ArtefactKind::Controller | ArtefactKind::Service => base.join(name),
        _ => Ok(base),
    }
}

/// Directory shown for `kind` in listings, with `<name>` for per-name
/// packages.
pub fn display_dir(kind: ArtefactKind) -> String {
    match kind {
        ArtefactKind::Controller | ArtefactKind::Service => {
            format!("{}/<name>", base_dir(kind))
        }
        _ => base_dir(kind).to_string(),
    }
}

fn base_dir(kind: ArtefactKind) -> &'static str {
    match kind {
        ArtefactKind::Controller => "http/controller",
        ArtefactKind::Model => "database/model",
        ArtefactKind::Repository => "database/repository",
        ArtefactKind::Service => "services",
        ArtefactKind::Middleware => "http/middleware",
        ArtefactKind::Migration => MIGRATIONS_DIR,
        ArtefactKind::Seed => "database/seed",
        ArtefactKind::Dto => "dto",
        ArtefactKind::Validation => "http/validation",
    }
}

/// Import path of a generated controller package.
pub fn controller_import_path(module_path: &str, name: &str) -> String {
    format!(
        "{}/{}/{}",
        module_path.trim_end_matches('/'),
        base_dir(ArtefactKind::Controller),
        name
    )
}

/// Extract the module path from the text of a `go.mod` file.
///
/// Returns `None` when no `module` directive is present.
pub fn parse_module_directive(manifest: &str) -> Option<String> {
    manifest.lines().find_map(|line| {
        let line = line.split("//").next().unwrap_or("").trim();
        let rest = line.strip_prefix("module")?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let path = rest.trim().trim_matches('"').trim_matches('`');
        (!path.is_empty()).then(|| path.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn destination_table() {
        let cases = [
            (ArtefactKind::Controller, "http/controller/user"),
            (ArtefactKind::Model, "database/model"),
            (ArtefactKind::Repository, "database/repository"),
            (ArtefactKind::Service, "services/user"),
            (ArtefactKind::Middleware, "http/middleware"),
            (ArtefactKind::Migration, "database/migrations"),
            (ArtefactKind::Seed, "database/seed"),
            (ArtefactKind::Dto, "dto"),
            (ArtefactKind::Validation, "http/validation"),
        ];
        for (kind, expected) in cases {
            let dir = destination_dir(kind, "user").unwrap();
            assert_eq!(dir.as_path(), Path::new(expected), "{kind}");
        }
    }

    #[test]
    fn display_dir_marks_per_name_packages() {
        assert_eq!(display_dir(ArtefactKind::Controller), "http/controller/<name>");
        assert_eq!(display_dir(ArtefactKind::Dto), "dto");
    }

    #[test]
    fn import_path_is_module_relative() {
        assert_eq!(
            controller_import_path("github.com/acme/shop/", "user"),
            "github.com/acme/shop/http/controller/user"
        );
    }

    #[test]
    fn parses_module_directive() {
        let manifest = "// header\nmodule github.com/acme/shop // trailing\n\ngo 1.22\n";
        assert_eq!(
            parse_module_directive(manifest).as_deref(),
            Some("github.com/acme/shop")
        );
        assert_eq!(
            parse_module_directive("module \"quoted/mod\"\n").as_deref(),
            Some("quoted/mod")
        );
    }

    #[test]
    fn missing_module_directive() {
        assert_eq!(parse_module_directive("go 1.22\n"), None);
        assert_eq!(parse_module_directive("modules x\n"), None);
    }
}
