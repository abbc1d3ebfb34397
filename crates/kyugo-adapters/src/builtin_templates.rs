//! Templates compiled into the binary.
//!
//! One template per artefact kind, named after the kind. There is no
//! built-in `migration_down`; the down half of a migration falls back to a
//! placeholder body unless an override directory supplies one.

/// `(name, source)` pairs, in kind order.
pub const BUILTIN: &[(&str, &str)] = &[
    ("controller", include_str!("../templates/controller.tmpl")),
    ("model", include_str!("../templates/model.tmpl")),
    ("repository", include_str!("../templates/repository.tmpl")),
    ("service", include_str!("../templates/service.tmpl")),
    ("middleware", include_str!("../templates/middleware.tmpl")),
    ("migration", include_str!("../templates/migration.tmpl")),
    ("seed", include_str!("../templates/seed.tmpl")),
    ("dto", include_str!("../templates/dto.tmpl")),
    ("validation", include_str!("../templates/validation.tmpl")),
];
