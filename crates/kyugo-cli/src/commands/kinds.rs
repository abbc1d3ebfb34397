//! Implementation of the `kyugo kinds` command.

use serde::Serialize;

use kyugo_core::domain::{ArtefactKind, MIGRATION_DOWN_TEMPLATE, layout};

use crate::{
    cli::{KindsArgs, KindsFormat},
    error::CliResult,
    output::OutputManager,
};

/// One row of the listing.
#[derive(Debug, Serialize)]
struct KindRow {
    kind: ArtefactKind,
    templates: Vec<&'static str>,
    directory: String,
    files: String,
    registers_route: bool,
}

impl KindRow {
    fn new(kind: ArtefactKind) -> Self {
        let mut templates = vec![kind.template_name()];
        if kind.is_paired() {
            templates.push(MIGRATION_DOWN_TEMPLATE);
        }
        Self {
            kind,
            templates,
            directory: layout::display_dir(kind),
            files: file_pattern(kind),
            registers_route: kind.registers_route(),
        }
    }
}

fn file_pattern(kind: ArtefactKind) -> String {
    if kind.is_paired() {
        format!(
            "<timestamp>_<table>.up.{ext}, <timestamp>_<table>.down.{ext}",
            ext = kind.file_extension()
        )
    } else {
        format!("<name>.{}", kind.file_extension())
    }
}

pub fn execute(args: KindsArgs, output: &OutputManager) -> CliResult<()> {
    let rows: Vec<KindRow> = ArtefactKind::ALL.into_iter().map(KindRow::new).collect();

    match args.format {
        KindsFormat::Json => output.json(&rows)?,
        KindsFormat::List => {
            for row in &rows {
                output.print(row.kind.as_str())?;
            }
        }
        KindsFormat::Table => {
            output.header("Artefact kinds:")?;
            for row in &rows {
                let route = if row.registers_route { "  (+ route)" } else { "" };
                output.print(&format!(
                    "  {:<12} {:<28} {}{}",
                    row.kind.as_str(),
                    row.directory,
                    row.files,
                    route
                ))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migration_row_lists_both_templates() {
        let row = KindRow::new(ArtefactKind::Migration);
        assert_eq!(row.templates, vec!["migration", "migration_down"]);
        assert_eq!(row.directory, "database/migrations");
        assert!(row.files.contains(".down.sql"));
    }

    #[test]
    fn controller_row_registers_route() {
        let row = KindRow::new(ArtefactKind::Controller);
        assert!(row.registers_route);
        assert_eq!(row.directory, "http/controller/<name>");
        assert_eq!(row.files, "<name>.go");
    }

    #[test]
    fn rows_serialise_with_lowercase_kind() {
        let json = serde_json::to_value(KindRow::new(ArtefactKind::Dto)).unwrap();
        assert_eq!(json["kind"], "dto");
        assert_eq!(json["registers_route"], false);
    }
}
