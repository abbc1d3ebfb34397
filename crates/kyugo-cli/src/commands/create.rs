//! Implementation of the `kyugo create` command.
//!
//! Responsibility: locate the project, translate CLI arguments into a
//! `GenerateRequest`, call the core generate service, and display results.
//! No business logic lives here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument};

use kyugo_adapters::{EmbeddedTemplateStore, JinjaRenderer, LocalFilesystem, SystemClock};
use kyugo_core::{
    application::{
        GenerateRequest, GenerateService, GenerationReport, ProjectContext, ProjectLocator,
        RouteOutcome, SkipReason, ports::Filesystem,
    },
    domain::{GenerationPlan, layout},
};

use crate::{
    cli::CreateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute `kyugo create <kind> <name>`.
///
/// 1. Resolve the project root and module path from the working directory
/// 2. Parse the kind (unknown kinds fail before anything is written)
/// 3. Early-exit with the rendered plan if `--dry-run`
/// 4. Generate, then report written files and the route outcome
#[instrument(skip_all, fields(kind = %args.kind, name = %args.name))]
pub fn execute(args: CreateArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir().map_err(|source| CliError::WorkingDirectory { source })?;
    let filesystem: Arc<dyn Filesystem> = Arc::new(LocalFilesystem::new());

    let project = ProjectLocator::new(
        Arc::clone(&filesystem),
        config.project.manifest.as_str(),
        config.project.module_path.as_str(),
    )
    .locate(&cwd);

    let mut request = GenerateRequest::parse(
        project.root.clone(),
        project.module_path.as_str(),
        &args.kind,
        args.name.as_str(),
    )?;
    if args.no_route {
        request = request.without_route();
    }

    if !project.manifest_found {
        output.warning(&format!(
            "No {} found in {} or its parent; using module path '{}'",
            config.project.manifest,
            cwd.display(),
            project.module_path
        ))?;
    }

    let service = build_service(config, filesystem)?;

    if args.dry_run {
        let plan = service.plan(&request)?;
        return print_plan(&plan, &project, request.register_route, output);
    }

    info!(root = %project.root.display(), "Generation started");
    let report = service.generate(&request)?;
    info!(files = report.written.len(), "Generation completed");

    print_report(&report, &project.root, output)
}

fn build_service(
    config: &AppConfig,
    filesystem: Arc<dyn Filesystem>,
) -> CliResult<GenerateService> {
    let store = match config.templates_dir() {
        Some(dir) => {
            debug!(dir = %dir.display(), "Loading template overrides");
            EmbeddedTemplateStore::with_overrides(dir)?
        }
        None => EmbeddedTemplateStore::builtin(),
    };

    Ok(GenerateService::new(
        Box::new(store),
        Box::new(JinjaRenderer::new()),
        filesystem,
        Box::new(SystemClock),
    ))
}

// ── Output ────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct DryRun<'a> {
    root: &'a Path,
    module_path: &'a str,
    files: Vec<DryRunFile>,
}

#[derive(Debug, Serialize)]
struct DryRunFile {
    path: PathBuf,
    bytes: usize,
}

fn print_plan(
    plan: &GenerationPlan,
    project: &ProjectContext,
    register_route: bool,
    output: &OutputManager,
) -> CliResult<()> {
    let files: Vec<DryRunFile> = plan
        .files()
        .iter()
        .map(|f| DryRunFile {
            path: f.relative_path(),
            bytes: f.size(),
        })
        .collect();

    if output.is_json() {
        return output.json(&DryRun {
            root: &project.root,
            module_path: &project.module_path,
            files,
        });
    }

    output.info(&format!(
        "Dry run: would create {} {} file(s) in {}",
        files.len(),
        plan.kind(),
        project.root.display()
    ))?;
    for file in &files {
        output.print(&format!("  {} ({} bytes)", file.path.display(), file.bytes))?;
    }
    if register_route && plan.kind().registers_route() {
        output.print(&format!("  and register it in {}", layout::ROUTE_FILE))?;
    }
    Ok(())
}

fn print_report(report: &GenerationReport, root: &Path, output: &OutputManager) -> CliResult<()> {
    // Warnings first: they go to stderr and must not be lost when stdout is
    // JSON.
    if let Some(warning) = report.route.as_ref().and_then(RouteOutcome::warning) {
        output.warning(&warning)?;
    }

    if output.is_json() {
        return output.json(report);
    }

    for path in &report.written {
        let shown = path.strip_prefix(root).unwrap_or(path);
        output.success(&format!("Created {}", shown.display()))?;
    }

    match &report.route {
        Some(RouteOutcome::Registered { route_file, .. }) => {
            let shown = route_file.strip_prefix(root).unwrap_or(route_file);
            output.success(&format!(
                "Registered {} controller in {}",
                report.data.name(),
                shown.display()
            ))?;
        }
        Some(RouteOutcome::AlreadyRegistered { .. }) => {
            output.info("Controller was already registered")?;
        }
        Some(RouteOutcome::Skipped {
            reason: SkipReason::Disabled,
            ..
        }) => {
            output.info("Route registration skipped (--no-route)")?;
        }
        _ => {}
    }

    Ok(())
}
