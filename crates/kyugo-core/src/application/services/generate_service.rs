//! Generate Service - main application orchestrator.
//!
//! This service coordinates the whole `create` workflow:
//! 1. Normalise the name into template data
//! 2. Render the template(s) for the kind
//! 3. Write each file with a collision check
//! 4. For controllers, wire the package into the route file
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Clock, Filesystem, TemplateRenderer, TemplateStore},
        services::{
            route_registrar::{RouteOutcome, RouteRegistrar, SkipReason},
            template_service::TemplateService,
        },
    },
    domain::{
        ArtefactKind, ControllerRegistration, DEFAULT_MIGRATION_DOWN, GenerationPlan,
        MIGRATION_DOWN_TEMPLATE, MigrationStamp, PlannedFile, TemplateData, layout,
    },
    error::KyugoResult,
};

/// One `create` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub root: PathBuf,
    pub module_path: String,
    pub kind: ArtefactKind,
    pub name: String,
    pub register_route: bool,
}

impl GenerateRequest {
    pub fn new(
        root: impl Into<PathBuf>,
        module_path: impl Into<String>,
        kind: ArtefactKind,
        name: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            module_path: module_path.into(),
            kind,
            name: name.into(),
            register_route: true,
        }
    }

    /// Like [`GenerateRequest::new`] with the kind still as user input.
    pub fn parse(
        root: impl Into<PathBuf>,
        module_path: impl Into<String>,
        kind: &str,
        name: impl Into<String>,
    ) -> KyugoResult<Self> {
        let kind = ArtefactKind::from_str(kind)?;
        Ok(Self::new(root, module_path, kind, name))
    }

    /// Leave the route file alone even for controllers.
    pub fn without_route(mut self) -> Self {
        self.register_route = false;
        self
    }
}

/// What a successful generation did.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub kind: ArtefactKind,
    pub data: TemplateData,
    /// Absolute paths, in write order.
    pub written: Vec<PathBuf>,
    /// Only set for controllers.
    pub route: Option<RouteOutcome>,
}

/// Main generation service.
///
/// Orchestrates the rendering, writing and route registration workflow.
pub struct GenerateService {
    templates: TemplateService,
    filesystem: Arc<dyn Filesystem>,
    registrar: RouteRegistrar,
    clock: Box<dyn Clock>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use kyugo_core::application::GenerateService;
    ///
    /// let service = GenerateService::new(
    ///     store,      // impl TemplateStore
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // Arc<impl Filesystem>
    ///     clock,      // impl Clock
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Arc<dyn Filesystem>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            templates: TemplateService::new(store, renderer),
            registrar: RouteRegistrar::new(Arc::clone(&filesystem)),
            filesystem,
            clock,
        }
    }

    /// Render everything `request` would write, without touching the disk.
    ///
    /// Used for `--dry-run`. Existing files are not checked here.
    pub fn plan(&self, request: &GenerateRequest) -> KyugoResult<GenerationPlan> {
        let data = TemplateData::from_raw(&request.name)?;
        self.build_plan(request, &data)
    }

    /// Generate the artefact described by `request`.
    ///
    /// This is the main use case.
    #[instrument(
        skip_all,
        fields(
            kind = %request.kind,
            name = %request.name,
            root = %request.root.display()
        )
    )]
    pub fn generate(&self, request: &GenerateRequest) -> KyugoResult<GenerationReport> {
        info!("Generating {} '{}'", request.kind, request.name);

        // 1. Normalise
        let data = TemplateData::from_raw(&request.name)?;

        // 2. Render every file before writing any
        let plan = self.build_plan(request, &data)?;

        // 3. Write
        let written = self.write_plan(&request.root, &plan)?;
        info!(files = written.len(), "Artefact written");

        // 4. Route registration
        let route = if request.kind.registers_route() {
            Some(self.register_controller(request, &data))
        } else {
            None
        };

        Ok(GenerationReport {
            kind: request.kind,
            data,
            written,
            route,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn build_plan(&self, request: &GenerateRequest, data: &TemplateData) -> KyugoResult<GenerationPlan> {
        let kind = request.kind;
        let dir = layout::destination_dir(kind, data.name())?;
        let mut plan = GenerationPlan::new(kind);

        if kind.is_paired() {
            let stamp = self.free_stamp(&request.root)?;
            debug!(stamp = %stamp, "Migration stamp chosen");

            let up = self.templates.render(kind.template_name(), data)?;
            let down = self.templates.render_or_fallback(
                MIGRATION_DOWN_TEMPLATE,
                DEFAULT_MIGRATION_DOWN,
                data,
            )?;

            plan.add_file(PlannedFile::new(dir.clone(), stamp.up_file_name(data.table()), up));
            plan.add_file(PlannedFile::new(dir, stamp.down_file_name(data.table()), down));
        } else {
            let content = self.templates.render(kind.template_name(), data)?;
            let file_name = format!("{}.{}", data.name(), kind.file_extension());
            plan.add_file(PlannedFile::new(dir, file_name, content));
        }

        plan.validate()?;
        Ok(plan)
    }

    /// Current time as a stamp, pushed forward past any migration already
    /// using it.
    fn free_stamp(&self, root: &Path) -> KyugoResult<MigrationStamp> {
        let existing = self.filesystem.list_dir(&root.join(layout::MIGRATIONS_DIR))?;
        let stamp = MigrationStamp::new(self.clock.now());
        Ok(stamp.first_free(existing.iter().map(String::as_str)))
    }

    /// Write every planned file, refusing to overwrite.
    ///
    /// Files written before a failure stay on disk and are named in the
    /// `PartialWrite` error.
    fn write_plan(&self, root: &Path, plan: &GenerationPlan) -> KyugoResult<Vec<PathBuf>> {
        for file in plan.files() {
            let path = root.join(file.relative_path());
            if self.filesystem.exists(&path) {
                return Err(ApplicationError::AlreadyExists { path }.into());
            }
        }

        let mut written = Vec::with_capacity(plan.file_count());
        for file in plan.files() {
            let dir = file.dir.under(root);
            let path = dir.join(&file.file_name);

            let result = self
                .filesystem
                .create_dir_all(&dir)
                .and_then(|()| self.filesystem.create_new(&path, &file.content));

            match result {
                Ok(()) => {
                    debug!(path = %path.display(), bytes = file.size(), "File written");
                    written.push(path);
                }
                Err(e) if written.is_empty() => return Err(e),
                Err(e) => {
                    warn!(failed = %path.display(), "Write failed after earlier files were persisted");
                    return Err(ApplicationError::PartialWrite {
                        written,
                        failed: path,
                        reason: e.to_string(),
                    }
                    .into());
                }
            }
        }

        Ok(written)
    }

    fn register_controller(&self, request: &GenerateRequest, data: &TemplateData) -> RouteOutcome {
        let route_file = request.root.join(layout::ROUTE_FILE);

        if !request.register_route {
            debug!("Route registration disabled");
            return RouteOutcome::Skipped {
                route_file,
                reason: SkipReason::Disabled,
            };
        }

        let registration = ControllerRegistration::new(
            layout::controller_import_path(&request.module_path, data.name()),
            data.name(),
        );

        match self.registrar.register(&route_file, &registration) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "Route registration failed; controller was still written");
                RouteOutcome::Failed {
                    route_file,
                    reason: e.to_string(),
                }
            }
        }
    }
}
