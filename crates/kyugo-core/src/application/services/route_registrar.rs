//! Route Registrar - wires generated controllers into the route file.
//!
//! Reads the route file, runs the textual patch from
//! `crate::domain::route_patch` and writes the result back only when a
//! registration line went in. A missing file or `Register` function is a
//! skip, not an error: projects without a central router still get their
//! controller.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{ControllerRegistration, ImportEdit, PatchResult, RegisterFault},
    error::KyugoResult,
};

/// What happened to the route file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteOutcome {
    /// The registration line was written. `import` says whether the import
    /// went in too.
    Registered {
        route_file: PathBuf,
        import: ImportEdit,
    },
    /// The constructor call was already present.
    AlreadyRegistered { route_file: PathBuf },
    /// Nothing was written to the route file.
    Skipped {
        route_file: PathBuf,
        reason: SkipReason,
    },
    /// Reading or writing the route file failed after the controller was
    /// written.
    Failed { route_file: PathBuf, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    RouteFileMissing,
    /// `--no-route` or equivalent.
    Disabled,
    RegisterFunctionMissing,
    /// `func Register(` was found but its body never closes.
    UnbalancedBody,
}

impl From<RegisterFault> for SkipReason {
    fn from(fault: RegisterFault) -> Self {
        match fault {
            RegisterFault::FunctionMissing => Self::RegisterFunctionMissing,
            RegisterFault::UnbalancedBody => Self::UnbalancedBody,
        }
    }
}

impl RouteOutcome {
    /// A line worth showing the user when the controller is not fully wired.
    pub fn warning(&self) -> Option<String> {
        match self {
            Self::Registered {
                route_file,
                import: ImportEdit::MarkerMissing,
            } => Some(format!(
                "{}: no import block found; add the controller import manually",
                route_file.display()
            )),
            Self::Registered { .. } | Self::AlreadyRegistered { .. } => None,
            Self::Skipped { route_file, reason } => {
                let problem = match reason {
                    SkipReason::Disabled => return None,
                    SkipReason::RouteFileMissing => "not found",
                    SkipReason::RegisterFunctionMissing => "has no `func Register(`",
                    SkipReason::UnbalancedBody => "has no closing brace for `Register`",
                };
                Some(format!(
                    "{} {}; register the controller manually",
                    route_file.display(),
                    problem
                ))
            }
            Self::Failed { route_file, reason } => Some(format!(
                "could not update {}: {}",
                route_file.display(),
                reason
            )),
        }
    }
}

/// Applies controller registrations to a route file.
pub struct RouteRegistrar {
    filesystem: Arc<dyn Filesystem>,
}

impl RouteRegistrar {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Register `registration` in `route_file`.
    ///
    /// Calling this twice with the same registration leaves the file as the
    /// first call left it.
    #[instrument(skip_all, fields(route_file = %route_file.display(), package = registration.package()))]
    pub fn register(
        &self,
        route_file: &Path,
        registration: &ControllerRegistration,
    ) -> KyugoResult<RouteOutcome> {
        if !self.filesystem.exists(route_file) {
            warn!("Route file missing, skipping registration");
            return Ok(RouteOutcome::Skipped {
                route_file: route_file.to_path_buf(),
                reason: SkipReason::RouteFileMissing,
            });
        }

        let source = self.filesystem.read_to_string(route_file)?;

        let patch = match crate::domain::route_patch::patch(&source, registration) {
            PatchResult::AlreadyRegistered => {
                debug!("Controller already registered");
                return Ok(RouteOutcome::AlreadyRegistered {
                    route_file: route_file.to_path_buf(),
                });
            }
            PatchResult::Unpatched(fault) => {
                warn!(?fault, "Register function not usable, file left untouched");
                return Ok(RouteOutcome::Skipped {
                    route_file: route_file.to_path_buf(),
                    reason: fault.into(),
                });
            }
            PatchResult::Patched(patch) => patch,
        };

        self.filesystem.replace(route_file, &patch.source)?;
        info!(import = ?patch.import, "Route file updated");

        Ok(RouteOutcome::Registered {
            route_file: route_file.to_path_buf(),
            import: patch.import,
        })
    }
}
