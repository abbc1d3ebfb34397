//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. `KYUGO_TEMPLATES_DIR`
//! 2. Environment variables (`KYUGO_PROJECT__MODULE_PATH`, ...)
//! 3. Config file (`--config FILE`, else the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use kyugo_core::domain::layout;

/// Environment variable naming a template override directory.
pub const TEMPLATES_DIR_ENV: &str = "KYUGO_TEMPLATES_DIR";

const DEFAULT_MODULE_PATH: &str = "kyugo.dev/app";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How the target project is recognised.
    pub project: ProjectConfig,
    /// Template settings.
    pub templates: TemplateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// File that marks the project root.
    pub manifest: String,
    /// Used when the manifest is missing or has no `module` line.
    pub module_path: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            manifest: layout::MANIFEST_FILE.into(),
            module_path: DEFAULT_MODULE_PATH.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory of `<name>.tmpl` files overriding the built-ins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from defaults, file and environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(true),
            None => File::from(Self::config_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        let defaults = ProjectConfig::default();
        let settings = Config::builder()
            .set_default("project.manifest", defaults.manifest)?
            .set_default("project.module_path", defaults.module_path)?
            .set_default("output.no_color", false)?
            .add_source(file)
            .add_source(
                Environment::with_prefix("KYUGO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("templates.dir", std::env::var(TEMPLATES_DIR_ENV).ok())?
            .build()
            .context("Failed to read configuration")?;

        let config: Self = settings
            .try_deserialize()
            .context("Configuration has an invalid shape")?;
        config.validate()?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs`, falling back to `.kyugo.toml` in the
    /// current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "kyugo", "kyugo")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".kyugo.toml"))
    }

    /// Override directory, if one is configured.
    pub fn templates_dir(&self) -> Option<&Path> {
        self.templates.dir.as_deref()
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.project.manifest.trim().is_empty() {
            anyhow::bail!("project.manifest must not be empty");
        }
        if self.project.module_path.trim().is_empty() {
            anyhow::bail!("project.module_path must not be empty");
        }
        Ok(())
    }
}
