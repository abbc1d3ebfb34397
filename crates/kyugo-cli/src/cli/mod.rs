//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "kyugo",
    bin_name = "kyugo",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Artefact generator for kyugo web projects",
    long_about = "kyugo renders controllers, models, repositories, services, \
                  middleware, migrations, seeds, DTOs and validators into a \
                  Go project and wires new controllers into the route file.",
    after_help = "EXAMPLES:\n\
        \x20 kyugo create controller user\n\
        \x20 kyugo g model order_item\n\
        \x20 kyugo create migration create_users --dry-run\n\
        \x20 kyugo kinds --format json\n\
        \x20 kyugo completions bash > /usr/share/bash-completion/completions/kyugo",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate an artefact from its template.
    #[command(
        visible_alias = "g",
        about = "Generate an artefact",
        after_help = "KINDS:\n\
            \x20 controller, model, repository, service, middleware,\n\
            \x20 migration, seed, dto, validation\n\n\
            EXAMPLES:\n\
            \x20 kyugo create controller user\n\
            \x20 kyugo create service billing --dry-run\n\
            \x20 kyugo g controller admin --no-route"
    )]
    Create(CreateArgs),

    /// List the artefact kinds kyugo can generate.
    #[command(
        visible_alias = "ls",
        about = "List artefact kinds",
        after_help = "EXAMPLES:\n\
            \x20 kyugo kinds\n\
            \x20 kyugo kinds --format json"
    )]
    Kinds(KindsArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 kyugo completions bash > ~/.local/share/bash-completion/completions/kyugo\n\
            \x20 kyugo completions zsh  > ~/.zfunc/_kyugo\n\
            \x20 kyugo completions fish > ~/.config/fish/completions/kyugo.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the kyugo configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 kyugo config get project.module_path\n\
            \x20 kyugo config list\n\
            \x20 kyugo config path"
    )]
    Config(ConfigCommands),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `kyugo create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Artefact kind. Validated by the generator so unknown kinds get the
    /// full list of suggestions.
    #[arg(value_name = "KIND", help = "Artefact kind (see `kyugo kinds`)")]
    pub kind: String,

    /// Artefact name in any casing, e.g. `user_profile` or `UserProfile`.
    #[arg(value_name = "NAME", help = "Artefact name")]
    pub name: String,

    /// Render everything and print the plan without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Leave `http/route/route.go` untouched.
    #[arg(long = "no-route", help = "Do not register controllers in the route file")]
    pub no_route: bool,
}

// ── kinds ─────────────────────────────────────────────────────────────────────

/// Arguments for `kyugo kinds`.
#[derive(Debug, Args)]
pub struct KindsArgs {
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: KindsFormat,
}

/// Output format for the `kinds` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindsFormat {
    /// Human-readable table.
    Table,
    /// One kind per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `kyugo completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `kyugo config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `project.module_path`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_create_command() {
        let cli = Cli::parse_from(["kyugo", "create", "controller", "user"]);
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.kind, "controller");
                assert_eq!(args.name, "user");
                assert!(!args.dry_run);
                assert!(!args.no_route);
            }
            other => panic!("expected Create, got {other:?}"),
        }
    }

    #[test]
    fn g_is_an_alias_for_create() {
        let cli = Cli::parse_from(["kyugo", "g", "model", "order", "--dry-run"]);
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.kind, "model");
                assert!(args.dry_run);
            }
            other => panic!("expected Create, got {other:?}"),
        }
    }

    #[test]
    fn create_requires_a_name() {
        assert!(Cli::try_parse_from(["kyugo", "create", "controller"]).is_err());
    }

    #[test]
    fn kinds_defaults_to_table() {
        let cli = Cli::parse_from(["kyugo", "kinds"]);
        assert!(matches!(
            cli.command,
            Commands::Kinds(KindsArgs {
                format: KindsFormat::Table
            })
        ));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["kyugo", "kinds", "-vv", "--no-color"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["kyugo", "--quiet", "--verbose", "kinds"]);
        assert!(result.is_err());
    }
}
