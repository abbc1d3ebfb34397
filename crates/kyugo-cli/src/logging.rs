//! Tracing subscriber setup.
//!
//! Only the binary installs a subscriber; `kyugo-core` and `kyugo-adapters`
//! just emit events. Everything goes to stderr so stdout carries nothing but
//! command output. `RUST_LOG` replaces the level chosen by `-v`/`-q`.

use std::io::{self, IsTerminal as _};

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::{GlobalArgs, OutputFormat};

const KYUGO_TARGETS: [&str; 3] = ["kyugo", "kyugo_core", "kyugo_adapters"];

pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directives(args.log_level())))?;

    let layer = fmt::layer().with_writer(io::stderr).with_target(false);
    let registry = tracing_subscriber::registry().with(filter);

    // JSON output gets JSON log lines, so a consumer can parse both streams.
    let installed = if args.output_format == OutputFormat::Json {
        registry.with(layer.json().with_ansi(false)).try_init()
    } else {
        let ansi = !args.no_color && io::stderr().is_terminal();
        registry.with(layer.compact().with_ansi(ansi)).try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("tracing subscriber already set: {e}"))
}

/// `level` for our crates, `warn` for dependencies.
fn filter_directives(level: LevelFilter) -> String {
    KYUGO_TARGETS
        .iter()
        .fold(String::from("warn"), |mut directives, target| {
            directives.push_str(&format!(",{target}={level}"));
            directives
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_name_every_kyugo_crate() {
        let directives = filter_directives(LevelFilter::DEBUG);
        assert_eq!(
            directives,
            "warn,kyugo=debug,kyugo_core=debug,kyugo_adapters=debug"
        );
        assert!(EnvFilter::try_new(directives).is_ok());
    }

    #[test]
    fn quiet_directives_still_parse() {
        assert!(EnvFilter::try_new(filter_directives(LevelFilter::ERROR)).is_ok());
    }
}
