//! Tracing subscriber initialisation.
//!
//! Only the binary installs a subscriber. `csvshape-core` and
//! `csvshape-adapters` emit events and spans and nothing else.
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level |
//! |----------|--------------|
//! | (none)   | WARN         |
//! | `-v`     | INFO         |
//! | `-vv`    | DEBUG        |
//! | `-vvv`   | TRACE        |
//! | `--quiet`| ERROR        |
//!
//! A non-empty `RUST_LOG` replaces the whole filter.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the chosen verbosity.
const TARGETS: [&str; 3] = ["csvshape", "csvshape_core", "csvshape_adapters"];

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = build_filter(derive_level(args), rust_log.as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .without_time()
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// `RUST_LOG` when it holds a usable directive list, else one directive per
/// workspace crate at `level`.
fn build_filter(level: LevelFilter, rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|spec| !spec.trim().is_empty())
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| {
            let directives: Vec<String> =
                TARGETS.iter().map(|t| format!("{t}={level}")).collect();
            EnvFilter::new(directives.join(","))
        })
}

fn derive_level(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn verbosity_maps_to_levels() {
        let levels: Vec<_> = (0..=4)
            .map(|v| derive_level(&args_with(v, false)))
            .collect();
        assert_eq!(
            levels,
            [
                LevelFilter::WARN,
                LevelFilter::INFO,
                LevelFilter::DEBUG,
                LevelFilter::TRACE,
                LevelFilter::TRACE,
            ]
        );
    }

    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(derive_level(&args_with(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn default_filter_covers_every_workspace_crate() {
        let filter = build_filter(LevelFilter::DEBUG, None).to_string().to_lowercase();
        for target in TARGETS {
            assert!(filter.contains(&format!("{target}=debug")), "{filter}");
        }
    }

    #[test]
    fn rust_log_replaces_the_default_filter() {
        let filter = build_filter(LevelFilter::WARN, Some("csvshape_core=trace"))
            .to_string()
            .to_lowercase();
        assert!(filter.contains("csvshape_core=trace"));
        assert!(!filter.contains("csvshape_adapters"));
    }

    #[test]
    fn blank_or_invalid_rust_log_falls_back() {
        for spec in ["", "  ", "csvshape=notalevel"] {
            let filter = build_filter(LevelFilter::INFO, Some(spec))
                .to_string()
                .to_lowercase();
            assert!(filter.contains("csvshape_adapters=info"), "{spec:?}: {filter}");
        }
    }
}
