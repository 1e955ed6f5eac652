//! Global arguments that apply to every subcommand.
//!
//! Declared here and flattened into [`super::Cli`] so that `-v`, `-q`, etc.
//! are available on any invocation without repetition

use clap::{ArgAction, Args, builder::FalseyValueParser};
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Warnings and errors
    -v      - Info level (run summary)
    -vv     - Debug level (each check)
    -vvv    - Trace level (every record and finding)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>). Any value other than an empty or falsey
    /// one (`0`, `false`, `no`, `off`) disables colour, so `NO_COLOR=1` works.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        env = "CSVSHAPE_CONFIG",
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Machine-readable output format.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Human-readable with colors.
    Human,
    /// Plain text without colors.
    Plain,
    /// JSON report on stdout.
    Json,
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use clap::{CommandFactory, builder::TypedValueParser};

    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn no_color_reads_the_no_color_variable() {
        let cmd = Cli::command();
        let arg = cmd
            .get_arguments()
            .find(|a| a.get_id() == "no_color")
            .unwrap();
        assert_eq!(arg.get_env(), Some(OsStr::new("NO_COLOR")));
        assert!(matches!(arg.get_action(), ArgAction::SetTrue));
    }

    #[test]
    fn no_color_values_follow_the_convention() {
        let cmd = Cli::command();
        let parser = FalseyValueParser::new();
        for on in ["1", "true", "yes", "anything"] {
            assert!(parser.parse_ref(&cmd, None, OsStr::new(on)).unwrap(), "{on}");
        }
        for off in ["", "0", "false", "no", "off"] {
            assert!(!parser.parse_ref(&cmd, None, OsStr::new(off)).unwrap(), "{off:?}");
        }
    }

    #[test]
    fn no_color_flag_still_parses() {
        let cli = Cli::parse_from(["csvshape", "--no-color", "config", "path"]);
        assert!(cli.global.no_color);
    }
}
