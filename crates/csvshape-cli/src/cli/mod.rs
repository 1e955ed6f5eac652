//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No validation logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "csvshape",
    bin_name = "csvshape",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Check that a CSV file has the shape you expect",
    long_about = "csvshape compares a CSV file's header line and rows against \
                  an expected list of headers and reports every mismatch, \
                  empty required field, and missing field it finds.",
    after_help = "EXAMPLES:\n\
        \x20 csvshape check data.csv --headers id,name,email --require-all\n\
        \x20 csvshape check data.csv --headers id,name --required id -d ';'\n\
        \x20 csvshape --output-format json check data.csv --headers id,name\n\
        \x20 csvshape completions bash > /usr/share/bash-completion/completions/csvshape",
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
    /// Validate a CSV file.
    #[command(
        visible_alias = "c",
        about = "Validate a CSV file against expected headers",
        after_help = "EXAMPLES:\n\
            \x20 csvshape check data.csv --headers h1,h2,h3\n\
            \x20 csvshape check data.csv --headers h1,h2,h3 --required h1\n\
            \x20 csvshape check data.csv --required h1 --skip-headers --skip-structure"
    )]
    Check(CheckArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 csvshape completions bash > ~/.local/share/bash-completion/completions/csvshape\n\
            \x20 csvshape completions zsh  > ~/.zfunc/_csvshape\n\
            \x20 csvshape completions fish > ~/.config/fish/completions/csvshape.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the csvshape configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 csvshape config show\n\
            \x20 csvshape config get read.delimiter\n\
            \x20 csvshape config path"
    )]
    Config(ConfigCommands),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `csvshape check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// CSV file to validate.
    #[arg(value_name = "FILE", help = "CSV file to validate")]
    pub file: PathBuf,

    /// Expected header names, in any order.
    #[arg(
        short = 'H',
        long = "headers",
        value_name = "NAMES",
        value_delimiter = ',',
        help = "Expected headers, comma-separated (default: [schema].headers)"
    )]
    pub headers: Vec<String>,

    /// Fields that must be present and non-empty in every row.
    #[arg(
        short = 'r',
        long = "required",
        value_name = "NAMES",
        value_delimiter = ',',
        conflicts_with = "require_all",
        help = "Required fields, comma-separated (default: [schema].required)"
    )]
    pub required: Vec<String>,

    /// Treat every expected header as required.
    #[arg(long = "require-all", help = "Require every expected header")]
    pub require_all: bool,

    /// Cell delimiter.
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "CHAR",
        help = "Cell delimiter, e.g. ';' or '\\t' (default: [read].delimiter)"
    )]
    pub delimiter: Option<String>,

    /// Trim whitespace around headers and cells.
    #[arg(long = "trim", help = "Trim whitespace around headers and cells")]
    pub trim: bool,

    /// Do not compare the header line.
    #[arg(long = "skip-headers", help = "Skip the header comparison")]
    pub skip_headers: bool,

    /// Do not compare each row's keys.
    #[arg(long = "skip-structure", help = "Skip the per-row structure check")]
    pub skip_structure: bool,

    /// Show at most this many findings (all are still counted).
    #[arg(
        long = "max-findings",
        value_name = "N",
        help = "Limit the number of findings printed"
    )]
    pub max_findings: Option<usize>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `csvshape completions`.
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

/// Subcommands for `csvshape config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `read.delimiter`.
        key: String,
    },
    /// Print the effective configuration.
    #[command(visible_alias = "list")]
    Show,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
