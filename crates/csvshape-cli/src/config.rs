//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `CSVSHAPE_<SECTION>__<KEY>`, e.g.
//!    `CSVSHAPE_READ__DELIMITER=";"` or `CSVSHAPE_SCHEMA__HEADERS=id,name`
//! 3. Config file (`--config`, or the platform default path if it exists)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Application configuration.
///
/// Every section and key is optional on input. Empty lists do not survive
/// the round trip through `config::Config`, so missing values fall back to
/// [`Default`] during deserialisation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How CSV files are read.
    pub read: ReadConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Default expectations for `check`.
    pub schema: SchemaConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadConfig {
    pub delimiter: String,
    pub trim: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    pub headers: Vec<String>,
    pub required: Vec<String>,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            delimiter: ",".into(),
            trim: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `config_file` must exist. Without one, the default
    /// location is read only if a file is there.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to serialise built-in defaults")?;

        let file = match config_file {
            Some(path) => toml_file(path).required(true),
            None => toml_file(&Self::config_path()).required(false),
        };

        Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                Environment::with_prefix("CSVSHAPE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("schema.headers")
                    .with_list_parse_key("schema.required"),
            )
            .build()
            .context("Failed to read configuration sources")?
            .try_deserialize()
            .context("Configuration has an invalid shape")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.csvshape.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "csvshape", "csvshape")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".csvshape.toml"))
    }
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_delimiter_is_comma() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.read.delimiter, ",");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn default_schema_is_empty() {
        let cfg = AppConfig::default();
        assert!(cfg.schema.headers.is_empty());
        assert!(cfg.schema.required.is_empty());
    }

    #[test]
    fn file_values_override_defaults() {
        let file = write_config(
            r#"
            [read]
            delimiter = ";"

            [schema]
            headers = ["id", "name"]
            required = ["id"]
            "#,
        );

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();

        assert_eq!(cfg.read.delimiter, ";");
        assert!(!cfg.read.trim);
        assert_eq!(cfg.schema.headers, ["id", "name"]);
        assert_eq!(cfg.schema.required, ["id"]);
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn empty_file_yields_defaults() {
        let file = write_config("");
        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let file = write_config("[read]\ntrim = true\n\n[output]\nformat = \"plain\"\n");
        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();

        assert!(cfg.read.trim);
        assert_eq!(cfg.read.delimiter, ",");
        assert_eq!(cfg.output.format, "plain");
        assert!(!cfg.output.no_color);
        assert!(cfg.schema.headers.is_empty());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn config_path_is_absolute_or_relative() {
        // Just assert it doesn't panic and returns a non-empty path.
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
