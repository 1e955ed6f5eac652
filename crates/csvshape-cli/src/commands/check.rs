//! Implementation of the `csvshape check` command.
//!
//! Merges CLI arguments with the `[schema]` and `[read]` config sections,
//! runs the core validation service against a file source, and renders the
//! report. No validation logic lives here.

use tracing::{debug, instrument};

use csvshape_adapters::{FileSource, ReadOptions};
use csvshape_core::application::{ValidationPlan, ValidationReport, ValidationService};

use crate::{
    cli::{CheckArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute `csvshape check`.
#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let plan = build_plan(&args, &config)?;
    let options = build_options(&args, &config)?;

    if !args.file.is_file() {
        return Err(CliError::FileNotFound { path: args.file });
    }

    debug!(
        headers = plan.expected_headers().len(),
        required = plan.required_fields().len(),
        delimiter = %char::from(options.delimiter),
        "Plan resolved"
    );

    let service = ValidationService::new(Box::new(FileSource::new(args.file.clone(), options)));
    let report = service
        .run(&plan)
        .with_cli_context(|| format!("checking {}", args.file.display()))?;

    render(&report, args.max_findings, &output)
        .with_cli_context(|| "writing the report to stdout")?;

    if report.is_valid() {
        Ok(())
    } else {
        Err(CliError::ValidationFailed {
            count: report.error_count(),
        })
    }
}

/// Turn flags plus config defaults into a [`ValidationPlan`].
///
/// Flags replace config values; they are never merged with them.
fn build_plan(args: &CheckArgs, config: &AppConfig) -> CliResult<ValidationPlan> {
    let headers = if args.headers.is_empty() {
        config.schema.headers.clone()
    } else {
        args.headers.clone()
    };

    let required = if args.require_all {
        headers.clone()
    } else if args.required.is_empty() {
        config.schema.required.clone()
    } else {
        args.required.clone()
    };

    if headers.is_empty() && required.is_empty() {
        return Err(CliError::InvalidInput {
            message: "nothing to check: pass --headers or --required, or set [schema] in the \
                      config file"
                .into(),
            source: None,
        });
    }

    if headers.is_empty() {
        return Ok(ValidationPlan::required_only(required));
    }

    let mut plan = ValidationPlan::new(headers).with_required(required);
    if args.skip_headers {
        plan = plan.skip_headers();
    }
    if args.skip_structure {
        plan = plan.skip_structure();
    }

    if plan.is_noop() {
        return Err(CliError::InvalidInput {
            message: "every check is skipped and no required fields are given".into(),
            source: None,
        });
    }

    Ok(plan)
}

fn build_options(args: &CheckArgs, config: &AppConfig) -> CliResult<ReadOptions> {
    let delimiter = args
        .delimiter
        .as_deref()
        .unwrap_or(config.read.delimiter.as_str());

    ReadOptions::new()
        .with_delimiter(delimiter)
        .map(|options| options.with_trim(args.trim || config.read.trim))
        .map_err(|e| CliError::InvalidInput {
            message: e.to_string(),
            source: Some(Box::new(e)),
        })
}

fn render(
    report: &ValidationReport,
    max_findings: Option<usize>,
    output: &OutputManager,
) -> std::io::Result<()> {
    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
        return output.raw(&json);
    }

    output.header(&format!(
        "{} ({} header(s), {} row(s))",
        report.source,
        report.headers.len(),
        report.row_count
    ))?;

    if report.is_valid() {
        return output.success("CSV matches the expected shape");
    }

    let shown = max_findings.unwrap_or(usize::MAX);
    for finding in report.errors.iter().take(shown) {
        output.finding(finding)?;
    }
    let hidden = report.error_count().saturating_sub(shown);
    if hidden > 0 {
        output.info(&format!("{hidden} more finding(s) not shown"))?;
    }

    output.warning(&format!(
        "{} finding(s) across {} row(s)",
        report.error_count(),
        report.failing_rows().len()
    ))
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn args() -> CheckArgs {
        CheckArgs {
            file: PathBuf::from("data.csv"),
            headers: Vec::new(),
            required: Vec::new(),
            require_all: false,
            delimiter: None,
            trim: false,
            skip_headers: false,
            skip_structure: false,
            max_findings: None,
        }
    }

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_expectations_is_invalid_input() {
        let err = build_plan(&args(), &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn flags_override_schema_config() {
        let mut config = AppConfig::default();
        config.schema.headers = strings(&["from_config"]);
        config.schema.required = strings(&["from_config"]);

        let mut a = args();
        a.headers = strings(&["id", "name"]);
        a.required = strings(&["id"]);

        let plan = build_plan(&a, &config).unwrap();
        assert_eq!(plan.expected_headers(), ["id", "name"]);
        assert_eq!(plan.required_fields(), ["id"]);
    }

    #[test]
    fn schema_config_fills_missing_flags() {
        let mut config = AppConfig::default();
        config.schema.headers = strings(&["a", "b"]);
        config.schema.required = strings(&["b"]);

        let plan = build_plan(&args(), &config).unwrap();
        assert_eq!(plan.expected_headers(), ["a", "b"]);
        assert_eq!(plan.required_fields(), ["b"]);
        assert!(plan.checks_headers());
        assert!(plan.checks_structure());
    }

    #[test]
    fn require_all_copies_headers() {
        let mut a = args();
        a.headers = strings(&["a", "b"]);
        a.require_all = true;

        let plan = build_plan(&a, &AppConfig::default()).unwrap();
        assert_eq!(plan.required_fields(), ["a", "b"]);
    }

    #[test]
    fn required_without_headers_skips_shape_checks() {
        let mut a = args();
        a.required = strings(&["id"]);

        let plan = build_plan(&a, &AppConfig::default()).unwrap();
        assert!(!plan.checks_headers());
        assert!(!plan.checks_structure());
        assert_eq!(plan.required_fields(), ["id"]);
    }

    #[test]
    fn skipping_everything_is_invalid_input() {
        let mut a = args();
        a.headers = strings(&["a"]);
        a.skip_headers = true;
        a.skip_structure = true;

        assert!(matches!(
            build_plan(&a, &AppConfig::default()),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn delimiter_flag_beats_config() {
        let mut config = AppConfig::default();
        config.read.delimiter = ";".into();

        let mut a = args();
        a.delimiter = Some("|".into());
        assert_eq!(build_options(&a, &config).unwrap().delimiter, b'|');

        assert_eq!(build_options(&args(), &config).unwrap().delimiter, b';');
    }

    #[test]
    fn trim_from_either_source() {
        let mut config = AppConfig::default();
        config.read.trim = true;
        assert!(build_options(&args(), &config).unwrap().trim);
    }

    #[test]
    fn multi_character_delimiter_is_invalid_input() {
        let mut a = args();
        a.delimiter = Some(";;".into());
        let err = build_options(&a, &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
