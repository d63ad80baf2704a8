use std::time::Duration;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::{OutputFormat, SensorArgs, TlsVersion, parsers::parse_duration_arg};
use crate::config::types::ConfigFile;
use crate::config::{apply_config, parse_duration_value};
use crate::error::{AppError, AppResult, ConfigError};
use crate::measure::{ExecutionBatch, MeasuresResponse};
use crate::report;

const FUZZ_BASE_URL: &str = "https://alyvixserver.fuzz";

thread_local! {
    static BASE_MATCHES: ArgMatches = SensorArgs::command().get_matches_from(["alyvix-sensor"]);
}

/// Parses a duration argument (e.g. `10s`, `500ms`).
///
/// # Errors
///
/// Returns an error when the duration is invalid.
pub fn parse_duration_arg_input(input: &str) -> AppResult<Duration> {
    parse_duration_arg(input)
}

/// Parses a duration value from config.
///
/// # Errors
///
/// Returns an error when the duration is invalid.
pub fn parse_duration_value_input(input: &str) -> AppResult<Duration> {
    parse_duration_value(input)
}

/// Parses a TLS version (e.g. `1.2`, `1.3`).
///
/// # Errors
///
/// Returns an error when the version is invalid.
pub fn parse_tls_version_input(input: &str) -> AppResult<TlsVersion> {
    input.parse::<TlsVersion>()
}

/// Parses TOML config and applies it to defaults.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn apply_config_from_toml(input: &str) -> AppResult<SensorArgs> {
    let config: ConfigFile = toml::from_str(input).map_err(|err| {
        AppError::config(ConfigError::ParseToml {
            path: "fuzz.toml".into(),
            source: err,
        })
    })?;
    apply_config_to_defaults(&config)
}

/// Parses JSON config and applies it to defaults.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn apply_config_from_json(input: &[u8]) -> AppResult<SensorArgs> {
    let config: ConfigFile = serde_json::from_slice(input)?;
    apply_config_to_defaults(&config)
}

/// Loads a config file from disk to exercise extension handling.
///
/// # Errors
///
/// Returns an error when the config file cannot be read or parsed.
pub fn load_config_file_input(path: &std::path::Path) -> AppResult<()> {
    crate::config::load_config_file(path).map(|_| ())
}

/// Decodes a measures body, selects the latest batch and renders it in both
/// output formats. Returns the text report.
///
/// # Errors
///
/// Returns an error when the body is not a valid measures document.
pub fn render_measures_input(input: &[u8]) -> AppResult<String> {
    let response: MeasuresResponse = serde_json::from_slice(input)?;
    let batch = ExecutionBatch::latest(response.into_records());
    let alias = batch
        .test_case()
        .map(|record| record.test_case_alias.clone())
        .unwrap_or_default();
    let json = report::render(OutputFormat::Json, FUZZ_BASE_URL, &alias, &batch)?;
    if !json.is_empty() {
        let _document: serde_json::Value = serde_json::from_str(&json)?;
    }
    report::render(OutputFormat::Text, FUZZ_BASE_URL, &alias, &batch)
}

fn apply_config_to_defaults(config: &ConfigFile) -> AppResult<SensorArgs> {
    BASE_MATCHES.with(|matches| {
        let mut args = SensorArgs::from_arg_matches(matches)?;
        apply_config(&mut args, matches, config)?;
        Ok(args)
    })
}
