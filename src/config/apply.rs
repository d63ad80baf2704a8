use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::SensorArgs;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments.
///
/// Values set on the command line or through an environment variable win
/// over the config file.
///
/// # Errors
///
/// Returns an error when config values are invalid.
pub fn apply_config(
    args: &mut SensorArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_explicit(matches, "alyvix_server_https_url")
        && let Some(url) = config.alyvix_server_https_url.as_deref()
    {
        args.alyvix_server_https_url = Some(non_empty(url, "alyvix_server_https_url")?);
    }

    if !is_explicit(matches, "test_case_alias")
        && let Some(alias) = config.test_case_alias.as_deref()
    {
        args.test_case_alias = Some(non_empty(alias, "test_case_alias")?);
    }

    if !is_explicit(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = timeout.to_duration()?;
    }

    if !is_explicit(matches, "connect_timeout")
        && let Some(timeout) = config.connect_timeout.as_ref()
    {
        args.connect_timeout = timeout.to_duration()?;
    }

    if !is_explicit(matches, "verify_tls")
        && let Some(verify_tls) = config.verify_tls
    {
        args.verify_tls = verify_tls;
    }

    if !is_explicit(matches, "tls_min")
        && let Some(tls_min) = config.tls_min
    {
        args.tls_min = Some(tls_min);
    }

    if !is_explicit(matches, "fail_fast")
        && let Some(fail_fast) = config.fail_fast
    {
        args.fail_fast = fail_fast;
    }

    if !is_explicit(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    if !is_explicit(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_explicit(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    Ok(())
}

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

fn non_empty(value: &str, field: &'static str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::config(ConfigError::EmptyField { field }));
    }
    Ok(trimmed.to_owned())
}
