use alyvix_sensor::args::{OutputFormat, SensorArgs};
use alyvix_sensor::error::{AppError, AppResult, ValidationError};
use alyvix_sensor::http::{ClientSettings, normalize_base_url};
use alyvix_sensor::sensor::ReportOptions;

use super::types::{AliasSource, SensorPlan};

pub(in crate::entry) async fn build_plan(args: SensorArgs) -> AppResult<SensorPlan> {
    check_output_format(&args)?;

    let base_url = match args.alyvix_server_https_url.as_deref() {
        Some(url) => url.to_owned(),
        None => crate::system::hostname::local_https_url().await?,
    };

    plan_with_base_url(args, &base_url)
}

/// A PRTG JSON result holds one test case, so listing every test case only
/// works with text output.
pub(super) fn check_output_format(args: &SensorArgs) -> AppResult<()> {
    if args.output_format == OutputFormat::Json && args.test_case_alias.is_none() {
        return Err(AppError::validation(ValidationError::JsonNeedsTestCaseAlias));
    }
    Ok(())
}

pub(super) fn plan_with_base_url(args: SensorArgs, base_url: &str) -> AppResult<SensorPlan> {
    let base_url = normalize_base_url(base_url)?;
    let client = ClientSettings::from_args(&args);
    let report = ReportOptions {
        format: args.output_format,
        fail_fast: args.fail_fast,
    };
    let aliases = args
        .test_case_alias
        .map_or(AliasSource::All, AliasSource::Single);

    tracing::debug!(%base_url, ?aliases, "Built sensor plan");
    Ok(SensorPlan {
        base_url,
        aliases,
        client,
        report,
    })
}
