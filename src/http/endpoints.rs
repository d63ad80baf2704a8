//! URL layout of the Alyvix Server v0 API.
use url::Url;

use crate::error::{AppError, AppResult, HttpError};

#[must_use]
pub fn test_cases_url(base_url: &str) -> String {
    format!("{}/v0/testcases/", base_url)
}

#[must_use]
pub fn test_case_url(base_url: &str, alias: &str) -> String {
    format!("{}/v0/testcases/{}/", base_url, alias)
}

/// Link to the server's HTML report for one execution.
#[must_use]
pub fn report_url(base_url: &str, alias: &str, execution_code: Option<&str>) -> String {
    format!(
        "{}/v0/testcases/{}/reports/?runcode={}",
        base_url,
        alias,
        execution_code.unwrap_or_default()
    )
}

/// Validates a base URL and strips trailing slashes so paths can be appended.
///
/// # Errors
///
/// Returns an error when the URL does not parse or is not http(s).
pub fn normalize_base_url(raw: &str) -> AppResult<String> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|err| {
        AppError::http(HttpError::InvalidBaseUrl {
            url: trimmed.to_owned(),
            source: err,
        })
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::http(HttpError::UnsupportedScheme {
            url: trimmed.to_owned(),
        }));
    }
    Ok(trimmed.trim_end_matches('/').to_owned())
}
