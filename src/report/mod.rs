//! Rendering of execution batches for the PRTG probe.
mod format;
mod prtg_json;


pub use format::{diagnostic_line, metric_line, render_report, summary_line};
pub use prtg_json::{render_json, render_json_error};

use crate::args::OutputFormat;
use crate::error::{AppResult, FetchError};
use crate::measure::ExecutionBatch;

/// Renders one test case in the selected format.
///
/// An empty batch renders as an empty string in text format and as a PRTG
/// error document in JSON format.
///
/// # Errors
///
/// Returns an error when JSON serialization fails.
pub fn render(
    format: OutputFormat,
    base_url: &str,
    alias: &str,
    batch: &ExecutionBatch,
) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(render_report(base_url, alias, batch)),
        OutputFormat::Json => render_json(base_url, alias, batch),
    }
}

/// Renders the line printed in place of a test case that could not be fetched.
///
/// # Errors
///
/// Returns an error when JSON serialization fails.
pub fn render_failure(format: OutputFormat, error: &FetchError) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(diagnostic_line(error)),
        OutputFormat::Json => render_json_error(&diagnostic_line(error)),
    }
}
