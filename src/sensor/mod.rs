//! Sequential reporting of test cases: fetch, render, print.

use std::io::Write;

use crate::args::OutputFormat;
use crate::error::{AppError, AppResult, FetchError, ValidationError};
use crate::http::AlyvixClient;
use crate::measure::ExecutionBatch;
use crate::report;

/// Result of reporting one test case.
#[derive(Debug)]
pub struct AliasOutcome {
    pub alias: String,
    pub result: Result<ExecutionBatch, FetchError>,
}

/// Outcomes of one sensor run, in the order the aliases were processed.
#[derive(Debug, Default)]
pub struct SensorRun {
    pub outcomes: Vec<AliasOutcome>,
}

impl SensorRun {
    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.result.is_err())
            .count()
    }

    /// Fails when at least one test case could not be reported.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::AliasFailures` naming the failed aliases.
    pub fn into_result(self) -> AppResult<()> {
        let total = self.total();
        let aliases: Vec<String> = self
            .outcomes
            .into_iter()
            .filter(|outcome| outcome.result.is_err())
            .map(|outcome| outcome.alias)
            .collect();
        if aliases.is_empty() {
            return Ok(());
        }
        Err(AppError::validation(ValidationError::AliasFailures {
            total,
            aliases,
        }))
    }
}

/// Options that shape how test cases are reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub format: OutputFormat,
    /// Stop at the first failing test case instead of reporting the rest.
    pub fail_fast: bool,
}

/// Fetches every alias in turn and writes one line per test case to `out`.
///
/// A failing alias gets a diagnostic line instead of its report. Empty
/// batches write nothing in text format. JSON output is a single PRTG
/// document, so it takes exactly one alias.
///
/// # Errors
///
/// Returns an error when JSON output is asked for more than one alias, when
/// writing to `out` fails, or with `fail_fast` set, the fetch error of the
/// first failing alias.
pub async fn report_test_cases<W>(
    client: &AlyvixClient,
    aliases: Vec<String>,
    options: ReportOptions,
    out: &mut W,
) -> AppResult<SensorRun>
where
    W: Write,
{
    if options.format == OutputFormat::Json && aliases.len() > 1 {
        return Err(AppError::validation(ValidationError::JsonNeedsTestCaseAlias));
    }

    let mut run = SensorRun {
        outcomes: Vec::with_capacity(aliases.len()),
    };

    for alias in aliases {
        let result = client.fetch_test_case(&alias).await;
        match &result {
            Ok(batch) => {
                let rendered = report::render(options.format, client.base_url(), &alias, batch)?;
                if !rendered.is_empty() {
                    writeln!(out, "{}", rendered)?;
                }
            }
            Err(err) => {
                tracing::warn!(%alias, error = %err, "Test case could not be reported");
                writeln!(out, "{}", report::render_failure(options.format, err)?)?;
            }
        }

        if options.fail_fast
            && let Err(err) = result
        {
            out.flush()?;
            return Err(AppError::fetch(err));
        }
        run.outcomes.push(AliasOutcome { alias, result });
    }

    out.flush()?;
    Ok(run)
}
