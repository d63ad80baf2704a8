use crate::error::FetchError;
use crate::http::endpoints::report_url;
use crate::measure::{ExecutionBatch, MeasurementRecord};

const CHANNEL_SEPARATOR: &str = "|";

/// `alias=value;warn;crit;;` for one transaction.
///
/// The warning and critical slots repeat the performance value when the
/// transaction has the corresponding threshold configured; the threshold
/// itself is not printed.
#[must_use]
pub fn metric_line(record: &MeasurementRecord) -> String {
    let value = optional_ms(record.transaction_performance_ms);
    let warning = gated(&value, record.transaction_warning_ms.is_some());
    let critical = gated(&value, record.transaction_critical_ms.is_some());
    format!(
        "{}={};{};{};;",
        record.transaction_alias, value, warning, critical
    )
}

/// `state "Alyvix alias" duration=ms;;;;` for the test case.
#[must_use]
pub fn summary_line(record: &MeasurementRecord) -> String {
    format!(
        "{} \"Alyvix {}\" duration={};;;;",
        record.test_case_state,
        record.test_case_alias,
        optional_ms(record.test_case_duration_ms)
    )
}

/// Summary, every transaction, then the link to the server report.
#[must_use]
pub fn render_report(base_url: &str, alias: &str, batch: &ExecutionBatch) -> String {
    let Some(test_case) = batch.test_case() else {
        return String::new();
    };
    let metrics = batch
        .transactions()
        .iter()
        .map(metric_line)
        .collect::<Vec<_>>()
        .join(CHANNEL_SEPARATOR);
    format!(
        "{}{}{} Test case report: {}",
        summary_line(test_case),
        CHANNEL_SEPARATOR,
        metrics,
        report_url(base_url, alias, batch.execution_code())
    )
}

#[must_use]
pub fn diagnostic_line(error: &FetchError) -> String {
    if error.is_malformed() {
        return format!("Unexpected answer from Alyvix Server ({})", error.url());
    }
    format!("Please, check --alyvix_server_https_url ({})", error.url())
}

fn optional_ms(value: Option<i64>) -> String {
    value.map_or_else(String::new, |ms| ms.to_string())
}

fn gated(value: &str, present: bool) -> &str {
    if present { value } else { "" }
}
