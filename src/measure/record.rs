use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Body of `GET /v0/testcases/{alias}/`.
#[derive(Debug, Default, Deserialize)]
pub struct MeasuresResponse {
    #[serde(default)]
    pub measures: Option<Vec<MeasurementRecord>>,
}

impl MeasuresResponse {
    #[must_use]
    pub fn into_records(self) -> Vec<MeasurementRecord> {
        self.measures.unwrap_or_default()
    }
}

/// Exit flag of a test case or transaction.
///
/// Alyvix Server reports it as `"true"`/`"false"` strings, older builds as
/// JSON booleans.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ExitFlag {
    Bool(bool),
    Text(String),
}

impl ExitFlag {
    #[must_use]
    pub fn is_success(&self) -> bool {
        match self {
            ExitFlag::Bool(value) => *value,
            ExitFlag::Text(text) => text.trim().eq_ignore_ascii_case("true"),
        }
    }
}

impl fmt::Display for ExitFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitFlag::Bool(value) => write!(f, "{}", value),
            ExitFlag::Text(text) => f.write_str(text),
        }
    }
}

/// One transaction outcome within one test case execution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MeasurementRecord {
    /// Nanoseconds since the Unix epoch.
    pub timestamp_epoch: i64,
    pub hostname: String,
    pub domain_username: String,
    pub test_case_alias: String,
    #[serde(default)]
    pub test_case_duration_ms: Option<i64>,
    pub test_case_exit: ExitFlag,
    pub test_case_state: i64,
    pub transaction_alias: String,
    #[serde(default)]
    pub transaction_performance_ms: Option<i64>,
    pub transaction_exit: ExitFlag,
    pub transaction_state: i64,
    #[serde(default)]
    pub test_case_name: Option<String>,
    #[serde(default)]
    pub test_case_arguments: Option<String>,
    #[serde(default)]
    pub test_case_execution_code: Option<String>,
    #[serde(default)]
    pub transaction_name: Option<String>,
    #[serde(default)]
    pub transaction_group: Option<String>,
    #[serde(default)]
    pub transaction_detection_type: Option<String>,
    #[serde(default)]
    pub transaction_timeout_ms: Option<i64>,
    #[serde(default)]
    pub transaction_warning_ms: Option<i64>,
    #[serde(default)]
    pub transaction_critical_ms: Option<i64>,
    #[serde(default)]
    pub transaction_accuracy_ms: Option<i64>,
    #[serde(default)]
    pub transaction_record_text: Option<String>,
    #[serde(default)]
    pub transaction_record_extract: Option<String>,
    #[serde(default)]
    pub transaction_resolution_width: Option<i64>,
    #[serde(default)]
    pub transaction_resolution_height: Option<i64>,
    #[serde(default)]
    pub transaction_scaling_factor: Option<i64>,
}

impl MeasurementRecord {
    /// Execution time as UTC, `None` when the timestamp is out of chrono's range.
    #[must_use]
    pub fn executed_at(&self) -> Option<DateTime<Utc>> {
        let secs = self.timestamp_epoch.div_euclid(NANOS_PER_SEC);
        let nanos = u32::try_from(self.timestamp_epoch.rem_euclid(NANOS_PER_SEC)).ok()?;
        DateTime::from_timestamp(secs, nanos)
    }

    #[must_use]
    pub fn execution_code(&self) -> Option<&str> {
        self.test_case_execution_code.as_deref()
    }
}

const NANOS_PER_SEC: i64 = 1_000_000_000;
