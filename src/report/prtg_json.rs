use chrono::SecondsFormat;
use serde::Serialize;

use crate::error::AppResult;
use crate::http::endpoints::{report_url, test_case_url};
use crate::measure::{ExecutionBatch, MeasurementRecord};

const DURATION_CHANNEL: &str = "duration";
const UNIT_CUSTOM: &str = "Custom";
const UNIT_MILLISECONDS: &str = "ms";
const LIMIT_MODE_ENABLED: u8 = 1;
const ERROR_FLAG: u8 = 1;

#[derive(Debug, Serialize)]
struct PrtgDocument<T> {
    prtg: T,
}

#[derive(Debug, Serialize)]
struct PrtgResult<'rec> {
    text: String,
    result: Vec<PrtgChannel<'rec>>,
}

#[derive(Debug, Serialize)]
struct PrtgError<'msg> {
    error: u8,
    text: &'msg str,
}

#[derive(Debug, Serialize)]
struct PrtgChannel<'rec> {
    channel: &'rec str,
    value: i64,
    unit: &'static str,
    customunit: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    limitmode: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limitmaxwarning: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limitmaxerror: Option<i64>,
}

impl<'rec> PrtgChannel<'rec> {
    const fn milliseconds(channel: &'rec str, value: i64) -> Self {
        Self {
            channel,
            value,
            unit: UNIT_CUSTOM,
            customunit: UNIT_MILLISECONDS,
            limitmode: None,
            limitmaxwarning: None,
            limitmaxerror: None,
        }
    }

    fn transaction(record: &'rec MeasurementRecord) -> Option<Self> {
        let value = record.transaction_performance_ms?;
        let mut channel = Self::milliseconds(&record.transaction_alias, value);
        let warning = record.transaction_warning_ms;
        let critical = record.transaction_critical_ms;
        if warning.is_some() || critical.is_some() {
            channel.limitmode = Some(LIMIT_MODE_ENABLED);
            channel.limitmaxwarning = warning;
            channel.limitmaxerror = critical;
        }
        Some(channel)
    }
}

/// Renders a batch as a PRTG advanced sensor JSON document.
///
/// Unlike the text protocol, the limits carry the thresholds configured on
/// the transaction. PRTG rejects empty output, so an empty batch becomes an
/// error document.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn render_json(base_url: &str, alias: &str, batch: &ExecutionBatch) -> AppResult<String> {
    let Some(test_case) = batch.test_case() else {
        return render_json_error(&format!(
            "No measures found for test case {} ({})",
            alias,
            test_case_url(base_url, alias)
        ));
    };

    let mut result = Vec::with_capacity(batch.len().saturating_add(1));
    if let Some(duration) = test_case.test_case_duration_ms {
        result.push(PrtgChannel::milliseconds(DURATION_CHANNEL, duration));
    }
    result.extend(batch.transactions().iter().filter_map(PrtgChannel::transaction));

    let link = report_url(base_url, alias, batch.execution_code());
    let text = test_case.executed_at().map_or_else(
        || format!("Test case report: {}", link),
        |executed_at| {
            format!(
                "Test case report: {} (executed {})",
                link,
                executed_at.to_rfc3339_opts(SecondsFormat::Secs, true)
            )
        },
    );

    let document = PrtgDocument {
        prtg: PrtgResult { text, result },
    };
    Ok(serde_json::to_string(&document)?)
}

/// Renders a PRTG error document, which turns the sensor into the error state.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn render_json_error(message: &str) -> AppResult<String> {
    let document = PrtgDocument {
        prtg: PrtgError {
            error: ERROR_FLAG,
            text: message,
        },
    };
    Ok(serde_json::to_string(&document)?)
}
