use super::*;
use serde_json::json;

fn record(
    timestamp_epoch: i64,
    execution_code: Option<&str>,
    transaction_alias: &str,
) -> Result<MeasurementRecord, String> {
    serde_json::from_value(json!({
        "timestamp_epoch": timestamp_epoch,
        "hostname": "alyvixserver",
        "domain_username": "CO\\AlyvixUser05",
        "test_case_alias": "visittrentino",
        "test_case_duration_ms": 13998,
        "test_case_exit": "true",
        "test_case_state": 0,
        "transaction_alias": transaction_alias,
        "transaction_performance_ms": 4689,
        "transaction_exit": "true",
        "transaction_state": 0,
        "test_case_execution_code": execution_code,
    }))
    .map_err(|err| format!("fixture failed to parse: {}", err))
}

fn aliases(batch: &ExecutionBatch) -> Vec<&str> {
    batch
        .transactions()
        .iter()
        .map(|record| record.transaction_alias.as_str())
        .collect()
}

#[test]
fn full_record_parses_every_field() -> Result<(), String> {
    let parsed: MeasurementRecord = serde_json::from_value(json!({
        "timestamp_epoch": 1_619_000_540_323_290_112_i64,
        "hostname": "alyvixserver",
        "domain_username": "CO\\AlyvixUser05",
        "test_case_alias": "visittrentino",
        "test_case_duration_ms": 13998,
        "test_case_exit": "true",
        "test_case_state": 0,
        "transaction_alias": "vt_home_ready",
        "transaction_performance_ms": 4689,
        "transaction_exit": "true",
        "transaction_state": 0,
        "test_case_name": "visittrentino",
        "test_case_arguments": "text",
        "test_case_execution_code": "pb02Al05vino1619000538",
        "transaction_name": "vt_home_ready",
        "transaction_group": "text",
        "transaction_detection_type": "appear",
        "transaction_timeout_ms": 10000,
        "transaction_warning_ms": null,
        "transaction_critical_ms": null,
        "transaction_accuracy_ms": 82,
        "transaction_record_text": "text",
        "transaction_record_extract": "text",
        "transaction_resolution_width": 1280,
        "transaction_resolution_height": 800,
        "transaction_scaling_factor": 100
    }))
    .map_err(|err| format!("parse failed: {}", err))?;

    if parsed.execution_code() != Some("pb02Al05vino1619000538") {
        return Err("Unexpected execution code".to_owned());
    }
    if parsed.transaction_timeout_ms != Some(10000) {
        return Err("Unexpected timeout".to_owned());
    }
    if parsed.transaction_warning_ms.is_some() || parsed.transaction_critical_ms.is_some() {
        return Err("Null thresholds must stay absent".to_owned());
    }
    if parsed.transaction_resolution_width != Some(1280)
        || parsed.transaction_scaling_factor != Some(100)
    {
        return Err("Unexpected screen fields".to_owned());
    }
    if !parsed.test_case_exit.is_success() {
        return Err("Expected successful exit flag".to_owned());
    }
    let executed_at = parsed
        .executed_at()
        .ok_or_else(|| "Expected timestamp in range".to_owned())?;
    if executed_at.to_rfc3339() != "2021-04-21T10:22:20.323290112+00:00" {
        return Err(format!("Unexpected execution time: {}", executed_at));
    }
    Ok(())
}

#[test]
fn optional_fields_may_be_missing() -> Result<(), String> {
    let parsed: MeasurementRecord = serde_json::from_value(json!({
        "timestamp_epoch": 1,
        "hostname": "h",
        "domain_username": "u",
        "test_case_alias": "tc",
        "test_case_exit": false,
        "test_case_state": 2,
        "transaction_alias": "tr",
        "transaction_exit": "false",
        "transaction_state": 2
    }))
    .map_err(|err| format!("parse failed: {}", err))?;

    if parsed.test_case_duration_ms.is_some() || parsed.transaction_performance_ms.is_some() {
        return Err("Expected absent measurements".to_owned());
    }
    if parsed.test_case_exit != ExitFlag::Bool(false) || parsed.test_case_exit.is_success() {
        return Err("Expected boolean false exit flag".to_owned());
    }
    if parsed.transaction_exit.to_string() != "false" {
        return Err("Exit flag must display its original text".to_owned());
    }
    Ok(())
}

#[test]
fn missing_required_field_is_rejected() -> Result<(), String> {
    let parsed = serde_json::from_value::<MeasurementRecord>(json!({
        "timestamp_epoch": 1,
        "hostname": "h",
        "test_case_alias": "tc"
    }));
    if parsed.is_ok() {
        return Err("Expected missing fields to fail".to_owned());
    }
    Ok(())
}

#[test]
fn measures_response_treats_null_and_missing_as_empty() -> Result<(), String> {
    let missing: MeasuresResponse =
        serde_json::from_str("{}").map_err(|err| format!("parse failed: {}", err))?;
    let null: MeasuresResponse = serde_json::from_str(r#"{"measures": null}"#)
        .map_err(|err| format!("parse failed: {}", err))?;
    if !missing.into_records().is_empty() || !null.into_records().is_empty() {
        return Err("Expected no records".to_owned());
    }
    Ok(())
}

#[test]
fn latest_keeps_only_the_newest_execution() -> Result<(), String> {
    let records = vec![
        record(100, Some("run-a"), "a_first")?,
        record(300, Some("run-b"), "b_first")?,
        record(110, Some("run-a"), "a_second")?,
        record(310, Some("run-b"), "b_second")?,
        record(200, Some("run-c"), "c_first")?,
    ];

    let batch = ExecutionBatch::latest(records);

    if batch.execution_code() != Some("run-b") {
        return Err(format!("Unexpected execution code: {:?}", batch.execution_code()));
    }
    if aliases(&batch) != ["b_first", "b_second"] {
        return Err(format!("Unexpected batch: {:?}", aliases(&batch)));
    }
    let test_case = batch
        .test_case()
        .ok_or_else(|| "Expected a test case record".to_owned())?;
    if test_case.transaction_alias != "b_first" {
        return Err("The first record of the batch must be the test case".to_owned());
    }
    Ok(())
}

#[test]
fn latest_follows_the_max_timestamp_even_when_not_last() -> Result<(), String> {
    let records = vec![
        record(500, Some("run-new"), "late")?,
        record(100, Some("run-old"), "early_1")?,
        record(150, Some("run-old"), "early_2")?,
    ];

    let batch = ExecutionBatch::latest(records);

    if aliases(&batch) != ["late"] {
        return Err(format!("Unexpected batch: {:?}", aliases(&batch)));
    }
    Ok(())
}

#[test]
fn latest_breaks_timestamp_ties_by_execution_code() -> Result<(), String> {
    let records = vec![
        record(100, Some("run-z"), "z")?,
        record(100, Some("run-a"), "a")?,
        record(100, None, "none")?,
    ];

    let batch = ExecutionBatch::latest(records);

    if batch.execution_code() != Some("run-z") || batch.len() != 1 {
        return Err(format!("Unexpected tie-break: {:?}", aliases(&batch)));
    }
    Ok(())
}

#[test]
fn latest_groups_records_without_execution_code() -> Result<(), String> {
    let records = vec![record(10, None, "one")?, record(20, None, "two")?];

    let batch = ExecutionBatch::latest(records);

    if batch.len() != 2 || batch.execution_code().is_some() {
        return Err(format!("Unexpected batch: {:?}", aliases(&batch)));
    }
    Ok(())
}

#[test]
fn latest_of_nothing_is_empty() -> Result<(), String> {
    let batch = ExecutionBatch::latest(Vec::new());
    if !batch.is_empty() || batch.test_case().is_some() {
        return Err("Expected an empty batch".to_owned());
    }
    Ok(())
}
