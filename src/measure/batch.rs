use std::cmp::Ordering;

use super::record::MeasurementRecord;

/// Records of the most recent test case execution.
///
/// The first record doubles as the test case record: it carries the
/// test-case-level fields shared by the whole execution. Every record,
/// the first one included, is also a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionBatch {
    records: Vec<MeasurementRecord>,
}

impl ExecutionBatch {
    /// Keeps the records whose execution code matches the record with the
    /// highest timestamp. Document order is preserved.
    ///
    /// Executions sharing the highest timestamp are ordered by execution
    /// code, a missing code sorting first.
    #[must_use]
    pub fn latest(records: Vec<MeasurementRecord>) -> Self {
        let latest_code = records
            .iter()
            .max_by(|left, right| compare_recency(left, right))
            .map(|record| record.test_case_execution_code.clone());
        let Some(latest_code) = latest_code else {
            return Self::default();
        };

        let records = records
            .into_iter()
            .filter(|record| record.test_case_execution_code == latest_code)
            .collect();
        Self { records }
    }

    #[must_use]
    pub fn test_case(&self) -> Option<&MeasurementRecord> {
        self.records.first()
    }

    #[must_use]
    pub fn transactions(&self) -> &[MeasurementRecord] {
        &self.records
    }

    #[must_use]
    pub fn execution_code(&self) -> Option<&str> {
        self.test_case().and_then(MeasurementRecord::execution_code)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

fn compare_recency(left: &MeasurementRecord, right: &MeasurementRecord) -> Ordering {
    left.timestamp_epoch
        .cmp(&right.timestamp_epoch)
        .then_with(|| left.execution_code().cmp(&right.execution_code()))
}
