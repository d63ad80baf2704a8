use crate::error::FetchError;
use crate::measure::{ExecutionBatch, MeasuresResponse};

use super::client::AlyvixClient;
use super::endpoints::test_case_url;

impl AlyvixClient {
    /// Fetches the measures of one test case and keeps its latest execution.
    ///
    /// # Errors
    ///
    /// Returns an error when the server cannot be reached, answers with a
    /// non-success status, or the body is not a measures document.
    pub async fn fetch_test_case(&self, alias: &str) -> Result<ExecutionBatch, FetchError> {
        let url = test_case_url(self.base_url(), alias);
        let response: MeasuresResponse = self.get_json(&url).await?;
        let records = response.into_records();
        let fetched = records.len();

        let batch = ExecutionBatch::latest(records);
        tracing::debug!(
            alias,
            fetched,
            selected = batch.len(),
            execution_code = batch.execution_code().unwrap_or_default(),
            passed = ?batch
                .test_case()
                .map(|record| record.test_case_exit.is_success()),
            "Selected latest execution"
        );
        Ok(batch)
    }
}
