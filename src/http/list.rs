use serde::Deserialize;

use crate::error::FetchError;

use super::client::AlyvixClient;
use super::endpoints::test_cases_url;

#[derive(Debug, Default, Deserialize)]
struct TestCasesResponse {
    #[serde(default)]
    testcases: Option<Vec<TestCaseEntry>>,
}

#[derive(Debug, Deserialize)]
struct TestCaseEntry {
    testcase_alias: String,
}

impl AlyvixClient {
    /// Lists the aliases of every test case known to the server, in the
    /// order the server returns them.
    ///
    /// # Errors
    ///
    /// Returns an error when the server cannot be reached, answers with a
    /// non-success status, or the body is not a test case list.
    pub async fn list_test_cases(&self) -> Result<Vec<String>, FetchError> {
        let url = test_cases_url(self.base_url());
        let response: TestCasesResponse = self.get_json(&url).await?;
        let aliases: Vec<String> = response
            .testcases
            .unwrap_or_default()
            .into_iter()
            .map(|entry| entry.testcase_alias)
            .collect();
        tracing::debug!(count = aliases.len(), "Listed test cases");
        Ok(aliases)
    }
}
