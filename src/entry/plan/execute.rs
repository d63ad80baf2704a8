use std::io::Write;

use alyvix_sensor::error::{AppError, AppResult};
use alyvix_sensor::http::AlyvixClient;
use alyvix_sensor::report;
use alyvix_sensor::sensor::report_test_cases;

use super::types::{AliasSource, SensorPlan};

pub(in crate::entry) async fn execute_plan(plan: SensorPlan) -> AppResult<()> {
    let client = AlyvixClient::new(plan.base_url, &plan.client)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let aliases = match plan.aliases {
        AliasSource::Single(alias) => vec![alias],
        AliasSource::All => match client.list_test_cases().await {
            Ok(aliases) => aliases,
            Err(err) => {
                tracing::error!(error = %err, "Test cases could not be listed");
                writeln!(out, "{}", report::render_failure(plan.report.format, &err)?)?;
                out.flush()?;
                return Err(AppError::fetch(err));
            }
        },
    };

    let run = report_test_cases(&client, aliases, plan.report, &mut out).await?;
    run.into_result()
}
