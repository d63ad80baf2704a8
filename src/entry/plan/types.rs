use alyvix_sensor::http::ClientSettings;
use alyvix_sensor::sensor::ReportOptions;

/// Which test cases a run reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(in crate::entry) enum AliasSource {
    Single(String),
    /// Every test case the server lists.
    All,
}

pub(in crate::entry) struct SensorPlan {
    pub(super) base_url: String,
    pub(super) aliases: AliasSource,
    pub(super) client: ClientSettings,
    pub(super) report: ReportOptions,
}
