use std::time::Duration;

use serde::Deserialize;

use crate::args::{OutputFormat, TlsVersion};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(alias = "url")]
    pub alyvix_server_https_url: Option<String>,
    #[serde(alias = "alias")]
    pub test_case_alias: Option<String>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub verify_tls: Option<bool>,
    pub tls_min: Option<TlsVersion>,
    pub fail_fast: Option<bool>,
    pub output_format: Option<OutputFormat>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}

/// Either a plain number of seconds or a duration string such as `1500ms`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> AppResult<Duration> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(AppError::config(ConfigError::InvalidDuration {
                        value: secs.to_string(),
                        source: ValidationError::DurationZero,
                    }))
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => super::parse_duration_value(text),
        }
    }
}
