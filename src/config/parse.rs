use std::time::Duration;

use crate::args::parsers::parse_duration;
use crate::error::{AppError, AppResult, ConfigError};

pub(crate) fn parse_duration_value(value: &str) -> AppResult<Duration> {
    parse_duration(value).map_err(|source| {
        AppError::config(ConfigError::InvalidDuration {
            value: value.trim().to_owned(),
            source,
        })
    })
}
