use clap::Parser;

use crate::error::{AppError, AppResult};

use super::SensorArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<SensorArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    SensorArgs::try_parse_from(args).map_err(AppError::from)
}
