//! Configuration loading and application.
mod apply;
mod loader;
mod parse;
pub mod types;


pub use apply::apply_config;
pub use loader::load_config;

#[cfg(any(test, feature = "fuzzing"))]
pub(crate) use loader::load_config_file;
pub(crate) use parse::parse_duration_value;
