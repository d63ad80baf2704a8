pub(crate) const DEFAULT_USER_AGENT: &str = concat!("alyvix-sensor/", env!("CARGO_PKG_VERSION"));

/// Config filenames looked up in the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["alyvix-sensor.toml", "alyvix-sensor.json"];
