use clap::Parser;
use std::time::Duration;

use super::parsers::{parse_bool_env, parse_duration_arg, parse_test_case_alias, parse_tls_version};
use super::types::{OutputFormat, TlsVersion};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "PRTG custom sensor for Alyvix Server: prints the latest run of each test case in PRTG sensor syntax."
)]
pub struct SensorArgs {
    /// HTTPS URL of the Alyvix Server (e.g. https://alyvixserver.co.lan). Defaults to https://<local address>
    #[arg(
        long = "alyvix_server_https_url",
        short = 'a',
        alias = "alyvix-server-https-url",
        env = "ALYVIX_SERVER_HTTPS_URL"
    )]
    pub alyvix_server_https_url: Option<String>,

    /// Alyvix test case alias (e.g. visittrentino). Defaults to every test case on the server
    #[arg(
        long = "test_case_alias",
        short = 't',
        alias = "test-case-alias",
        env = "ALYVIX_TEST_CASE_ALIAS",
        value_parser = parse_test_case_alias
    )]
    pub test_case_alias: Option<String>,

    /// Total timeout for each request to the server (supports ms/s/m/h)
    #[arg(long = "timeout", default_value = "10s", value_parser = parse_duration_arg)]
    pub request_timeout: Duration,

    /// Timeout for establishing a connection (supports ms/s/m/h)
    #[arg(
        long = "connect-timeout",
        default_value = "5s",
        value_parser = parse_duration_arg
    )]
    pub connect_timeout: Duration,

    /// Verify the server certificate (disabled by default, Alyvix Server ships a self-signed one)
    #[arg(long = "verify-tls")]
    pub verify_tls: bool,

    /// Minimum TLS version (1.0, 1.1, 1.2, 1.3)
    #[arg(long = "tls-min", value_parser = parse_tls_version)]
    pub tls_min: Option<TlsVersion>,

    /// Stop at the first test case that cannot be fetched
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,

    /// Output format: PRTG text lines or PRTG advanced sensor JSON
    #[arg(
        long = "output-format",
        short = 'o',
        value_enum,
        default_value = "text",
        ignore_case = true
    )]
    pub output_format: OutputFormat,

    /// Path to config file (TOML/JSON). Defaults to ./alyvix-sensor.toml or ./alyvix-sensor.json if present.
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by ALYVIX_SENSOR_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
