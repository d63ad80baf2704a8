use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Invalid Alyvix Server URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Alyvix Server URL '{url}' must use http or https.")]
    UnsupportedScheme { url: String },
    #[error("Failed to read the local hostname: {source}")]
    LocalHostname {
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to resolve {host} ({source})")]
    ResolveHost {
        host: String,
        #[source]
        source: std::io::Error,
    },
    #[error("No IPv4 address resolved for {host}.")]
    NoAddressesResolved { host: String },
}
