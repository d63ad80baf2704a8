use thiserror::Error;

/// Failure reaching the Alyvix Server API or decoding its answer.
///
/// Every variant carries the URL that was requested so the diagnostic
/// printed for the monitoring agent can point at it.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to '{url}' returned HTTP {status}.")]
    Status { url: String, status: u16 },
    #[error("Failed to read response body from '{url}': {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Response from '{url}' is not JSON: {source}")]
    InvalidJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Malformed response from '{url}': {source}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Body { url, .. }
            | FetchError::InvalidJson { url, .. }
            | FetchError::MalformedResponse { url, .. } => url,
        }
    }

    /// True when the server answered with JSON that does not have the
    /// expected shape, as opposed to the server not being reachable.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, FetchError::MalformedResponse { .. })
    }

    pub(crate) fn from_json(url: &str, source: serde_json::Error) -> Self {
        match source.classify() {
            serde_json::error::Category::Data => FetchError::MalformedResponse {
                url: url.to_owned(),
                source,
            },
            serde_json::error::Category::Io
            | serde_json::error::Category::Syntax
            | serde_json::error::Category::Eof => FetchError::InvalidJson {
                url: url.to_owned(),
                source,
            },
        }
    }
}
