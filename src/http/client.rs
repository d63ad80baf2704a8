use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::args::{DEFAULT_USER_AGENT, SensorArgs, TlsVersion};
use crate::error::{AppError, AppResult, FetchError, HttpError};

use super::tls::apply_tls_settings;

/// Transport options for the requests of one sensor run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    /// Off unless requested: Alyvix Server installs use self-signed certificates.
    pub verify_tls: bool,
    pub tls_min: Option<TlsVersion>,
}

impl ClientSettings {
    #[must_use]
    pub const fn from_args(args: &SensorArgs) -> Self {
        Self {
            request_timeout: args.request_timeout,
            connect_timeout: args.connect_timeout,
            verify_tls: args.verify_tls,
            tls_min: args.tls_min,
        }
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            verify_tls: false,
            tls_min: None,
        }
    }
}

/// Client bound to one Alyvix Server.
#[derive(Debug, Clone)]
pub struct AlyvixClient {
    client: Client,
    base_url: String,
}

impl AlyvixClient {
    /// Builds the client. `base_url` is expected to be normalized already.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend cannot be initialized.
    pub fn new(base_url: impl Into<String>, settings: &ClientSettings) -> AppResult<Self> {
        let mut builder = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(settings.request_timeout)
            .connect_timeout(settings.connect_timeout);
        builder = apply_tls_settings(builder, settings);

        let client = builder
            .build()
            .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))?;
        let base_url = base_url.into();
        tracing::debug!(
            %base_url,
            verify_tls = settings.verify_tls,
            timeout = ?settings.request_timeout,
            "Alyvix Server client ready"
        );
        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(super) async fn get_json<T>(&self, url: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::Transport {
                url: url.to_owned(),
                source: err,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|err| FetchError::Body {
            url: url.to_owned(),
            source: err,
        })?;
        serde_json::from_slice(&body).map_err(|err| FetchError::from_json(url, err))
    }
}
