use reqwest::ClientBuilder;

use crate::args::TlsVersion;

use super::client::ClientSettings;

pub(super) fn apply_tls_settings(
    mut builder: ClientBuilder,
    settings: &ClientSettings,
) -> ClientBuilder {
    if let Some(min) = settings.tls_min {
        builder = builder.min_tls_version(to_reqwest_tls_version(min));
    }

    if !settings.verify_tls {
        builder = builder
            .danger_accept_invalid_certs(true)
            .danger_accept_invalid_hostnames(true);
    }

    builder
}

const fn to_reqwest_tls_version(version: TlsVersion) -> reqwest::tls::Version {
    match version {
        TlsVersion::V1_0 => reqwest::tls::Version::TLS_1_0,
        TlsVersion::V1_1 => reqwest::tls::Version::TLS_1_1,
        TlsVersion::V1_2 => reqwest::tls::Version::TLS_1_2,
        TlsVersion::V1_3 => reqwest::tls::Version::TLS_1_3,
    }
}
