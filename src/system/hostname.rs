//! Default server address: the machine the sensor runs on.
use std::net::{IpAddr, SocketAddr};

use alyvix_sensor::error::{AppError, AppResult, HttpError};

/// `https://` followed by the IPv4 address the local hostname resolves to.
pub(crate) async fn local_https_url() -> AppResult<String> {
    let host = local_hostname()?;
    let addrs: Vec<SocketAddr> = tokio::net::lookup_host((host.as_str(), 0))
        .await
        .map_err(|err| {
            AppError::http(HttpError::ResolveHost {
                host: host.clone(),
                source: err,
            })
        })?
        .collect();
    let address = first_ipv4(&addrs)
        .ok_or_else(|| AppError::http(HttpError::NoAddressesResolved { host: host.clone() }))?;
    tracing::debug!(%host, %address, "Using local Alyvix Server");
    Ok(format!("https://{}", address))
}

pub(crate) fn first_ipv4(addrs: &[SocketAddr]) -> Option<IpAddr> {
    addrs
        .iter()
        .map(SocketAddr::ip)
        .find(IpAddr::is_ipv4)
}

#[cfg(unix)]
pub(crate) fn local_hostname() -> AppResult<String> {
    let mut buffer = [0u8; 256];
    // SAFETY: the pointer and length describe `buffer`, which outlives the call.
    let rc = unsafe { libc::gethostname(buffer.as_mut_ptr().cast::<libc::c_char>(), buffer.len()) };
    if rc != 0 {
        return Err(AppError::http(HttpError::LocalHostname {
            source: std::io::Error::last_os_error(),
        }));
    }
    let end = buffer
        .iter()
        .position(|byte| *byte == 0)
        .unwrap_or(buffer.len());
    let name = String::from_utf8_lossy(buffer.get(..end).unwrap_or_default()).into_owned();
    non_empty_hostname(name)
}

#[cfg(not(unix))]
pub(crate) fn local_hostname() -> AppResult<String> {
    let name = std::env::var("COMPUTERNAME").map_err(|err| {
        AppError::http(HttpError::LocalHostname {
            source: std::io::Error::new(std::io::ErrorKind::NotFound, err),
        })
    })?;
    non_empty_hostname(name)
}

fn non_empty_hostname(name: String) -> AppResult<String> {
    if name.trim().is_empty() {
        return Err(AppError::http(HttpError::LocalHostname {
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "empty hostname"),
        }));
    }
    Ok(name)
}
