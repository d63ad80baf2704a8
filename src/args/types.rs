use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ValidationError};

#[derive(Debug, Clone, Copy, Default, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `value;warn;crit` lines read by the PRTG probe
    #[default]
    Text,
    /// PRTG advanced sensor JSON
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsVersion {
    V1_0,
    V1_1,
    V1_2,
    V1_3,
}

impl std::str::FromStr for TlsVersion {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "1.0" | "tls1.0" | "tls1" | "v1.0" => Ok(TlsVersion::V1_0),
            "1.1" | "tls1.1" | "v1.1" => Ok(TlsVersion::V1_1),
            "1.2" | "tls1.2" | "v1.2" => Ok(TlsVersion::V1_2),
            "1.3" | "tls1.3" | "v1.3" => Ok(TlsVersion::V1_3),
            _ => Err(AppError::validation(ValidationError::InvalidTlsVersion {
                value: s.to_owned(),
            })),
        }
    }
}

impl<'de> Deserialize<'de> for TlsVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value
            .parse::<TlsVersion>()
            .map_err(serde::de::Error::custom)
    }
}
