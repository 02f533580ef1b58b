//! Server configuration.
//!
//! Read from the process environment (a `.env` file is loaded first by
//! `main`). Every variable is optional; defaults match the visualizer's
//! development setup.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use url::Url;
use validator::Validate;

use crate::error::AppError;

pub const ENV_HOST: &str = "AURA_HOST";
pub const ENV_PORT: &str = "AURA_PORT";
pub const ENV_ALLOWED_ORIGIN: &str = "AURA_ALLOWED_ORIGIN";
pub const ENV_LOG_FORMAT: &str = "AURA_LOG_FORMAT";
pub const ENV_JITTER_SEED: &str = "AURA_JITTER_SEED";

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// Bunyan-style JSON lines
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" | "bunyan" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{} must be 'pretty' or 'json', got '{}'",
                ENV_LOG_FORMAT, other
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Runtime settings of the HTTP server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: IpAddr,
    /// TCP port to bind. Zero is rejected; tests bind their own listener.
    #[validate(range(min = 1))]
    pub port: u16,
    /// The single origin allowed by CORS, as `scheme://host[:port]`.
    #[validate(url)]
    pub allowed_origin: String,
    /// Log output format.
    pub log_format: LogFormat,
    /// Seed for reproducible energy jitter. Random when unset.
    pub jitter_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            log_format: LogFormat::default(),
            jitter_seed: None,
        }
    }
}

impl ServerConfig {
    /// Build the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] when a variable is present but malformed,
    /// and [`AppError::Validation`] when the assembled values are out of range.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let host = match read_var(ENV_HOST) {
            Some(raw) => raw.parse::<IpAddr>().map_err(|e| {
                AppError::Config(format!("{} '{}' is not an IP address: {}", ENV_HOST, raw, e))
            })?,
            None => defaults.host,
        };

        let port = match read_var(ENV_PORT) {
            Some(raw) => raw.parse::<u16>().map_err(|e| {
                AppError::Config(format!("{} '{}' is not a valid port: {}", ENV_PORT, raw, e))
            })?,
            None => defaults.port,
        };

        let allowed_origin = match read_var(ENV_ALLOWED_ORIGIN) {
            Some(raw) => normalize_origin(&raw)?,
            None => defaults.allowed_origin,
        };

        let log_format = match read_var(ENV_LOG_FORMAT) {
            Some(raw) => raw.parse()?,
            None => defaults.log_format,
        };

        let jitter_seed = read_var(ENV_JITTER_SEED)
            .map(|raw| {
                raw.parse::<u64>().map_err(|e| {
                    AppError::Config(format!("{} '{}' is not a u64: {}", ENV_JITTER_SEED, raw, e))
                })
            })
            .transpose()?;

        let config = Self {
            host,
            port,
            allowed_origin,
            log_format,
            jitter_seed,
        };
        config.validate()?;

        Ok(config)
    }

    /// Socket address to bind
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Non-empty, trimmed value of an environment variable
fn read_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reduce an origin URL to `scheme://host[:port]`, the form browsers send.
pub fn normalize_origin(raw: &str) -> Result<String, AppError> {
    let url = Url::parse(raw)?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::Config(format!(
            "{} must use http or https, got '{}'",
            ENV_ALLOWED_ORIGIN,
            url.scheme()
        )));
    }

    Ok(url.origin().ascii_serialization())
}
