//! Lookup service configuration loaded via OrthoConfig.
//!
//! The timeout carries an OrthoConfig default so the merged layer is never
//! empty; the other fields are optional and resolved by accessors, which also
//! validate values so binaries only deal with typed settings.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::outbound::nppes::{DEFAULT_NPPES_ENDPOINT, DEFAULT_USER_AGENT};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors raised while resolving configured values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The registry endpoint is not an absolute URL.
    #[error("invalid registry endpoint '{value}': {reason}")]
    InvalidEndpoint { value: String, reason: String },
    /// The registry timeout was configured as zero seconds.
    #[error("registry timeout must be at least one second")]
    ZeroTimeout,
    /// The bind address is not a `host:port` socket address.
    #[error("invalid bind address '{value}': {reason}")]
    InvalidBindAddr { value: String, reason: String },
}

/// Configuration values for the registry client and HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MEDAI")]
pub struct LookupSettings {
    /// Registry API endpoint.
    pub registry_endpoint: Option<String>,
    /// Per-request registry timeout in seconds.
    #[ortho_config(default = 10)]
    pub registry_timeout_secs: u64,
    /// User-agent sent to the registry.
    pub user_agent: Option<String>,
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
}

impl LookupSettings {
    /// Return the registry endpoint, falling back to the public NPPES API.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidEndpoint`] when the value is not a URL.
    pub fn registry_endpoint(&self) -> Result<Url, SettingsError> {
        let raw = self
            .registry_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_NPPES_ENDPOINT);
        Url::parse(raw).map_err(|error| SettingsError::InvalidEndpoint {
            value: raw.to_owned(),
            reason: error.to_string(),
        })
    }

    /// Return the registry request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroTimeout`] for a zero timeout.
    pub fn registry_timeout(&self) -> Result<Duration, SettingsError> {
        match self.registry_timeout_secs {
            0 => Err(SettingsError::ZeroTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }

    /// Return the configured user-agent, falling back to the default.
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Return the HTTP bind address.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse()
            .map_err(|error: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: raw.to_owned(),
                reason: error.to_string(),
            })
    }
}
