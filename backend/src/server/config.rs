//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::LookupSettings;
use crate::domain::ports::ProviderLookup;

use super::state_builders::build_provider_lookup;

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) lookup: Arc<dyn ProviderLookup>,
}

impl ServerConfig {
    /// Construct a server configuration around an existing lookup port.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, lookup: Arc<dyn ProviderLookup>) -> Self {
        Self { bind_addr, lookup }
    }

    /// Resolve the bind address and build the registry-backed lookup service.
    ///
    /// # Errors
    ///
    /// Returns [`std::io::Error`] when a setting is invalid or the registry
    /// client cannot be built.
    pub fn from_settings(settings: &LookupSettings) -> std::io::Result<Self> {
        let bind_addr = settings
            .bind_addr()
            .map_err(|error| std::io::Error::other(error.to_string()))?;
        Ok(Self::new(bind_addr, build_provider_lookup(settings)?))
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
