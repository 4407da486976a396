//! Builders wiring the registry adapter into the lookup service.

use std::sync::Arc;

use tracing::info;

use crate::config::LookupSettings;
use crate::domain::ProviderLookupService;
use crate::domain::ports::ProviderLookup;
use crate::outbound::nppes::NppesHttpRegistry;

/// Build the NPPES-backed lookup service described by `settings`.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the endpoint or timeout is invalid or the
/// HTTP client cannot be constructed.
pub fn build_provider_lookup(settings: &LookupSettings) -> std::io::Result<Arc<dyn ProviderLookup>> {
    let endpoint = settings
        .registry_endpoint()
        .map_err(|error| std::io::Error::other(error.to_string()))?;
    let timeout = settings
        .registry_timeout()
        .map_err(|error| std::io::Error::other(error.to_string()))?;
    let registry = NppesHttpRegistry::with_user_agent(endpoint, timeout, settings.user_agent())
        .map_err(|error| std::io::Error::other(format!("build registry client: {error}")))?;
    info!(
        endpoint = %registry.endpoint(),
        timeout_secs = timeout.as_secs(),
        "provider registry client configured"
    );
    Ok(Arc::new(ProviderLookupService::new(Arc::new(registry))))
}
