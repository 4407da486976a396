//! Provider lookup domain service.
//!
//! The service implements the [`ProviderLookup`] driving port on top of the
//! [`ProviderRegistry`] driven port. Registry faults are absorbed: callers
//! see the same "no doctors found" message for an empty result page and for
//! an unreachable registry, while [`RegistryOutcome`] keeps the two cases
//! apart for logging and for callers that need to tell them apart.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, warn};

use crate::domain::ports::{
    LookupRequest, ProviderLookup, ProviderRegistry, ProviderRegistryError, RegistrySearchRequest,
};
use crate::domain::{
    LocationFilter, LookupQuery, LookupResult, ProviderRecord, normalize_entry,
};

/// Result of one registry query before it is collapsed into a [`LookupResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryOutcome {
    /// The registry returned at least one usable entry.
    Matches(Vec<ProviderRecord>),
    /// The registry answered but no usable entry matched.
    NoMatches,
    /// The registry could not be queried; the fault was logged and absorbed.
    Unavailable(ProviderRegistryError),
}

impl RegistryOutcome {
    /// Collapse into the provider list, treating faults as an empty page.
    pub fn into_providers(self) -> Vec<ProviderRecord> {
        match self {
            Self::Matches(providers) => providers,
            Self::NoMatches | Self::Unavailable(_) => Vec::new(),
        }
    }

    /// Return whether the registry was unreachable or rejected the search.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Provider lookup service backed by a registry port.
#[derive(Clone)]
pub struct ProviderLookupService<R> {
    registry: Arc<R>,
}

impl<R> ProviderLookupService<R> {
    /// Create a service querying `registry`.
    pub fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }
}

impl<R> ProviderLookupService<R>
where
    R: ProviderRegistry,
{
    /// Find providers for `specialty`, optionally narrowed by city and state.
    ///
    /// ```rust,ignore
    /// let result = service
    ///     .find_providers("Dermatology", Some("New York"), Some("NY"))
    ///     .await;
    /// assert!(result.providers().is_some() || result.error_message().is_some());
    /// ```
    pub async fn find_providers(
        &self,
        specialty: &str,
        city: Option<&str>,
        state: Option<&str>,
    ) -> LookupResult {
        match LookupQuery::new(specialty, city, state) {
            Ok(query) => self.find_for_query(&query).await,
            Err(error) => {
                error!(%error, specialty, "provider lookup rejected before querying the registry");
                LookupResult::Error(error.to_string())
            }
        }
    }

    /// Run a validated query and collapse the outcome into a [`LookupResult`].
    pub async fn find_for_query(&self, query: &LookupQuery) -> LookupResult {
        let providers = self
            .query_registry(query.specialty(), query.location())
            .await
            .into_providers();
        LookupResult::from_providers(query.specialty(), providers)
    }

    /// Query the first registry page and normalize every decoded entry.
    pub async fn query_registry(
        &self,
        specialty: &str,
        location: Option<&LocationFilter>,
    ) -> RegistryOutcome {
        let request = RegistrySearchRequest::first_page(
            specialty,
            location.and_then(LocationFilter::city),
            location.and_then(LocationFilter::state),
        );
        debug!(
            specialty,
            city = request.city.as_deref(),
            state = request.state.as_deref(),
            "querying provider registry"
        );

        let response = match self.registry.search(&request).await {
            Ok(response) => response,
            Err(error) => {
                warn!(
                    %error,
                    specialty,
                    retryable = error.is_retryable(),
                    "provider registry query failed; reporting no matches"
                );
                return RegistryOutcome::Unavailable(error);
            }
        };

        if response.skipped_entries > 0 {
            warn!(
                specialty,
                skipped = response.skipped_entries,
                "provider registry returned malformed entries"
            );
        }

        let providers: Vec<ProviderRecord> = response
            .entries
            .into_iter()
            .map(|entry| normalize_entry(entry, specialty))
            .collect();
        if providers.is_empty() {
            debug!(specialty, "provider registry returned no matches");
            RegistryOutcome::NoMatches
        } else {
            RegistryOutcome::Matches(providers)
        }
    }
}

#[async_trait]
impl<R> ProviderLookup for ProviderLookupService<R>
where
    R: ProviderRegistry,
{
    async fn lookup(&self, request: LookupRequest) -> LookupResult {
        self.find_providers(
            &request.specialty,
            request.city.as_deref(),
            request.state.as_deref(),
        )
        .await
    }
}

#[cfg(test)]
#[path = "provider_lookup_service_tests.rs"]
mod tests;
