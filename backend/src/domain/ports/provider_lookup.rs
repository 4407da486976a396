//! Driving port used by inbound adapters to look up providers.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::LookupResult;

/// Raw lookup inputs as received from a caller. Validation happens in the
/// domain service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct LookupRequest {
    /// Specialty to search for.
    pub specialty: String,
    /// Optional city filter.
    #[serde(default)]
    pub city: Option<String>,
    /// Optional state filter.
    #[serde(default)]
    pub state: Option<String>,
}

/// Port for provider lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProviderLookup: Send + Sync {
    /// Run one lookup. Never fails: faults are reported inside the result.
    async fn lookup(&self, request: LookupRequest) -> LookupResult;
}

/// Fixture lookup answering every request with "no doctors found".
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureProviderLookup;

#[async_trait]
impl ProviderLookup for FixtureProviderLookup {
    async fn lookup(&self, request: LookupRequest) -> LookupResult {
        LookupResult::no_doctors_found(request.specialty.trim())
    }
}
