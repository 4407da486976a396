//! Driven port for searching the public healthcare provider registry.
//!
//! The domain owns the search request and the loosely-populated entry shape so
//! the lookup service can apply normalization rules without knowing how the
//! registry encodes its payloads.

use async_trait::async_trait;

use super::define_port_error;

/// Maximum number of registry entries requested per search.
pub const REGISTRY_PAGE_LIMIT: u32 = 10;

/// Domain-owned search request passed to the registry adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySearchRequest {
    /// Taxonomy description filter, passed through verbatim.
    pub taxonomy_description: String,
    /// Optional city equality filter.
    pub city: Option<String>,
    /// Optional state equality filter.
    pub state: Option<String>,
    /// Page size.
    pub limit: u32,
    /// Page offset.
    pub skip: u32,
}

impl RegistrySearchRequest {
    /// Build a request for the first result page.
    ///
    /// # Examples
    ///
    /// ```
    /// use medai_backend::domain::ports::{REGISTRY_PAGE_LIMIT, RegistrySearchRequest};
    ///
    /// let request = RegistrySearchRequest::first_page("Cardiology", None, Some("MA"));
    /// assert_eq!(request.limit, REGISTRY_PAGE_LIMIT);
    /// assert_eq!(request.skip, 0);
    /// assert!(request.city.is_none());
    /// ```
    pub fn first_page(
        taxonomy_description: impl Into<String>,
        city: Option<&str>,
        state: Option<&str>,
    ) -> Self {
        Self {
            taxonomy_description: taxonomy_description.into(),
            city: city.map(str::to_owned),
            state: state.map(str::to_owned),
            limit: REGISTRY_PAGE_LIMIT,
            skip: 0,
        }
    }
}

/// Primary practice location reported for one registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistryAddress {
    /// First street line.
    pub address_1: Option<String>,
    /// Second street line (suite, floor).
    pub address_2: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// State abbreviation.
    pub state: Option<String>,
    /// Postal code, possibly ZIP+4 without a separator.
    pub postal_code: Option<String>,
    /// Telephone number as formatted by the registry.
    pub telephone_number: Option<String>,
}

/// One provider entry as reported by the registry. Every field may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistryEntry {
    /// Registry-assigned provider number.
    pub number: Option<u64>,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Credential text such as `MD` or `DO`.
    pub credential: Option<String>,
    /// First address listed for the provider.
    pub primary_address: Option<RegistryAddress>,
    /// Description of the first taxonomy listed for the provider.
    pub taxonomy_description: Option<String>,
}

/// Search response produced by the registry adapter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrySearchResponse {
    /// Entries that decoded successfully, in registry order.
    pub entries: Vec<RegistryEntry>,
    /// Entries dropped because they could not be decoded.
    pub skipped_entries: usize,
}

define_port_error! {
    /// Errors surfaced while calling the provider registry.
    pub enum ProviderRegistryError {
        /// Network transport failed or the registry answered with a server error.
        Transport { message: String } =>
            "provider registry transport failed: {message}",
        /// The registry call exceeded its timeout.
        Timeout { message: String } =>
            "provider registry timeout: {message}",
        /// The registry rate-limited the request.
        RateLimited { message: String } =>
            "provider registry rate limited request: {message}",
        /// The registry response body could not be decoded.
        Decode { message: String } =>
            "provider registry response decode failed: {message}",
        /// The registry rejected the search parameters.
        InvalidRequest { message: String } =>
            "provider registry rejected request: {message}",
    }
}

impl ProviderRegistryError {
    /// Return whether retrying this error is expected to help.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }
}

/// Port for searching the provider registry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProviderRegistry: Send + Sync {
    /// Fetch one page of provider entries matching `request`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use medai_backend::domain::ports::{
    ///     FixtureProviderRegistry, ProviderRegistry, RegistrySearchRequest,
    /// };
    ///
    /// let registry = FixtureProviderRegistry;
    /// let response = registry
    ///     .search(&RegistrySearchRequest::first_page("Dermatology", None, None))
    ///     .await?;
    /// assert!(response.entries.is_empty());
    /// # Ok::<(), medai_backend::domain::ports::ProviderRegistryError>(())
    /// ```
    async fn search(
        &self,
        request: &RegistrySearchRequest,
    ) -> Result<RegistrySearchResponse, ProviderRegistryError>;
}

/// Fixture registry returning no entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureProviderRegistry;

#[async_trait]
impl ProviderRegistry for FixtureProviderRegistry {
    async fn search(
        &self,
        _request: &RegistrySearchRequest,
    ) -> Result<RegistrySearchResponse, ProviderRegistryError> {
        Ok(RegistrySearchResponse::default())
    }
}
