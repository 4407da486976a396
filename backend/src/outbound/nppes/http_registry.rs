//! Reqwest-backed NPPES registry adapter.
//!
//! The adapter builds the registry query string, maps transport and HTTP
//! failures onto [`ProviderRegistryError`], and hands the body to the DTO
//! layer for tolerant decoding.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::SearchResponseDto;
use crate::domain::ports::{
    ProviderRegistry, ProviderRegistryError, RegistrySearchRequest, RegistrySearchResponse,
};

/// Registry API version pinned on every request.
pub const NPPES_API_VERSION: &str = "2.1";
/// Default NPPES registry endpoint.
pub const DEFAULT_NPPES_ENDPOINT: &str = "https://npiregistry.cms.hhs.gov/api/";
/// Default user-agent sent to the registry.
pub const DEFAULT_USER_AGENT: &str = "medai-provider-lookup/0.1";

const INDIVIDUAL_ENUMERATION: &str = "NPI-1";

/// Provider registry adapter issuing HTTP GET requests against one endpoint.
pub struct NppesHttpRegistry {
    client: Client,
    endpoint: Url,
}

impl NppesHttpRegistry {
    /// Build an adapter with an explicit request timeout.
    /// ```rust,ignore
    /// let registry = NppesHttpRegistry::new(endpoint, Duration::from_secs(10));
    /// assert!(registry.is_ok() || registry.is_err());
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_user_agent(endpoint, timeout, DEFAULT_USER_AGENT)
    }

    /// Build an adapter sending `user_agent` on every request.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_user_agent(
        endpoint: Url,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, endpoint })
    }

    /// Endpoint this adapter queries.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ProviderRegistry for NppesHttpRegistry {
    async fn search(
        &self,
        request: &RegistrySearchRequest,
    ) -> Result<RegistrySearchResponse, ProviderRegistryError> {
        let params = search_params(request);
        debug!(endpoint = %self.endpoint, ?params, "sending registry search");
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&params)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_search_response(body.as_ref())
    }
}

fn search_params(request: &RegistrySearchRequest) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("version", NPPES_API_VERSION.to_owned()),
        ("enumeration_type", INDIVIDUAL_ENUMERATION.to_owned()),
        ("taxonomy_description", request.taxonomy_description.clone()),
        ("limit", request.limit.to_string()),
        ("skip", request.skip.to_string()),
        ("pretty", "true".to_owned()),
    ];
    if let Some(city) = &request.city {
        params.push(("city", city.clone()));
    }
    if let Some(state) = &request.state {
        params.push(("state", state.clone()));
    }
    params
}

fn parse_search_response(body: &[u8]) -> Result<RegistrySearchResponse, ProviderRegistryError> {
    let decoded: SearchResponseDto = serde_json::from_slice(body).map_err(|error| {
        ProviderRegistryError::decode(format!("invalid registry JSON payload: {error}"))
    })?;
    decoded.into_search_response()
}

fn map_transport_error(error: reqwest::Error) -> ProviderRegistryError {
    if error.is_timeout() {
        ProviderRegistryError::timeout(error.to_string())
    } else {
        ProviderRegistryError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ProviderRegistryError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {preview}", status.as_u16())
    };

    match status {
        StatusCode::TOO_MANY_REQUESTS => ProviderRegistryError::rate_limited(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            ProviderRegistryError::timeout(message)
        }
        _ if status.is_client_error() => ProviderRegistryError::invalid_request(message),
        _ => ProviderRegistryError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let mut chars = compact.chars();
    let preview: String = chars.by_ref().take(PREVIEW_CHAR_LIMIT).collect();
    if chars.next().is_some() {
        format!("{preview}...")
    } else {
        preview
    }
}
