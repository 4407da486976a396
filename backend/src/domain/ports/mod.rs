//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod provider_lookup;
mod provider_registry;

#[cfg(test)]
pub use provider_lookup::MockProviderLookup;
pub use provider_lookup::{FixtureProviderLookup, LookupRequest, ProviderLookup};
#[cfg(test)]
pub use provider_registry::MockProviderRegistry;
pub use provider_registry::{
    FixtureProviderRegistry, ProviderRegistry, ProviderRegistryError, REGISTRY_PAGE_LIMIT,
    RegistryAddress, RegistryEntry, RegistrySearchRequest, RegistrySearchResponse,
};
