//! Domain types and services for provider lookup.
//!
//! Purpose: Define the lookup inputs, the normalized provider record, and the
//! service that turns registry pages into a stable `success`/`error` result.
//! Transport concerns live in the outbound and inbound adapters.
//!
//! Public surface:
//! - `LookupQuery`, `LocationFilter`: validated lookup inputs.
//! - `ProviderRecord`, `ProviderAddress`, `LookupResult`: output contract.
//! - `normalize_entry`: registry entry to record mapping with fallbacks.
//! - `ProviderLookupService`, `RegistryOutcome`: lookup orchestration.

pub mod ports;

mod lookup_query;
mod provider_lookup_service;
mod provider_normalization;
mod provider_record;

pub use self::lookup_query::{LocationFilter, LookupQuery, LookupQueryError};
pub use self::provider_lookup_service::{ProviderLookupService, RegistryOutcome};
pub use self::provider_normalization::normalize_entry;
pub use self::provider_record::{
    ACCEPTING_NEW_PATIENTS_DEFAULT, LookupResult, NAME_UNAVAILABLE, PHONE_NOT_AVAILABLE,
    ProviderAddress, ProviderRecord,
};
