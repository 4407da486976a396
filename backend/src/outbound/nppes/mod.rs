//! NPPES registry outbound adapter.
//!
//! Thin HTTP implementation of the `ProviderRegistry` port.

mod dto;
mod http_registry;

pub use http_registry::{
    DEFAULT_NPPES_ENDPOINT, DEFAULT_USER_AGENT, NPPES_API_VERSION, NppesHttpRegistry,
};
