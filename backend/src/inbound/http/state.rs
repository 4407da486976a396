//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and depend only on the
//! driving port, so they stay testable without network I/O.

use std::sync::Arc;

use crate::domain::ports::{FixtureProviderLookup, ProviderLookup};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Provider lookup driving port.
    pub lookup: Arc<dyn ProviderLookup>,
}

impl HttpState {
    /// Build state around a lookup port implementation.
    pub fn new(lookup: Arc<dyn ProviderLookup>) -> Self {
        Self { lookup }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(Arc::new(FixtureProviderLookup))
    }
}
