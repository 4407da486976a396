//! Shared cache-control policy for HTTP handlers.

/// Probe and lookup responses reflect live state and must never be cached.
pub const NO_STORE: &str = "no-store";

/// Build the cache-control header tuple applied to every response.
pub const fn no_store_header() -> (&'static str, &'static str) {
    ("Cache-Control", NO_STORE)
}
