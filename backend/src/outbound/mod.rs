//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **nppes**: reqwest-backed client for the public NPI registry
//!
//! Adapters translate between domain types and wire representations and
//! contain no business logic.

pub mod nppes;
