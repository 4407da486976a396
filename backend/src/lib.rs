//! Provider lookup backend: domain service, registry adapter, and hosts.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;
