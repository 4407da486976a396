//! Inbound adapters that translate external requests into provider lookups
//! while keeping framework details at the edge.
//!
//! HTTP handlers live under [`http`]; the agent function tool under [`tool`].

pub mod http;
pub mod tool;
