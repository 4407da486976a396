//! HTTP inbound adapter exposing the doctor lookup REST endpoint.

pub mod cache_control;
pub mod doctors;
pub mod health;
pub mod state;
