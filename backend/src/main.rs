//! Backend entry-point: serves the doctor lookup API and health probes.

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use medai_backend::config::LookupSettings;
use medai_backend::inbound::http::health::HealthState;
use medai_backend::server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = LookupSettings::load_from_iter([OsString::from("medai-backend")])
        .map_err(|error| std::io::Error::other(format!("load settings: {error}")))?;
    let config = ServerConfig::from_settings(&settings)?;
    info!(bind_addr = %config.bind_addr(), "starting provider lookup server");

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
