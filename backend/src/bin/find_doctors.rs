//! Look up doctors for a specialty from the command line and print the result
//! object as JSON.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;

use clap::Parser;
use medai_backend::config::LookupSettings;
use medai_backend::domain::ports::LookupRequest;
use medai_backend::server::build_provider_lookup;
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// `find-doctors` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "find-doctors",
    about = "Find doctors for a medical specialty in the public NPI registry",
    version
)]
struct CliArgs {
    /// Specialty to search for, e.g. `Dermatology`.
    #[arg(long, value_name = "specialty")]
    specialty: String,
    /// Optional city filter.
    #[arg(long, value_name = "city")]
    city: Option<String>,
    /// Optional state filter, usually a two-letter abbreviation.
    #[arg(long, value_name = "state")]
    state: Option<String>,
    /// Registry endpoint. Falls back to `MEDAI_REGISTRY_ENDPOINT`.
    #[arg(long, value_name = "url")]
    endpoint: Option<String>,
    /// Request timeout in seconds. Falls back to `MEDAI_REGISTRY_TIMEOUT_SECS`.
    #[arg(long = "timeout-secs", value_name = "seconds")]
    timeout_secs: Option<u64>,
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let mut settings = LookupSettings::load_from_iter([OsString::from("find-doctors")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    if let Some(endpoint) = args.endpoint {
        settings.registry_endpoint = Some(endpoint);
    }
    if let Some(timeout_secs) = args.timeout_secs {
        settings.registry_timeout_secs = timeout_secs;
    }

    let lookup = build_provider_lookup(&settings)?;
    let result = lookup
        .lookup(LookupRequest {
            specialty: args.specialty,
            city: args.city,
            state: args.state,
        })
        .await;

    let rendered = serde_json::to_string_pretty(&result)
        .map_err(|error| io::Error::other(format!("encode lookup result: {error}")))?;
    println!("{rendered}");
    Ok(())
}
