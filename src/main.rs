//! Nature Remo Prometheus exporter
//!
//! This application polls the Nature Remo cloud API for device and appliance state
//! and exposes it as Prometheus metrics.
//!
//! # Architecture
//!
//! Every request to the telemetry path triggers exactly one collection cycle:
//! - **Devices**: sensor readings and calibration offsets of each Remo hub
//! - **Appliances**: air conditioner, light and smart meter state
//!
//! Both resources are fetched concurrently. A failure to fetch one of them is logged
//! and only removes its own metrics from the response.

mod config;
mod error;
mod exporter;
mod exposition;
mod model;
mod natureremo;
mod server;

#[cfg(test)]
mod test_utils;

use crate::error::Result;
use crate::model::MetricDescs;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tokio::signal::unix::{signal, SignalKind};

/// Application entry point.
///
/// Initializes logging and configuration, then serves the telemetry endpoint until
/// SIGTERM or SIGINT is received.
#[tokio::main]
async fn main() {
    let app_config = config::load_app_config().expect("Failed to load AppConfig");
    tracing_subscriber::fmt()
        .with_max_level(app_config.log_level())
        .init();

    if let Err(e) = run().await {
        tracing::error!("{:#}", anyhow::Error::from(e));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let natureremo_config = config::load_natureremo_config()?;
    let web_config = config::load_web_config()?;

    let client = Arc::new(natureremo::Client::new(natureremo_config)?);
    let descs = Arc::new(MetricDescs::new());
    let exporter = Arc::new(exporter::Exporter::new(Arc::clone(&client), descs));

    let app = server::router(exporter, &web_config.telemetry_path);
    let listener = TcpListener::bind(&web_config.listen_address)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", web_config.listen_address, e))?;

    tracing::info!(
        "Listening on {}{} (Nature Remo API at {})",
        web_config.listen_address,
        web_config.telemetry_path,
        client.endpoint()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    tracing::info!("Server stopped.");
    Ok(())
}

/// Resolves once SIGTERM or SIGINT has been received.
async fn shutdown_signal() {
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut sig_term) => {
                sig_term.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to register SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        // Handle SIGTERM for graceful shutdown in containers
        _ = terminate => {
            tracing::info!("Received SIGTERM. Exiting...");
        }
        // Handle Ctrl-C for manual termination
        _ = ctrl_c() => {
            tracing::info!("Received SIGINT. Exiting...");
        }
    }
}
