//! CLI binary to run the fleet gateway locally.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use fleet_action_recorder_memory::MemoryActionRecorder;
use fleet_actions::ActionDispatcher;
use fleet_api::Gateway;
use fleet_blob_store_memory::MemoryBlobStore;
use fleet_summary_store_memory::MemorySummaryStore;
use fleet_telemetry::TelemetryFetcher;
use fleet_window_extractor_mock::MockWindowExtractor;
use tokio_util::sync::CancellationToken;
use tracing::info;
use url::Url;

/// CLI-specific error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to build the shared HTTP client
    #[error("http client error: {0}")]
    Client(#[from] reqwest::Error),

    /// Failed to bind or serve the API listener
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Address the gateway API listens on
    #[arg(long, default_value = "127.0.0.1:8080", env = "FLEET_LISTEN_ADDR")]
    listen_addr: SocketAddr,

    /// Base URL of the Redfish-style management API
    #[arg(
        long,
        default_value = "http://localhost:8001/redfish/v1",
        env = "FLEET_REDFISH_BASE_URL"
    )]
    redfish_base_url: Url,

    /// Bound on any single upstream call, in seconds
    #[arg(long, default_value_t = 30, env = "FLEET_REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.request_timeout_secs))
        .build()?;

    let telemetry = TelemetryFetcher::new(client.clone(), args.redfish_base_url.clone());
    let dispatcher = ActionDispatcher::new(
        client,
        args.redfish_base_url,
        MemoryActionRecorder::new(),
    );

    // Memory/mock collaborators until real Mongo/S3/extractor backends land.
    let gateway = Arc::new(Gateway::new(
        telemetry,
        dispatcher,
        MockWindowExtractor::new(),
        MemorySummaryStore::new(),
        MemoryBlobStore::new(),
    ));

    // Create shared shutdown token
    let shutdown_token = CancellationToken::new();

    // Set up signal handlers
    let signal_shutdown_token = shutdown_token.clone();
    tokio::spawn(async move {
        if cfg!(unix) {
            use tokio::signal::unix::{SignalKind, signal};

            let mut sigterm = signal(SignalKind::terminate()).expect("SIGTERM handler failed");
            let mut sigint = signal(SignalKind::interrupt()).expect("SIGINT handler failed");

            tokio::select! {
                _ = sigterm.recv() => info!("Received SIGTERM"),
                _ = sigint.recv() => info!("Received SIGINT"),
            }
        } else {
            let _ = tokio::signal::ctrl_c().await;
            info!("Received interrupt signal");
        }

        info!("Shutting down");
        signal_shutdown_token.cancel();
    });

    let listener = tokio::net::TcpListener::bind(args.listen_addr).await?;
    info!("gateway listening on {}", args.listen_addr);

    axum::serve(listener, fleet_api::router(gateway))
        .with_graceful_shutdown(async move { shutdown_token.cancelled().await })
        .await?;

    Ok(())
}
