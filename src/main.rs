use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use market_board::config::Config;
use market_board::controller::ViewController;
use market_board::fetcher::{self, BoardApi, HttpBoardApi};
use market_board::store::DataStore;
use market_board::web;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    init_tracing()?;

    info!("Starting market-board");

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    info!(
        api_url = %config.api_url,
        refresh_secs = config.refresh_interval.as_secs(),
        "Configuration loaded"
    );

    let config = Arc::new(config);
    let api: Arc<dyn BoardApi> =
        Arc::new(HttpBoardApi::new(&config).context("Failed to build HTTP client")?);
    let store = DataStore::new();
    let controller = Arc::new(ViewController::new(api.clone(), store.clone()));

    // Start the refresh loop; its first tick loads the board
    let interval = config.refresh_interval;
    let refresh_handle = tokio::spawn(async move {
        fetcher::refresh_loop(api.as_ref(), store, interval).await;
    });

    let web_handle = tokio::spawn(async move {
        if let Err(e) = web::serve(config, controller).await {
            error!("Web server error: {e:#}");
            std::process::exit(1);
        }
    });

    shutdown_signal().await;

    info!("Shutting down...");

    web_handle.abort();
    refresh_handle.abort();

    info!("Shutdown complete");

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,market_board=debug"));

    // Check if JSON logging is requested
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| matches!(v.to_lowercase().as_str(), "json" | "structured"))
        .unwrap_or(false);

    if use_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
