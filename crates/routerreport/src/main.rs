use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use leptos::prelude::LeptosOptions;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tokio_stream::StreamExt;
use tracing::info;

use rr_client::{AppConfig, ReportClient, ReportStore, config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "routerreport=info,rr_web=info,rr_client=info".parse().unwrap()
            }),
        )
        .init();

    info!("routerreport starting...");

    // Load config
    let path = config::config_path();
    let config = if path.exists() {
        AppConfig::load_from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?
    } else {
        info!("No config file found at {}, using defaults", path.display());
        AppConfig::default()
    };

    info!(
        "Config loaded: listen {}, report service {}, timeout {}s",
        config.listen_addr, config.report_endpoint, config.request_timeout_secs
    );

    let client = Arc::new(ReportClient::new(&config)?);
    let store = Arc::new(ReportStore::new(Duration::from_secs(
        config.report_ttl_secs,
    )));

    let leptos_options = match leptos::config::get_configuration(None) {
        Ok(conf) => conf.leptos_options,
        Err(_) => LeptosOptions::builder().output_name("rr-web-client").build(),
    };

    let app = rr_web::server::router(leptos_options, client, store);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    info!("Web UI listening on {}", config.listen_addr);

    let signals = Signals::new([SIGINT, SIGTERM])?;
    let handle = signals.handle();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(signals))
        .await
        .context("Server error")?;

    handle.close();
    info!("routerreport stopped");
    Ok(())
}

async fn shutdown_signal(mut signals: Signals) {
    if let Some(signal) = signals.next().await {
        info!("Received signal {signal}, shutting down");
    }
}
