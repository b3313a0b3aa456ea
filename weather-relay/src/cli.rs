use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tokio::{net::TcpListener, signal};
use tracing::{error, info, warn};
use weather_core::{
    RuntimeConfig, WeatherProvider, WeatherRelay, provider::provider_from_config,
};
use weather_relay::{AppState, create_router};

/// Startup arguments for the relay.
#[derive(Debug, Parser)]
#[command(name = "weather-relay", version, about = "Weather relay HTTP server")]
pub struct Cli {
    /// Path to the relay TOML config; defaults to the platform config directory.
    #[arg(long, env = "WEATHER_RELAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Interface to bind, overrides `[server] host`.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overrides `[server] port`.
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = RuntimeConfig::load(self.config.as_deref())
            .context("Error during pre-server setup")?;

        for warning in config.warnings() {
            warn!("{warning}");
        }

        info!(
            units = %config.temperature_unit(),
            show_humidity = config.show_humidity,
            default_location = %config.default_location,
            dummy_records = config.dummy_data.len(),
            "Configuration loaded"
        );

        let host = self.host.unwrap_or_else(|| config.server.host.clone());
        let port = self.port.unwrap_or(config.server.port);

        let provider: Arc<dyn WeatherProvider> = Arc::from(provider_from_config(&config));
        let relay = WeatherRelay::new(Arc::new(config), provider);
        let app = create_router(AppState::new(relay));

        let addr = format!("{host}:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("Weather relay listening on http://{addr}");
        info!("Try http://{addr}/api/weather?city=London");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        info!("Weather relay stopped");
        Ok(())
    }
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
