//! Serve command - runs the HTTP API server

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::api::create_router;
use crate::config::{AppConfig, ServerConfig};
use crate::infrastructure::logging;

/// Run the API server until Ctrl+C or SIGTERM
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    config.validate()?;
    init_logging(&config);

    info!(
        "Starting {} in {} mode",
        config.app.name, config.app.environment
    );

    let state = crate::create_app_state(&config).await?;
    let app = create_router(state);

    let listener = bind_listener(&config.server).await?;
    info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down {}", config.app.name);

    Ok(())
}

fn init_logging(config: &AppConfig) {
    logging::init_logging(&logging::LoggingConfig {
        level: config.log_level().to_string(),
        format: config.logging.format.clone(),
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

/// Binds the configured host, which may be an IP literal or a hostname
async fn bind_listener(server: &ServerConfig) -> anyhow::Result<TcpListener> {
    Ok(TcpListener::bind((server.host.as_str(), server.port)).await?)
}
