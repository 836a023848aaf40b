use subway_server::config::ServerConfig;
use subway_server::web::{AppState, create_router};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let env_filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|err| {
        eprintln!(
            "invalid log filter {:?}, falling back to 'info' - {}",
            config.log_filter, err
        );
        EnvFilter::new("info")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();

    // Build app state and router
    let state = AppState::default();
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %config.bind_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!("Subway line manager listening on http://{}", config.bind_addr);
    tracing::info!("API Endpoints:");
    tracing::info!("  GET    /health                           - Health check");
    tracing::info!("  POST   /stations, GET /stations          - Create / list stations");
    tracing::info!("  DELETE /stations/:id                     - Delete a station");
    tracing::info!("  POST   /lines, GET /lines                - Create / list lines");
    tracing::info!("  GET|PUT|DELETE /lines/:id                - Show / rename / delete a line");
    tracing::info!("  POST   /lines/:id/sections               - Add a section");
    tracing::info!("  DELETE /lines/:id/sections?stationId=N   - Remove a station");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
