// Main entry point for API server

use anyhow::{Context, Result};
use feed_core::{kernel::ServerDeps, server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,feed_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Social Feed API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    if config.jwt_secret.is_none() {
        tracing::warn!("JWT_SECRET is not set; login and post routes will answer 500");
    }

    // Seed in-memory stores
    let deps = ServerDeps::seeded(config.jwt_secret.as_deref());

    // Build application
    let app = build_app(deps, &config).context("Failed to build application")?;

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Server is listening on: {}", config.port);
    tracing::info!(
        "Rate limit: {} requests per {} minutes",
        config.rate_max_requests,
        config.rate_window_minutes
    );
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
