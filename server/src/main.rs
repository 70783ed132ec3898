//! Showcase Server - Main Entry Point
//!
//! Tier-gated event showcase backend.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{error, info};

use showcase_server::{api, auth::jwt::TokenVerifier, config, db, membership, observability};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before the subscriber reads RUST_LOG / LOG_FORMAT
    dotenvy::dotenv().ok();
    observability::init_tracing();

    let config = config::Config::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Showcase Server"
    );

    // Initialize database
    let db_pool = db::create_pool(&config.database_url, config.database_max_connections).await?;
    db::run_migrations(&db_pool).await?;

    // Identity provider
    let verifier = TokenVerifier::new(
        &config.jwt_public_key,
        config.jwt_issuer.as_deref(),
        config.jwt_leeway,
    )
    .map_err(|e| anyhow::anyhow!("Invalid JWT_PUBLIC_KEY: {e}"))?;
    let directory = membership::HttpDirectory::new(
        &config.identity_api_url,
        &config.identity_api_key,
        Duration::from_secs(config.identity_timeout),
    )
    .context("Failed to create identity provider client")?;
    info!(url = %config.identity_api_url, "Identity provider configured");

    // Build application state and router
    let state = api::AppState::new(db_pool, verifier, directory);
    let app = api::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(address = %config.bind_address, "Server listening");

    // Graceful shutdown handler
    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
        info!("Received shutdown signal, cleaning up...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");

    Ok(())
}
