mod analysis;
mod config;
mod drafts;
mod errors;
mod extract;
mod form;
mod resume;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::drafts::{DraftStoreFactory, InMemoryDrafts, RedisDrafts};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resumer API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize draft store (Redis if configured, otherwise process memory)
    let drafts: Arc<dyn DraftStoreFactory> = match &config.redis_url {
        Some(url) => Arc::new(RedisDrafts::connect(url, config.draft_ttl_secs).await?),
        None => {
            info!("REDIS_URL not set; drafts are kept in memory");
            let ttl = Duration::from_secs(config.draft_ttl_secs);
            Arc::new(InMemoryDrafts::new(ttl))
        }
    };

    info!(
        "Submit behavior: block_on_invalid={} disable_inputs={}",
        config.submit_behavior.block_submission_on_invalid,
        config.submit_behavior.disable_inputs_while_submitting
    );

    // Build app state
    let state = AppState {
        drafts,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the form page origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
