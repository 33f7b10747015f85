mod config;
mod fetcher;
mod routes;
mod timefmt;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::fetcher::NewsClient;
use crate::routes::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newsdeck=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load("news.toml")?;
    info!(
        "Loaded configuration: {} articles per page, default query '{}'",
        config.page_size, config.default_query
    );

    // The environment overrides the file so the key can stay out of it
    let api_key = std::env::var("NEWS_API_KEY").unwrap_or_else(|_| config.api.key.clone());
    if api_key.is_empty() {
        warn!("No API key configured; upstream requests will be rejected");
    }

    let client = Arc::new(NewsClient::new(&config.api.base_url, &api_key));

    // Create app state
    let state = Arc::new(AppState {
        client,
        page_size: config.page_size,
        default_query: config.default_query,
    });

    // Build router
    let app = Router::new()
        .route("/", get(routes::index))
        .route("/api/news", get(routes::api_news))
        .route("/health", get(routes::health))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    info!("Server starting on http://localhost:3000");

    axum::serve(listener, app).await?;

    Ok(())
}
