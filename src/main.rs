use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use airwatch_server::cache::ResponseCache;
use airwatch_server::config::Config;
use airwatch_server::routes::{create_router, AppState};
use airwatch_server::upstream::AqicnClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "airwatch_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    let port = config.port;

    // Initialize upstream client and the response cache it feeds
    let upstream = Arc::new(AqicnClient::new(config.clone()));
    let cache = Arc::new(ResponseCache::new());

    let config = Arc::new(config);

    // Create application state
    let state = AppState {
        config,
        upstream,
        cache,
    };

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    tracing::info!("AirWatch API server running at http://0.0.0.0:{}", port);
    tracing::info!(
        "Endpoints: GET /api/feed/:city, GET /api/search?keyword=, GET /api/map/bounds, GET /api/health"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
