use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::{
    cache::ResponseCache,
    config::Config,
    upstream::{AqicnClient, AqicnError, MapBounds},
};

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub upstream: Arc<AqicnClient>,
    pub cache: Arc<ResponseCache>,
}

/// Handler-boundary errors, rendered as the uniform
/// `{"status":"error","message":...}` envelope. Provider detail is logged
/// but never leaked to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Keyword required")]
    MissingKeyword,
    #[error("{message}")]
    Upstream {
        message: &'static str,
        #[source]
        source: AqicnError,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingKeyword => (StatusCode::BAD_REQUEST, "Keyword required"),
            ApiError::Upstream { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, *message),
        };
        (
            status,
            Json(json!({ "status": "error", "message": message })),
        )
            .into_response()
    }
}

// Request/Response types
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub keyword: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BoundsQuery {
    pub lat1: Option<f64>,
    pub lng1: Option<f64>,
    pub lat2: Option<f64>,
    pub lng2: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Wraps a proxied payload with the advisory `s-maxage` header matching the
/// endpoint's TTL class, so intermediary HTTP caches can shed upstream load
/// independently of the in-process cache.
fn passthrough(payload: Value, ttl: Duration) -> Response {
    let advisory = format!("s-maxage={}, stale-while-revalidate", ttl.as_secs());
    ([(header::CACHE_CONTROL, advisory)], Json(payload)).into_response()
}

// Route handlers
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Proxy for the city feed: `/api/feed/:city`.
pub async fn feed(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Response, ApiError> {
    let ttl = state.config.feed_ttl();
    let cache_key = format!("feed:{}", city);

    if let Some(cached) = state.cache.get(&cache_key, ttl).await {
        return Ok(passthrough(cached, ttl));
    }

    let payload = state.upstream.feed(&city).await.map_err(|e| {
        tracing::error!("Feed request for {} failed: {}", city, e);
        ApiError::Upstream {
            message: "Failed to fetch data",
            source: e,
        }
    })?;

    state.cache.put(cache_key, payload.clone()).await;
    Ok(passthrough(payload, ttl))
}

/// Proxy for keyword search: `/api/search?keyword=`.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Response, ApiError> {
    let keyword = match params.keyword.as_deref() {
        Some(keyword) if !keyword.is_empty() => keyword.to_string(),
        _ => return Err(ApiError::MissingKeyword),
    };

    let ttl = state.config.search_ttl();
    let cache_key = format!("search:{}", keyword);

    if let Some(cached) = state.cache.get(&cache_key, ttl).await {
        return Ok(passthrough(cached, ttl));
    }

    let payload = state.upstream.search(&keyword).await.map_err(|e| {
        tracing::error!("Search for {:?} failed: {}", keyword, e);
        ApiError::Upstream {
            message: "Search failed",
            source: e,
        }
    })?;

    state.cache.put(cache_key, payload.clone()).await;
    Ok(passthrough(payload, ttl))
}

/// Proxy for stations in a bounding box: `/api/map/bounds`. Omitted bounds
/// widen to the whole world.
pub async fn map_bounds(
    State(state): State<AppState>,
    Query(params): Query<BoundsQuery>,
) -> Result<Response, ApiError> {
    let defaults = MapBounds::default();
    let bounds = MapBounds {
        lat1: params.lat1.unwrap_or(defaults.lat1),
        lng1: params.lng1.unwrap_or(defaults.lng1),
        lat2: params.lat2.unwrap_or(defaults.lat2),
        lng2: params.lng2.unwrap_or(defaults.lng2),
    };

    let ttl = state.config.map_bounds_ttl();
    let cache_key = bounds.cache_key();

    if let Some(cached) = state.cache.get(&cache_key, ttl).await {
        return Ok(passthrough(cached, ttl));
    }

    let payload = state.upstream.map_bounds(&bounds).await.map_err(|e| {
        tracing::error!("Map bounds request for {} failed: {}", bounds.latlng(), e);
        ApiError::Upstream {
            message: "Failed to fetch map data",
            source: e,
        }
    })?;

    state.cache.put(cache_key, payload.clone()).await;
    Ok(passthrough(payload, ttl))
}

// Create the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/feed/:city", get(feed))
        .route("/api/search", get(search))
        .route("/api/map/bounds", get(map_bounds))
        .route("/api/health", get(health))
        .with_state(state)
}
