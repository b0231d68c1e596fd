//! Top-level router: API routes, health check and HTTP middleware.

use axum::{routing::get, Json, Router};
use http::{HeaderValue, Method};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{AllowedOrigins, ServerConfig};

use super::chat::{chat_routes, ChatHandlers};
use super::songs::{song_routes, SongHandlers};

/// Builds the full application router.
pub fn api_router(songs: SongHandlers, chat: ChatHandlers, server: &ServerConfig) -> Router {
    let api = song_routes(songs).merge(chat_routes(chat));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(cors_layer(server.allowed_origins()))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Origins that are not valid header values are skipped.
fn cors_layer(origins: AllowedOrigins) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    let AllowedOrigins::Only(origins) = origins else {
        return base.allow_origin(Any);
    };
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        base.allow_origin(Any)
    } else {
        base.allow_origin(AllowOrigin::list(allowed))
    }
}
