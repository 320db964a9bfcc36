use std::sync::Arc;

use axum::{
    extract::State,
    http::{
        header::{ACCEPT, AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE},
        HeaderMap, HeaderName, HeaderValue, Method, Uri,
    },
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::debug;

use super::{config::Config, error::AppError, state::AppState};

/// Request headers forwarded to the analytics service.
const FORWARDED: [HeaderName; 2] = [ACCEPT, AUTHORIZATION];

pub fn router(state: Arc<AppState>) -> Router {
    let dist = state.config.dist_dir.clone();
    // Unknown paths get index.html so the client router can resolve them.
    let spa = ServeDir::new(&dist).fallback(ServeFile::new(dist.join("index.html")));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        .route("/healthz", get(health_handler))
        .route("/config.js", get(config_handler))
        .route("/api/*path", get(proxy_handler))
        .fallback_service(spa)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn health_handler() -> &'static str {
    "ok"
}

pub async fn config_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (CACHE_CONTROL, "no-store"),
        ],
        config_script(&state.config),
    )
}

/// Script assigning the SPA's runtime globals.
pub fn config_script(config: &Config) -> String {
    format!(
        "window.BI_API_BASE = {};\nwindow.BI_REQUIRE_AUTH = {};\n",
        serde_json::Value::from(config.public_api_base.as_str()),
        config.require_auth
    )
}

pub async fn proxy_handler(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let upstream = state
        .config
        .upstream_url
        .as_deref()
        .ok_or(AppError::ProxyDisabled)?;
    let path = uri.path().strip_prefix("/api").unwrap_or(uri.path());
    let url = upstream_url(upstream, path, uri.query());

    let mut request = state.client.get(&url);
    for name in FORWARDED {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }

    let upstream_response = request.send().await?;
    let status = upstream_response.status();
    let content_type: Option<HeaderValue> = upstream_response.headers().get(CONTENT_TYPE).cloned();
    let body = upstream_response.bytes().await?;
    debug!(%status, %url, bytes = body.len(), "proxied");

    let mut response = (status, body).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}

fn upstream_url(upstream: &str, path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{upstream}{path}?{q}"),
        _ => format!("{upstream}{path}"),
    }
}
