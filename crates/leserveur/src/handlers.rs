//! HTTP handlers for the REST endpoints.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::IntoResponse,
    Json, Router,
};
use std::sync::Arc;
use tracing::info;

use crate::config::{
    ServerConfig, SEO_CHECK_MAX_AGE_SECS, SITEMAP_MAX_AGE_SECS, SITE_STATS_MAX_AGE_SECS,
};
use crate::error::{ApiError, ApiResult};
use crate::responses::{SeoCheckRequest, SeoCheckResponse};
use lecarte::{build_entries, render_xml};
use lecontenu::{
    default_robots_policy, demo_blog_posts, demo_categories, demo_static_routes, site_stats,
};

/// State shared across all handlers.
///
/// The engines are pure, so the state is just the immutable configuration.
#[derive(Clone)]
pub struct AppState {
    /// Immutable server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new AppState instance.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Resolve the public base URL for generated links.
///
/// Prefers the configured base URL; otherwise derives it from the
/// `x-forwarded-proto` and `host` request headers.
fn resolve_base_url(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(base_url) = &state.config.base_url {
        return base_url.clone();
    }

    let proto = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost:3000");

    format!("{proto}://{host}")
}

fn cache_control(max_age_secs: u32) -> (header::HeaderName, String) {
    (
        header::CACHE_CONTROL,
        format!("public, max-age={max_age_secs}"),
    )
}

/// POST /api/seo-check - Score the metadata a URL declares.
pub async fn seo_check(
    State(_state): State<AppState>,
    Json(request): Json<SeoCheckRequest>,
) -> ApiResult<impl IntoResponse> {
    let url = request
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::bad_request("URL is required"))?;

    info!(url, "running seo-check");
    let response = SeoCheckResponse::for_url(url);

    Ok(([cache_control(SEO_CHECK_MAX_AGE_SECS)], Json(response)))
}

/// GET /sitemap.xml - Render the sitemap for the demo catalogs.
pub async fn sitemap_xml(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let base_url = resolve_base_url(&state, &headers);
    let entries = build_entries(
        &base_url,
        &demo_static_routes(),
        &demo_blog_posts(),
        &demo_categories(),
    );
    info!(%base_url, entries = entries.len(), "rendering sitemap");

    (
        [
            (header::CONTENT_TYPE, "application/xml".to_string()),
            cache_control(SITEMAP_MAX_AGE_SECS),
        ],
        render_xml(&entries),
    )
}

/// GET /robots.txt - Render the default robots policy.
pub async fn robots_txt(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let base_url = resolve_base_url(&state, &headers);
    default_robots_policy(&base_url).render()
}

/// GET /api/site-stats - The fixed site statistics aggregate.
pub async fn get_site_stats(State(_state): State<AppState>) -> impl IntoResponse {
    ([cache_control(SITE_STATS_MAX_AGE_SECS)], Json(site_stats()))
}

/// GET /api/health - Health check endpoint.
pub async fn health_check(State(_state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "leseo",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Create router with all endpoints.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", axum::routing::get(health_check))
        .route("/api/seo-check", axum::routing::post(seo_check))
        .route("/api/site-stats", axum::routing::get(get_site_stats))
        .route("/sitemap.xml", axum::routing::get(sitemap_xml))
        .route("/robots.txt", axum::routing::get(robots_txt))
}
