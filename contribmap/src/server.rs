use crate::config::Config;
use anyhow::Context;
use axum::{
    Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use contribmap_core::{
    CacheService, MapTemplate, RenderError, Variant, aggregate, collect_contributors, render,
};
use contribmap_source::GitHubClient;
use serde::Deserialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Everything a request needs, built once at startup.
pub struct AppState {
    pub source: GitHubClient,
    pub cache: Arc<CacheService>,
    pub template: Arc<MapTemplate>,
    pub default_repo: String,
}

impl AppState {
    /// Load the template, open the caches and build the API client.
    ///
    /// Fails when the template cannot be loaded; the server must not start
    /// without one.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let template = config
            .load_template()
            .context("Failed to load map template")?;
        let source = config
            .github_client()
            .context("Failed to build GitHub client")?;

        Ok(Self {
            source,
            cache: Arc::new(config.open_cache()),
            template: Arc::new(template),
            default_repo: config.default_repo.clone(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct HeatmapQuery {
    pub repo: Option<String>,
    pub variant: Option<String>,
    pub refresh: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/heatmap", get(heatmap_handler))
        .with_state(state)
}

/// Bind `config.bind` and serve until the process is stopped.
pub async fn serve(config: &Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState::from_config(config)?);
    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;

    info!("Serving heatmaps on http://{}/api/heatmap", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

pub async fn heatmap_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HeatmapQuery>,
) -> Response {
    let repo = select_repo(query.repo.as_deref(), &state.default_repo);
    let variant = query
        .variant
        .as_deref()
        .and_then(Variant::from_str)
        .unwrap_or_default();
    let force_refresh = parse_refresh_flag(query.refresh.as_deref());

    match build_heatmap(&state, &repo, variant, force_refresh).await {
        Ok(svg) => svg_response(svg),
        Err(e) => {
            error!("Heatmap for {} failed: {:#}", repo, e);
            error_response(&format!("{:#}", e))
        }
    }
}

/// Collect, aggregate and render one heatmap.
pub async fn build_heatmap(
    state: &AppState,
    repo: &str,
    variant: Variant,
    force_refresh: bool,
) -> anyhow::Result<Vec<u8>> {
    let records = collect_contributors(&state.source, &state.cache, repo, force_refresh).await?;
    let template = state.template.clone();

    // A panic while rendering surfaces as a JoinError instead of tearing
    // down the worker.
    let svg = tokio::task::spawn_blocking(move || {
        let counts = aggregate(&records);
        render(&counts, variant, &template)
    })
    .await
    .map_err(|e| RenderError::Task(e.to_string()))??;

    info!(
        "Rendered {} heatmap for {} ({} bytes)",
        variant.as_str(),
        repo,
        svg.len()
    );
    Ok(svg)
}

/// `1`, `true` and `yes` (any case) request a refresh.
/// The requested repo with surrounding whitespace removed, or `default`
/// when none was given. The result is also the repo cache key.
pub fn select_repo(requested: Option<&str>, default: &str) -> String {
    requested
        .map(str::trim)
        .filter(|repo| !repo.is_empty())
        .unwrap_or(default)
        .to_string()
}

pub fn parse_refresh_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
}

pub fn svg_response(svg: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "no-cache, max-age=0"),
        ],
        svg,
    )
        .into_response()
}

pub fn error_response(detail: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!("Internal Error: {}", detail),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_refresh_flag() {
        assert!(parse_refresh_flag(Some("1")));
        assert!(parse_refresh_flag(Some("true")));
        assert!(parse_refresh_flag(Some("YES")));
        assert!(!parse_refresh_flag(Some("0")));
        assert!(!parse_refresh_flag(Some("no")));
        assert!(!parse_refresh_flag(Some("")));
        assert!(!parse_refresh_flag(None));
    }

    #[test]
    fn test_svg_response_headers() {
        let response = svg_response(b"<svg/>".to_vec());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/svg+xml");
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "no-cache, max-age=0"
        );
    }

    #[test]
    fn test_error_response() {
        let response = error_response("boom");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
