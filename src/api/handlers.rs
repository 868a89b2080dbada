//! API Handlers
//!
//! HTTP request handlers for the protocol front-end: tool listing, tool
//! dispatch, cache statistics and health.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::cache::{CacheStats, SharedCache};
use crate::clients::{GitHubClient, NpmClient, PackageRegistry, ReadmeSource};
use crate::config::Config;
use crate::error::{Result, ServerError};
use crate::models::requests::{
    GetPackageInfoParams, GetPackageReadmeParams, SearchPackagesParams,
};
use crate::models::responses::HealthResponse;
use crate::{api::schema, tools};

/// Application state shared across all handlers.
///
/// Holds the process-wide response cache and the upstream collaborators
/// behind their trait seams, so tests can swap in fakes.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<SharedCache>,
    pub registry: Arc<dyn PackageRegistry>,
    pub readme_source: Arc<dyn ReadmeSource>,
    /// TTL for cached package/readme responses
    pub package_ttl: std::time::Duration,
    /// TTL for cached search responses
    pub search_ttl: std::time::Duration,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(
        cache: Arc<SharedCache>,
        registry: Arc<dyn PackageRegistry>,
        readme_source: Arc<dyn ReadmeSource>,
        package_ttl: std::time::Duration,
        search_ttl: std::time::Duration,
    ) -> Self {
        Self {
            cache,
            registry,
            readme_source,
            package_ttl,
            search_ttl,
        }
    }

    /// Builds the real clients and cache from configuration.
    ///
    /// Must run inside a tokio runtime (the cache starts its sweep task).
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = Arc::new(SharedCache::start(
            config.cache_max_bytes,
            config.cache_default_ttl,
            config.sweep_interval,
        ));
        let registry = Arc::new(NpmClient::new(config.request_timeout)?);
        let readme_source = Arc::new(GitHubClient::new(
            config.request_timeout,
            config.github_token.clone(),
        )?);

        Ok(Self::new(
            cache,
            registry,
            readme_source,
            config.cache_default_ttl,
            config.search_ttl,
        ))
    }
}

fn parse_params<T: DeserializeOwned>(args: Value) -> Result<T> {
    serde_json::from_value(args).map_err(|err| ServerError::InvalidParams(err.to_string()))
}

/// Handler for GET /tools
///
/// Lists the callable operations with their input schemas.
pub async fn list_tools_handler() -> Json<ToolListResponse> {
    Json(ToolListResponse {
        tools: schema::tool_definitions(),
    })
}

/// Response body for the tool listing.
#[derive(Debug, Serialize)]
pub struct ToolListResponse {
    pub tools: Vec<schema::ToolDefinition>,
}

/// Handler for POST /tools/:name
///
/// Dispatches a JSON argument object to the matching tool handler.
pub async fn call_tool_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(args): Json<Value>,
) -> Result<Json<Value>> {
    let result = match name.as_str() {
        schema::GET_PACKAGE_README => {
            let params: GetPackageReadmeParams = parse_params(args)?;
            tools::get_package_readme(&state, params).await?
        }
        schema::GET_PACKAGE_INFO => {
            let params: GetPackageInfoParams = parse_params(args)?;
            tools::get_package_info(&state, params).await?
        }
        schema::SEARCH_PACKAGES => {
            let params: SearchPackagesParams = parse_params(args)?;
            tools::search_packages(&state, params).await?
        }
        _ => return Err(ServerError::UnknownTool(name)),
    };

    Ok(Json(result))
}

/// Handler for GET /cache/stats
///
/// Returns the store's entry count and estimated memory footprint.
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats().await)
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
