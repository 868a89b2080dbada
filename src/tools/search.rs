//! search_packages Tool
//!
//! Full-text registry search with optional minimum-score filters, served
//! from the response cache under a shorter TTL than package metadata.

use serde_json::Value;
use tracing::{debug, info};

use crate::api::AppState;
use crate::cache::key;
use crate::error::Result;
use crate::models::requests::SearchPackagesParams;
use crate::models::responses::{PackageSearchResult, SearchPackagesResponse};
use crate::validate;

pub async fn search_packages(state: &AppState, params: SearchPackagesParams) -> Result<Value> {
    let SearchPackagesParams {
        query,
        limit,
        quality,
        popularity,
    } = params;

    info!("Searching packages: {query:?} (limit: {limit})");

    validate::search_query(&query)?;
    validate::limit(limit)?;
    if let Some(quality) = quality {
        validate::score(quality, "Quality")?;
    }
    if let Some(popularity) = popularity {
        validate::score(popularity, "Popularity")?;
    }

    let cache_key = key::search_results(&query, limit, quality, popularity);
    if let Some(cached) = state.cache.get(&cache_key).await {
        debug!("Cache hit for search: {query:?}");
        return Ok(cached);
    }

    let results = state.registry.search(&query, limit).await?;

    let mut packages: Vec<PackageSearchResult> = results
        .objects
        .into_iter()
        .map(|object| {
            let package = object.package;
            PackageSearchResult {
                name: package.name,
                version: package.version,
                description: package
                    .description
                    .unwrap_or_else(|| "No description available".to_string()),
                keywords: package.keywords.unwrap_or_default(),
                author: package
                    .author
                    .and_then(|author| author.name)
                    .unwrap_or_else(|| "Unknown".to_string()),
                publisher: package
                    .publisher
                    .map(|user| user.username)
                    .unwrap_or_else(|| "Unknown".to_string()),
                maintainers: package
                    .maintainers
                    .into_iter()
                    .map(|user| user.username)
                    .collect(),
                score: object.score,
                search_score: object.search_score,
            }
        })
        .collect();

    // Minimum-score filters are applied client-side; the registry has no
    // equivalent query parameter.
    if let Some(quality) = quality {
        packages.retain(|package| package.score.detail.quality >= quality);
    }
    if let Some(popularity) = popularity {
        packages.retain(|package| package.score.detail.popularity >= popularity);
    }

    let response = SearchPackagesResponse {
        query: query.clone(),
        total: packages.len(),
        packages,
    };

    let value = serde_json::to_value(&response)?;
    state
        .cache
        .set(cache_key, value.clone(), Some(state.search_ttl))
        .await;

    info!(
        "Successfully searched packages: {query:?}, found {} results",
        response.total
    );
    Ok(value)
}
