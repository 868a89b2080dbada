//! get_package_info Tool
//!
//! Fetches a package's latest-version metadata and dependency maps, serving
//! repeat requests from the response cache.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::api::AppState;
use crate::cache::key;
use crate::error::{Result, ServerError};
use crate::models::requests::GetPackageInfoParams;
use crate::models::responses::{DownloadStats, PackageInfoResponse};
use crate::tools::{author_display, build_repository_info};
use crate::validate;

pub async fn get_package_info(state: &AppState, params: GetPackageInfoParams) -> Result<Value> {
    let GetPackageInfoParams {
        package_name,
        include_dependencies,
        include_dev_dependencies,
    } = params;

    info!("Fetching package info: {package_name}");

    validate::package_name(&package_name)?;

    // Info responses always describe the latest version.
    let cache_key = key::package_info(&package_name, "latest");
    if let Some(cached) = state.cache.get(&cache_key).await {
        debug!("Cache hit for package info: {package_name}");
        return Ok(cached);
    }

    let doc = match state.registry.get_package(&package_name).await {
        Ok(doc) => doc,
        Err(ServerError::PackageNotFound(_)) => {
            // Structured not-found payload; deliberately not cached.
            warn!("Package not found: {package_name}");
            let response = PackageInfoResponse::not_found(&package_name);
            return Ok(serde_json::to_value(response)?);
        }
        Err(err) => return Err(err),
    };

    let version_info = doc.resolve_version("latest")?;
    let latest_version = version_info.version.clone();

    let author = author_display(version_info.author.as_ref(), doc.author.as_ref());
    let repository = build_repository_info(
        version_info
            .repository
            .as_ref()
            .or(doc.repository.as_ref()),
    );

    let dependencies = if include_dependencies {
        version_info.dependencies.clone()
    } else {
        None
    };
    let dev_dependencies = if include_dev_dependencies {
        version_info.dev_dependencies.clone()
    } else {
        None
    };

    let response = PackageInfoResponse {
        package_name: package_name.clone(),
        latest_version: latest_version.clone(),
        description: version_info
            .description
            .clone()
            .or_else(|| doc.description.clone())
            .unwrap_or_else(|| "No description available".to_string()),
        author,
        license: version_info
            .license
            .clone()
            .or_else(|| doc.license.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        keywords: version_info
            .keywords
            .clone()
            .or_else(|| doc.keywords.clone())
            .unwrap_or_default(),
        dependencies,
        dev_dependencies,
        download_stats: DownloadStats::default(),
        repository,
        exists: true,
    };

    let value = serde_json::to_value(&response)?;
    state
        .cache
        .set(cache_key, value.clone(), Some(state.package_ttl))
        .await;

    info!("Successfully fetched package info: {package_name}@{latest_version}");
    Ok(value)
}
