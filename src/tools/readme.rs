//! get_package_readme Tool
//!
//! Fetches a package's README and usage examples, serving repeat requests
//! from the response cache.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::api::AppState;
use crate::cache::key;
use crate::error::{Result, ServerError};
use crate::models::requests::GetPackageReadmeParams;
use crate::models::responses::{InstallationInfo, PackageReadmeResponse};
use crate::readme::{fetch_readme_content, parser};
use crate::tools::{build_basic_info, build_repository_info};
use crate::validate;

pub async fn get_package_readme(
    state: &AppState,
    params: GetPackageReadmeParams,
) -> Result<Value> {
    let GetPackageReadmeParams {
        package_name,
        version,
        include_examples,
    } = params;

    info!("Fetching package README: {package_name}@{version}");

    validate::package_name(&package_name)?;
    if version != "latest" {
        validate::version(&version)?;
    }

    let cache_key = key::package_readme(&package_name, &version);
    if let Some(cached) = state.cache.get(&cache_key).await {
        debug!("Cache hit for package README: {package_name}@{version}");
        return Ok(cached);
    }

    let doc = match state.registry.get_package(&package_name).await {
        Ok(doc) => doc,
        Err(ServerError::PackageNotFound(_)) => {
            // Structured not-found payload; deliberately not cached.
            warn!("Package not found: {package_name}");
            let response = PackageReadmeResponse::not_found(&package_name, &version);
            return Ok(serde_json::to_value(response)?);
        }
        Err(err) => return Err(err),
    };

    let version_info = doc.resolve_version(&version)?;
    let actual_version = version_info.version.clone();

    let readme = fetch_readme_content(&doc, version_info, state.readme_source.as_ref()).await;
    // Examples come from the raw content; the response body gets the cleaned form.
    let usage_examples = parser::extract_usage_examples(&readme.content, include_examples);
    let readme_content = parser::clean_markdown(&readme.content);

    let basic_info = build_basic_info(version_info, &doc);
    let repository = build_repository_info(version_info.repository.as_ref());

    let response = PackageReadmeResponse {
        package_name: package_name.clone(),
        version: actual_version.clone(),
        description: basic_info.description.clone(),
        readme_content,
        usage_examples,
        installation: InstallationInfo::for_package(&package_name),
        basic_info,
        repository,
        exists: true,
    };

    let value = serde_json::to_value(&response)?;
    state
        .cache
        .set(cache_key, value.clone(), Some(state.package_ttl))
        .await;

    info!(
        "Successfully fetched package README: {package_name}@{actual_version} (README source: {})",
        readme.source
    );
    Ok(value)
}
