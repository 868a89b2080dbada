//! Upstream Clients
//!
//! HTTP clients for the npm registry and the GitHub README fallback, behind
//! trait seams so tool handlers can be exercised against in-process fakes.

mod github;
mod npm;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::npm::{NpmPackageDoc, NpmSearchResponse};
use crate::models::responses::RepositoryInfo;

pub use github::{parse_repository_url, GitHubClient};
pub use npm::NpmClient;

// == Package Registry ==
/// Registry operations the tool handlers depend on.
#[async_trait]
pub trait PackageRegistry: Send + Sync {
    /// Fetches the full package document for `name`.
    async fn get_package(&self, name: &str) -> Result<NpmPackageDoc>;

    /// Runs a full-text search over the registry.
    async fn search(&self, query: &str, limit: u32) -> Result<NpmSearchResponse>;
}

// == Readme Source ==
/// Fallback source for README content when the registry document has none.
#[async_trait]
pub trait ReadmeSource: Send + Sync {
    /// Best-effort README fetch for a repository descriptor; any failure
    /// degrades to `None`.
    async fn readme_from_repository(&self, repository: &RepositoryInfo) -> Option<String>;
}
