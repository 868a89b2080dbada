//! GitHub Client
//!
//! README fallback: resolves a manifest's repository URL to a GitHub
//! `owner/repo` pair and fetches the raw README through the REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use tracing::debug;

use crate::clients::ReadmeSource;
use crate::error::{Result, ServerError};
use crate::models::responses::RepositoryInfo;

/// GitHub REST API base URL.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("pkg-readme-server/", env!("CARGO_PKG_VERSION"));

// == GitHub Client ==
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    token: Option<String>,
}

impl GitHubClient {
    // == Constructor ==
    /// Builds a client with a total per-request timeout and an optional API
    /// token (unauthenticated requests work but are rate-limited harder).
    pub fn new(timeout: Duration, token: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { http, token })
    }

    // == Get Readme ==
    /// Fetches the repository's README as raw markdown.
    pub async fn get_readme(&self, owner: &str, repo: &str) -> Result<String> {
        let url = format!("{GITHUB_API_BASE}/repos/{owner}/{repo}/readme");
        debug!("Fetching README: {url}");

        let mut request = self
            .http
            .get(&url)
            .header(ACCEPT, "application/vnd.github.v3.raw");
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {token}"));
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(ServerError::RateLimited("GitHub API".to_string()));
        }
        if !status.is_success() {
            return Err(ServerError::Network(format!(
                "GitHub API returned {status} for {owner}/{repo}"
            )));
        }

        Ok(response.text().await?)
    }
}

// == Repository URL Parsing ==
/// Extracts `(owner, repo)` from the repository URL forms that appear in
/// npm manifests: `https://`, `http://`, `git://`, `git+https://` and
/// `git@github.com:` SSH shorthand. Non-GitHub or malformed URLs yield None.
pub fn parse_repository_url(url: &str) -> Option<(String, String)> {
    let rest = if let Some(ssh_path) = url.strip_prefix("git@github.com:") {
        ssh_path
    } else {
        let stripped = url.strip_prefix("git+").unwrap_or(url);
        let has_scheme = stripped.starts_with("https://")
            || stripped.starts_with("http://")
            || stripped.starts_with("git://");
        if !has_scheme {
            return None;
        }
        let after_scheme = &stripped[stripped.find("://")? + 3..];
        after_scheme.strip_prefix("github.com/")?
    };

    let mut segments = rest.split('/');
    let owner = segments.next().filter(|s| !s.is_empty())?;
    let repo = segments
        .next()
        .filter(|s| !s.is_empty())?
        .trim_end_matches(".git");
    if repo.is_empty() {
        return None;
    }

    Some((owner.to_string(), repo.to_string()))
}

#[async_trait]
impl ReadmeSource for GitHubClient {
    async fn readme_from_repository(&self, repository: &RepositoryInfo) -> Option<String> {
        if repository.kind != "git" {
            return None;
        }

        let (owner, repo) = parse_repository_url(&repository.url)?;

        match self.get_readme(&owner, &repo).await {
            Ok(content) => Some(content),
            Err(err) => {
                debug!("GitHub README fetch failed for {owner}/{repo}: {err}");
                None
            }
        }
    }
}
