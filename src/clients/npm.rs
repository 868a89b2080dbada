//! npm Registry Client
//!
//! Fetches package documents and search results from the public npm registry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::clients::PackageRegistry;
use crate::error::{Result, ServerError};
use crate::models::npm::{NpmPackageDoc, NpmSearchResponse};

/// Public npm registry base URL.
pub const NPM_REGISTRY_BASE: &str = "https://registry.npmjs.org";

const USER_AGENT: &str = concat!("pkg-readme-server/", env!("CARGO_PKG_VERSION"));

// == Npm Client ==
#[derive(Debug, Clone)]
pub struct NpmClient {
    http: reqwest::Client,
    base_url: String,
}

impl NpmClient {
    // == Constructor ==
    /// Builds a client with a total per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: NPM_REGISTRY_BASE.to_string(),
        })
    }

    /// Maps a non-success registry status to the matching error kind.
    fn status_error(status: StatusCode, context: &str) -> ServerError {
        if status == StatusCode::TOO_MANY_REQUESTS {
            ServerError::RateLimited("npm registry".to_string())
        } else {
            ServerError::Network(format!("npm registry returned {status} for {context}"))
        }
    }
}

/// Percent-encodes the scope separator so scoped names form a single path
/// segment (`@babel/core` -> `@babel%2Fcore`).
pub(crate) fn encode_package_name(name: &str) -> String {
    name.replace('/', "%2F")
}

#[async_trait]
impl PackageRegistry for NpmClient {
    async fn get_package(&self, name: &str) -> Result<NpmPackageDoc> {
        let url = format!("{}/{}", self.base_url, encode_package_name(name));
        debug!("Fetching package document: {url}");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ServerError::PackageNotFound(name.to_string()));
        }
        if !status.is_success() {
            return Err(Self::status_error(status, name));
        }

        Ok(response.json::<NpmPackageDoc>().await?)
    }

    async fn search(&self, query: &str, limit: u32) -> Result<NpmSearchResponse> {
        let url = format!("{}/-/v1/search", self.base_url);
        let size = limit.to_string();
        debug!("Searching registry: {query:?} (size: {size})");

        let response = self
            .http
            .get(&url)
            .query(&[("text", query), ("size", size.as_str())])
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Self::status_error(status, query));
        }

        Ok(response.json::<NpmSearchResponse>().await?)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_package_name() {
        assert_eq!(encode_package_name("lodash"), "lodash");
        assert_eq!(encode_package_name("@babel/core"), "@babel%2Fcore");
    }

    #[test]
    fn test_client_construction() {
        let client = NpmClient::new(Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url, NPM_REGISTRY_BASE);
    }

    #[test]
    fn test_status_error_mapping() {
        let err = NpmClient::status_error(StatusCode::TOO_MANY_REQUESTS, "lodash");
        assert_eq!(err.code(), "RATE_LIMIT_EXCEEDED");

        let err = NpmClient::status_error(StatusCode::INTERNAL_SERVER_ERROR, "lodash");
        assert_eq!(err.code(), "NETWORK_ERROR");
    }
}
