//! npm Registry Wire Types
//!
//! Shapes of the documents returned by the public npm registry: the package
//! document, per-version manifests, and the search endpoint's response.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ServerError};
use crate::models::responses::{AuthorField, AuthorInfo, RepositoryInfo, ScoreInfo};

// == Repository Field ==
/// Repository as it appears in manifests: a structured descriptor or the
/// `owner/repo` shorthand string some packages still use.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepositoryField {
    Info(RepositoryInfo),
    Shorthand(String),
}

impl RepositoryField {
    /// The structured descriptor, if this is not a shorthand string.
    pub fn as_info(&self) -> Option<&RepositoryInfo> {
        match self {
            RepositoryField::Info(info) => Some(info),
            RepositoryField::Shorthand(_) => None,
        }
    }
}

// == Bugs Field ==
/// Bug tracker reference: a bare URL string or an object with a `url` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BugsField {
    Url(String),
    Detailed { url: Option<String> },
}

impl BugsField {
    pub fn url(&self) -> Option<&str> {
        match self {
            BugsField::Url(url) => Some(url),
            BugsField::Detailed { url } => url.as_deref(),
        }
    }
}

// == Package Document ==
/// Top-level registry document for a package (`GET /{name}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpmPackageDoc {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "dist-tags", default)]
    pub dist_tags: HashMap<String, String>,
    #[serde(default)]
    pub versions: HashMap<String, NpmVersionInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<RepositoryField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bugs: Option<BugsField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readme: Option<String>,
}

impl NpmPackageDoc {
    /// The version string the `latest` dist-tag points at.
    pub fn latest_version(&self) -> Option<&str> {
        self.dist_tags.get("latest").map(String::as_str)
    }

    /// Resolves a requested version to its manifest.
    ///
    /// `latest` and other dist-tags resolve through `dist-tags`; anything
    /// else is looked up literally in `versions`.
    pub fn resolve_version(&self, requested: &str) -> Result<&NpmVersionInfo> {
        let actual = self
            .dist_tags
            .get(requested)
            .map(String::as_str)
            .unwrap_or(requested);

        self.versions
            .get(actual)
            .ok_or_else(|| ServerError::VersionNotFound {
                package: self.name.clone(),
                version: requested.to_string(),
            })
    }
}

// == Version Manifest ==
/// Manifest for a single published version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpmVersionInfo {
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<HashMap<String, String>>,
    #[serde(rename = "devDependencies", skip_serializing_if = "Option::is_none")]
    pub dev_dependencies: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributors: Option<Vec<AuthorInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<RepositoryField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bugs: Option<BugsField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

// == Search Response ==
/// Response of `GET /-/v1/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpmSearchResponse {
    #[serde(default)]
    pub objects: Vec<NpmSearchObject>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpmSearchObject {
    pub package: NpmSearchPackage,
    pub score: ScoreInfo,
    #[serde(rename = "searchScore", default)]
    pub search_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpmSearchPackage {
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<NpmSearchAuthor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<NpmUser>,
    #[serde(default)]
    pub maintainers: Vec<NpmUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpmSearchAuthor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpmUser {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc_with_versions() -> NpmPackageDoc {
        serde_json::from_value(json!({
            "name": "lodash",
            "description": "Lodash modular utilities.",
            "dist-tags": { "latest": "4.17.21", "next": "5.0.0-alpha.1" },
            "versions": {
                "4.17.21": { "name": "lodash", "version": "4.17.21" },
                "5.0.0-alpha.1": { "name": "lodash", "version": "5.0.0-alpha.1" }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_resolve_latest_through_dist_tags() {
        let doc = doc_with_versions();
        assert_eq!(doc.latest_version(), Some("4.17.21"));
        assert_eq!(doc.resolve_version("latest").unwrap().version, "4.17.21");
    }

    #[test]
    fn test_resolve_named_dist_tag() {
        let doc = doc_with_versions();
        assert_eq!(
            doc.resolve_version("next").unwrap().version,
            "5.0.0-alpha.1"
        );
    }

    #[test]
    fn test_resolve_literal_version() {
        let doc = doc_with_versions();
        assert_eq!(doc.resolve_version("4.17.21").unwrap().version, "4.17.21");
    }

    #[test]
    fn test_resolve_unknown_version_errors() {
        let doc = doc_with_versions();
        let err = doc.resolve_version("9.9.9").unwrap_err();
        assert_eq!(err.code(), "VERSION_NOT_FOUND");
    }

    #[test]
    fn test_repository_field_shorthand() {
        let field: RepositoryField = serde_json::from_str("\"expressjs/express\"").unwrap();
        assert!(field.as_info().is_none());

        let field: RepositoryField = serde_json::from_value(json!({
            "type": "git",
            "url": "https://github.com/expressjs/express.git"
        }))
        .unwrap();
        assert_eq!(field.as_info().unwrap().kind, "git");
    }

    #[test]
    fn test_bugs_field_both_shapes() {
        let url: BugsField = serde_json::from_str("\"https://github.com/x/y/issues\"").unwrap();
        assert_eq!(url.url(), Some("https://github.com/x/y/issues"));

        let detailed: BugsField =
            serde_json::from_value(json!({"url": "https://example.com/bugs"})).unwrap();
        assert_eq!(detailed.url(), Some("https://example.com/bugs"));
    }

    #[test]
    fn test_search_response_tolerates_missing_fields() {
        let response: NpmSearchResponse = serde_json::from_value(json!({
            "objects": [{
                "package": { "name": "react", "version": "18.2.0" },
                "score": {
                    "final": 0.93,
                    "detail": { "quality": 0.9, "popularity": 0.95, "maintenance": 0.92 }
                },
                "searchScore": 100000.1
            }],
            "total": 1
        }))
        .unwrap();

        let object = &response.objects[0];
        assert_eq!(object.package.name, "react");
        assert!(object.package.publisher.is_none());
        assert!(object.package.maintainers.is_empty());
        assert_eq!(object.score.detail.popularity, 0.95);
    }
}
