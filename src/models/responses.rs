//! Tool Response Shapes
//!
//! The normalized response objects returned by the three tool operations,
//! plus the shared building blocks they are assembled from.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// == Shared Building Blocks ==

/// Structured author information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Author as it appears in package manifests: either a plain string or a
/// structured object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorField {
    Plain(String),
    Detailed(AuthorInfo),
}

impl AuthorField {
    /// Flattens the author to a display string (`Name <email>`).
    pub fn display(&self) -> String {
        match self {
            AuthorField::Plain(name) => name.clone(),
            AuthorField::Detailed(info) => match &info.email {
                Some(email) => format!("{} <{}>", info.name, email),
                None => info.name.clone(),
            },
        }
    }
}

/// Source repository descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

/// Install commands for the package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallationInfo {
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<String>>,
}

impl InstallationInfo {
    /// Canonical install commands for `package_name` across package managers.
    pub fn for_package(package_name: &str) -> Self {
        Self {
            command: format!("install {package_name}"),
            alternatives: Some(vec![
                format!("yarn add {package_name}"),
                format!("pnpm add {package_name}"),
            ]),
        }
    }
}

/// A code sample extracted from the README.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageExample {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub code: String,
    pub language: String,
}

/// Core manifest fields for a resolved package version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageBasicInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bugs: Option<String>,
    pub license: String,
    pub author: AuthorField,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributors: Option<Vec<AuthorInfo>>,
    pub keywords: Vec<String>,
}

/// Registry download counters (not populated by this server).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DownloadStats {
    pub last_day: u64,
    pub last_week: u64,
    pub last_month: u64,
}

/// Composite quality/popularity/maintenance score of a search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreInfo {
    #[serde(rename = "final")]
    pub final_score: f64,
    pub detail: ScoreDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetail {
    pub quality: f64,
    pub popularity: f64,
    pub maintenance: f64,
}

// == get_package_readme Response ==

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageReadmeResponse {
    pub package_name: String,
    pub version: String,
    pub description: String,
    pub readme_content: String,
    pub usage_examples: Vec<UsageExample>,
    pub installation: InstallationInfo,
    pub basic_info: PackageBasicInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<RepositoryInfo>,
    /// Whether the package exists in the registry
    pub exists: bool,
}

impl PackageReadmeResponse {
    /// The structured response for a package the registry does not know.
    pub fn not_found(package_name: &str, version: &str) -> Self {
        Self {
            package_name: package_name.to_string(),
            version: version.to_string(),
            description: "Package not found".to_string(),
            readme_content: String::new(),
            usage_examples: Vec::new(),
            installation: InstallationInfo::for_package(package_name),
            basic_info: PackageBasicInfo {
                name: package_name.to_string(),
                version: version.to_string(),
                description: "Package not found".to_string(),
                main: None,
                types: None,
                homepage: None,
                bugs: None,
                license: "Unknown".to_string(),
                author: AuthorField::Plain("Unknown".to_string()),
                contributors: None,
                keywords: Vec::new(),
            },
            repository: None,
            exists: false,
        }
    }
}

// == get_package_info Response ==

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageInfoResponse {
    pub package_name: String,
    pub latest_version: String,
    pub description: String,
    pub author: String,
    pub license: String,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_dependencies: Option<HashMap<String, String>>,
    pub download_stats: DownloadStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<RepositoryInfo>,
    /// Whether the package exists in the registry
    pub exists: bool,
}

impl PackageInfoResponse {
    /// The structured response for a package the registry does not know.
    pub fn not_found(package_name: &str) -> Self {
        Self {
            package_name: package_name.to_string(),
            latest_version: "unknown".to_string(),
            description: "Package not found".to_string(),
            author: "Unknown".to_string(),
            license: "Unknown".to_string(),
            keywords: Vec::new(),
            dependencies: None,
            dev_dependencies: None,
            download_stats: DownloadStats::default(),
            repository: None,
            exists: false,
        }
    }
}

// == search_packages Response ==

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageSearchResult {
    pub name: String,
    pub version: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub publisher: String,
    pub maintainers: Vec<String>,
    pub score: ScoreInfo,
    #[serde(rename = "searchScore")]
    pub search_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPackagesResponse {
    pub query: String,
    pub total: usize,
    pub packages: Vec<PackageSearchResult>,
}

// == Health Response ==

/// Response body for the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Current timestamp in RFC 3339 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
