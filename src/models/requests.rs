//! Tool Parameter Shapes
//!
//! Incoming argument objects for the three tool operations, with the
//! defaults the input schemas advertise.

use serde::Deserialize;

fn default_version() -> String {
    "latest".to_string()
}

fn default_true() -> bool {
    true
}

fn default_limit() -> u32 {
    20
}

/// Arguments for `get_package_readme`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetPackageReadmeParams {
    /// Package name (required)
    pub package_name: String,
    /// Version or dist-tag (default: "latest")
    #[serde(default = "default_version")]
    pub version: String,
    /// Whether to extract usage examples from the README (default: true)
    #[serde(default = "default_true")]
    pub include_examples: bool,
}

/// Arguments for `get_package_info`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetPackageInfoParams {
    /// Package name (required)
    pub package_name: String,
    /// Whether to include runtime dependencies (default: true)
    #[serde(default = "default_true")]
    pub include_dependencies: bool,
    /// Whether to include development dependencies (default: false)
    #[serde(default)]
    pub include_dev_dependencies: bool,
}

/// Arguments for `search_packages`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPackagesParams {
    /// Search query (required)
    pub query: String,
    /// Maximum number of results, 1-250 (default: 20)
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Minimum quality score filter, 0-1 (optional)
    #[serde(default)]
    pub quality: Option<f64>,
    /// Minimum popularity score filter, 0-1 (optional)
    #[serde(default)]
    pub popularity: Option<f64>,
}
