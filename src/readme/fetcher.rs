//! README Fetcher
//!
//! Resolves README content for a package version: the registry document's
//! own `readme` field first, then the GitHub fallback via the version's
//! repository descriptor.

use std::fmt;

use tracing::debug;

use crate::clients::ReadmeSource;
use crate::models::npm::{NpmPackageDoc, NpmVersionInfo};

// == Readme Origin ==
/// Where the README content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadmeOrigin {
    Npm,
    GitHub,
    None,
}

impl fmt::Display for ReadmeOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadmeOrigin::Npm => write!(f, "npm"),
            ReadmeOrigin::GitHub => write!(f, "github"),
            ReadmeOrigin::None => write!(f, "none"),
        }
    }
}

/// README content together with its origin.
#[derive(Debug, Clone)]
pub struct ReadmeResult {
    pub content: String,
    pub source: ReadmeOrigin,
}

// == Fetch Readme Content ==
/// Picks the README for a resolved version.
///
/// The registry's `readme` field wins when present; otherwise the version's
/// repository descriptor is handed to the fallback source. Both misses yield
/// empty content rather than an error.
pub async fn fetch_readme_content(
    doc: &NpmPackageDoc,
    version_info: &NpmVersionInfo,
    fallback: &dyn ReadmeSource,
) -> ReadmeResult {
    if let Some(readme) = doc.readme.as_deref().filter(|r| !r.is_empty()) {
        debug!("Got README from npm registry: {}", version_info.name);
        return ReadmeResult {
            content: readme.to_string(),
            source: ReadmeOrigin::Npm,
        };
    }

    if let Some(repository) = version_info
        .repository
        .as_ref()
        .and_then(|field| field.as_info())
    {
        if let Some(content) = fallback.readme_from_repository(repository).await {
            debug!("Got README from GitHub: {}", version_info.name);
            return ReadmeResult {
                content,
                source: ReadmeOrigin::GitHub,
            };
        }
    }

    debug!("No README found for: {}", version_info.name);
    ReadmeResult {
        content: String::new(),
        source: ReadmeOrigin::None,
    }
}
