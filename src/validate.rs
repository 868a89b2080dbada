//! Parameter Validation
//!
//! Input-shape checks applied before any cache lookup or upstream call.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, ServerError};

/// npm package name rules: optionally scoped, lowercase, limited punctuation.
static PACKAGE_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:@[a-z0-9\-*~][a-z0-9\-*._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$")
        .expect("package name regex")
});

/// Full semantic version with optional pre-release and build metadata.
static SEMVER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    )
    .expect("semver regex")
});

/// Dist-tags accepted in place of a concrete version.
const KNOWN_DIST_TAGS: &[&str] = &["latest", "next", "beta", "alpha"];

// == Package Name ==
/// Validates an npm package name (`lodash`, `@babel/core`, ...).
pub fn package_name(name: &str) -> Result<()> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ServerError::InvalidPackageName(
            "Package name cannot be empty".to_string(),
        ));
    }

    if trimmed.len() > 214 {
        return Err(ServerError::InvalidPackageName(format!(
            "Package name cannot exceed 214 characters (current: {})",
            trimmed.len()
        )));
    }

    if trimmed.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ServerError::InvalidPackageName(format!(
            "Package name cannot contain uppercase letters; try \"{}\"",
            trimmed.to_lowercase()
        )));
    }

    if trimmed.contains(' ') {
        return Err(ServerError::InvalidPackageName(
            "Package name cannot contain spaces".to_string(),
        ));
    }

    if trimmed.starts_with('.') || trimmed.ends_with('.') {
        return Err(ServerError::InvalidPackageName(
            "Package name cannot start or end with a dot".to_string(),
        ));
    }

    if trimmed.starts_with('-') || trimmed.ends_with('-') {
        return Err(ServerError::InvalidPackageName(
            "Package name cannot start or end with a hyphen".to_string(),
        ));
    }

    if trimmed.starts_with('@') {
        match trimmed.split('/').collect::<Vec<_>>().as_slice() {
            [scope, package] if *scope != "@" && !package.is_empty() => {}
            _ => {
                return Err(ServerError::InvalidPackageName(
                    "Scoped package names must follow the format @scope/package-name".to_string(),
                ));
            }
        }
    }

    if !PACKAGE_NAME_RE.is_match(trimmed) {
        return Err(ServerError::InvalidPackageName(format!(
            "Package name '{trimmed}' contains invalid characters"
        )));
    }

    Ok(())
}

// == Version ==
/// Validates a version string: a known dist-tag or a full semantic version.
pub fn version(version: &str) -> Result<()> {
    let trimmed = version.trim();

    if trimmed.is_empty() {
        return Err(ServerError::InvalidVersion(
            "Version cannot be empty".to_string(),
        ));
    }

    if KNOWN_DIST_TAGS.contains(&trimmed) {
        return Ok(());
    }

    if !SEMVER_RE.is_match(trimmed) {
        return Err(ServerError::InvalidVersion(
            "Version must be a valid semantic version (e.g. 1.0.0) or a dist-tag (e.g. latest)"
                .to_string(),
        ));
    }

    Ok(())
}

// == Search Query ==
/// Validates a search query: non-empty, bounded length.
pub fn search_query(query: &str) -> Result<()> {
    let trimmed = query.trim();

    if trimmed.is_empty() {
        return Err(ServerError::InvalidSearchQuery(
            "Search query cannot be empty".to_string(),
        ));
    }

    if trimmed.len() > 250 {
        return Err(ServerError::InvalidSearchQuery(
            "Search query cannot exceed 250 characters".to_string(),
        ));
    }

    Ok(())
}

// == Limit ==
/// Validates the search result limit (1-250).
pub fn limit(limit: u32) -> Result<()> {
    if !(1..=250).contains(&limit) {
        return Err(ServerError::InvalidLimit(
            "Limit must be an integer between 1 and 250".to_string(),
        ));
    }
    Ok(())
}

// == Score ==
/// Validates a quality/popularity filter score (finite, 0-1 inclusive).
pub fn score(value: f64, name: &str) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ServerError::InvalidScore(format!(
            "{name} must be a number between 0 and 1"
        )));
    }
    Ok(())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_package_names() {
        for name in [
            "lodash",
            "express",
            "my-package",
            "utils.js",
            "package_name",
            "@babel/core",
            "@types/node",
            "@my-org/utils",
        ] {
            assert!(package_name(name).is_ok(), "expected '{name}' to be valid");
        }
    }

    #[test]
    fn test_invalid_package_names() {
        for name in [
            "",
            "   ",
            "UPPERCASE",
            "has space",
            "@",
            "@/name",
            "@scope",
            "@scope/",
            "@scope/pkg/extra",
            ".leading-dot",
            "-leading-hyphen",
            "emoji💥",
        ] {
            let err = package_name(name).unwrap_err();
            assert_eq!(err.code(), "INVALID_PACKAGE_NAME", "name: '{name}'");
        }
    }

    #[test]
    fn test_package_name_length_limit() {
        let long = "a".repeat(215);
        assert!(package_name(&long).is_err());
        let ok = "a".repeat(214);
        assert!(package_name(&ok).is_ok());
    }

    #[test]
    fn test_valid_versions() {
        for v in [
            "latest",
            "next",
            "beta",
            "alpha",
            "1.0.0",
            "0.0.1",
            "10.20.30",
            "1.0.0-rc.1",
            "2.0.0-beta.11",
            "1.0.0+build.5",
            "1.0.0-alpha+001",
        ] {
            assert!(version(v).is_ok(), "expected '{v}' to be valid");
        }
    }

    #[test]
    fn test_invalid_versions() {
        for v in ["", "1", "1.0", "v1.0.0", "01.0.0", "1.0.0.0", "not-a-tag"] {
            let err = version(v).unwrap_err();
            assert_eq!(err.code(), "INVALID_VERSION", "version: '{v}'");
        }
    }

    #[test]
    fn test_search_query_bounds() {
        assert!(search_query("react hooks").is_ok());
        assert!(search_query("").is_err());
        assert!(search_query("   ").is_err());
        assert!(search_query(&"q".repeat(251)).is_err());
        assert!(search_query(&"q".repeat(250)).is_ok());
    }

    #[test]
    fn test_limit_bounds() {
        assert!(limit(1).is_ok());
        assert!(limit(250).is_ok());
        assert!(limit(0).is_err());
        assert!(limit(251).is_err());
    }

    #[test]
    fn test_score_bounds() {
        assert!(score(0.0, "Quality").is_ok());
        assert!(score(1.0, "Quality").is_ok());
        assert!(score(-0.1, "Quality").is_err());
        assert!(score(1.1, "Popularity").is_err());
        assert!(score(f64::NAN, "Quality").is_err());
        assert!(score(f64::INFINITY, "Quality").is_err());
    }
}
