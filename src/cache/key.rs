//! Cache Key Derivation
//!
//! Pure functions mapping a logical request (operation + parameters) to a
//! canonical string key. Two logically identical requests always produce
//! byte-identical keys.

use base64::{engine::general_purpose::STANDARD, Engine as _};

// == Package Info Key ==
/// Key for a package metadata response.
pub fn package_info(package_name: &str, version: &str) -> String {
    format!("pkg_info:{package_name}:{version}")
}

// == Package Readme Key ==
/// Key for a package README response.
pub fn package_readme(package_name: &str, version: &str) -> String {
    format!("pkg_readme:{package_name}:{version}")
}

// == Search Results Key ==
/// Key for a search response.
///
/// The query is base64-encoded so that arbitrary query text (including the
/// `:` delimiter) cannot collide with a differently-structured key. Optional
/// score filters are tagged segments so that their presence or absence
/// changes the key.
pub fn search_results(
    query: &str,
    limit: u32,
    quality: Option<f64>,
    popularity: Option<f64>,
) -> String {
    let mut parts = vec![STANDARD.encode(query), limit.to_string()];
    if let Some(quality) = quality {
        parts.push(format!("q:{quality}"));
    }
    if let Some(popularity) = popularity {
        parts.push(format!("p:{popularity}"));
    }
    format!("search:{}", parts.join(":"))
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_info_key_deterministic() {
        let a = package_info("lodash", "4.17.21");
        let b = package_info("lodash", "4.17.21");
        assert_eq!(a, b);
        assert_eq!(a, "pkg_info:lodash:4.17.21");
    }

    #[test]
    fn test_package_info_key_distinct_per_request() {
        let base = package_info("lodash", "4.17.21");
        assert_ne!(base, package_info("express", "4.17.21"));
        assert_ne!(base, package_info("lodash", "4.17.20"));
    }

    #[test]
    fn test_readme_and_info_keys_never_collide() {
        assert_ne!(
            package_info("lodash", "latest"),
            package_readme("lodash", "latest")
        );
    }

    #[test]
    fn test_search_key_shape() {
        let key = search_results("react", 20, None, None);
        assert_eq!(key, format!("search:{}:20", STANDARD.encode("react")));
    }

    #[test]
    fn test_search_key_includes_filters() {
        let plain = search_results("react", 20, None, None);
        let with_quality = search_results("react", 20, Some(0.5), None);
        let with_popularity = search_results("react", 20, None, Some(0.8));
        let with_both = search_results("react", 20, Some(0.5), Some(0.8));

        let keys = [&plain, &with_quality, &with_popularity, &with_both];
        for (i, a) in keys.iter().enumerate() {
            for b in keys.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }

        assert!(with_quality.contains(":q:0.5"));
        assert!(with_both.contains(":p:0.8"));
    }

    #[test]
    fn test_search_query_with_delimiter_cannot_restructure_key() {
        // A query containing the delimiter must not produce the same key as a
        // different query/limit combination that happens to line up textually.
        let tricky = search_results("react:20", 5, None, None);
        let plain = search_results("react", 20, None, None);
        assert_ne!(tricky, plain);
        assert!(!tricky.contains("react:20"));
    }
}
