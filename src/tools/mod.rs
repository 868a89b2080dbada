//! Tool Handlers
//!
//! Orchestration for the three callable operations: validate parameters,
//! consult the cache, and on a miss call the upstream collaborators, build
//! the response shape and store it.

mod info;
mod readme;
mod search;

pub use info::get_package_info;
pub use readme::get_package_readme;
pub use search::search_packages;

use crate::models::npm::{NpmPackageDoc, NpmVersionInfo, RepositoryField};
use crate::models::responses::{AuthorField, PackageBasicInfo, RepositoryInfo};

// == Response Building Helpers ==

/// Assembles the basic-info block for a resolved version, falling back to
/// the package document for fields the version manifest omits.
pub(crate) fn build_basic_info(
    version_info: &NpmVersionInfo,
    doc: &NpmPackageDoc,
) -> PackageBasicInfo {
    PackageBasicInfo {
        name: version_info.name.clone(),
        version: version_info.version.clone(),
        description: version_info
            .description
            .clone()
            .or_else(|| doc.description.clone())
            .unwrap_or_else(|| "No description available".to_string()),
        main: version_info.main.clone(),
        types: version_info.types.clone(),
        homepage: version_info
            .homepage
            .clone()
            .or_else(|| doc.homepage.clone()),
        bugs: version_info
            .bugs
            .as_ref()
            .and_then(|bugs| bugs.url())
            .map(str::to_string),
        license: version_info
            .license
            .clone()
            .or_else(|| doc.license.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        author: version_info
            .author
            .clone()
            .or_else(|| doc.author.clone())
            .unwrap_or_else(|| AuthorField::Plain("Unknown".to_string())),
        contributors: version_info.contributors.clone(),
        keywords: version_info
            .keywords
            .clone()
            .or_else(|| doc.keywords.clone())
            .unwrap_or_default(),
    }
}

/// Structured repository info, dropping `owner/repo` shorthand strings.
pub(crate) fn build_repository_info(field: Option<&RepositoryField>) -> Option<RepositoryInfo> {
    field.and_then(RepositoryField::as_info).cloned()
}

/// Author display string, preferring the version manifest over the package
/// document.
pub(crate) fn author_display(
    version_author: Option<&AuthorField>,
    doc_author: Option<&AuthorField>,
) -> String {
    version_author
        .or(doc_author)
        .map(AuthorField::display)
        .unwrap_or_else(|| "Unknown".to_string())
}
