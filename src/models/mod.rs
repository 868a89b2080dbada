//! Data Models
//!
//! Wire types for the npm registry, tool parameter shapes, and the
//! normalized response shapes returned by the tool handlers.

pub mod npm;
pub mod requests;
pub mod responses;

pub use npm::{NpmPackageDoc, NpmSearchResponse, NpmVersionInfo};
pub use requests::{GetPackageInfoParams, GetPackageReadmeParams, SearchPackagesParams};
pub use responses::{
    AuthorField, AuthorInfo, DownloadStats, InstallationInfo, PackageBasicInfo,
    PackageInfoResponse, PackageReadmeResponse, PackageSearchResult, RepositoryInfo, ScoreDetail,
    ScoreInfo, SearchPackagesResponse, UsageExample,
};
