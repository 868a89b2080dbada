//! README Handling
//!
//! Fetch resolution (registry field, GitHub fallback) and pure markdown
//! transforms applied after a cache miss.

mod fetcher;
pub mod parser;

pub use fetcher::{fetch_readme_content, ReadmeOrigin, ReadmeResult};
