//! README Parser
//!
//! Stateless markdown transforms: code-block extraction for usage examples,
//! link/image cleanup, and first-paragraph description extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::responses::UsageExample;

/// Fenced code blocks with an optional language tag.
static CODE_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(\w+)?\n(.*?)```").expect("code block regex"));

/// Markdown images; replaced by their alt text.
static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\([^)]+\)").expect("image regex"));

/// Markdown links; replaced by their link text.
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("link regex"));

/// Runs of three or more newlines.
static EXCESS_NEWLINES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("newline regex"));

/// At most this many code blocks become usage examples.
const MAX_USAGE_EXAMPLES: usize = 5;

// == Usage Examples ==
/// Extracts up to five fenced code blocks from the README as usage examples.
///
/// Returns an empty list when example extraction is disabled or there is no
/// README content.
pub fn extract_usage_examples(readme: &str, include_examples: bool) -> Vec<UsageExample> {
    if !include_examples || readme.is_empty() {
        return Vec::new();
    }

    CODE_BLOCK_RE
        .captures_iter(readme)
        .take(MAX_USAGE_EXAMPLES)
        .enumerate()
        .map(|(index, caps)| UsageExample {
            title: format!("Example {}", index + 1),
            description: None,
            code: caps
                .get(2)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
            language: caps
                .get(1)
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| "text".to_string()),
        })
        .collect()
}

// == Markdown Cleanup ==
/// Strips images and links down to their text and collapses excessive
/// blank lines.
pub fn clean_markdown(content: &str) -> String {
    let without_images = IMAGE_RE.replace_all(content, "$1");
    let without_links = LINK_RE.replace_all(&without_images, "$1");
    EXCESS_NEWLINES_RE
        .replace_all(&without_links, "\n\n")
        .trim()
        .to_string()
}

// == Description Extraction ==
/// First substantive line of the README: longer than 20 characters and not
/// a heading or an image.
pub fn extract_description(content: &str) -> String {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.len() > 20 && !trimmed.starts_with('#') && !trimmed.starts_with("![") {
            return trimmed.to_string();
        }
    }
    "No description available".to_string()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const README: &str = "# my-package\n\nA tiny utility for doing things.\n\n\
```javascript\nconst pkg = require('my-package');\npkg.run();\n```\n\n\
Some prose.\n\n```bash\nnpm install my-package\n```\n\n```\nplain block\n```\n";

    #[test]
    fn test_extract_usage_examples() {
        let examples = extract_usage_examples(README, true);

        assert_eq!(examples.len(), 3);
        assert_eq!(examples[0].title, "Example 1");
        assert_eq!(examples[0].language, "javascript");
        assert_eq!(
            examples[0].code,
            "const pkg = require('my-package');\npkg.run();"
        );
        assert_eq!(examples[1].language, "bash");
        assert_eq!(examples[2].language, "text");
        assert_eq!(examples[2].code, "plain block");
    }

    #[test]
    fn test_extract_usage_examples_disabled() {
        assert!(extract_usage_examples(README, false).is_empty());
        assert!(extract_usage_examples("", true).is_empty());
    }

    #[test]
    fn test_extract_usage_examples_caps_at_five() {
        let many = "```js\na\n```\n".repeat(8);
        assert_eq!(extract_usage_examples(&many, true).len(), 5);
    }

    #[test]
    fn test_clean_markdown_strips_images_and_links() {
        let content = "![build status](https://img.example/badge.svg)\n\
See the [documentation](https://example.com/docs) for details.";
        let cleaned = clean_markdown(content);

        assert_eq!(
            cleaned,
            "build status\nSee the documentation for details."
        );
    }

    #[test]
    fn test_clean_markdown_collapses_blank_lines() {
        let cleaned = clean_markdown("first\n\n\n\n\nsecond");
        assert_eq!(cleaned, "first\n\nsecond");
    }

    #[test]
    fn test_extract_description_skips_headings_and_images() {
        let content = "# Title\n![badge](x.png)\nshort\nA tiny utility for doing things.\nmore";
        assert_eq!(
            extract_description(content),
            "A tiny utility for doing things."
        );
    }

    #[test]
    fn test_extract_description_fallback() {
        assert_eq!(extract_description("# only a heading"), "No description available");
        assert_eq!(extract_description(""), "No description available");
    }
}
