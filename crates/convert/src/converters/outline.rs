//! Heading outline extraction and toctree rendering.
//!
//! Scans a parsed document for heading elements and renders a nested
//! toctree directive whose entries are anchor slugs derived from the
//! heading text.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};

use crate::types::RstOptions;

/// Indent unit for one level of outline nesting.
const OUTLINE_INDENT: &str = "   ";

static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// One outline entry derived from a heading element.
///
/// Slugs are not guaranteed unique; two identical headings produce
/// colliding slugs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    /// Nesting depth, equal to the heading level (1-6).
    pub depth: usize,
    /// Trimmed heading text.
    pub text: String,
    /// Anchor slug derived from the text.
    pub slug: String,
}

/// Derive an anchor slug from heading text.
///
/// Lowercases the trimmed text, strips every character that is not a word
/// character, whitespace, or hyphen, then collapses each whitespace run
/// into a single hyphen.
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(&lowered, "");
    WHITESPACE_RUN.replace_all(&stripped, "-").into_owned()
}

/// Collect one entry per heading with non-empty text, in document order.
///
/// Depth comes straight from the heading level; entries are not validated
/// against the surrounding hierarchy.
pub fn outline_entries(document: &Html) -> Vec<OutlineEntry> {
    let mut entries = Vec::new();
    for node in document.root_element().descendants() {
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };
        let tag = element.value().name();
        if !matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6") {
            continue;
        }

        let text = element.text().collect::<String>();
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        entries.push(OutlineEntry {
            depth: (tag.as_bytes()[1] - b'0') as usize,
            text: text.to_string(),
            slug: slugify(text),
        });
    }
    entries
}

/// Render the outline of a parsed document as a toctree directive block.
///
/// Returns the empty string when the document has no headings.
pub fn render_outline(document: &Html, options: &RstOptions) -> String {
    let entries = outline_entries(document);
    if entries.is_empty() {
        return String::new();
    }

    let body = entries
        .iter()
        .map(|entry| {
            format!(
                "{}{}",
                OUTLINE_INDENT.repeat(entry.depth.saturating_sub(1)),
                entry.slug
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        ".. toctree::\n   :maxdepth: {}\n   :caption: {}\n\n{}",
        options.toctree_maxdepth, options.toctree_caption, body
    )
}

/// Convenience function to parse an HTML string and render its outline.
pub fn extract_outline(html: &str, options: &RstOptions) -> String {
    let document = Html::parse_document(html);
    render_outline(&document, options)
}
