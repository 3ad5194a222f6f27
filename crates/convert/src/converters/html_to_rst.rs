//! HTML to reStructuredText markup converter.
//!
//! Walks a parsed notebook HTML document in document order and emits RST
//! lines for the recognized element kinds: headings, paragraphs,
//! preformatted code blocks, lists, and notebook output cells. Everything
//! else is skipped without diagnostics.

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node};

use crate::types::RstOptions;

/// RST section decoration characters, indexed by heading level.
///
/// Levels past the end of the palette reuse the final entry.
const HEADING_MARKERS: &[char] = &['=', '-', '^', '"', '\'', '`', '+'];

/// Indent applied to every line inside a code-block directive.
const CODE_INDENT: &str = "   ";

/// Decoration character for a 1-based heading level, clamped to the palette.
pub fn heading_marker(level: usize) -> char {
    HEADING_MARKERS[level.saturating_sub(1).min(HEADING_MARKERS.len() - 1)]
}

/// HTML to reStructuredText converter.
pub struct HtmlToRstConverter {
    options: RstOptions,
}

impl HtmlToRstConverter {
    /// Create a new converter with default options.
    pub fn new() -> Self {
        Self {
            options: RstOptions::default(),
        }
    }

    /// Create a new converter with custom options.
    pub fn with_options(options: RstOptions) -> Self {
        Self { options }
    }

    /// Parse an HTML string and extract its RST line sequence.
    pub fn convert(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        self.extract_lines(&document)
    }

    /// Extract the RST line sequence from a parsed document.
    ///
    /// A single pass visits the union of recognized element kinds in
    /// document order; the output is freshly allocated per call.
    pub fn extract_lines(&self, document: &Html) -> Vec<String> {
        let mut lines = Vec::new();
        for node in document.root_element().descendants() {
            if let Some(element) = ElementRef::wrap(node) {
                self.emit_element(&element, &mut lines);
            }
        }
        lines
    }

    fn emit_element(&self, element: &ElementRef, lines: &mut Vec<String>) {
        match element.value().name() {
            tag @ ("h1" | "h2" | "h3" | "h4" | "h5" | "h6") => {
                self.emit_heading(tag, element, lines)
            }
            "p" => self.emit_paragraph(element, lines),
            "pre" => self.emit_code_block(element, lines),
            "ul" => self.emit_list(element, lines, false),
            "ol" => self.emit_list(element, lines, true),
            "div" => self.emit_output_cell(element, lines),
            _ => {}
        }
    }

    /// Heading: trimmed text, underline matching its character count, blank
    /// line. An empty heading yields an empty line and a zero-length
    /// underline.
    fn emit_heading(&self, tag: &str, element: &ElementRef, lines: &mut Vec<String>) {
        let level = (tag.as_bytes()[1] - b'0') as usize;
        let text = element.text().collect::<String>();
        let text = text.trim();
        let marker = heading_marker(level);

        lines.push(text.to_string());
        lines.push(marker.to_string().repeat(text.chars().count()));
        lines.push(String::new());
    }

    fn emit_paragraph(&self, element: &ElementRef, lines: &mut Vec<String>) {
        let text = element.text().collect::<String>();
        lines.push(text.trim().to_string());
        lines.push(String::new());
    }

    /// Code block: directive line, blank line, the raw text content with a
    /// fixed indent prefix. Inner indentation is preserved verbatim.
    fn emit_code_block(&self, element: &ElementRef, lines: &mut Vec<String>) {
        let text = element.text().collect::<String>();
        if text.trim().is_empty() {
            return;
        }

        lines.push(format!(".. code-block:: {}", self.options.code_language));
        lines.push(String::new());
        for line in text.split('\n') {
            lines.push(format!("{CODE_INDENT}{line}"));
        }
        lines.push(String::new());
    }

    /// List: one line per direct `li` child, then a blank line.
    ///
    /// Only direct children are enumerated, and a list nested inside a
    /// list item is never visited separately, so nested items are absent
    /// from the output. Ordered items keep their positional index even
    /// when empty items in between are dropped.
    fn emit_list(&self, element: &ElementRef, lines: &mut Vec<String>, ordered: bool) {
        if nested_in_list_item(element) {
            return;
        }

        let mut index = 0usize;
        for item in element.children().filter_map(ElementRef::wrap) {
            if item.value().name() != "li" {
                continue;
            }
            index += 1;

            let text = item_text(&item);
            let text = text.trim();
            if text.is_empty() {
                continue;
            }

            if ordered {
                lines.push(format!("{index}. {text}"));
            } else {
                lines.push(format!("* {text}"));
            }
        }
        lines.push(String::new());
    }

    /// Notebook output cell: a `div` carrying the `output` class renders as
    /// a plain-text code block. Any other `div` is skipped.
    fn emit_output_cell(&self, element: &ElementRef, lines: &mut Vec<String>) {
        if !element.value().classes().any(|class| class == "output") {
            return;
        }
        let text = element.text().collect::<String>();
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        lines.push(format!(".. code-block:: {}", self.options.output_language));
        lines.push(String::new());
        for line in text.split('\n') {
            lines.push(format!("{CODE_INDENT}{line}"));
        }
        lines.push(String::new());
    }
}

impl Default for HtmlToRstConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a list element sits inside a list item of an enclosing list.
fn nested_in_list_item(element: &ElementRef) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().name() == "li")
}

/// Text content of a list item, excluding any nested list subtrees.
fn item_text(item: &ElementRef) -> String {
    let mut text = String::new();
    collect_item_text(**item, &mut text);
    text
}

fn collect_item_text(node: NodeRef<'_, Node>, text: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(chunk) => text.push_str(&chunk.text),
            Node::Element(element) if matches!(element.name(), "ul" | "ol") => {}
            Node::Element(_) => collect_item_text(child, text),
            _ => {}
        }
    }
}

/// Convenience function to convert HTML to an RST line sequence with
/// default options.
pub fn convert_html_to_rst(html: &str) -> Vec<String> {
    HtmlToRstConverter::new().convert(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_and_paragraph_exact_sequence() {
        let lines = convert_html_to_rst("<h1>Title</h1><p>Hello world</p>");
        assert_eq!(lines, ["Title", "=====", "", "Hello world", ""]);
    }

    #[test]
    fn underline_length_matches_text_for_all_levels() {
        for level in 1..=6 {
            let html = format!("<h{level}>Some Heading</h{level}>");
            let lines = convert_html_to_rst(&html);
            assert_eq!(lines[0], "Some Heading");
            assert_eq!(lines[1].chars().count(), "Some Heading".chars().count());
            assert!(lines[1].chars().all(|c| c == heading_marker(level)));
        }
    }

    #[test]
    fn heading_marker_clamps_past_palette() {
        assert_eq!(heading_marker(1), '=');
        assert_eq!(heading_marker(6), '`');
        assert_eq!(heading_marker(7), '+');
        assert_eq!(heading_marker(9), '+');
    }

    #[test]
    fn empty_heading_yields_zero_length_underline() {
        let lines = convert_html_to_rst("<h2></h2>");
        assert_eq!(lines, ["", "", ""]);
    }

    #[test]
    fn unordered_list_exact_sequence() {
        let lines = convert_html_to_rst("<ul><li>A</li><li>B</li></ul>");
        assert_eq!(lines, ["* A", "* B", ""]);
    }

    #[test]
    fn ordered_list_exact_sequence() {
        let lines = convert_html_to_rst("<ol><li>X</li><li>Y</li></ol>");
        assert_eq!(lines, ["1. X", "2. Y", ""]);
    }

    #[test]
    fn ordered_list_keeps_positional_index_over_empty_items() {
        let lines = convert_html_to_rst("<ol><li></li><li>X</li></ol>");
        assert_eq!(lines, ["2. X", ""]);
    }

    #[test]
    fn nested_list_items_are_omitted() {
        let lines = convert_html_to_rst("<ul><li>A<ul><li>B</li></ul></li><li>C</li></ul>");
        assert_eq!(lines, ["* A", "* C", ""]);
    }

    #[test]
    fn code_block_exact_sequence() {
        let lines = convert_html_to_rst("<pre>a=1\nb=2</pre>");
        assert_eq!(lines, [".. code-block:: python", "", "   a=1", "   b=2", ""]);
    }

    #[test]
    fn code_block_preserves_inner_indentation() {
        let lines = convert_html_to_rst("<pre>def f():\n    return 1</pre>");
        assert_eq!(
            lines,
            [
                ".. code-block:: python",
                "",
                "   def f():",
                "       return 1",
                "",
            ]
        );
    }

    #[test]
    fn blank_code_block_is_skipped() {
        let lines = convert_html_to_rst("<pre>   \n  </pre>");
        assert!(lines.is_empty());
    }

    #[test]
    fn output_cell_renders_as_text_block() {
        let lines = convert_html_to_rst(r#"<div class="output">42</div>"#);
        assert_eq!(lines, [".. code-block:: text", "", "   42", ""]);
    }

    #[test]
    fn plain_div_is_skipped() {
        let lines = convert_html_to_rst("<div>not an output cell</div>");
        assert!(lines.is_empty());
    }

    #[test]
    fn unrecognized_elements_are_skipped() {
        let lines = convert_html_to_rst("<blockquote>quote</blockquote><table><tr><td>x</td></tr></table>");
        assert!(lines.is_empty());
    }

    #[test]
    fn empty_document_yields_empty_sequence() {
        assert!(convert_html_to_rst("").is_empty());
    }

    #[test]
    fn elements_emit_in_document_order() {
        let html = "<h2>First</h2><pre>x</pre><p>after</p>";
        let lines = convert_html_to_rst(html);
        assert_eq!(
            lines,
            [
                "First",
                "-----",
                "",
                ".. code-block:: python",
                "",
                "   x",
                "",
                "after",
                "",
            ]
        );
    }

    #[test]
    fn extraction_is_idempotent() {
        let html = "<h1>Title</h1><ul><li>A</li></ul><pre>x = 1</pre>";
        let converter = HtmlToRstConverter::new();
        let first = converter.convert(html);
        let second = converter.convert(html);
        assert_eq!(first, second);
    }

    #[test]
    fn custom_code_language_is_used() {
        let converter =
            HtmlToRstConverter::with_options(RstOptions::new().with_code_language("rust"));
        let lines = converter.convert("<pre>fn main() {}</pre>");
        assert_eq!(lines[0], ".. code-block:: rust");
    }
}
