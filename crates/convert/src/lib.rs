//! Kladde Convert - notebook HTML to Sphinx reStructuredText conversion
//!
//! This crate turns HTML exported from a notebook environment into a
//! Sphinx documentation project: the built-in extractors emit RST for
//! headings, paragraphs, code blocks, lists, and output cells, and an
//! optional external converter (pandoc) can take over the content
//! conversion when it is installed.

pub mod converters;
pub mod error;
pub mod pandoc;
pub mod project;
pub mod traits;
pub mod types;

// Re-export main types
pub use error::{ConvertError, Result};
pub use pandoc::PandocConverter;
pub use project::{SphinxProject, convert_notebook, render_content};
pub use traits::MarkupConverter;
pub use types::{ConversionResult, RstOptions, ToolInfo};

// Re-export converters
pub use converters::{
    HtmlToRstConverter, OutlineEntry, convert_html_to_rst, extract_outline, outline_entries,
    render_outline, slugify,
};
