//! Built-in HTML to reStructuredText conversion.

pub mod html_to_rst;
pub mod outline;

pub use html_to_rst::{HtmlToRstConverter, convert_html_to_rst, heading_marker};
pub use outline::{OutlineEntry, extract_outline, outline_entries, render_outline, slugify};
