//! Core types for conversion operations.

use chrono::Duration;

/// Information about an external converter tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Unique identifier (e.g., "pandoc").
    pub id: String,
    /// Human-readable name (e.g., "Pandoc document converter").
    pub name: String,
}

impl ToolInfo {
    /// Create new tool info.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Configuration for the built-in reStructuredText conversion.
#[derive(Debug, Clone)]
pub struct RstOptions {
    /// Language tag emitted for converted code blocks.
    pub code_language: String,
    /// Language tag emitted for notebook output cells.
    pub output_language: String,
    /// `:maxdepth:` of the rendered toctree directive.
    pub toctree_maxdepth: u8,
    /// `:caption:` of the rendered toctree directive.
    pub toctree_caption: String,
}

impl Default for RstOptions {
    fn default() -> Self {
        Self {
            code_language: "python".to_string(),
            output_language: "text".to_string(),
            toctree_maxdepth: 3,
            toctree_caption: "Contents:".to_string(),
        }
    }
}

impl RstOptions {
    /// Create new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the code block language tag.
    pub fn with_code_language(mut self, language: impl Into<String>) -> Self {
        self.code_language = language.into();
        self
    }

    /// Set the output cell language tag.
    pub fn with_output_language(mut self, language: impl Into<String>) -> Self {
        self.output_language = language.into();
        self
    }
}

/// Result of a notebook conversion.
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// Whether conversion succeeded.
    pub success: bool,
    /// Size of the written content file in bytes.
    pub bytes_written: u64,
    /// Id of the external tool that produced the file, or `None` for the
    /// built-in converter.
    pub used_tool: Option<String>,
    /// Time taken.
    pub duration: Duration,
}

impl ConversionResult {
    /// Create a result for the built-in conversion path.
    pub fn builtin(bytes_written: u64, duration: Duration) -> Self {
        Self {
            success: true,
            bytes_written,
            used_tool: None,
            duration,
        }
    }

    /// Create a result for an external tool conversion.
    pub fn with_tool(tool: impl Into<String>, bytes_written: u64, duration: Duration) -> Self {
        Self {
            success: true,
            bytes_written,
            used_tool: Some(tool.into()),
            duration,
        }
    }
}
