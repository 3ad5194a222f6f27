//! Pandoc-backed implementation of [`MarkupConverter`].

use std::path::Path;

use async_trait::async_trait;

use crate::error::{ConvertError, Result};
use crate::traits::MarkupConverter;
use crate::types::ToolInfo;

/// External converter invoking the `pandoc` binary.
pub struct PandocConverter {
    program: String,
}

impl PandocConverter {
    /// Create a converter using `pandoc` from PATH.
    pub fn new() -> Self {
        Self {
            program: "pandoc".to_string(),
        }
    }

    /// Create a converter using a specific program name or path.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl MarkupConverter for PandocConverter {
    fn tool_info(&self) -> ToolInfo {
        ToolInfo::new("pandoc", "Pandoc document converter")
    }

    async fn is_available(&self) -> bool {
        tokio::process::Command::new(&self.program)
            .arg("--version")
            .output()
            .await
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    async fn convert(&self, from: &str, to: &str, source: &Path, dest: &Path) -> Result<()> {
        let output = tokio::process::Command::new(&self.program)
            .arg(source)
            .args(["-f", from, "-t", to])
            .arg("-o")
            .arg(dest)
            .arg("--wrap=none")
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConvertError::ToolUnavailable {
                    tool: self.program.clone(),
                },
                _ => ConvertError::Io(e),
            })?;

        if !output.status.success() {
            return Err(ConvertError::ToolFailed {
                tool: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(())
    }
}

impl Default for PandocConverter {
    fn default() -> Self {
        Self::new()
    }
}
