//! Core trait for external document converters.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::ToolInfo;

/// Capability seam for a general-purpose document converter.
///
/// Orchestration code only ever talks to this trait, never to a concrete
/// process-launching mechanism, so tests can substitute a fake.
#[async_trait]
pub trait MarkupConverter: Send + Sync {
    /// Get tool information.
    fn tool_info(&self) -> ToolInfo;

    /// Whether the underlying tool can be invoked on this system.
    async fn is_available(&self) -> bool;

    /// Convert `source` from one markup format to another, writing `dest`.
    ///
    /// A missing program or a non-zero exit propagates as an error; no
    /// retry happens at this level.
    async fn convert(&self, from: &str, to: &str, source: &Path, dest: &Path) -> Result<()>;
}
