//! Sphinx project scaffolding and conversion orchestration.
//!
//! A conversion always produces three files: `conf.py` and `index.rst`
//! from fixed templates parameterized by the project name, and
//! `notebook_content.rst` from the notebook HTML, written either by an
//! external converter or by the built-in extractors.

use std::path::{Path, PathBuf};

use chrono::Utc;
use scraper::Html;

use crate::converters::{HtmlToRstConverter, render_outline};
use crate::error::Result;
use crate::traits::MarkupConverter;
use crate::types::{ConversionResult, RstOptions};

/// Fixed title block heading the generated content file.
const CONTENT_TITLE: &str = "Notebook Content\n================";

/// A Sphinx documentation project rooted at a directory.
pub struct SphinxProject {
    name: String,
    root: PathBuf,
}

impl SphinxProject {
    /// Create a project description; nothing is written until
    /// [`scaffold`](Self::scaffold).
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }

    /// Project name used in the templates.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the generated content file.
    pub fn content_path(&self) -> PathBuf {
        self.root.join("notebook_content.rst")
    }

    /// Write the project structure: `conf.py`, `index.rst`, and the
    /// `_static`/`_templates` directories.
    pub async fn scaffold(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join("conf.py"), self.conf_py()).await?;
        tokio::fs::write(self.root.join("index.rst"), self.index_rst()).await?;
        tokio::fs::create_dir_all(self.root.join("_static")).await?;
        tokio::fs::create_dir_all(self.root.join("_templates")).await?;

        tracing::debug!("scaffolded Sphinx project in {}", self.root.display());
        Ok(())
    }

    /// The `conf.py` template.
    pub fn conf_py(&self) -> String {
        format!(
            r#"# Configuration file for the Sphinx documentation builder.

project = '{name}'
copyright = '2025'
author = 'Author'
release = '1.0'

extensions = [
    'sphinx.ext.autodoc',
    'sphinx.ext.viewcode',
    'sphinx.ext.napoleon',
    'sphinx.ext.githubpages',
]

templates_path = ['_templates']
exclude_patterns = ['_build', 'Thumbs.db', '.DS_Store']

html_theme = 'sphinx_rtd_theme'
html_static_path = ['_static']

html_theme_options = {{
    'navigation_depth': 4,
    'collapse_navigation': False,
    'sticky_navigation': True,
    'includehidden': True,
    'titles_only': False,
    'display_version': True,
    'logo_only': False,
}}

html_show_sourcelink = False
html_show_sphinx = False
"#,
            name = self.name
        )
    }

    /// The `index.rst` template.
    pub fn index_rst(&self) -> String {
        format!(
            r#"{name}
{underline}

Welcome to the documentation for {name}.

.. toctree::
   :maxdepth: 3
   :caption: Contents:
   :numbered:

   notebook_content

Indices and tables
==================

* :ref:`genindex`
* :ref:`modindex`
* :ref:`search`
"#,
            name = self.name,
            underline = "=".repeat(self.name.chars().count())
        )
    }
}

/// Assemble the content file from the built-in extractors.
///
/// Title block, then the outline directive when the outline source has
/// headings, then the markup line sequence; sections joined by blank
/// lines. The outline is derived from the TOC fragment when one is
/// supplied, otherwise from the notebook body.
pub fn render_content(notebook_html: &str, toc_html: Option<&str>, options: &RstOptions) -> String {
    let body = Html::parse_document(notebook_html);
    let lines = HtmlToRstConverter::with_options(options.clone()).extract_lines(&body);

    let outline = match toc_html {
        Some(fragment) => render_outline(&Html::parse_document(fragment), options),
        None => render_outline(&body, options),
    };

    let mut content = String::from(CONTENT_TITLE);
    content.push_str("\n\n");
    if !outline.is_empty() {
        content.push_str(&outline);
        content.push_str("\n\n");
    }
    content.push_str(&lines.join("\n"));
    if !content.ends_with('\n') {
        content.push('\n');
    }
    content
}

/// Convert notebook HTML into a Sphinx project.
///
/// Scaffolds the project, then writes `notebook_content.rst`: an external
/// converter is tried first when one is supplied, and any failure there is
/// logged and answered with the built-in conversion.
pub async fn convert_notebook(
    project: &SphinxProject,
    notebook_html: &str,
    toc_html: Option<&str>,
    options: &RstOptions,
    external: Option<&dyn MarkupConverter>,
) -> Result<ConversionResult> {
    let started = Utc::now();

    project.scaffold().await?;
    let content_path = project.content_path();

    if let Some(converter) = external {
        let tool = converter.tool_info().id;
        match convert_with_tool(converter, notebook_html, &content_path).await {
            Ok(()) => {
                let bytes = tokio::fs::metadata(&content_path).await?.len();
                tracing::info!("converted notebook with {tool}");
                return Ok(ConversionResult::with_tool(tool, bytes, Utc::now() - started));
            }
            Err(e) => {
                tracing::warn!("{tool} conversion failed, using built-in converter: {e}");
            }
        }
    }

    let content = render_content(notebook_html, toc_html, options);
    tokio::fs::write(&content_path, &content).await?;

    Ok(ConversionResult::builtin(
        content.len() as u64,
        Utc::now() - started,
    ))
}

/// Spool the HTML to a temporary file and run the external converter.
async fn convert_with_tool(
    converter: &dyn MarkupConverter,
    html: &str,
    dest: &Path,
) -> Result<()> {
    let spool = tempfile::Builder::new().suffix(".html").tempfile()?;
    tokio::fs::write(spool.path(), html).await?;
    converter.convert("html", "rst", spool.path(), dest).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use crate::types::ToolInfo;
    use async_trait::async_trait;

    struct FailingConverter;

    #[async_trait]
    impl MarkupConverter for FailingConverter {
        fn tool_info(&self) -> ToolInfo {
            ToolInfo::new("fake", "Always-failing converter")
        }

        async fn is_available(&self) -> bool {
            false
        }

        async fn convert(&self, _: &str, _: &str, _: &Path, _: &Path) -> Result<()> {
            Err(ConvertError::ToolUnavailable {
                tool: "fake".to_string(),
            })
        }
    }

    struct RecordingConverter;

    #[async_trait]
    impl MarkupConverter for RecordingConverter {
        fn tool_info(&self) -> ToolInfo {
            ToolInfo::new("recorder", "Recording converter")
        }

        async fn is_available(&self) -> bool {
            true
        }

        async fn convert(&self, from: &str, to: &str, source: &Path, dest: &Path) -> Result<()> {
            assert_eq!(from, "html");
            assert_eq!(to, "rst");
            assert!(source.exists());
            std::fs::write(dest, "converted externally\n")?;
            Ok(())
        }
    }

    #[test]
    fn index_underline_matches_project_name() {
        let project = SphinxProject::new("My Notebook", "unused");
        let index = project.index_rst();
        let mut lines = index.lines();
        assert_eq!(lines.next(), Some("My Notebook"));
        assert_eq!(lines.next(), Some("==========="));
    }

    #[test]
    fn conf_py_is_parameterized_by_name() {
        let project = SphinxProject::new("Demo Docs", "unused");
        let conf = project.conf_py();
        assert!(conf.contains("project = 'Demo Docs'"));
        assert!(conf.contains("html_theme = 'sphinx_rtd_theme'"));
    }

    #[test]
    fn content_has_title_outline_and_markup() {
        let content = render_content(
            "<h1>Intro</h1><p>Hello world</p>",
            None,
            &RstOptions::new(),
        );
        assert!(content.starts_with("Notebook Content\n================\n\n"));
        assert!(content.contains(".. toctree::"));
        assert!(content.contains("\nintro\n"));
        assert!(content.contains("Hello world\n"));
    }

    #[test]
    fn toc_fragment_without_headings_yields_no_outline() {
        let content = render_content(
            "<h1>Intro</h1>",
            Some(r##"<ul><li><a href="#intro">Intro</a></li></ul>"##),
            &RstOptions::new(),
        );
        assert!(!content.contains(".. toctree::"));
        assert!(content.contains("Intro\n=====\n"));
    }

    #[tokio::test]
    async fn scaffold_writes_project_files() {
        let dir = tempfile::tempdir().unwrap();
        let project = SphinxProject::new("Scaffold Test", dir.path());
        project.scaffold().await.unwrap();

        assert!(dir.path().join("conf.py").is_file());
        assert!(dir.path().join("index.rst").is_file());
        assert!(dir.path().join("_static").is_dir());
        assert!(dir.path().join("_templates").is_dir());
    }

    #[tokio::test]
    async fn failed_external_converter_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let project = SphinxProject::new("Fallback Test", dir.path());

        let result = convert_notebook(
            &project,
            "<h1>Title</h1><p>body</p>",
            None,
            &RstOptions::new(),
            Some(&FailingConverter),
        )
        .await
        .unwrap();

        assert!(result.success);
        assert_eq!(result.used_tool, None);
        let content = std::fs::read_to_string(project.content_path()).unwrap();
        assert!(content.contains("Title\n=====\n"));
    }

    #[tokio::test]
    async fn successful_external_converter_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let project = SphinxProject::new("External Test", dir.path());

        let result = convert_notebook(
            &project,
            "<p>body</p>",
            None,
            &RstOptions::new(),
            Some(&RecordingConverter),
        )
        .await
        .unwrap();

        assert_eq!(result.used_tool.as_deref(), Some("recorder"));
        let content = std::fs::read_to_string(project.content_path()).unwrap();
        assert_eq!(content, "converted externally\n");
    }

    #[tokio::test]
    async fn builtin_conversion_writes_content_file() {
        let dir = tempfile::tempdir().unwrap();
        let project = SphinxProject::new("Builtin Test", dir.path());

        let result = convert_notebook(
            &project,
            "<h2>Section</h2><pre>x = 1</pre>",
            None,
            &RstOptions::new(),
            None,
        )
        .await
        .unwrap();

        assert!(result.success);
        assert!(result.bytes_written > 0);
        let content = std::fs::read_to_string(project.content_path()).unwrap();
        assert!(content.contains(".. code-block:: python"));
        assert_eq!(result.bytes_written, content.len() as u64);
    }
}
