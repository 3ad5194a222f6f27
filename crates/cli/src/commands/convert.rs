use std::path::PathBuf;

use eyre::{Result, WrapErr};
use kladde_convert::{MarkupConverter, PandocConverter, RstOptions, SphinxProject, convert_notebook};

pub async fn run(
    notebook: PathBuf,
    toc: Option<PathBuf>,
    output: PathBuf,
    name: String,
    code_language: String,
    no_pandoc: bool,
) -> Result<()> {
    let notebook_html = tokio::fs::read_to_string(&notebook)
        .await
        .wrap_err_with(|| format!("failed to read {}", notebook.display()))?;

    tracing::debug!("read notebook html ({} bytes)", notebook_html.len());

    let toc_html = match &toc {
        Some(path) => Some(
            tokio::fs::read_to_string(path)
                .await
                .wrap_err_with(|| format!("failed to read {}", path.display()))?,
        ),
        None => None,
    };

    let project = SphinxProject::new(name, &output);
    let options = RstOptions::new().with_code_language(code_language);

    let pandoc = PandocConverter::new();
    let external: Option<&dyn MarkupConverter> = if no_pandoc { None } else { Some(&pandoc) };

    println!(
        "Converting notebook to Sphinx project: {}",
        project.name()
    );

    let result = convert_notebook(
        &project,
        &notebook_html,
        toc_html.as_deref(),
        &options,
        external,
    )
    .await?;

    match &result.used_tool {
        Some(tool) => println!("✅ Converted with {tool}"),
        None => println!("✅ Converted with the built-in converter"),
    }
    println!("  📄 Content: {}", project.content_path().display());
    println!("  📁 Size: {} bytes", result.bytes_written);
    println!("  ⏱️  Took: {} ms", result.duration.num_milliseconds());
    println!();
    println!(
        "💡 Build the HTML docs with: kladde build {}",
        project.root().display()
    );

    Ok(())
}
