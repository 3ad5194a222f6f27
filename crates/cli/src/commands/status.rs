use eyre::Result;
use kladde_convert::{MarkupConverter, PandocConverter};

pub async fn run() -> Result<()> {
    let pandoc = PandocConverter::new();
    if pandoc.is_available().await {
        println!("✓ Pandoc found");
    } else {
        println!("⚠ Pandoc not found (optional, the built-in converter is used instead)");
    }

    let sphinx = tokio::process::Command::new("sphinx-build")
        .arg("--version")
        .output()
        .await;
    match sphinx {
        Ok(output) if output.status.success() => println!("✓ sphinx-build found"),
        _ => println!("✗ sphinx-build not found (required for `kladde build`)"),
    }

    Ok(())
}
