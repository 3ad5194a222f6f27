use std::path::PathBuf;

use eyre::{Result, eyre};

pub async fn run(project: PathBuf) -> Result<()> {
    let build_dir = project.join("_build").join("html");

    println!("Building HTML documentation...");

    let output = tokio::process::Command::new("sphinx-build")
        .arg("-b")
        .arg("html")
        .arg(&project)
        .arg(&build_dir)
        .output()
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                eyre!("sphinx-build not found; install it with: pip install sphinx sphinx-rtd-theme")
            }
            _ => eyre!(e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(eyre!("sphinx-build failed:\n{}", stderr));
    }

    println!("✅ Documentation built successfully");
    println!("  Open: {}", build_dir.join("index.html").display());

    Ok(())
}
