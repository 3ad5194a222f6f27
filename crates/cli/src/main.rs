mod cli;
mod commands;

use clap::Parser;

use crate::cli::Commands;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match cli.command {
        Commands::Convert {
            notebook,
            toc,
            output,
            name,
            code_language,
            no_pandoc,
        } => {
            commands::convert::run(notebook, toc, output, name, code_language, no_pandoc).await?;
        }
        Commands::Build { project } => {
            commands::build::run(project).await?;
        }
        Commands::Status => {
            commands::status::run().await?;
        }
    }

    Ok(())
}
