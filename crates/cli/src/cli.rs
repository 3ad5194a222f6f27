use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[clap(
    name = "kladde",
    about = "Convert exported notebook HTML into a Sphinx documentation project"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Convert notebook HTML into a Sphinx project
    Convert {
        /// Exported notebook body HTML file
        notebook: PathBuf,
        /// Separate TOC fragment HTML file
        #[clap(long)]
        toc: Option<PathBuf>,
        /// Output directory for the generated project
        #[clap(short, long, default_value = "./sphinx_notebook")]
        output: PathBuf,
        /// Project name used in conf.py and index.rst
        #[clap(long, default_value = "Notebook Documentation")]
        name: String,
        /// Language tag for converted code blocks
        #[clap(long, default_value = "python")]
        code_language: String,
        /// Skip pandoc and always use the built-in converter
        #[clap(long)]
        no_pandoc: bool,
    },
    /// Build a generated project with sphinx-build
    Build {
        /// Project directory containing conf.py
        project: PathBuf,
    },
    /// Show availability of the external tools
    Status,
}
