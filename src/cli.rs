use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use crate::convert::{self, Sources};

#[derive(Debug, Parser)]
#[command(name = "finetune-md", version)]
#[command(about = "Build fine-tuning datasets from Markdown block documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create JSONL for fine-tuning OpenAI models
    Create {
        /// Path to system.md
        #[arg(short, long)]
        system: PathBuf,
        /// Path to completions.md
        #[arg(short, long)]
        completions: PathBuf,
        /// Path to optional appendix
        #[arg(short, long)]
        appendix: Option<PathBuf>,
        /// Path to output folder
        #[arg(short, long)]
        out: PathBuf,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Create { system, completions, appendix, out } => {
            create(Sources { system, completions, appendix }, &out)
        }
    }
}

fn create(sources: Sources, out: &Path) -> Result<()> {
    info!(
        target: "main",
        "system: {}, completions: {}, appendix: {}",
        sources.system.display(),
        sources.completions.display(),
        sources.appendix.as_ref().map_or("-".into(), |p| p.display().to_string())
    );
    let payload = convert::convert(&sources).context("create dataset")?;
    let path = convert::write_dataset(out, &payload).context("write dataset")?;
    info!(target: "main", "wrote {}", path.display());
    Ok(())
}
