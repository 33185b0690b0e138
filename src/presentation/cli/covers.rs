use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use crate::domain::covers::{CoverRequest, generate_cover};

#[derive(Debug, Args)]
pub struct CoverCommand {
    #[arg(long, default_value = "")]
    pub title: String,
    #[arg(long, default_value = "")]
    pub author: String,
    /// fiction, romance or mystery; anything else uses the romance palette
    #[arg(long, default_value = "romance")]
    pub category: String,
    /// Emit a base64 `data:` URI instead of raw SVG
    #[arg(long)]
    pub data_uri: bool,
    /// Write to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(command: CoverCommand) -> Result<()> {
    let request = CoverRequest::new(command.title, command.author, command.category);
    let cover = generate_cover(&request);

    let rendered = if command.data_uri {
        format!("{}\n", cover.to_data_uri())
    } else {
        cover.into_string()
    };

    match command.output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("failed to write cover to {}", path.display()))?;
            info!(path = %path.display(), category = %request.category(), "wrote cover");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
