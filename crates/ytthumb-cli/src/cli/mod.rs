//! CLI for ytthumb.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ytthumb_core::config;

use commands::{run_copy, run_download, run_download_all, run_id, run_show};

/// Top-level CLI for the thumbnail grabber.
#[derive(Debug, Parser)]
#[command(name = "ytthumb")]
#[command(
    about = "ytthumb: get every thumbnail of a YouTube video from its link",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List the thumbnail URLs of a video, best quality first.
    Show {
        /// Video link (watch page, youtu.be, embed, shorts, ...).
        link: String,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print only the video identifier.
    Id {
        /// Video link.
        link: String,
    },

    /// Download one thumbnail.
    Download {
        /// Video link.
        link: String,
        /// Variant code (e.g. hqdefault) or label (e.g. "High Quality").
        #[arg(long, default_value = "maxresdefault")]
        variant: String,
        /// Directory to save into (default: config `download_dir`, then current dir).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Download all five thumbnails, one after another.
    DownloadAll {
        /// Video link.
        link: String,
        /// Directory to save into (default: config `download_dir`, then current dir).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
        /// Pause between downloads in milliseconds (overrides config `batch_delay_ms`).
        #[arg(long, value_name = "MS")]
        delay_ms: Option<u64>,
    },

    /// Copy the link to the terminal clipboard (OSC 52).
    Copy {
        /// Text to copy.
        link: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Show { link, json } => run_show(&cfg, &link, json).await?,
            CliCommand::Id { link } => run_id(&link)?,
            CliCommand::Download { link, variant, dir } => {
                let dir = download_dir(dir, &cfg)?;
                run_download(&cfg, &link, &variant, &dir).await?;
            }
            CliCommand::DownloadAll {
                link,
                dir,
                delay_ms,
            } => {
                let dir = download_dir(dir, &cfg)?;
                if let Some(ms) = delay_ms {
                    cfg.batch_delay_ms = ms;
                }
                run_download_all(&cfg, &link, &dir).await?;
            }
            CliCommand::Copy { link } => run_copy(&cfg, &link)?,
        }

        Ok(())
    }
}

/// `--dir` flag, then config `download_dir`, then the current directory.
fn download_dir(flag: Option<PathBuf>, cfg: &config::ThumbConfig) -> Result<PathBuf> {
    match flag.or_else(|| cfg.download_dir.clone()) {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}

#[cfg(test)]
mod tests;
