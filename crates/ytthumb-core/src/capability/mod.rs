//! Host capabilities the session depends on: a clipboard and a downloader.
//!
//! The session only sees these traits, so tests swap in recording mocks and
//! the CLI plugs in the terminal clipboard and the curl downloader.

mod clipboard;
mod download;

pub use clipboard::Osc52Clipboard;
pub use download::CurlDownloader;

use crate::error::CapabilityError;
use anyhow::Context;
use std::path::PathBuf;
use std::sync::Arc;

/// Writes text to the user's clipboard.
pub trait ClipboardWriter {
    fn write(&mut self, text: &str) -> Result<(), CapabilityError>;
}

/// Saves the resource at `url` under `filename`. Returns where it landed.
///
/// Implementations may block; async callers go through [`trigger_blocking`].
pub trait Downloader {
    fn trigger(&self, url: &str, filename: &str) -> Result<PathBuf, CapabilityError>;
}

/// Runs one trigger on tokio's blocking pool so a slow transfer never stalls
/// a runtime worker.
pub async fn trigger_blocking<D>(
    downloader: &Arc<D>,
    url: &str,
    filename: &str,
) -> Result<PathBuf, CapabilityError>
where
    D: Downloader + Send + Sync + 'static,
{
    tokio::task::spawn_blocking({
        let downloader = Arc::clone(downloader);
        let url = url.to_string();
        let filename = filename.to_string();
        move || downloader.trigger(&url, &filename)
    })
    .await
    .context("download task join")?
}
