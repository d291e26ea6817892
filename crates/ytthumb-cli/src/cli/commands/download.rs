//! `ytthumb download <link>` – save one thumbnail.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use ytthumb_core::capability::CurlDownloader;
use ytthumb_core::config::ThumbConfig;

pub async fn run_download(
    cfg: &ThumbConfig,
    link: &str,
    variant: &str,
    dir: &Path,
) -> Result<()> {
    let session = super::resolve(cfg, link).await?;
    let downloader = Arc::new(CurlDownloader::new(dir, cfg.http_or_default()));
    let path = session
        .download_one(&downloader, variant)
        .await
        .with_context(|| format!("download {variant}"))?;
    println!("Saved {}", path.display());
    Ok(())
}
