//! `ytthumb download-all <link>` – save every thumbnail, throttled.
//!
//! The first Ctrl-C stops the batch between items; a second one quits at once.

use anyhow::Result;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use ytthumb_core::capability::CurlDownloader;
use ytthumb_core::config::ThumbConfig;

pub async fn run_download_all(cfg: &ThumbConfig, link: &str, dir: &Path) -> Result<()> {
    let mut session = super::resolve(cfg, link).await?;
    let downloader = Arc::new(CurlDownloader::new(dir, cfg.http_or_default()));
    let abort = AtomicBool::new(false);

    let batch = session.download_all(&downloader, Some(&abort));
    tokio::pin!(batch);
    let report = tokio::select! {
        report = &mut batch => report?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupt received, stopping after current download");
            abort.store(true, Ordering::Relaxed);
            eprintln!(
                "Stopping after the current download; Ctrl-C again to quit now."
            );
            tokio::select! {
                report = &mut batch => report?,
                _ = tokio::signal::ctrl_c() => {
                    tracing::warn!("second interrupt, abandoning batch");
                    anyhow::bail!("interrupted");
                }
            }
        }
    };

    for (_, path) in &report.succeeded {
        println!("Saved {}", path.display());
    }
    for (filename, err) in &report.failed {
        eprintln!("Failed {filename}: {err}");
    }
    for filename in &report.skipped {
        eprintln!("Skipped {filename}");
    }

    if !report.failed.is_empty() {
        anyhow::bail!(
            "{} of {} downloads failed",
            report.failed.len(),
            report.succeeded.len() + report.failed.len() + report.skipped.len()
        );
    }
    if !report.skipped.is_empty() {
        anyhow::bail!("interrupted; {} downloads skipped", report.skipped.len());
    }
    Ok(())
}
