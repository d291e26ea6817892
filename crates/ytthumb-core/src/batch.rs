//! Batch download: every thumbnail of a result set, one at a time.
//!
//! Triggers run strictly in catalog order with a fixed pause after each
//! successful one. A failed trigger is logged and recorded, then the batch
//! moves on; nothing is retried or rolled back. An optional abort token stops
//! the batch between items. Each transfer runs on the blocking pool.

use crate::capability::{trigger_blocking, Downloader};
use crate::catalog::ThumbnailResult;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Default pause between two downloads.
pub const DEFAULT_BATCH_DELAY: Duration = Duration::from_millis(300);

/// Outcome of a batch, keyed by suggested filename.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: Vec<(String, PathBuf)>,
    pub failed: Vec<(String, String)>,
    pub skipped: Vec<String>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty()
    }
}

/// Downloads every entry of `results` through `downloader`.
pub async fn download_all<D>(
    downloader: &Arc<D>,
    results: &[ThumbnailResult],
    delay: Duration,
    abort: Option<&AtomicBool>,
) -> BatchReport
where
    D: Downloader + Send + Sync + 'static,
{
    let mut report = BatchReport::default();

    for (idx, item) in results.iter().enumerate() {
        if abort.is_some_and(|a| a.load(Ordering::Relaxed)) {
            tracing::info!(remaining = results.len() - idx, "batch download aborted");
            report
                .skipped
                .extend(results[idx..].iter().map(|r| r.filename.clone()));
            break;
        }

        match trigger_blocking(downloader, &item.url, &item.filename).await {
            Ok(path) => {
                tracing::debug!(filename = %item.filename, "batch item done");
                report.succeeded.push((item.filename.clone(), path));
                tokio::time::sleep(delay).await;
            }
            Err(e) => {
                tracing::warn!(filename = %item.filename, "failed to download: {}", e);
                report.failed.push((item.filename.clone(), e.to_string()));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build;
    use crate::error::CapabilityError;
    use crate::video_id::VideoId;
    use std::sync::Mutex;

    /// Records triggers; fails the ones whose filename contains `fail_on`.
    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<String>>,
        fail_on: Option<&'static str>,
        abort_after: Option<(usize, &'static AtomicBool)>,
    }

    impl Recorder {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Downloader for Recorder {
        fn trigger(&self, url: &str, filename: &str) -> Result<PathBuf, CapabilityError> {
            let made = {
                let mut calls = self.calls.lock().unwrap();
                calls.push(url.to_string());
                calls.len()
            };
            if let Some((n, flag)) = self.abort_after {
                if made == n {
                    flag.store(true, Ordering::Relaxed);
                }
            }
            match self.fail_on {
                Some(pat) if filename.contains(pat) => {
                    Err(CapabilityError::Download(anyhow::anyhow!("HTTP 404")))
                }
                _ => Ok(PathBuf::from(filename)),
            }
        }
    }

    fn results() -> Vec<ThumbnailResult> {
        build(&VideoId::new("dQw4w9WgXcQ").unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn triggers_in_catalog_order_with_delay() {
        let results = results();
        let dl = Arc::new(Recorder::default());
        let start = tokio::time::Instant::now();
        let report = download_all(&dl, &results, DEFAULT_BATCH_DELAY, None).await;

        let expected: Vec<String> = results.iter().map(|r| r.url.clone()).collect();
        assert_eq!(dl.calls(), expected);
        assert!(report.is_complete());
        assert_eq!(report.succeeded.len(), 5);
        assert!(start.elapsed() >= DEFAULT_BATCH_DELAY * 5);
    }

    #[tokio::test(start_paused = true)]
    async fn failure_is_recorded_and_batch_continues() {
        let results = results();
        let dl = Arc::new(Recorder {
            fail_on: Some("sddefault"),
            ..Default::default()
        });
        let report = download_all(&dl, &results, DEFAULT_BATCH_DELAY, None).await;

        assert_eq!(dl.calls().len(), 5);
        assert_eq!(report.succeeded.len(), 4);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "thumbnail-dQw4w9WgXcQ-sddefault.jpg");
        assert!(report.failed[0].1.contains("HTTP 404"));
        assert!(!report.is_complete());
    }

    #[tokio::test(start_paused = true)]
    async fn abort_skips_remaining_items() {
        static ABORT: AtomicBool = AtomicBool::new(false);
        let results = results();
        let dl = Arc::new(Recorder {
            abort_after: Some((2, &ABORT)),
            ..Default::default()
        });
        let report = download_all(&dl, &results, DEFAULT_BATCH_DELAY, Some(&ABORT)).await;

        assert_eq!(dl.calls().len(), 2);
        assert_eq!(report.succeeded.len(), 2);
        assert_eq!(
            report.skipped,
            vec![
                "thumbnail-dQw4w9WgXcQ-hqdefault.jpg".to_string(),
                "thumbnail-dQw4w9WgXcQ-mqdefault.jpg".to_string(),
                "thumbnail-dQw4w9WgXcQ-default.jpg".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn empty_result_set_is_a_no_op() {
        let dl = Arc::new(Recorder::default());
        let report = download_all(&dl, &[], Duration::ZERO, None).await;
        assert!(dl.calls().is_empty());
        assert_eq!(report, BatchReport::default());
    }

    struct Panicky;

    impl Downloader for Panicky {
        fn trigger(&self, _url: &str, _filename: &str) -> Result<PathBuf, CapabilityError> {
            panic!("transfer crashed");
        }
    }

    #[tokio::test]
    async fn crashed_transfer_counts_as_failure() {
        let results = results();
        let report = download_all(&Arc::new(Panicky), &results[..1], Duration::ZERO, None).await;
        assert_eq!(report.failed.len(), 1);
        assert!(report.failed[0].1.contains("download task join"));
    }
}
