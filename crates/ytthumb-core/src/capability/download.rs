//! Curl-backed downloader: one GET per trigger, body saved into a directory.
//!
//! `trigger` blocks for the whole transfer; from async code run it through
//! [`super::trigger_blocking`].

use super::Downloader;
use crate::config::HttpConfig;
use crate::error::CapabilityError;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Saves thumbnails into `dir` using libcurl.
#[derive(Debug, Clone)]
pub struct CurlDownloader {
    dir: PathBuf,
    http: HttpConfig,
}

impl CurlDownloader {
    pub fn new(dir: impl Into<PathBuf>, http: HttpConfig) -> Self {
        Self {
            dir: dir.into(),
            http,
        }
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).context("invalid URL")?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(Duration::from_secs(self.http.connect_timeout_secs))?;
        easy.timeout(Duration::from_secs(self.http.timeout_secs))?;
        if let Some(ua) = &self.http.user_agent {
            easy.useragent(ua)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform().context("GET request failed")?;
        }

        let code = easy.response_code().context("no response code")?;
        if !(200..300).contains(&code) {
            anyhow::bail!("GET {} returned HTTP {}", url, code);
        }
        Ok(body)
    }
}

impl Downloader for CurlDownloader {
    fn trigger(&self, url: &str, filename: &str) -> Result<PathBuf, CapabilityError> {
        match url::Url::parse(url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            _ => return Err(CapabilityError::InvalidUrl(url.to_string())),
        }

        let body = self.fetch(url)?;

        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create {}", self.dir.display()))?;
        let path = self.dir.join(filename);
        fs::write(&path, &body).with_context(|| format!("write {}", path.display()))?;

        tracing::info!(
            url = %url,
            path = %path.display(),
            bytes = body.len(),
            "thumbnail saved"
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_urls_before_touching_disk() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out");
        let dl = CurlDownloader::new(&target, HttpConfig::default());
        for bad in ["ftp://example.com/a.jpg", "not a url", "file:///etc/passwd"] {
            let err = dl.trigger(bad, "a.jpg").unwrap_err();
            assert!(matches!(err, CapabilityError::InvalidUrl(_)), "url: {bad}");
        }
        assert!(!target.exists());
    }
}
