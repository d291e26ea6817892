//! Video identifier extraction from pasted links.
//!
//! Recognizes the share-link shapes of the video host (watch pages, short
//! links, embeds, shorts, live and legacy path forms) and pulls out the
//! 11-character identifier. Matching is purely syntactic: no network call is
//! made and the identifier is never checked against the host.

use crate::error::{LookupError, VideoIdError};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Length of every video identifier.
pub const VIDEO_ID_LEN: usize = 11;

/// Union of the supported link shapes. Scheme and host are case-insensitive,
/// the identifier is not. The trailing group rejects a 12th identifier
/// character so a longer token is never truncated into a match. Outside the
/// named prefixes, the id must come after at least two path segments
/// (`/user/<name>/<id>`); a lone unknown segment like `/tv/<id>` is not a link.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?:(?i:https?://))?(?:(?i:www\.))?",
        r"(?:",
        r"(?i:youtube\.com)/(?:[^/\s]+/\S+/|(?:v|e(?:mbed)?|shorts|live)/|\S*?[?&]v=)",
        r"|(?i:youtu\.be)/",
        r")",
        r"([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
    ))
    .expect("link pattern is a valid regex")
});

/// An 11-character identifier drawn from `[A-Za-z0-9_-]`.
///
/// Only constructed through [`extract`] or the validating [`VideoId::new`],
/// so downstream code never re-checks it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Validates a bare identifier.
    pub fn new(raw: &str) -> Result<Self, VideoIdError> {
        let len = raw.chars().count();
        if len != VIDEO_ID_LEN {
            return Err(VideoIdError::Length(len));
        }
        if let Some(bad) = raw.chars().find(|c| !is_id_char(*c)) {
            return Err(VideoIdError::Character(bad));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for VideoId {
    type Err = VideoIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Extracts the video identifier from arbitrary user text.
///
/// Returns `None` for empty input, text with no recognized link shape, and
/// links whose identifier is shorter or longer than 11 characters. The first
/// structural match wins; the identifier's case is kept exactly as typed.
///
/// # Examples
///
/// - `extract("https://www.youtube.com/watch?v=dQw4w9WgXcQ")` → `Some("dQw4w9WgXcQ")`
/// - `extract("https://youtu.be/dQw4w9WgXcQ")` → `Some("dQw4w9WgXcQ")`
/// - `extract("garbage")` → `None`
pub fn extract(raw: &str) -> Option<VideoId> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    let caps = LINK_RE.captures(text)?;
    let id = caps.get(1)?.as_str();
    Some(VideoId(id.to_string()))
}

/// Like [`extract`], but tells an empty submission apart from an unrecognized one.
pub fn lookup(raw: &str) -> Result<VideoId, LookupError> {
    if raw.trim().is_empty() {
        return Err(LookupError::EmptyInput);
    }
    extract(raw).ok_or(LookupError::UnrecognizedFormat)
}
