//! Error taxonomy shared by the extractor, the session and the capabilities.

use thiserror::Error;

/// Why a submitted link produced no thumbnails.
///
/// Both variants are terminal for one submission. `Display` is the message
/// shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Please enter a YouTube URL.")]
    EmptyInput,
    #[error("Invalid YouTube URL. Please check the link and try again.")]
    UnrecognizedFormat,
}

/// Rejection reason when building a [`crate::video_id::VideoId`] from a bare string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VideoIdError {
    #[error("video id must be 11 characters, got {0}")]
    Length(usize),
    #[error("invalid character {0:?} in video id")]
    Character(char),
}

/// Failure of a host capability (clipboard write or download trigger).
///
/// Never fatal: a batch logs it and moves on to the next item.
#[derive(Debug, Error)]
pub enum CapabilityError {
    #[error("clipboard write failed: {0}")]
    Clipboard(#[from] std::io::Error),
    #[error("refusing to download {0}: not an http(s) URL")]
    InvalidUrl(String),
    #[error("download failed: {0:#}")]
    Download(#[from] anyhow::Error),
}

/// Why a session action could not run.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no thumbnails to download; submit a link first")]
    NoResults,
    #[error("unknown thumbnail variant {0:?}")]
    UnknownVariant(String),
    #[error("a batch download is already running")]
    BatchInProgress,
    #[error(transparent)]
    Capability(#[from] CapabilityError),
}
