//! Thumbnail size catalog and the per-video result set.

use crate::video_id::VideoId;
use serde::Serialize;

/// Base URL of the image host serving pre-generated thumbnails.
pub const IMAGE_HOST: &str = "https://img.youtube.com/vi";

/// One fixed thumbnail size published by the image host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailVariant {
    /// Human-readable name, e.g. "High Quality".
    pub label: &'static str,
    /// File stem on the image host, e.g. `hqdefault`.
    pub code: &'static str,
}

/// The five known sizes, best quality first.
pub const CATALOG: [ThumbnailVariant; 5] = [
    ThumbnailVariant {
        label: "Maximum",
        code: "maxresdefault",
    },
    ThumbnailVariant {
        label: "Standard Definition",
        code: "sddefault",
    },
    ThumbnailVariant {
        label: "High Quality",
        code: "hqdefault",
    },
    ThumbnailVariant {
        label: "Medium Quality",
        code: "mqdefault",
    },
    ThumbnailVariant {
        label: "Default",
        code: "default",
    },
];

impl ThumbnailVariant {
    /// Looks a variant up by its code (`hqdefault`) or, ignoring case, its label.
    pub fn find(name: &str) -> Option<&'static ThumbnailVariant> {
        let name = name.trim();
        CATALOG
            .iter()
            .find(|v| v.code == name)
            .or_else(|| CATALOG.iter().find(|v| v.label.eq_ignore_ascii_case(name)))
    }

    pub fn image_url(&self, id: &VideoId) -> String {
        format!("{}/{}/{}.jpg", IMAGE_HOST, id, self.code)
    }

    pub fn filename(&self, id: &VideoId) -> String {
        format!("thumbnail-{}-{}.jpg", id, self.code)
    }

    pub fn result_for(&self, id: &VideoId) -> ThumbnailResult {
        ThumbnailResult {
            label: self.label.to_string(),
            code: self.code.to_string(),
            url: self.image_url(id),
            filename: self.filename(id),
        }
    }
}

/// A ready-to-use thumbnail: what to show, where it lives, what to save it as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThumbnailResult {
    pub label: String,
    pub code: String,
    pub url: String,
    pub filename: String,
}

/// Builds the result set for `id`: one entry per catalog variant, in catalog order.
pub fn build(id: &VideoId) -> Vec<ThumbnailResult> {
    CATALOG.iter().map(|v| v.result_for(id)).collect()
}
