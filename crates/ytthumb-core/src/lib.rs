pub mod config;
pub mod logging;

pub mod batch;
pub mod capability;
pub mod catalog;
pub mod error;
pub mod session;
pub mod video_id;

pub use catalog::{build, ThumbnailResult, ThumbnailVariant, CATALOG};
pub use error::{CapabilityError, LookupError, SessionError};
pub use video_id::{extract, lookup, VideoId};
