//! `ytthumb id <link>` – print the video identifier.

use anyhow::Result;
use ytthumb_core::video_id;

pub fn run_id(link: &str) -> Result<()> {
    let id = video_id::lookup(link)?;
    tracing::debug!(video_id = %id, "resolved identifier");
    println!("{id}");
    Ok(())
}
