//! `ytthumb show <link>` – list the thumbnail URLs.

use anyhow::Result;
use ytthumb_core::config::ThumbConfig;

pub async fn run_show(cfg: &ThumbConfig, link: &str, json: bool) -> Result<()> {
    let session = super::resolve(cfg, link).await?;
    let results = session.results().unwrap_or_default();

    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    println!("{:<20} {:<14} {}", "RESOLUTION", "CODE", "URL");
    for r in results {
        println!("{:<20} {:<14} {}", r.label, r.code, r.url);
    }
    Ok(())
}
