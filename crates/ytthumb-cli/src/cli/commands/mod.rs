//! CLI command handlers, one file per command.

mod copy;
mod download;
mod download_all;
mod id;
mod show;

pub use copy::run_copy;
pub use download::run_download;
pub use download_all::run_download_all;
pub use id::run_id;
pub use show::run_show;

use anyhow::Result;
use ytthumb_core::config::ThumbConfig;
use ytthumb_core::session::{Pacing, Session, ViewState};

/// Submits `link` through a fresh session and returns it holding the results.
/// A failed lookup becomes an error carrying the user-facing message.
pub(super) async fn resolve(cfg: &ThumbConfig, link: &str) -> Result<Session> {
    let mut session = Session::new(Pacing::from_config(cfg));
    session.set_input(link);
    session.submit().await;
    if let ViewState::Failure(msg) = session.state() {
        anyhow::bail!("{msg}");
    }
    Ok(session)
}
