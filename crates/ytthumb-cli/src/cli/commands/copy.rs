//! `ytthumb copy <link>` – put the link on the clipboard.

use anyhow::Result;
use ytthumb_core::capability::Osc52Clipboard;
use ytthumb_core::config::ThumbConfig;
use ytthumb_core::session::{Pacing, Session};

pub fn run_copy(cfg: &ThumbConfig, link: &str) -> Result<()> {
    let mut session = Session::new(Pacing::from_config(cfg));
    session.set_input(link);
    let mut clipboard = Osc52Clipboard::stdout();
    match session.copy_input(&mut clipboard) {
        Some(ticket) => {
            session.reset_copied(ticket);
            eprintln!("Copied.");
            Ok(())
        }
        None if link.is_empty() => anyhow::bail!("nothing to copy"),
        None => anyhow::bail!("copy failed; see log for details"),
    }
}
