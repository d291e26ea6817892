//! Terminal clipboard via the OSC 52 escape sequence.
//!
//! Format: `ESC ] 52 ; c ; <base64 payload> BEL`. Most terminal emulators
//! (and tmux with `set-clipboard on`) forward it to the system clipboard.

use super::ClipboardWriter;
use crate::error::CapabilityError;
use base64::Engine;
use std::io::{self, Write};

pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl Osc52Clipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ClipboardWriter for Osc52Clipboard<W> {
    fn write(&mut self, text: &str) -> Result<(), CapabilityError> {
        let payload = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
        write!(self.out, "\x1b]52;c;{}\x07", payload)?;
        self.out.flush()?;
        tracing::debug!(bytes = text.len(), "copied text via OSC 52");
        Ok(())
    }
}
