//! System clipboard: OSC 52 when stdout is a terminal, `arboard` otherwise.
use std::io::{IsTerminal, Write};

use base64::Engine;
use glyphart::{Clipboard, ClipboardError};
use tracing::debug;

pub struct SystemClipboard;

impl SystemClipboard {
    /// OSC 52 works over SSH; the terminal intercepts the sequence.
    fn copy_osc52(text: &str) -> Result<(), ClipboardError> {
        let mut stdout = std::io::stdout();
        if !stdout.is_terminal() {
            return Err(ClipboardError::Osc52("stdout is not a terminal".into()));
        }
        let encoded = base64::engine::general_purpose::STANDARD.encode(text);
        write!(stdout, "\x1b]52;c;{encoded}\x1b\\")
            .map_err(|e| ClipboardError::Osc52(e.to_string()))?;
        stdout
            .flush()
            .map_err(|e| ClipboardError::Osc52(e.to_string()))
    }

    fn copy_system(text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::System(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::System(e.to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        match Self::copy_osc52(text) {
            Ok(()) => Ok(()),
            Err(e) => {
                debug!(error = %e, "falling back to system clipboard");
                Self::copy_system(text)
            }
        }
    }
}
