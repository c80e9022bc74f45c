//! Clipboard contract used by the render controller.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("OSC 52 copy failed: {0}")]
    Osc52(String),
    #[error("system clipboard error: {0}")]
    System(String),
    #[error("no clipboard available")]
    Unavailable,
}

/// Somewhere copied art can go. Implementations store the text verbatim.
pub trait Clipboard: Send + Sync {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}
