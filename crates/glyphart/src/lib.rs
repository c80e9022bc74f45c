//! glyphart: FIGlet ASCII art rendering.
//! Features: FIGlet parsing, fitting/smushing layout, a bundled style catalog
//! and a render controller with last-request-wins semantics.

pub mod clipboard;
pub mod controller;
mod error;
pub mod figlet;
mod font;
mod glyph;
pub mod layout;
mod render;
pub use clipboard::{Clipboard, ClipboardError};
pub use controller::{CopyOutcome, RenderController, RenderOutcome, RenderTask, Snapshot};
pub use error::{FontError, Result};
pub use figlet::FigletFont;
pub use font::Style;
pub use glyph::{Glyph, GlyphPart, RenderMode};
pub use layout::{HorizontalLayout, VerticalLayout};
pub use render::{FigletRenderer, GlyphRenderer, RenderOptions, TextTarget};

// Test utilities
pub mod test_support;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub hard_blank: bool,
}

impl Cell {
    pub fn new(ch: char, hard_blank: bool) -> Self {
        Self { ch, hard_blank }
    }
}

pub trait FontTarget {
    type Error;
    fn draw(&mut self, cell: Cell) -> std::result::Result<(), Self::Error>;
    fn next_line(&mut self) -> std::result::Result<(), Self::Error>;
}
