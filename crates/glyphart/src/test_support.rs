//! Test support utilities for glyphart.
//!
//! Doubles for the renderer and clipboard seams plus an in-memory render
//! target. Not part of the stable API.

use std::sync::{Arc, Condvar, Mutex, PoisonError};

use crate::{
    Cell, Clipboard, ClipboardError, FontError, FontTarget, GlyphRenderer, RenderOptions, Result,
};

/// A memory buffer target useful for tests.
///
/// Captures rendered output into a 2D vector of cells that can be inspected.
#[derive(Default)]
pub struct BufferTarget {
    pub lines: Vec<Vec<Cell>>,
    cur_line: usize,
}

impl BufferTarget {
    pub fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
            cur_line: 0,
        }
    }

    /// Rendered rows as strings.
    pub fn text_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.iter().map(|c| c.ch).collect())
            .collect()
    }
}

impl FontTarget for BufferTarget {
    type Error = FontError;

    fn draw(&mut self, cell: Cell) -> std::result::Result<(), Self::Error> {
        if self.cur_line >= self.lines.len() {
            self.lines.push(Vec::new());
        }
        self.lines[self.cur_line].push(cell);
        Ok(())
    }

    fn next_line(&mut self) -> std::result::Result<(), Self::Error> {
        self.cur_line += 1;
        if self.cur_line >= self.lines.len() {
            self.lines.push(Vec::new());
        }
        Ok(())
    }
}

fn echo(text: &str) -> String {
    format!("ASCII for: {text}")
}

/// Renders every text as `"ASCII for: {text}"`.
pub fn echo_renderer() -> impl GlyphRenderer {
    |text: &str, _style: &str, _options: &RenderOptions| -> Result<String> { Ok(echo(text)) }
}

/// Like [`echo_renderer`] but fails for one specific text.
pub fn failing_renderer(fail_on: &str) -> impl GlyphRenderer {
    let fail_on = fail_on.to_string();
    move |text: &str, _style: &str, _options: &RenderOptions| -> Result<String> {
        if text == fail_on {
            return Err(FontError::InvalidOptions(format!("cannot render {text:?}")));
        }
        Ok(echo(text))
    }
}

/// Records every `(text, style)` pair it is asked to render.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingRenderer {
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl GlyphRenderer for RecordingRenderer {
    fn render(&self, text: &str, style: &str, _options: &RenderOptions) -> Result<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((text.to_string(), style.to_string()));
        Ok(format!("{style}: {text}"))
    }
}

/// A latch a blocked render waits on until the test opens it.
#[derive(Clone, Default)]
pub struct Gate {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl Gate {
    pub fn open(&self) {
        let (open, cond) = &*self.inner;
        *open.lock().unwrap_or_else(PoisonError::into_inner) = true;
        cond.notify_all();
    }

    pub fn wait(&self) {
        let (open, cond) = &*self.inner;
        let mut guard = open.lock().unwrap_or_else(PoisonError::into_inner);
        while !*guard {
            guard = cond.wait(guard).unwrap_or_else(PoisonError::into_inner);
        }
    }
}

/// Echo renderer that blocks on `gate` while rendering `blocked_text`.
pub struct GatedRenderer {
    gate: Gate,
    blocked_text: String,
}

impl GatedRenderer {
    pub fn new(gate: Gate, blocked_text: impl Into<String>) -> Self {
        Self {
            gate,
            blocked_text: blocked_text.into(),
        }
    }
}

impl GlyphRenderer for GatedRenderer {
    fn render(&self, text: &str, _style: &str, _options: &RenderOptions) -> Result<String> {
        if text == self.blocked_text {
            self.gate.wait();
        }
        Ok(echo(text))
    }
}

/// Keeps everything it is handed.
#[derive(Clone, Default)]
pub struct RecordingClipboard {
    texts: Arc<Mutex<Vec<String>>>,
}

impl RecordingClipboard {
    pub fn texts(&self) -> Vec<String> {
        self.texts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn set_text(&self, text: &str) -> std::result::Result<(), ClipboardError> {
        self.texts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());
        Ok(())
    }
}

/// Rejects every copy.
pub struct FailingClipboard;

impl Clipboard for FailingClipboard {
    fn set_text(&self, _text: &str) -> std::result::Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}
