//! Session state for one editing session and last-request-wins rendering.
//!
//! Every mutation bumps a generation counter under the state lock. Renders
//! run on Tokio's blocking pool and only write their result back when their
//! generation is still the current one.
use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, warn};

use crate::{
    clipboard::{Clipboard, ClipboardError},
    font::Style,
    render::{GlyphRenderer, RenderOptions},
    FontError,
};

/// Published session state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub input: String,
    pub style: Style,
    /// Empty when the input is blank
    pub art: String,
    /// Message of the most recent failed render, cleared by the next success
    pub last_error: Option<String>,
    pub generation: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The art was replaced with the new render.
    Applied,
    /// A newer request started before this one finished; result discarded.
    Stale,
    /// The renderer failed; art was left as it was.
    Failed(String),
    /// Input was blank so the art was cleared without rendering.
    Cleared,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    NothingToCopy,
}

/// Handle to one dispatched render. Dropping it does not cancel the render.
#[derive(Debug)]
pub struct RenderTask {
    inner: TaskState,
}

#[derive(Debug)]
enum TaskState {
    Ready(RenderOutcome),
    Running(JoinHandle<RenderOutcome>),
}

impl RenderTask {
    fn ready(outcome: RenderOutcome) -> Self {
        Self {
            inner: TaskState::Ready(outcome),
        }
    }

    pub fn is_finished(&self) -> bool {
        match &self.inner {
            TaskState::Ready(_) => true,
            TaskState::Running(handle) => handle.is_finished(),
        }
    }

    pub async fn wait(self) -> RenderOutcome {
        match self.inner {
            TaskState::Ready(outcome) => outcome,
            TaskState::Running(handle) => handle
                .await
                .unwrap_or_else(|e| RenderOutcome::Failed(format!("render task failed: {e}"))),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

pub struct RenderController {
    state: Arc<watch::Sender<Snapshot>>,
    renderer: Arc<dyn GlyphRenderer>,
    clipboard: Arc<dyn Clipboard>,
    options: Arc<RenderOptions>,
}

impl RenderController {
    pub fn new(
        renderer: impl GlyphRenderer + 'static,
        clipboard: impl Clipboard + 'static,
    ) -> Self {
        let (state, _) = watch::channel(Snapshot::default());
        Self {
            state: Arc::new(state),
            renderer: Arc::new(renderer),
            clipboard: Arc::new(clipboard),
            options: Arc::new(RenderOptions::default()),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = Arc::new(options);
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.state.subscribe()
    }

    pub fn input_text(&self) -> String {
        self.state.borrow().input.clone()
    }

    pub fn style(&self) -> Style {
        self.state.borrow().style
    }

    pub fn rendered_art(&self) -> String {
        self.state.borrow().art.clone()
    }

    pub fn last_error(&self) -> Option<String> {
        self.state.borrow().last_error.clone()
    }

    pub fn set_input_text(&self, text: impl Into<String>) -> RenderTask {
        let text = text.into();
        self.state.send_modify(|s| s.input = text);
        self.render()
    }

    pub fn set_style(&self, style: Style) -> RenderTask {
        self.state.send_modify(|s| s.style = style);
        self.render()
    }

    /// Selects a style by name. Unknown names leave the session untouched.
    pub fn select_style(&self, name: &str) -> Result<RenderTask, FontError> {
        let style = name.parse::<Style>()?;
        Ok(self.set_style(style))
    }

    /// Must be called from within a Tokio runtime.
    pub fn render(&self) -> RenderTask {
        let mut request = None;
        self.state.send_modify(|s| {
            s.generation += 1;
            if s.input.trim().is_empty() {
                s.art.clear();
                s.last_error = None;
            } else {
                request = Some((s.generation, s.input.clone(), s.style));
            }
        });
        let Some((generation, text, style)) = request else {
            return RenderTask::ready(RenderOutcome::Cleared);
        };
        debug!(generation, %style, "dispatching render");

        let state = Arc::clone(&self.state);
        let renderer = Arc::clone(&self.renderer);
        let options = Arc::clone(&self.options);
        let handle = tokio::task::spawn_blocking(move || {
            // Panics take the same generation-checked path as errors.
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                renderer.render(&text, style.name(), &options)
            }))
            .unwrap_or_else(|payload| Err(FontError::Panicked(panic_message(&*payload))));
            let mut outcome = RenderOutcome::Stale;
            state.send_if_modified(|s| {
                if s.generation != generation {
                    return false;
                }
                outcome = match result {
                    Ok(art) => {
                        s.art = art;
                        s.last_error = None;
                        RenderOutcome::Applied
                    }
                    Err(e) => {
                        let message = e.to_string();
                        s.last_error = Some(message.clone());
                        RenderOutcome::Failed(message)
                    }
                };
                true
            });
            match &outcome {
                RenderOutcome::Stale => debug!(generation, "discarding stale render"),
                RenderOutcome::Failed(error) => warn!(generation, %style, %error, "render failed"),
                _ => {}
            }
            outcome
        });
        RenderTask {
            inner: TaskState::Running(handle),
        }
    }

    /// Copies the current art verbatim. Blank art never reaches the clipboard.
    pub fn copy_current_art(&self) -> Result<CopyOutcome, ClipboardError> {
        let art = self.rendered_art();
        if art.is_empty() {
            debug!("nothing to copy");
            return Ok(CopyOutcome::NothingToCopy);
        }
        self.clipboard
            .set_text(&art)
            .map(|()| CopyOutcome::Copied)
            .inspect_err(|e| warn!(error = %e, "copy failed"))
    }
}
