//! Line-oriented interactive session on top of the render controller.
use std::io::Write;

use anyhow::{Context, Result};
use glyphart::{CopyOutcome, RenderController, RenderOutcome, Style};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const HELP: &str = "Type text to render. Commands: :style NAME, :styles, :copy, :help, :quit";

enum Command<'a> {
    Text(&'a str),
    Style(&'a str),
    Styles,
    Copy,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Command<'_> {
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Text(line);
    };
    let (name, arg) = rest.split_once(' ').unwrap_or((rest, ""));
    match name {
        "style" | "s" => Command::Style(arg.trim()),
        "styles" => Command::Styles,
        "copy" | "c" => Command::Copy,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Text(line),
    }
}

pub struct Session<W> {
    controller: RenderController,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(controller: RenderController, out: W) -> Self {
        Self { controller, out }
    }

    /// Reads commands until `:quit` or end of input.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<()> {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await.context("reading input")? {
            match parse_command(&line) {
                Command::Quit => break,
                Command::Help => writeln!(self.out, "{HELP}")?,
                Command::Styles => {
                    let current = self.controller.style();
                    for style in Style::ALL {
                        let marker = if style == current { "*" } else { " " };
                        writeln!(self.out, "{marker} {style}")?;
                    }
                }
                Command::Style(name) => match self.controller.select_style(name) {
                    Ok(task) => {
                        let outcome = task.wait().await;
                        self.show(outcome)?;
                    }
                    Err(e) => eprintln!("{e}"),
                },
                Command::Copy => match self.controller.copy_current_art() {
                    Ok(CopyOutcome::Copied) => eprintln!("copied to clipboard"),
                    Ok(CopyOutcome::NothingToCopy) => eprintln!("nothing to copy"),
                    Err(e) => eprintln!("copy failed: {e}"),
                },
                Command::Text(text) => {
                    let outcome = self.controller.set_input_text(text).wait().await;
                    self.show(outcome)?;
                }
            }
            self.out.flush()?;
        }
        Ok(())
    }

    fn show(&mut self, outcome: RenderOutcome) -> Result<()> {
        match outcome {
            RenderOutcome::Applied => writeln!(self.out, "{}", self.controller.rendered_art())?,
            RenderOutcome::Failed(e) => eprintln!("render failed: {e}"),
            RenderOutcome::Stale | RenderOutcome::Cleared => {}
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphart::test_support::{echo_renderer, RecordingClipboard, RecordingRenderer};

    #[tokio::test]
    async fn renders_each_line() {
        let controller = RenderController::new(echo_renderer(), RecordingClipboard::default());
        let mut session = Session::new(controller, Vec::new());
        session.run(&b"one\ntwo\n"[..]).await.unwrap();
        let out = String::from_utf8(session.into_output()).unwrap();
        assert_eq!(out, "ASCII for: one\nASCII for: two\n");
    }

    #[tokio::test]
    async fn switches_style_and_copies() {
        let clipboard = RecordingClipboard::default();
        let renderer = RecordingRenderer::default();
        let controller = RenderController::new(renderer.clone(), clipboard.clone());
        let mut session = Session::new(controller, Vec::new());
        session
            .run(&b"hi\n:style nope\n:style slant\n:copy\n:quit\nignored\n"[..])
            .await
            .unwrap();
        let out = String::from_utf8(session.into_output()).unwrap();
        assert_eq!(out, "Standard: hi\nSlant: hi\n");
        assert_eq!(clipboard.texts(), vec!["Slant: hi".to_string()]);
        assert_eq!(renderer.calls().len(), 2);
    }

    #[tokio::test]
    async fn lists_styles_with_current_marker() {
        let controller = RenderController::new(echo_renderer(), RecordingClipboard::default());
        let mut session = Session::new(controller, Vec::new());
        session.run(&b":styles\n"[..]).await.unwrap();
        let out = String::from_utf8(session.into_output()).unwrap();
        assert!(out.starts_with("* Standard\n  Big\n"));
    }

    #[test]
    fn unknown_commands_are_text() {
        assert!(matches!(parse_command(":wat"), Command::Text(":wat")));
        assert!(matches!(parse_command(":style big"), Command::Style("big")));
        assert!(matches!(parse_command(":q"), Command::Quit));
    }
}
