use std::{
    io::{IsTerminal, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use glyphart::{
    figlet::{FigletFont, PrintDirection},
    Clipboard, FigletRenderer, GlyphRenderer, HorizontalLayout, RenderController, RenderMode,
    RenderOptions, Style, VerticalLayout,
};
use tracing_subscriber::EnvFilter;

use crate::{clipboard::SystemClipboard, console::Session};
mod clipboard;
mod console;

#[derive(Parser)]
#[command(name = "glyphart", version, about = "Render text as FIGlet ASCII art")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Args)]
struct LayoutArgs {
    /// Output width in columns
    #[arg(short, long, default_value_t = 80)]
    width: usize,
    #[arg(long, default_value = "default")]
    horizontal_layout: HorizontalLayout,
    #[arg(long, default_value = "default")]
    vertical_layout: VerticalLayout,
    /// Break lines at any character instead of between words
    #[arg(long)]
    no_whitespace_break: bool,
    /// Show hard blanks instead of spaces
    #[arg(long)]
    edit: bool,
}

impl LayoutArgs {
    fn options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            horizontal_layout: self.horizontal_layout,
            vertical_layout: self.vertical_layout,
            whitespace_break: !self.no_whitespace_break,
            render_mode: if self.edit {
                RenderMode::Edit
            } else {
                RenderMode::Display
            },
        }
    }
}

#[derive(Subcommand)]
enum Cmd {
    /// Render text; reads stdin when no text is given
    Render {
        text: Vec<String>,
        #[arg(short, long, default_value = "Standard")]
        style: String,
        /// Render with a .flf font (plain or zipped) instead of a bundled style
        #[arg(long)]
        font_file: Option<PathBuf>,
        #[command(flatten)]
        layout: LayoutArgs,
        /// Also copy the art to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// List the bundled styles
    Styles {
        /// Render this text in every style
        #[arg(long)]
        sample: Option<String>,
    },
    /// Show font metadata
    Inspect {
        #[arg(short, long, required_unless_present = "font_file", conflicts_with = "font_file")]
        style: Option<Style>,
        #[arg(long)]
        font_file: Option<PathBuf>,
    },
    /// Edit text line by line and re-render on every change
    Interactive {
        #[arg(short, long, default_value = "Standard")]
        style: Style,
        #[command(flatten)]
        layout: LayoutArgs,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_font(path: &Path) -> Result<FigletFont> {
    FigletFont::load(path).with_context(|| format!("loading font {}", path.display()))
}

fn read_text(args: Vec<String>) -> Result<String> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("reading text from stdin")?;
    Ok(text.trim_end_matches(['\n', '\r']).to_string())
}

fn print_font(font: &FigletFont) {
    let header = font.header();
    let horizontal = header.horizontal_layout();
    let vertical = header.vertical_layout();
    println!("FIGlet font: {}", font.name());
    println!("  Header: {header}");
    println!("  Height: {}", header.height());
    println!("  Baseline: {}", header.baseline());
    println!("  Max length: {}", header.max_length());
    let direction = match header.print_direction() {
        PrintDirection::LeftToRight => "left-to-right",
        PrintDirection::RightToLeft => "right-to-left",
    };
    println!("  Direction: {direction}");
    println!(
        "  Horizontal layout: {:?} {:?}",
        horizontal.mode, horizontal.rules
    );
    println!("  Vertical layout: {:?} {:?}", vertical.mode, vertical.rules);
    println!("  Comment lines: {}", font.comments().len());
    println!("  Defined characters: {}", font.glyph_count());
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Cmd::Render {
            text,
            style,
            font_file,
            layout,
            copy,
        } => {
            let text = read_text(text)?;
            let mut renderer = FigletRenderer::new();
            let mut style = style;
            if let Some(path) = font_file {
                let font = load_font(&path)?;
                style = font.name().to_string();
                renderer = renderer.with_font(font);
            }
            let art = if text.trim().is_empty() {
                String::new()
            } else {
                renderer
                    .render(&text, &style, &layout.options())
                    .with_context(|| format!("rendering with style {style}"))?
            };
            if !art.is_empty() {
                println!("{art}");
            }
            if copy && !art.is_empty() {
                SystemClipboard
                    .set_text(&art)
                    .context("copying art to the clipboard")?;
                eprintln!("copied to clipboard");
            }
        }
        Cmd::Styles { sample } => {
            let renderer = FigletRenderer::new();
            for style in Style::ALL {
                println!("{style}");
                if let Some(sample) = &sample {
                    let art = renderer
                        .render(sample, style.name(), &RenderOptions::default())
                        .with_context(|| format!("rendering sample in {style}"))?;
                    println!("{art}\n");
                }
            }
        }
        Cmd::Inspect { style, font_file } => {
            let font = match (style, font_file) {
                (_, Some(path)) => load_font(&path)?,
                (Some(style), None) => style.font()?.clone(),
                (None, None) => anyhow::bail!("give --style or --font-file"),
            };
            print_font(&font);
        }
        Cmd::Interactive { style, layout } => {
            let controller = RenderController::new(FigletRenderer::new(), SystemClipboard)
                .with_options(layout.options());
            controller.set_style(style).wait().await;
            if std::io::stdin().is_terminal() {
                eprintln!("{}", console::HELP);
            }
            let mut session = Session::new(controller, std::io::stdout());
            session
                .run(tokio::io::BufReader::new(tokio::io::stdin()))
                .await?;
        }
    }
    Ok(())
}
