use std::convert::Infallible;

use crate::{
    error::{FontError, Result},
    figlet::{FigletFont, PrintDirection},
    font::Style,
    glyph::{draw_rows, Glyph, GlyphPart, RenderMode},
    layout::{FigLine, HorizontalComposer, HorizontalLayout, VerticalComposer, VerticalLayout},
    Cell, FontTarget,
};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Output columns; laid-out lines stay narrower than this
    pub width: usize,
    pub horizontal_layout: HorizontalLayout,
    pub vertical_layout: VerticalLayout,
    /// Wrap between words instead of at any character
    pub whitespace_break: bool,
    pub render_mode: RenderMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 80,
            horizontal_layout: HorizontalLayout::Default,
            vertical_layout: VerticalLayout::Default,
            whitespace_break: true,
            render_mode: RenderMode::Display,
        }
    }
}

impl RenderOptions {
    pub fn display() -> Self {
        RenderOptions::default()
    }

    pub fn edit() -> Self {
        Self {
            render_mode: RenderMode::Edit,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(FontError::InvalidOptions(
                "width must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Turns text into ASCII art in a named style.
///
/// Implementations must be pure: the same arguments always yield the same
/// result. Output is printable characters joined by `\n` with no trailing
/// newline.
pub trait GlyphRenderer: Send + Sync {
    fn render(&self, text: &str, style: &str, options: &RenderOptions) -> Result<String>;
}

impl<F> GlyphRenderer for F
where
    F: Fn(&str, &str, &RenderOptions) -> Result<String> + Send + Sync,
{
    fn render(&self, text: &str, style: &str, options: &RenderOptions) -> Result<String> {
        self(text, style, options)
    }
}

/// Renders with the bundled style catalog plus any fonts registered with
/// [`FigletRenderer::with_font`].
#[derive(Clone, Debug, Default)]
pub struct FigletRenderer {
    custom: Vec<(String, FigletFont)>,
}

impl FigletRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a font under its own name. Registered fonts shadow bundled
    /// styles of the same name.
    pub fn with_font(mut self, font: FigletFont) -> Self {
        self.custom.push((font.name().to_string(), font));
        self
    }

    pub fn font(&self, style: &str) -> Result<&FigletFont> {
        let wanted = style.trim();
        if let Some((_, font)) = self
            .custom
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        {
            return Ok(font);
        }
        style.parse::<Style>()?.font()
    }
}

impl GlyphRenderer for FigletRenderer {
    fn render(&self, text: &str, style: &str, options: &RenderOptions) -> Result<String> {
        options.validate()?;
        self.font(style)?.render_string(text, options)
    }
}

/// Collects rendered cells into a `String`.
#[derive(Clone, Debug, Default)]
pub struct TextTarget {
    out: String,
}

impl TextTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl FontTarget for TextTarget {
    type Error = Infallible;

    fn draw(&mut self, cell: Cell) -> std::result::Result<(), Self::Error> {
        self.out.push(cell.ch);
        Ok(())
    }

    fn next_line(&mut self) -> std::result::Result<(), Self::Error> {
        self.out.push('\n');
        Ok(())
    }
}

impl FigletFont {
    /// Lay out `text` and draw it onto `target`.
    pub fn render<T: FontTarget>(
        &self,
        target: &mut T,
        text: &str,
        options: &RenderOptions,
    ) -> Result<()> {
        let rows = self.layout_text(text, options)?;
        draw_rows(
            target,
            &rows,
            options.render_mode,
            self.header().hard_blank_char(),
        )
    }

    pub fn render_string(&self, text: &str, options: &RenderOptions) -> Result<String> {
        let mut target = TextTarget::new();
        self.render(&mut target, text, options)?;
        Ok(target.into_string())
    }

    fn layout_text(&self, text: &str, options: &RenderOptions) -> Result<Vec<Vec<GlyphPart>>> {
        options.validate()?;
        if text.is_empty() {
            return Ok(Vec::new());
        }
        let header = self.header();
        let right_to_left = header.print_direction() == PrintDirection::RightToLeft;
        let mut horizontal =
            HorizontalComposer::new(options.horizontal_layout.resolve(header.horizontal_layout()));
        horizontal.right_to_left = right_to_left;
        let vertical =
            VerticalComposer::new(options.vertical_layout.resolve(header.vertical_layout()));

        let mut wrapper = Wrapper {
            font: self,
            composer: horizontal,
            limit: options.width - 1,
            lines: Vec::new(),
        };
        for paragraph in text.split('\n') {
            let chars: Vec<char> = paragraph
                .chars()
                .filter(|&ch| ch != '\r')
                .map(|ch| if ch == '\t' { ' ' } else { ch })
                .filter(|&ch| self.has_char(ch))
                .collect();
            if options.whitespace_break {
                wrapper.paragraph_by_word(&chars);
            } else {
                wrapper.paragraph_by_char(&chars);
            }
        }

        let mut rows: Vec<Vec<GlyphPart>> = Vec::new();
        for (i, line) in wrapper.lines.into_iter().enumerate() {
            if i == 0 {
                rows = line.into_rows();
            } else {
                vertical.stack(&mut rows, line.into_rows());
            }
        }
        Ok(rows)
    }
}

struct Wrapper<'a> {
    font: &'a FigletFont,
    composer: HorizontalComposer,
    /// Widest a finished line may be
    limit: usize,
    lines: Vec<FigLine>,
}

impl<'a> Wrapper<'a> {
    /// Composes glyphs given in reading order. Right-to-left fonts lay the
    /// line out from its last glyph, so wrapping never reorders lines.
    fn compose(&self, glyphs: &[&Glyph]) -> FigLine {
        let mut line = FigLine::new(self.font.height());
        if self.composer.right_to_left {
            for glyph in glyphs.iter().rev() {
                line.push(glyph, &self.composer);
            }
        } else {
            for glyph in glyphs {
                line.push(glyph, &self.composer);
            }
        }
        line
    }

    fn fits(&self, glyphs: &[&Glyph]) -> bool {
        self.compose(glyphs).width() <= self.limit
    }

    fn finish_line(&mut self, glyphs: &mut Vec<&'a Glyph>) {
        let line = self.compose(glyphs);
        self.lines.push(line);
        glyphs.clear();
    }

    /// Adds one glyph, starting a new line first when it would not fit.
    fn push_char(&mut self, line: &mut Vec<&'a Glyph>, glyph: &'a Glyph) {
        line.push(glyph);
        if line.len() > 1 && !self.fits(line) {
            line.pop();
            self.finish_line(line);
            line.push(glyph);
        }
    }

    fn paragraph_by_char(&mut self, chars: &[char]) {
        let font = self.font;
        let mut line = Vec::new();
        for glyph in chars.iter().filter_map(|&ch| font.glyph(ch)) {
            self.push_char(&mut line, glyph);
        }
        self.finish_line(&mut line);
    }

    fn paragraph_by_word(&mut self, chars: &[char]) {
        let font = self.font;
        let space = font.glyph(' ');
        let mut line: Vec<&'a Glyph> = Vec::new();
        let mut wrapped = false;
        for (i, word) in chars.split(|&ch| ch == ' ').enumerate() {
            let glyphs: Vec<&'a Glyph> = word.iter().filter_map(|&ch| font.glyph(ch)).collect();
            let mut trial = line.clone();
            // Spaces at a wrap point are dropped.
            if i > 0 && !(wrapped && trial.is_empty()) {
                if let Some(space) = space {
                    trial.push(space);
                }
            }
            trial.extend(&glyphs);
            if self.fits(&trial) {
                line = trial;
                continue;
            }
            if !line.is_empty() {
                self.finish_line(&mut line);
                wrapped = true;
            }
            for glyph in glyphs {
                self.push_char(&mut line, glyph);
            }
        }
        self.finish_line(&mut line);
    }
}
