use crate::{error::Result, Cell, FontError, FontTarget};

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderMode {
    #[default]
    Display,
    Edit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GlyphPart {
    /// Hard blank: prints as a space in Display mode, never smushed away
    HardBlank,
    /// Plain character cell; `' '` is transparent during layout
    Char(char),
}

impl GlyphPart {
    pub const BLANK: GlyphPart = GlyphPart::Char(' ');

    pub fn is_blank(self) -> bool {
        self == Self::BLANK
    }

    pub(crate) fn cell(self, mode: RenderMode, hard_blank: char) -> Cell {
        match self {
            GlyphPart::HardBlank if mode == RenderMode::Edit => Cell::new(hard_blank, true),
            GlyphPart::HardBlank => Cell::new(' ', true),
            GlyphPart::Char(ch) => Cell::new(ch, false),
        }
    }
}

/// One FIGcharacter. Rows are padded to a common width.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub width: usize,
    pub height: usize,
    pub(crate) rows: Vec<Vec<GlyphPart>>,
}

impl Glyph {
    pub fn from_rows<S: AsRef<str>>(raw_rows: &[S], hard_blank: char) -> Self {
        let mut rows: Vec<Vec<GlyphPart>> = raw_rows
            .iter()
            .map(|row| {
                row.as_ref()
                    .chars()
                    .map(|ch| {
                        if ch == hard_blank {
                            GlyphPart::HardBlank
                        } else {
                            GlyphPart::Char(ch)
                        }
                    })
                    .collect()
            })
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, GlyphPart::BLANK);
        }
        Self {
            width,
            height: rows.len(),
            rows,
        }
    }

    pub fn rows(&self) -> &[Vec<GlyphPart>] {
        &self.rows
    }

    pub(crate) fn pad_to_height(&mut self, height: usize) {
        if self.rows.len() < height {
            self.rows.resize(height, vec![GlyphPart::BLANK; self.width]);
            self.height = height;
        }
    }

    /// Render this glyph on its own onto a target.
    ///
    /// Edit mode exposes hard blanks using the font's hard blank character.
    pub fn render<T: FontTarget>(
        &self,
        target: &mut T,
        mode: RenderMode,
        hard_blank: char,
    ) -> Result<()> {
        draw_rows(target, &self.rows, mode, hard_blank)
    }
}

pub(crate) fn draw_rows<T: FontTarget>(
    target: &mut T,
    rows: &[Vec<GlyphPart>],
    mode: RenderMode,
    hard_blank: char,
) -> Result<()> {
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            target.next_line().map_err(|_| FontError::Target)?;
        }
        for part in row {
            target
                .draw(part.cell(mode, hard_blank))
                .map_err(|_| FontError::Target)?;
        }
    }
    Ok(())
}
