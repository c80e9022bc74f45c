use std::{fmt, str::FromStr};

use once_cell::sync::OnceCell;

use crate::{figlet::FigletFont, FontError, Result};

/// The bundled style catalog. Each style is backed by a FIGfont compiled
/// into the library.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Style {
    #[default]
    Standard,
    Big,
    Block,
    Slant,
    Ghost,
}

static STANDARD: OnceCell<FigletFont> = OnceCell::new();
static BIG: OnceCell<FigletFont> = OnceCell::new();
static BLOCK: OnceCell<FigletFont> = OnceCell::new();
static SLANT: OnceCell<FigletFont> = OnceCell::new();
static GHOST: OnceCell<FigletFont> = OnceCell::new();

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Standard,
        Style::Big,
        Style::Block,
        Style::Slant,
        Style::Ghost,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Style::Standard => "Standard",
            Style::Big => "Big",
            Style::Block => "Block",
            Style::Slant => "Slant",
            Style::Ghost => "Ghost",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Style::Standard => include_str!("../fonts/standard.flf"),
            Style::Big => include_str!("../fonts/big.flf"),
            Style::Block => include_str!("../fonts/block.flf"),
            Style::Slant => include_str!("../fonts/slant.flf"),
            Style::Ghost => include_str!("../fonts/ghost.flf"),
        }
    }

    fn cell(self) -> &'static OnceCell<FigletFont> {
        match self {
            Style::Standard => &STANDARD,
            Style::Big => &BIG,
            Style::Block => &BLOCK,
            Style::Slant => &SLANT,
            Style::Ghost => &GHOST,
        }
    }

    /// The bundled font for this style, parsed on first use.
    pub fn font(self) -> Result<&'static FigletFont> {
        self.cell().get_or_try_init(|| {
            tracing::debug!(style = self.name(), "parsing bundled font");
            Ok(FigletFont::from_bytes(self.source().as_bytes())?.with_name(self.name()))
        })
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = FontError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Style::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FontError::UnknownStyle(s.to_string()))
    }
}
