//! FIGlet (`flf2a`) font parsing.
use crate::{
    error::{FontError, Result},
    glyph::{Glyph, RenderMode},
    layout::{HorizontalSmushing, Layout, LayoutMode, VerticalSmushing},
    FontTarget,
};
use std::collections::BTreeMap;
use std::fmt;
use std::{fs, path::Path};

const SIGNATURE: &str = "flf2a";
/// Optional glyphs following the required ASCII range, in file order.
const DEUTSCH: [u32; 7] = [196, 214, 220, 228, 246, 252, 223];

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub enum PrintDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// The first line of a FIGfont.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    hard_blank: char,
    height: usize,
    baseline: usize,
    max_length: usize,
    old_layout: i32,
    comment_lines: usize,
    print_direction: Option<PrintDirection>,
    full_layout: Option<u32>,
    codetag_count: Option<u32>,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            hard_blank: '$',
            height: 0,
            baseline: 0,
            max_length: 0,
            old_layout: 0,
            comment_lines: 0,
            print_direction: None,
            full_layout: None,
            codetag_count: None,
        }
    }
}

fn header_number<T: std::str::FromStr>(parts: &[&str], idx: usize, what: &str) -> Result<T> {
    parts
        .get(idx)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| FontError::Parse(format!("missing or invalid {what}")))
}

fn optional_number<T: std::str::FromStr>(parts: &[&str], idx: usize, what: &str) -> Result<Option<T>> {
    match parts.get(idx) {
        None => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| FontError::Parse(format!("invalid {what}: {s}"))),
    }
}

impl Header {
    pub fn parse(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let signature = parts
            .first()
            .ok_or_else(|| FontError::Parse("missing header".into()))?;
        let Some(rest) = signature.strip_prefix(SIGNATURE) else {
            return Err(FontError::Parse("not a flf2a header".into()));
        };
        let hard_blank = rest
            .chars()
            .next()
            .ok_or_else(|| FontError::Parse("missing hard blank".into()))?;
        if parts.len() < 6 {
            return Err(FontError::Parse("incomplete header".into()));
        }
        let height: usize = header_number(&parts, 1, "height")?;
        if height == 0 {
            return Err(FontError::Parse("height must be positive".into()));
        }
        let print_direction = optional_number::<u8>(&parts, 6, "print direction")?
            .map(|d| match d {
                1 => PrintDirection::RightToLeft,
                _ => PrintDirection::LeftToRight,
            });
        Ok(Self {
            hard_blank,
            height,
            baseline: header_number(&parts, 2, "baseline")?,
            max_length: header_number(&parts, 3, "max length")?,
            old_layout: header_number(&parts, 4, "old layout")?,
            comment_lines: header_number(&parts, 5, "comment line count")?,
            print_direction,
            full_layout: optional_number(&parts, 7, "full layout")?,
            codetag_count: optional_number(&parts, 8, "codetag count")?,
        })
    }

    pub fn hard_blank_char(&self) -> char {
        self.hard_blank
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn baseline(&self) -> usize {
        self.baseline
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn comment_lines(&self) -> usize {
        self.comment_lines
    }

    pub fn print_direction(&self) -> PrintDirection {
        self.print_direction.unwrap_or_default()
    }

    pub fn full_layout(&self) -> Option<u32> {
        self.full_layout
    }

    pub fn codetag_count(&self) -> Option<u32> {
        self.codetag_count
    }

    pub fn horiz_layout(&self) -> LayoutMode {
        self.horizontal_layout().mode
    }

    pub fn horizontal_smushing(&self) -> HorizontalSmushing {
        self.horizontal_layout().rules
    }

    pub fn vert_layout(&self) -> LayoutMode {
        self.vertical_layout().mode
    }

    pub fn vertical_smushing(&self) -> VerticalSmushing {
        self.vertical_layout().rules
    }

    /// Horizontal layout requested by the font. `full_layout` wins over the
    /// legacy `old_layout` field when present.
    pub fn horizontal_layout(&self) -> Layout<HorizontalSmushing> {
        match self.full_layout {
            Some(full) => {
                let rules = HorizontalSmushing::from_bits_truncate(full & 63);
                if full & 128 != 0 {
                    Layout::smushing(rules)
                } else if full & 64 != 0 {
                    Layout::fitting()
                } else {
                    Layout::full()
                }
            }
            None => match self.old_layout {
                i32::MIN..=-1 => Layout::full(),
                0 => Layout::fitting(),
                old => Layout::smushing(HorizontalSmushing::from_bits_truncate(old as u32 & 63)),
            },
        }
    }

    /// Vertical layout requested by the font; only `full_layout` carries it.
    pub fn vertical_layout(&self) -> Layout<VerticalSmushing> {
        let Some(full) = self.full_layout else {
            return Layout::full();
        };
        let rules = VerticalSmushing::from_bits_truncate((full >> 8) & 31);
        if full & 16384 != 0 {
            Layout::smushing(rules)
        } else if full & 8192 != 0 {
            Layout::fitting()
        } else {
            Layout::full()
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{SIGNATURE}{} {} {} {} {} {}",
            self.hard_blank,
            self.height,
            self.baseline,
            self.max_length,
            self.old_layout,
            self.comment_lines
        )?;
        if self.print_direction.is_some() || self.full_layout.is_some() {
            let dir = match self.print_direction() {
                PrintDirection::LeftToRight => 0,
                PrintDirection::RightToLeft => 1,
            };
            write!(f, " {dir}")?;
        }
        if let Some(full) = self.full_layout {
            write!(f, " {full}")?;
        }
        if let Some(count) = self.codetag_count {
            write!(f, " {count}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct FigletFont {
    pub(crate) name: String,
    header: Header,
    comments: Vec<String>,
    glyphs: BTreeMap<char, Glyph>,
}

impl FigletFont {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            header: Header::default(),
            comments: Vec::new(),
            glyphs: BTreeMap::new(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        let mut font = Self::from_bytes(&bytes)?;
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            font.name = stem.to_string();
        }
        Ok(font)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn height(&self) -> usize {
        self.header.height
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    pub fn has_char(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.starts_with(&[0x1F, 0x8B]) {
            return Err(FontError::Parse(
                "gzip compressed .flf not supported; provide .flf or zipped archive".into(),
            ));
        }
        if bytes.starts_with(b"PK\x03\x04") {
            return Self::from_zip(bytes);
        }
        if !bytes.starts_with(SIGNATURE.as_bytes()) {
            return Err(FontError::UnrecognizedFormat);
        }
        let content =
            std::str::from_utf8(bytes).map_err(|e| FontError::Parse(format!("utf8 error: {e}")))?;
        Self::parse(content)
    }

    #[cfg(feature = "zip")]
    fn from_zip(bytes: &[u8]) -> Result<Self> {
        use std::io::{Cursor, Read};
        use zip::ZipArchive;

        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| FontError::Parse(format!("zip open error: {e}")))?;
        for i in 0..archive.len() {
            let mut file = archive
                .by_index(i)
                .map_err(|e| FontError::Parse(format!("zip entry error: {e}")))?;
            if file.name().ends_with(".flf") {
                let mut buf = String::new();
                file.read_to_string(&mut buf)
                    .map_err(|e| FontError::Parse(format!("zip read flf error: {e}")))?;
                return Self::parse(&buf);
            }
        }
        Err(FontError::Parse("zip archive contained no .flf".into()))
    }

    #[cfg(not(feature = "zip"))]
    fn from_zip(_bytes: &[u8]) -> Result<Self> {
        Err(FontError::Parse(
            "zipped fonts need the `zip` feature".into(),
        ))
    }

    /// Parses FIGfont source text.
    pub fn parse(content: &str) -> Result<Self> {
        let mut lines = content.lines().peekable();
        let header_line = lines
            .next()
            .ok_or_else(|| FontError::Parse("missing header".into()))?;
        let header = Header::parse(header_line)?;
        let mut font = FigletFont::new("figlet");

        for _ in 0..header.comment_lines {
            let comment = lines
                .next()
                .ok_or_else(|| FontError::Parse("truncated comment block".into()))?;
            font.comments.push(comment.to_string());
        }

        for code in 32u32..=126 {
            let rows = Self::read_character(&mut lines, header.height)?
                .ok_or_else(|| FontError::Parse(format!("missing glyph for code {code}")))?;
            font.insert(code, &rows, header.hard_blank);
        }

        for code in DEUTSCH {
            skip_blank(&mut lines);
            if lines.peek().is_none() || looks_like_code_tag(lines.peek().copied()) {
                break;
            }
            match Self::read_character(&mut lines, header.height)? {
                Some(rows) => font.insert(code, &rows, header.hard_blank),
                None => break,
            }
        }

        loop {
            skip_blank(&mut lines);
            let Some(tag_line) = lines.next() else {
                break;
            };
            let tag = tag_line.split_whitespace().next().unwrap_or_default();
            let code = parse_code(tag)
                .ok_or_else(|| FontError::Parse(format!("invalid code tag: {tag_line}")))?;
            let rows = Self::read_character(&mut lines, header.height)?
                .ok_or_else(|| FontError::Parse(format!("missing glyph for code tag {tag}")))?;
            // Negative codes are translation-table entries, never rendered.
            if let Ok(code) = u32::try_from(code) {
                font.insert(code, &rows, header.hard_blank);
            }
        }

        font.header = header;
        Ok(font)
    }

    /// Reads one FIGcharacter. `Ok(None)` when the input ends before it starts.
    fn read_character<'a, I>(lines: &mut I, height: usize) -> Result<Option<Vec<String>>>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut rows = Vec::with_capacity(height);
        for i in 0..height {
            let Some(line) = lines.next() else {
                if i == 0 {
                    return Ok(None);
                }
                return Err(FontError::Parse("incomplete character".into()));
            };
            rows.push(strip_end_marks(line).to_string());
        }
        Ok(Some(rows))
    }

    fn insert(&mut self, code: u32, rows: &[String], hard_blank: char) {
        if let Some(ch) = char::from_u32(code) {
            self.glyphs.insert(ch, Glyph::from_rows(rows, hard_blank));
        }
    }

    /// Adds a glyph from raw rows. The font grows to the tallest glyph.
    pub fn add_raw_char(&mut self, ch: char, raw_lines: &[&str]) {
        let glyph = Glyph::from_rows(raw_lines, self.header.hard_blank);
        self.glyphs.insert(ch, glyph);
        let height = self.glyphs.values().map(|g| g.height).max().unwrap_or(0);
        self.header.height = height;
        for glyph in self.glyphs.values_mut() {
            glyph.pad_to_height(height);
        }
    }

    /// Draw a single FIGcharacter onto a target.
    pub fn render_glyph<T: FontTarget>(
        &self,
        target: &mut T,
        ch: char,
        mode: RenderMode,
    ) -> Result<()> {
        let Some(glyph) = self.glyph(ch) else {
            return Err(FontError::UnknownChar(ch));
        };
        glyph.render(target, mode, self.header.hard_blank)
    }
}

/// Strips trailing whitespace and every trailing repetition of the end mark.
fn strip_end_marks(line: &str) -> &str {
    let trimmed = line.trim_end();
    match trimmed.chars().last() {
        Some(end) => trimmed.trim_end_matches(end),
        None => trimmed,
    }
}

fn skip_blank<'a, I>(lines: &mut std::iter::Peekable<I>)
where
    I: Iterator<Item = &'a str>,
{
    while lines.peek().is_some_and(|l| l.trim().is_empty()) {
        lines.next();
    }
}

fn looks_like_code_tag(line: Option<&str>) -> bool {
    line.and_then(|l| l.split_whitespace().next())
        .and_then(parse_code)
        .is_some()
        && line.is_some_and(|l| l.split_whitespace().count() > 1 || !l.ends_with('@'))
}

/// Parses a code tag number: decimal, `0x` hex or leading-zero octal.
fn parse_code(tag: &str) -> Option<i64> {
    let (negative, digits) = match tag.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, tag),
    };
    let value = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        i64::from_str_radix(hex, 16).ok()?
    } else if digits.len() > 1 && digits.starts_with('0') {
        i64::from_str_radix(&digits[1..], 8).ok()?
    } else {
        digits.parse().ok()?
    };
    Some(if negative { -value } else { value })
}
