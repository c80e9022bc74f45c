//! FIGlet layout: horizontal fitting/smushing of FIGcharacters into a line
//! and vertical stacking of lines.
use std::{fmt, str::FromStr};

use bitflags::bitflags;

use crate::{glyph::GlyphPart, FontError, Glyph};

bitflags! {
    /// Horizontal smushing rules, bit values as stored in a FIGfont header.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HorizontalSmushing: u32 {
        const EQUAL_CHARACTER = 1;
        const UNDERSCORE = 2;
        const HIERARCHY = 4;
        const OPPOSITE_PAIR = 8;
        const BIG_X = 16;
        const HARDBLANK = 32;
    }
}

bitflags! {
    /// Vertical smushing rules, shifted down from header bits 256..4096.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct VerticalSmushing: u32 {
        const EQUAL_CHARACTER = 1;
        const UNDERSCORE = 2;
        const HIERARCHY = 4;
        const HORIZONTAL_LINE = 8;
        const VERTICAL_LINE = 16;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Full,
    Fitting,
    Smushing,
}

/// A resolved layout: how glyphs meet and, when smushing, which rules apply.
/// Smushing with an empty rule set is universal smushing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout<R> {
    pub mode: LayoutMode,
    pub rules: R,
}

impl<R: Default> Layout<R> {
    pub fn full() -> Self {
        Self {
            mode: LayoutMode::Full,
            rules: R::default(),
        }
    }

    pub fn fitting() -> Self {
        Self {
            mode: LayoutMode::Fitting,
            rules: R::default(),
        }
    }

    pub fn smushing(rules: R) -> Self {
        Self {
            mode: LayoutMode::Smushing,
            rules,
        }
    }
}

/// Horizontal layout requested by the caller.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HorizontalLayout {
    /// Whatever the font header asks for
    #[default]
    Default,
    FullWidth,
    Fitted,
    /// Smushing with every controlled rule enabled
    ControlledSmushing,
    UniversalSmushing,
}

impl HorizontalLayout {
    pub fn resolve(self, font: Layout<HorizontalSmushing>) -> Layout<HorizontalSmushing> {
        match self {
            HorizontalLayout::Default => font,
            HorizontalLayout::FullWidth => Layout::full(),
            HorizontalLayout::Fitted => Layout::fitting(),
            HorizontalLayout::ControlledSmushing => Layout::smushing(HorizontalSmushing::all()),
            HorizontalLayout::UniversalSmushing => Layout::smushing(HorizontalSmushing::empty()),
        }
    }
}

/// Vertical layout requested by the caller.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum VerticalLayout {
    #[default]
    Default,
    FullHeight,
    Fitted,
    ControlledSmushing,
    UniversalSmushing,
}

impl VerticalLayout {
    pub fn resolve(self, font: Layout<VerticalSmushing>) -> Layout<VerticalSmushing> {
        match self {
            VerticalLayout::Default => font,
            VerticalLayout::FullHeight => Layout::full(),
            VerticalLayout::Fitted => Layout::fitting(),
            VerticalLayout::ControlledSmushing => Layout::smushing(VerticalSmushing::all()),
            VerticalLayout::UniversalSmushing => Layout::smushing(VerticalSmushing::empty()),
        }
    }
}

fn parse_layout_name(s: &str) -> Option<u8> {
    match s.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
        "default" => Some(0),
        "full" | "full-width" | "full-height" => Some(1),
        "fitted" | "fitting" | "kerning" => Some(2),
        "controlled-smushing" | "smushing" => Some(3),
        "universal-smushing" | "universal" => Some(4),
        _ => None,
    }
}

impl FromStr for HorizontalLayout {
    type Err = FontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_layout_name(s) {
            Some(0) => Ok(Self::Default),
            Some(1) => Ok(Self::FullWidth),
            Some(2) => Ok(Self::Fitted),
            Some(3) => Ok(Self::ControlledSmushing),
            Some(4) => Ok(Self::UniversalSmushing),
            _ => Err(FontError::InvalidOptions(format!(
                "unknown horizontal layout '{s}'"
            ))),
        }
    }
}

impl FromStr for VerticalLayout {
    type Err = FontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_layout_name(s) {
            Some(0) => Ok(Self::Default),
            Some(1) => Ok(Self::FullHeight),
            Some(2) => Ok(Self::Fitted),
            Some(3) => Ok(Self::ControlledSmushing),
            Some(4) => Ok(Self::UniversalSmushing),
            _ => Err(FontError::InvalidOptions(format!(
                "unknown vertical layout '{s}'"
            ))),
        }
    }
}

impl fmt::Display for HorizontalLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Default => "default",
            Self::FullWidth => "full-width",
            Self::Fitted => "fitted",
            Self::ControlledSmushing => "controlled-smushing",
            Self::UniversalSmushing => "universal-smushing",
        })
    }
}

impl fmt::Display for VerticalLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Default => "default",
            Self::FullHeight => "full-height",
            Self::Fitted => "fitted",
            Self::ControlledSmushing => "controlled-smushing",
            Self::UniversalSmushing => "universal-smushing",
        })
    }
}

const BORDERS: &str = "|/\\[]{}()<>";

fn hierarchy_class(ch: char) -> Option<u8> {
    match ch {
        '|' => Some(1),
        '/' | '\\' => Some(2),
        '[' | ']' => Some(3),
        '{' | '}' => Some(4),
        '(' | ')' => Some(5),
        '<' | '>' => Some(6),
        _ => None,
    }
}

fn smush_underscore(l: char, r: char) -> Option<char> {
    if l == '_' && BORDERS.contains(r) {
        Some(r)
    } else if r == '_' && BORDERS.contains(l) {
        Some(l)
    } else {
        None
    }
}

fn smush_hierarchy(l: char, r: char) -> Option<char> {
    match (hierarchy_class(l), hierarchy_class(r)) {
        (Some(a), Some(b)) if a < b => Some(r),
        (Some(a), Some(b)) if a > b => Some(l),
        _ => None,
    }
}

/// Joins FIGcharacters left to right.
#[derive(Copy, Clone, Debug)]
pub struct HorizontalComposer {
    pub layout: Layout<HorizontalSmushing>,
    /// Right-to-left fonts let the later character win universal smushing
    /// even though it sits on the left.
    pub right_to_left: bool,
}

impl HorizontalComposer {
    pub fn new(layout: Layout<HorizontalSmushing>) -> Self {
        Self {
            layout,
            right_to_left: false,
        }
    }

    /// Smush two overlapping cells. `None` means they may not overlap.
    pub fn smush(
        &self,
        l: GlyphPart,
        r: GlyphPart,
        prev_width: usize,
        cur_width: usize,
    ) -> Option<GlyphPart> {
        if l.is_blank() {
            return Some(r);
        }
        if r.is_blank() {
            return Some(l);
        }
        if prev_width < 2 || cur_width < 2 || self.layout.mode != LayoutMode::Smushing {
            return None;
        }
        let rules = self.layout.rules;
        if rules.is_empty() {
            return Some(match (l, r) {
                (GlyphPart::HardBlank, _) => r,
                (_, GlyphPart::HardBlank) => l,
                _ if self.right_to_left => l,
                _ => r,
            });
        }
        let (l, r) = match (l, r) {
            (GlyphPart::HardBlank, GlyphPart::HardBlank) => {
                return rules
                    .contains(HorizontalSmushing::HARDBLANK)
                    .then_some(GlyphPart::HardBlank);
            }
            (GlyphPart::Char(l), GlyphPart::Char(r)) => (l, r),
            _ => return None,
        };
        if rules.contains(HorizontalSmushing::EQUAL_CHARACTER) && l == r {
            return Some(GlyphPart::Char(l));
        }
        if rules.contains(HorizontalSmushing::UNDERSCORE) {
            if let Some(ch) = smush_underscore(l, r) {
                return Some(GlyphPart::Char(ch));
            }
        }
        if rules.contains(HorizontalSmushing::HIERARCHY) {
            if let Some(ch) = smush_hierarchy(l, r) {
                return Some(GlyphPart::Char(ch));
            }
        }
        if rules.contains(HorizontalSmushing::OPPOSITE_PAIR)
            && matches!(
                (l, r),
                ('[', ']') | (']', '[') | ('{', '}') | ('}', '{') | ('(', ')') | (')', '(')
            )
        {
            return Some(GlyphPart::Char('|'));
        }
        if rules.contains(HorizontalSmushing::BIG_X) {
            match (l, r) {
                ('/', '\\') => return Some(GlyphPart::Char('|')),
                ('\\', '/') => return Some(GlyphPart::Char('Y')),
                ('>', '<') => return Some(GlyphPart::Char('X')),
                _ => {}
            }
        }
        None
    }
}

/// A line of FIGcharacters under construction. All rows share one width.
#[derive(Clone, Debug, PartialEq)]
pub struct FigLine {
    rows: Vec<Vec<GlyphPart>>,
    prev_width: usize,
    glyphs: usize,
}

impl FigLine {
    pub fn new(height: usize) -> Self {
        Self {
            rows: vec![Vec::new(); height],
            prev_width: 0,
            glyphs: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs == 0
    }

    pub fn rows(&self) -> &[Vec<GlyphPart>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<GlyphPart>> {
        self.rows
    }

    /// Number of columns `glyph` may slide into the line.
    pub fn overlap(&self, glyph: &Glyph, composer: &HorizontalComposer) -> usize {
        if composer.layout.mode == LayoutMode::Full {
            return 0;
        }
        let mut amount = glyph.width;
        for (line_row, glyph_row) in self.rows.iter().zip(glyph.rows()) {
            let len = line_row.len();
            let lead = glyph_row
                .iter()
                .position(|p| !p.is_blank())
                .unwrap_or(glyph_row.len());
            let row_amount = match line_row.iter().rposition(|p| !p.is_blank()) {
                None => lead + len,
                Some(last) => {
                    let mut a = lead + len - 1 - last;
                    if let Some(&right) = glyph_row.get(lead) {
                        if composer
                            .smush(line_row[last], right, self.prev_width, glyph.width)
                            .is_some()
                        {
                            a += 1;
                        }
                    }
                    a
                }
            };
            amount = amount.min(row_amount);
        }
        amount
    }

    /// Width the line would have after pushing `glyph`.
    pub fn width_with(&self, glyph: &Glyph, composer: &HorizontalComposer) -> usize {
        (self.width() + glyph.width).saturating_sub(self.overlap(glyph, composer))
    }

    pub fn push(&mut self, glyph: &Glyph, composer: &HorizontalComposer) {
        let amount = self.overlap(glyph, composer);
        for (line_row, glyph_row) in self.rows.iter_mut().zip(glyph.rows()) {
            let len = line_row.len();
            for (k, &right) in glyph_row.iter().enumerate().take(amount) {
                // Columns that would land left of the line start are blank.
                if len + k < amount {
                    continue;
                }
                let idx = len + k - amount;
                line_row[idx] = composer
                    .smush(line_row[idx], right, self.prev_width, glyph.width)
                    .unwrap_or(right);
            }
            line_row.extend_from_slice(&glyph_row[amount..]);
        }
        self.prev_width = glyph.width;
        self.glyphs += 1;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum RowVerdict {
    Valid,
    End,
    Invalid,
}

/// Stacks laid-out lines on top of each other.
#[derive(Copy, Clone, Debug)]
pub struct VerticalComposer {
    pub layout: Layout<VerticalSmushing>,
}

impl VerticalComposer {
    pub fn new(layout: Layout<VerticalSmushing>) -> Self {
        Self { layout }
    }

    pub fn smush(&self, top: GlyphPart, bottom: GlyphPart) -> Option<GlyphPart> {
        if top.is_blank() {
            return Some(bottom);
        }
        if bottom.is_blank() {
            return Some(top);
        }
        if self.layout.mode != LayoutMode::Smushing {
            return None;
        }
        let rules = self.layout.rules;
        if rules.is_empty() {
            return Some(match bottom {
                GlyphPart::HardBlank => top,
                GlyphPart::Char(_) => bottom,
            });
        }
        let (t, b) = match (top, bottom) {
            (GlyphPart::HardBlank, GlyphPart::HardBlank) => {
                return rules
                    .contains(VerticalSmushing::EQUAL_CHARACTER)
                    .then_some(GlyphPart::HardBlank);
            }
            (GlyphPart::Char(t), GlyphPart::Char(b)) => (t, b),
            _ => return None,
        };
        if rules.contains(VerticalSmushing::EQUAL_CHARACTER) && t == b {
            return Some(GlyphPart::Char(t));
        }
        if rules.contains(VerticalSmushing::UNDERSCORE) {
            if let Some(ch) = smush_underscore(t, b) {
                return Some(GlyphPart::Char(ch));
            }
        }
        if rules.contains(VerticalSmushing::HIERARCHY) {
            if let Some(ch) = smush_hierarchy(t, b) {
                return Some(GlyphPart::Char(ch));
            }
        }
        if rules.contains(VerticalSmushing::HORIZONTAL_LINE)
            && matches!((t, b), ('-', '_') | ('_', '-'))
        {
            return Some(GlyphPart::Char('='));
        }
        if rules.contains(VerticalSmushing::VERTICAL_LINE) && t == '|' && b == '|' {
            return Some(GlyphPart::Char('|'));
        }
        None
    }

    fn row_verdict(&self, top: &[GlyphPart], bottom: &[GlyphPart]) -> RowVerdict {
        let mut end = false;
        for (&t, &b) in top.iter().zip(bottom) {
            if t.is_blank() || b.is_blank() {
                continue;
            }
            match self.layout.mode {
                LayoutMode::Full | LayoutMode::Fitting => return RowVerdict::Invalid,
                LayoutMode::Smushing if self.layout.rules.is_empty() => return RowVerdict::End,
                LayoutMode::Smushing => {
                    // Vertical lines may keep sliding through each other.
                    if self.layout.rules.contains(VerticalSmushing::VERTICAL_LINE)
                        && t == GlyphPart::Char('|')
                        && b == GlyphPart::Char('|')
                    {
                        continue;
                    }
                    if self.smush(t, b).is_none() {
                        return RowVerdict::Invalid;
                    }
                    end = true;
                }
            }
        }
        if end {
            RowVerdict::End
        } else {
            RowVerdict::Valid
        }
    }

    /// Number of rows `below` may slide up into `above`.
    pub fn overlap(&self, above: &[Vec<GlyphPart>], below: &[Vec<GlyphPart>]) -> usize {
        if self.layout.mode == LayoutMode::Full {
            return 0;
        }
        let max = above.len().min(below.len());
        let mut dist = 0;
        for d in 1..=max {
            let start = above.len() - d;
            let verdict = (0..d)
                .map(|i| self.row_verdict(&above[start + i], &below[i]))
                .max()
                .unwrap_or(RowVerdict::Valid);
            match verdict {
                RowVerdict::Invalid => break,
                RowVerdict::End => {
                    dist = d;
                    break;
                }
                RowVerdict::Valid => dist = d,
            }
        }
        dist
    }

    pub fn stack(&self, above: &mut Vec<Vec<GlyphPart>>, below: Vec<Vec<GlyphPart>>) {
        let dist = self.overlap(above, &below);
        let start = above.len() - dist;
        for (i, row) in below.into_iter().enumerate() {
            if i >= dist {
                above.push(row);
                continue;
            }
            let target = &mut above[start + i];
            if target.len() < row.len() {
                target.resize(row.len(), GlyphPart::BLANK);
            }
            for (col, bottom) in row.into_iter().enumerate() {
                let top = target[col];
                target[col] = self.smush(top, bottom).unwrap_or(bottom);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(rows: &[&str]) -> Glyph {
        Glyph::from_rows(rows, '$')
    }

    fn text(line: &FigLine) -> Vec<String> {
        line.rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|p| match p {
                        GlyphPart::HardBlank => '$',
                        GlyphPart::Char(c) => *c,
                    })
                    .collect()
            })
            .collect()
    }

    fn compose(layout: Layout<HorizontalSmushing>, glyphs: &[Glyph]) -> Vec<String> {
        let composer = HorizontalComposer::new(layout);
        let mut line = FigLine::new(glyphs[0].height);
        for g in glyphs {
            line.push(g, &composer);
        }
        text(&line)
    }

    #[test]
    fn full_width_concatenates() {
        let out = compose(Layout::full(), &[glyph(&["ab ", "cd "]), glyph(&[" ef", " gh"])]);
        assert_eq!(out, vec!["ab  ef", "cd  gh"]);
    }

    #[test]
    fn fitting_slides_until_touching() {
        let out = compose(Layout::fitting(), &[glyph(&["ab ", "cd "]), glyph(&[" ef", " gh"])]);
        assert_eq!(out, vec!["abef", "cdgh"]);
    }

    #[test]
    fn fitting_keeps_hard_blanks() {
        let out = compose(Layout::fitting(), &[glyph(&["ab$", "cd$"]), glyph(&["ef", "gh"])]);
        assert_eq!(out, vec!["ab$ef", "cd$gh"]);
    }

    #[test]
    fn equal_character_rule() {
        let layout = Layout::smushing(HorizontalSmushing::EQUAL_CHARACTER);
        let out = compose(layout, &[glyph(&["|_|"]), glyph(&["|_|"])]);
        assert_eq!(out, vec!["|_|_|"]);
    }

    #[test]
    fn underscore_rule_prefers_border() {
        let composer = HorizontalComposer::new(Layout::smushing(HorizontalSmushing::UNDERSCORE));
        let l = GlyphPart::Char('_');
        let r = GlyphPart::Char('/');
        assert_eq!(composer.smush(l, r, 3, 3), Some(r));
        assert_eq!(composer.smush(r, l, 3, 3), Some(r));
    }

    #[test]
    fn hierarchy_rule_higher_class_wins() {
        let composer = HorizontalComposer::new(Layout::smushing(HorizontalSmushing::HIERARCHY));
        assert_eq!(
            composer.smush(GlyphPart::Char('|'), GlyphPart::Char('/'), 3, 3),
            Some(GlyphPart::Char('/'))
        );
        assert_eq!(
            composer.smush(GlyphPart::Char('<'), GlyphPart::Char('['), 3, 3),
            Some(GlyphPart::Char('<'))
        );
        assert_eq!(
            composer.smush(GlyphPart::Char('/'), GlyphPart::Char('\\'), 3, 3),
            None
        );
    }

    #[test]
    fn opposite_pair_and_big_x() {
        let rules = HorizontalSmushing::OPPOSITE_PAIR | HorizontalSmushing::BIG_X;
        let composer = HorizontalComposer::new(Layout::smushing(rules));
        let c = |a, b| composer.smush(GlyphPart::Char(a), GlyphPart::Char(b), 3, 3);
        assert_eq!(c('(', ')'), Some(GlyphPart::Char('|')));
        assert_eq!(c('}', '{'), Some(GlyphPart::Char('|')));
        assert_eq!(c('/', '\\'), Some(GlyphPart::Char('|')));
        assert_eq!(c('\\', '/'), Some(GlyphPart::Char('Y')));
        assert_eq!(c('>', '<'), Some(GlyphPart::Char('X')));
        assert_eq!(c('<', '>'), None);
    }

    #[test]
    fn hard_blanks_smush_only_with_rule_six() {
        let hb = GlyphPart::HardBlank;
        let with = HorizontalComposer::new(Layout::smushing(HorizontalSmushing::HARDBLANK));
        let without = HorizontalComposer::new(Layout::smushing(HorizontalSmushing::EQUAL_CHARACTER));
        assert_eq!(with.smush(hb, hb, 3, 3), Some(hb));
        assert_eq!(without.smush(hb, hb, 3, 3), None);
        assert_eq!(without.smush(hb, GlyphPart::Char('x'), 3, 3), None);
    }

    #[test]
    fn universal_smushing_later_character_wins() {
        let composer = HorizontalComposer::new(Layout::smushing(HorizontalSmushing::empty()));
        let a = GlyphPart::Char('a');
        let b = GlyphPart::Char('b');
        assert_eq!(composer.smush(a, b, 3, 3), Some(b));
        assert_eq!(composer.smush(GlyphPart::HardBlank, b, 3, 3), Some(b));
        let rtl = HorizontalComposer {
            right_to_left: true,
            ..composer
        };
        assert_eq!(rtl.smush(a, b, 3, 3), Some(a));
    }

    #[test]
    fn narrow_glyphs_never_smush() {
        let composer = HorizontalComposer::new(Layout::smushing(HorizontalSmushing::empty()));
        let a = GlyphPart::Char('a');
        assert_eq!(composer.smush(a, a, 1, 3), None);
        assert_eq!(composer.smush(a, a, 3, 1), None);
        let out = compose(
            Layout::smushing(HorizontalSmushing::empty()),
            &[glyph(&["i"]), glyph(&["i"])],
        );
        assert_eq!(out, vec!["ii"]);
    }

    #[test]
    fn leading_blank_columns_of_first_glyph_are_dropped() {
        let out = compose(Layout::fitting(), &[glyph(&["  x", "  y"])]);
        assert_eq!(out, vec!["x", "y"]);
    }

    #[test]
    fn width_with_matches_push() {
        let composer = HorizontalComposer::new(Layout::smushing(HorizontalSmushing::all()));
        let mut line = FigLine::new(2);
        let a = glyph(&[" _ ", "|_|"]);
        line.push(&a, &composer);
        let predicted = line.width_with(&a, &composer);
        line.push(&a, &composer);
        assert_eq!(predicted, line.width());
    }

    fn rows(lines: &[&str]) -> Vec<Vec<GlyphPart>> {
        lines
            .iter()
            .map(|l| l.chars().map(GlyphPart::Char).collect())
            .collect()
    }

    fn flat(rows: &[Vec<GlyphPart>]) -> Vec<String> {
        rows.iter()
            .map(|r| {
                r.iter()
                    .map(|p| match p {
                        GlyphPart::HardBlank => '$',
                        GlyphPart::Char(c) => *c,
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn full_height_stacks_everything() {
        let composer = VerticalComposer::new(Layout::full());
        let mut above = rows(&["ab", "  "]);
        composer.stack(&mut above, rows(&["  ", "cd"]));
        assert_eq!(flat(&above), vec!["ab", "  ", "  ", "cd"]);
    }

    #[test]
    fn vertical_fitting_removes_blank_rows() {
        let composer = VerticalComposer::new(Layout::fitting());
        let mut above = rows(&["ab", "  ", "  "]);
        composer.stack(&mut above, rows(&["  ", "  ", "cd"]));
        assert_eq!(flat(&above), vec!["ab", "  ", "cd"]);
    }

    #[test]
    fn vertical_smushing_horizontal_line_rule() {
        let composer = VerticalComposer::new(Layout::smushing(VerticalSmushing::HORIZONTAL_LINE));
        let mut above = rows(&["x", "-"]);
        composer.stack(&mut above, rows(&["_", "y"]));
        assert_eq!(flat(&above), vec!["x", "=", "y"]);
    }

    #[test]
    fn vertical_line_supersmushing_keeps_sliding() {
        let composer = VerticalComposer::new(Layout::smushing(VerticalSmushing::VERTICAL_LINE));
        let mut above = rows(&["a ", "| ", "| "]);
        composer.stack(&mut above, rows(&["| ", "| ", "b "]));
        assert_eq!(flat(&above), vec!["a ", "| ", "| ", "b "]);
    }

    #[test]
    fn universal_vertical_smushing_stops_at_first_collision() {
        let composer = VerticalComposer::new(Layout::smushing(VerticalSmushing::empty()));
        let mut above = rows(&["ab", "cd"]);
        composer.stack(&mut above, rows(&["ef", "gh"]));
        assert_eq!(flat(&above), vec!["ab", "ef", "gh"]);
    }

    #[test]
    fn layout_names_parse() {
        assert_eq!(
            "controlled smushing".parse::<HorizontalLayout>().unwrap(),
            HorizontalLayout::ControlledSmushing
        );
        assert_eq!(
            "FULL".parse::<VerticalLayout>().unwrap(),
            VerticalLayout::FullHeight
        );
        assert!("sideways".parse::<HorizontalLayout>().is_err());
        assert_eq!(HorizontalLayout::Fitted.to_string(), "fitted");
    }

    #[test]
    fn overrides_resolve_against_font_layout() {
        let font = Layout::smushing(HorizontalSmushing::EQUAL_CHARACTER);
        assert_eq!(HorizontalLayout::Default.resolve(font), font);
        assert_eq!(
            HorizontalLayout::ControlledSmushing.resolve(font).rules,
            HorizontalSmushing::all()
        );
        assert_eq!(
            VerticalLayout::FullHeight.resolve(Layout::fitting()).mode,
            LayoutMode::Full
        );
    }
}
