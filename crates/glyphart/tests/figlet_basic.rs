use glyphart::{figlet::FigletFont, test_support::BufferTarget, FontError, RenderMode};

#[test]
fn figlet_basic_render() {
    let mut font = FigletFont::new("FIG");
    font.add_raw_char('A', &["AA", "AA"]);
    let mut target = BufferTarget::new();
    font.render_glyph(&mut target, 'A', RenderMode::Display)
        .unwrap();
    assert_eq!(target.text_lines(), vec!["AA", "AA"]);
}

#[test]
fn figlet_newline_height() {
    let mut font = FigletFont::new("FIG2");
    font.add_raw_char('B', &["B", "B", "B"]);
    let mut target = BufferTarget::new();
    font.render_glyph(&mut target, 'B', RenderMode::Display)
        .unwrap();
    assert_eq!(target.text_lines().len(), 3);
    assert_eq!(font.height(), 3);
}

#[test]
fn figlet_shorter_glyphs_are_padded() {
    let mut font = FigletFont::new("FIG3");
    font.add_raw_char('a', &["a"]);
    font.add_raw_char('B', &["B", "B"]);
    let glyph = font.glyph('a').unwrap();
    assert_eq!(glyph.height, 2);
    assert_eq!(glyph.rows()[1].len(), 1);
}

#[test]
fn figlet_edit_mode_shows_hard_blanks() {
    let mut font = FigletFont::new("FIG4");
    font.add_raw_char('C', &["C$", "CC"]);

    let mut display = BufferTarget::new();
    font.render_glyph(&mut display, 'C', RenderMode::Display)
        .unwrap();
    assert_eq!(display.text_lines(), vec!["C ", "CC"]);
    assert!(display.lines[0][1].hard_blank);

    let mut edit = BufferTarget::new();
    font.render_glyph(&mut edit, 'C', RenderMode::Edit).unwrap();
    assert_eq!(edit.text_lines(), vec!["C$", "CC"]);
}

#[test]
fn figlet_missing_glyph_is_an_error() {
    let font = FigletFont::new("FIG5");
    let mut target = BufferTarget::new();
    let err = font
        .render_glyph(&mut target, 'Z', RenderMode::Display)
        .unwrap_err();
    assert!(matches!(err, FontError::UnknownChar('Z')));
}
