use glyphart::{FigletRenderer, GlyphRenderer, HorizontalLayout, RenderOptions, Style, VerticalLayout};
use pretty_assertions::assert_eq;

fn render(text: &str, style: Style, options: &RenderOptions) -> String {
    FigletRenderer::new()
        .render(text, style.name(), options)
        .unwrap()
}

#[test]
fn standard_matches_figlet_fixture() {
    let expected = concat!(
        r" _            _   ", "\n",
        r"| |_ ___  ___| |_ ", "\n",
        r"| __/ _ \/ __| __|", "\n",
        r"| ||  __/\__ \ |_ ", "\n",
        r" \__\___||___/\__|", "\n",
        r"                  "
    );
    assert_eq!(render("test", Style::Standard, &RenderOptions::default()), expected);
}

#[test]
fn standard_smushes_punctuation() {
    let expected = concat!(
        r" _   _      _ _                             _     _ _ ", "\n",
        r"| | | | ___| | | ___    __      _____  _ __| | __| | |", "\n",
        r"| |_| |/ _ \ | |/ _ \   \ \ /\ / / _ \| '__| |/ _` | |", "\n",
        r"|  _  |  __/ | | (_) |   \ V  V / (_) | |  | | (_| |_|", "\n",
        r"|_| |_|\___|_|_|\___( )   \_/\_/ \___/|_|  |_|\__,_(_)", "\n",
        r"                    |/                                "
    );
    assert_eq!(
        render("Hello, world!", Style::Standard, &RenderOptions::default()),
        expected
    );
}

#[test]
fn every_style_renders_non_empty_art() {
    for style in Style::ALL {
        for text in ["A", "hello", "Glyph Art 42!", "~{[()]}~"] {
            let art = render(text, style, &RenderOptions::default());
            assert!(
                art.chars().any(|c| !c.is_whitespace()),
                "{style} rendered {text:?} as blank"
            );
            assert!(!art.ends_with('\n'));
        }
    }
}

#[test]
fn output_is_printable() {
    for style in Style::ALL {
        let art = render("Printable?", style, &RenderOptions::default());
        assert!(art.chars().all(|c| c == '\n' || (' '..='~').contains(&c)));
    }
}

#[test]
fn lines_stay_narrower_than_width() {
    let options = RenderOptions {
        width: 30,
        ..Default::default()
    };
    for style in Style::ALL {
        let art = render("the quick brown fox jumps over the lazy dog", style, &options);
        for line in art.split('\n') {
            assert!(line.chars().count() < 30, "{style}: {line:?}");
        }
    }
}

#[test]
fn wrapping_matches_explicit_newlines() {
    let options = RenderOptions {
        width: 20,
        ..Default::default()
    };
    assert_eq!(
        render("test test", Style::Standard, &options),
        render("test\ntest", Style::Standard, &options)
    );
}

#[test]
fn standard_lines_smush_vertically() {
    let stacked = render("test\ntest", Style::Standard, &RenderOptions::default());
    assert!(stacked.split('\n').count() < 12);

    let full = RenderOptions {
        vertical_layout: VerticalLayout::FullHeight,
        ..Default::default()
    };
    assert_eq!(
        render("test\ntest", Style::Standard, &full).split('\n').count(),
        12
    );
}

#[test]
fn ghost_stacks_full_height() {
    let art = render("a\nb", Style::Ghost, &RenderOptions::default());
    assert_eq!(art.split('\n').count(), 20);
    assert!(art.contains("~~"));
}

#[test]
fn full_width_is_never_narrower_than_smushed() {
    let smushed = render("Wide", Style::Big, &RenderOptions::default());
    let full = render(
        "Wide",
        Style::Big,
        &RenderOptions {
            horizontal_layout: HorizontalLayout::FullWidth,
            ..Default::default()
        },
    );
    let width = |art: &str| art.split('\n').map(|l| l.chars().count()).max();
    assert!(width(&full) > width(&smushed));
}

#[test]
fn edit_mode_exposes_hard_blanks() {
    let display = render("a b", Style::Standard, &RenderOptions::display());
    let edit = render("a b", Style::Standard, &RenderOptions::edit());
    assert!(!display.contains('$'));
    assert!(edit.contains('$'));
    assert_eq!(edit.replace('$', " "), display);
}

#[test]
fn zero_width_is_rejected() {
    let options = RenderOptions {
        width: 0,
        ..Default::default()
    };
    assert!(FigletRenderer::new()
        .render("x", "Standard", &options)
        .is_err());
}
