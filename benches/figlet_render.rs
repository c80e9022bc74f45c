//! Benchmarks for FIGfont parsing and text layout.

use criterion::{criterion_group, criterion_main, Criterion};
use glyphart::{figlet::FigletFont, FigletRenderer, GlyphRenderer, RenderOptions, Style};
use std::hint::black_box;

const STANDARD: &[u8] = include_bytes!("../crates/glyphart/fonts/standard.flf");

const PARAGRAPH: &str = "The quick brown fox jumps over the lazy dog. \
    Pack my box with five dozen liquor jugs! 0123456789";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_standard_flf", |b| {
        b.iter(|| black_box(FigletFont::from_bytes(black_box(STANDARD))))
    });
}

fn bench_render(c: &mut Criterion) {
    let renderer = FigletRenderer::new();
    let options = RenderOptions::default();

    // Parse bundled fonts outside the timed loops
    for style in Style::ALL {
        style.font().ok();
    }

    for style in Style::ALL {
        c.bench_function(&format!("render_paragraph_{}", style.name().to_lowercase()), |b| {
            b.iter(|| black_box(renderer.render(black_box(PARAGRAPH), style.name(), &options)))
        });
    }

    let narrow = RenderOptions {
        width: 40,
        ..Default::default()
    };
    c.bench_function("render_paragraph_wrapped_40", |b| {
        b.iter(|| black_box(renderer.render(black_box(PARAGRAPH), "Standard", &narrow)))
    });
}

criterion_group!(benches, bench_parse, bench_render);
criterion_main!(benches);
