use glyphart::{FigletRenderer, GlyphRenderer, RenderOptions, Style};

fn main() -> glyphart::Result<()> {
    let text = std::env::args().nth(1).unwrap_or_else(|| "glyphart".to_string());
    let renderer = FigletRenderer::new();
    let options = RenderOptions::default();
    for style in Style::ALL {
        println!("{style}:");
        println!("{}\n", renderer.render(&text, style.name(), &options)?);
    }
    Ok(())
}
