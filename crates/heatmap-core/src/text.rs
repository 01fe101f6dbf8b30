// File: crates/heatmap-core/src/text.rs
// Summary: Text anchoring shared by the SVG and raster paths, plus a Skia textlayout shaper for labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Horizontal alignment of a label relative to its anchor x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    /// Value of the SVG `text-anchor` attribute.
    pub fn as_svg(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let pstyle = ParagraphStyle::new();
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_families(&["Arial", "Helvetica", "DejaVu Sans", "sans-serif"]);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its baseline at `y`, aligned on `x` per `anchor`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, anchor: TextAnchor) {
        let mut p = self.layout(text, size, color);
        let w = p.max_intrinsic_width();
        let left = match anchor {
            TextAnchor::Start => x,
            TextAnchor::Middle => x - w * 0.5,
            TextAnchor::End => x - w,
        };
        // Paragraph paints from its top-left; lift by an ascent approximation.
        p.paint(canvas, (left, y - size * 0.8));
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
