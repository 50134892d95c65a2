// File: crates/vna-chart-render/src/text.rs
// Summary: Label shaping for titles, tick values and marker numbers via Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

/// Font size of every chart label, matching the compact instrument look.
pub const LABEL_SIZE: f32 = 11.0;

pub struct LabelShaper {
    fonts: FontCollection,
}

impl Default for LabelShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn style(color: skia::Color, numeric: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(LABEL_SIZE);
        ts.set_color(color);
        if numeric {
            // tabular digits keep tick labels aligned on the value axis
            ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        } else {
            ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        }
        ts
    }

    fn layout(&self, text: &str, color: skia::Color, numeric: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::style(color, numeric));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, numeric: bool) -> f32 {
        self.layout(text, skia::Color::TRANSPARENT, numeric).longest_line()
    }

    /// Draw with `(x, y)` as the left end of the baseline.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, color: skia::Color, numeric: bool) {
        let mut p = self.layout(text, color, numeric);
        // paragraphs paint from their top-left corner
        p.paint(canvas, (x, y - LABEL_SIZE * 0.8));
    }

    /// Draw horizontally centred on `x`, baseline at `y`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, color: skia::Color, numeric: bool) {
        let w = self.measure_width(text, numeric);
        self.draw_left(canvas, text, x - w / 2.0, y, color, numeric);
    }
}
