// File: crates/vna-chart-render/src/lib.rs
// Summary: Skia CPU raster renderer for chart frames: grids, SWR circles, traces, ticks and markers.

use anyhow::Result;
use skia_safe as skia;

use vna_chart_core::si::format_si;
use vna_chart_core::{Chart, ChartKind, Frame, MarkerGlyph, PlotArea, Primitive, Rgba, Trace};

pub mod text;

pub use text::LabelShaper;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Text is left out when false, which keeps pixel output independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: 400, height: 400, draw_labels: true }
    }
}

impl RenderOptions {
    /// Smallest canvas that fits the given chart kind.
    pub fn for_kind(kind: ChartKind) -> Self {
        let (w, h) = kind.minimum_canvas();
        Self { width: w as i32, height: h as i32, draw_labels: true }
    }

    /// Requested size grown to the chart's minimum where needed.
    pub fn canvas_for(&self, kind: ChartKind) -> (i32, i32) {
        let (min_w, min_h) = kind.minimum_canvas();
        let w = self.width.max(min_w as i32);
        let h = self.height.max(min_h as i32);
        if (w, h) != (self.width, self.height) {
            log::debug!("canvas {}x{} below the {kind:?} minimum, using {w}x{h}", self.width, self.height);
        }
        (w, h)
    }
}

pub fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

pub struct SkiaRenderer {
    labels: LabelShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { labels: LabelShaper::new() }
    }

    /// Paint a laid-out frame onto `canvas`.
    pub fn draw_frame(&self, canvas: &skia::Canvas, frame: &Frame, draw_labels: bool) {
        let theme = &frame.theme;
        canvas.clear(color(theme.background));

        if draw_labels {
            self.labels.draw_left(canvas, &frame.title, 3.0, 15.0, color(theme.text), false);
        }

        let mut grid = stroke(theme.foreground, 1.0);
        for p in &frame.grid {
            draw_primitive(canvas, p, &grid);
        }

        if !frame.swr.is_empty() {
            grid.set_color(color(theme.swr));
            for s in &frame.swr {
                draw_primitive(canvas, &Primitive::Circle(s.circle), &grid);
                if draw_labels {
                    let label = format!("{}", s.swr);
                    let at = s.label_at;
                    self.labels.draw_centered(canvas, &label, at.x as f32, at.y as f32, color(theme.swr), true);
                }
            }
        }

        if draw_labels {
            self.draw_axis_labels(canvas, frame);
        }

        for trace in &frame.traces {
            draw_trace(canvas, trace, frame.point_size, frame.line_width);
        }

        for m in &frame.markers {
            self.draw_marker(canvas, m, draw_labels);
        }
    }

    fn draw_axis_labels(&self, canvas: &skia::Canvas, frame: &Frame) {
        let PlotArea::Rect(rect) = frame.area else {
            return;
        };
        let text = color(frame.theme.text);
        if let Some(ticks) = &frame.value_ticks {
            for t in ticks.ticks.iter().filter(|t| t.labeled) {
                self.labels.draw_left(canvas, &format_si(t.value, 3), 3.0, t.y as f32 + 3.0, text, true);
            }
            let max = &ticks.max_label;
            self.labels.draw_left(canvas, &format_si(max.value, 3), 3.0, max.y as f32 + 4.0, text, true);
            let min = &ticks.min_label;
            self.labels.draw_left(canvas, &format_si(min.value, 3), 3.0, min.y as f32, text, true);
        }
        let baseline = (rect.bottom() + 15.0) as f32;
        for &(x, freq) in &frame.freq_ticks {
            self.labels.draw_centered(canvas, &format_si(freq, 3), x as f32, baseline, text, true);
        }
    }

    /// Downward triangle whose tip sits just above the sample, numbered above.
    fn draw_marker(&self, canvas: &skia::Canvas, m: &MarkerGlyph, draw_labels: bool) {
        let (x, y) = (m.at.x as f32, m.at.y as f32);
        let mut path = skia::Path::new();
        path.move_to((x, y - 3.0));
        path.line_to((x - 3.0, y - 9.0));
        path.line_to((x + 3.0, y - 9.0));
        path.close();

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(color(m.color));
        canvas.draw_path(&path, &fill);

        if draw_labels {
            self.labels.draw_centered(canvas, &m.ordinal.to_string(), x, y - 11.0, color(m.color), true);
        }
    }

    fn raster(&self, chart: &Chart, opts: &RenderOptions) -> Result<skia::Surface> {
        let (w, h) = opts.canvas_for(chart.kind);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        let frame = chart.frame(f64::from(w), f64::from(h));
        self.draw_frame(surface.canvas(), &frame, opts.draw_labels);
        Ok(surface)
    }

    /// Render to an unpremultiplied RGBA8 buffer: `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, chart: &Chart, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.raster(chart, opts)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} pixels failed");
        }
        Ok((pixels, w, h, stride))
    }

    pub fn render_to_png_bytes(&self, chart: &Chart, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster(chart, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        chart: &Chart,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(chart, opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        log::info!("wrote {} ({})", path.display(), chart.title());
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke(c: Rgba, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color(c));
    paint
}

fn draw_primitive(canvas: &skia::Canvas, p: &Primitive, paint: &skia::Paint) {
    match p {
        Primitive::Circle(c) => {
            canvas.draw_circle((c.center.x as f32, c.center.y as f32), c.radius as f32, paint);
        }
        Primitive::Arc(a) => {
            let oval = skia::Rect::from_ltrb(
                (a.center.x - a.radius) as f32,
                (a.center.y - a.radius) as f32,
                (a.center.x + a.radius) as f32,
                (a.center.y + a.radius) as f32,
            );
            canvas.draw_arc(oval, a.start_deg as f32, a.sweep_deg as f32, false, paint);
        }
        Primitive::Line(l) => {
            canvas.draw_line((l.from.x as f32, l.from.y as f32), (l.to.x as f32, l.to.y as f32), paint);
        }
    }
}

fn draw_trace(canvas: &skia::Canvas, trace: &Trace, point_size: f32, line_width: f32) {
    if !trace.lines.is_empty() {
        let mut path = skia::Path::new();
        for l in &trace.lines {
            path.move_to((l.from.x as f32, l.from.y as f32));
            path.line_to((l.to.x as f32, l.to.y as f32));
        }
        canvas.draw_path(&path, &stroke(trace.color, line_width));
    }
    if trace.points.is_empty() {
        return;
    }

    let pts: Vec<skia::Point> = trace.points.iter().map(|p| skia::Point::new(p.x as f32, p.y as f32)).collect();
    let mut dots = stroke(trace.color, point_size);
    dots.set_stroke_cap(skia::paint::Cap::Round);
    canvas.draw_points(skia::canvas::PointMode::Points, &pts, &dots);
}
