// File: crates/vna-chart-core/src/chart.rs
// Summary: Chart state (kind, config, sweeps, markers) and per-frame layout into renderer-agnostic primitives.

use crate::axis::{self, AxisExtent, AxisTicks, ExtentMode};
use crate::datapoint::Datapoint;
use crate::geometry::{DiskRect, PlotRect, Point};
use crate::locate::{self, Nearest};
use crate::mapper::{CoordinateMapper, DiskMapper, LinearMapper, Projection, Readout, INDUCTANCE_DISPLAY_SCALE};
use crate::marker::Marker;
use crate::scale::{FrequencyAxis, ScaleKind};
use crate::series::{FrequencySpan, Series, SeriesKind};
use crate::smith::{self, Line, Primitive, SwrCircle};
use crate::theme::{Rgba, Theme};
use crate::types::{Insets, MIN_DIM};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Smith,
    Polar,
    Inductance,
}

impl ChartKind {
    pub fn is_disk(self) -> bool {
        matches!(self, ChartKind::Smith | ChartKind::Polar)
    }

    pub fn default_insets(self) -> Insets {
        match self {
            ChartKind::Smith | ChartKind::Polar => Insets::uniform(20),
            ChartKind::Inductance => Insets { left: 45, ..Insets::default() },
        }
    }

    /// Smallest canvas that still fits a `MIN_DIM` plot area.
    pub fn minimum_canvas(self) -> (f64, f64) {
        let i = self.default_insets();
        (MIN_DIM + i.hsum() as f64, MIN_DIM + i.vsum() as f64)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub insets: Insets,
    /// Connect consecutive samples with lines in addition to drawing points.
    pub draw_lines: bool,
    pub logarithmic_x: bool,
    /// Pinned frequency range (frequency charts only).
    pub fixed_span: Option<FrequencySpan>,
    /// Pinned value range `(min, max)` in display units (frequency charts only).
    pub fixed_values: Option<(f64, f64)>,
    /// SWR circles drawn on the Smith chart.
    pub swr_markers: Vec<f64>,
    pub point_size: f32,
    pub line_width: f32,
    pub theme: Theme,
}

impl ChartConfig {
    pub fn for_kind(kind: ChartKind) -> Self {
        Self {
            insets: kind.default_insets(),
            draw_lines: false,
            logarithmic_x: false,
            fixed_span: None,
            fixed_values: None,
            swr_markers: Vec::new(),
            point_size: 2.0,
            line_width: 1.0,
            theme: Theme::default(),
        }
    }
}

/// Where the data is drawn on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlotArea {
    Rect(PlotRect),
    Disk(DiskRect),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    pub source: SeriesKind,
    pub color: Rgba,
    /// Sample dots, limited to what lands on the plot.
    pub points: Vec<Point>,
    /// Connecting segments between consecutive samples, clipped to frequency plots.
    /// Empty unless lines are enabled.
    pub lines: Vec<Line>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarkerGlyph {
    pub ordinal: usize,
    pub color: Rgba,
    pub at: Point,
}

/// Everything a renderer needs to draw one chart at one canvas size.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub area: PlotArea,
    pub theme: Theme,
    pub point_size: f32,
    pub line_width: f32,
    pub grid: Vec<Primitive>,
    pub swr: Vec<SwrCircle>,
    pub traces: Vec<Trace>,
    pub value_ticks: Option<AxisTicks>,
    /// `(x, frequency)` pairs along the bottom edge.
    pub freq_ticks: Vec<(f64, f64)>,
    pub markers: Vec<MarkerGlyph>,
}

pub struct Chart {
    pub name: String,
    pub kind: ChartKind,
    pub config: ChartConfig,
    pub data: Series,
    pub reference: Series,
    pub markers: Vec<Marker>,
    /// Index into `markers` of the marker moved by pointer interaction.
    pub active_marker: Option<usize>,
}

impl Chart {
    pub fn new(kind: ChartKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            config: ChartConfig::for_kind(kind),
            data: Series::empty(),
            reference: Series::empty(),
            markers: Vec::new(),
            active_marker: None,
        }
    }

    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_data(&mut self, data: Series) {
        self.data = data;
    }

    pub fn set_reference(&mut self, reference: Series) {
        self.reference = reference;
    }

    /// Append a marker colored from the theme and make it the active one.
    pub fn add_marker(&mut self) -> &mut Marker {
        let ordinal = self.markers.len() + 1;
        self.markers.push(Marker::new(ordinal, self.config.theme.marker_color(ordinal)));
        self.active_marker = Some(ordinal - 1);
        &mut self.markers[ordinal - 1]
    }

    pub fn title(&self) -> String {
        match self.kind {
            ChartKind::Inductance => format!("{} (H)", self.name),
            ChartKind::Smith | ChartKind::Polar => self.name.clone(),
        }
    }

    /// Plot area for a canvas of `width` x `height` pixels.
    pub fn plot_area(&self, width: f64, height: f64) -> PlotArea {
        let i = &self.config.insets;
        let inner_w = (width - i.hsum() as f64).max(1.0);
        let inner_h = (height - i.vsum() as f64).max(1.0);
        if self.kind.is_disk() {
            PlotArea::Disk(DiskRect::new(
                i.left as f64 + inner_w / 2.0,
                i.top as f64 + inner_h / 2.0,
                inner_w.min(inner_h),
            ))
        } else {
            PlotArea::Rect(PlotRect::from_ltwh(i.left as f64, i.top as f64, inner_w, inner_h))
        }
    }

    /// Frequency span of the current sweeps (fixed span only applies to frequency charts).
    pub fn span(&self) -> Option<FrequencySpan> {
        let fixed = if self.kind.is_disk() { None } else { self.config.fixed_span };
        FrequencySpan::resolve(&self.data, &self.reference, fixed)
    }

    fn extent_mode(&self) -> ExtentMode {
        match self.config.fixed_values {
            Some((min, max)) => ExtentMode::Fixed(AxisExtent::from_display(min, max, self.unit_scale())),
            None => ExtentMode::Auto,
        }
    }

    fn value_fn(&self) -> fn(&Datapoint) -> f64 {
        Datapoint::inductive_equivalent
    }

    fn unit_scale(&self) -> f64 {
        INDUCTANCE_DISPLAY_SCALE
    }

    /// Mapper for this canvas. Frequency charts need at least one sample to scale against.
    pub fn projection(&self, width: f64, height: f64) -> Option<Projection> {
        match (self.kind, self.plot_area(width, height)) {
            (ChartKind::Smith, PlotArea::Disk(rect)) => Some(Projection::Smith(DiskMapper { rect })),
            (ChartKind::Polar, PlotArea::Disk(rect)) => Some(Projection::Polar(DiskMapper { rect })),
            (_, PlotArea::Rect(rect)) => {
                let span = self.span()?;
                let extent = axis::compute_extent(
                    &self.data,
                    &self.reference,
                    &span,
                    self.extent_mode(),
                    self.value_fn(),
                )?;
                let kind = if self.config.logarithmic_x { ScaleKind::Log10 } else { ScaleKind::Linear };
                Some(Projection::Linear(LinearMapper {
                    rect,
                    extent,
                    x_axis: FrequencyAxis::new(span, &rect, kind),
                    value_fn: self.value_fn(),
                    unit_scale: self.unit_scale(),
                }))
            }
            (_, PlotArea::Disk(_)) => None,
        }
    }

    /// Nearest drawn sample to the pointer on a canvas of the given size.
    /// Frequency charts skip samples outside the span or off the plot.
    pub fn nearest(&self, pointer: Point, width: f64, height: f64) -> Option<Nearest> {
        let projection = self.projection(width, height)?;
        let span = self.span()?;
        locate::nearest_plotted(pointer, &self.data, &self.reference, &projection, |d| {
            is_plotted(&projection, &span, d)
        })
    }

    /// Move the active marker to the sample under the pointer.
    pub fn snap_active_marker(&mut self, pointer: Point, width: f64, height: f64) -> Option<Nearest> {
        let hit = self.nearest(pointer, width, height)?;
        let marker = self.markers.get_mut(self.active_marker?)?;
        marker.snap(&hit);
        Some(hit)
    }

    /// Frequency and value under the pointer (frequency charts only).
    pub fn readout(&self, pointer: Point, width: f64, height: f64) -> Option<Readout> {
        let projection = self.projection(width, height)?;
        if !projection.contains(pointer) {
            return None;
        }
        projection.from_pixel(pointer)
    }

    pub fn frame(&self, width: f64, height: f64) -> Frame {
        let area = self.plot_area(width, height);
        let theme = self.config.theme;
        let mut frame = Frame {
            title: self.title(),
            width,
            height,
            area,
            theme,
            point_size: self.config.point_size,
            line_width: self.config.line_width,
            grid: Vec::new(),
            swr: Vec::new(),
            traces: Vec::new(),
            value_ticks: None,
            freq_ticks: Vec::new(),
            markers: Vec::new(),
        };

        match (self.kind, &area) {
            (ChartKind::Smith, PlotArea::Disk(disk)) => {
                frame.grid = smith::smith_grid(disk);
                frame.swr = smith::swr_circles(disk, &self.config.swr_markers);
            }
            (ChartKind::Polar, PlotArea::Disk(disk)) => frame.grid = smith::polar_grid(disk),
            (_, PlotArea::Rect(rect)) => frame.grid = frequency_axes(rect),
            (_, PlotArea::Disk(_)) => {}
        }

        if self.data.is_empty() && self.reference.is_empty() {
            log::debug!("{}: no sweep data, drawing background only", self.name);
            return frame;
        }
        let (Some(span), Some(projection)) = (self.span(), self.projection(width, height)) else {
            return frame;
        };

        if let (Projection::Linear(m), PlotArea::Rect(rect)) = (&projection, &area) {
            let ticks = axis::ticks(&m.extent, rect);
            frame.grid.extend(ticks.ticks.iter().map(|t| horizontal(rect, t.y)));
            frame.grid.push(horizontal(rect, rect.top));
            frame.freq_ticks = m.x_axis.ticks();
            frame.grid.extend(frame.freq_ticks.iter().map(|&(x, _)| {
                Primitive::Line(Line { from: Point::new(x, rect.top), to: Point::new(x, rect.bottom() + 5.0) })
            }));
            frame.value_ticks = Some(ticks);
        }

        let all: Vec<(usize, &Datapoint)> = self.data.iter().enumerate().collect();
        frame.traces.push(self.trace(SeriesKind::Data, theme.sweep, &all, &projection, &span));
        // frequency plots cut lines at the border, so they still need the neighbours outside the span
        let reference: Vec<(usize, &Datapoint)> = match projection {
            Projection::Linear(_) => self.reference.iter().enumerate().collect(),
            Projection::Polar(_) | Projection::Smith(_) => self.reference.within(&span).collect(),
        };
        frame.traces.push(self.trace(SeriesKind::Reference, theme.reference, &reference, &projection, &span));
        frame.markers = self
            .markers
            .iter()
            .filter_map(|m| {
                let at = m.position(&self.data, &projection)?;
                let d = self.data.get(m.location?)?;
                if !is_plotted(&projection, &span, d) {
                    return None;
                }
                Some(MarkerGlyph { ordinal: m.ordinal, color: m.color, at })
            })
            .collect();
        frame
    }

    /// Dots and connecting lines for `samples`. On frequency plots only samples
    /// inside the span and the plot rectangle get a dot, and lines toward samples
    /// off the plot are cut at its border.
    fn trace(
        &self,
        source: SeriesKind,
        color: Rgba,
        samples: &[(usize, &Datapoint)],
        projection: &Projection,
        span: &FrequencySpan,
    ) -> Trace {
        let pixels: Vec<Point> = samples.iter().map(|(_, d)| projection.to_pixel(d)).collect();
        let points = samples
            .iter()
            .zip(&pixels)
            .filter(|((_, d), _)| is_plotted(projection, span, d))
            .map(|(_, &p)| p)
            .collect();
        let lines = if !self.config.draw_lines {
            Vec::new()
        } else {
            match projection {
                Projection::Linear(m) => samples
                    .windows(2)
                    .zip(pixels.windows(2))
                    .filter(|(s, _)| span.contains(s[0].1.freq) || span.contains(s[1].1.freq))
                    .filter_map(|(_, p)| m.rect.clip_segment(p[0], p[1]))
                    .map(|(from, to)| Line { from, to })
                    .collect(),
                Projection::Polar(_) | Projection::Smith(_) => {
                    pixels.windows(2).map(|w| Line { from: w[0], to: w[1] }).collect()
                }
            }
        };
        Trace { source, color, points, lines }
    }
}

/// Whether `d` is drawn: frequency plots need it inside the span and the plot
/// rectangle, disk plots show every sample they are given.
fn is_plotted(projection: &Projection, span: &FrequencySpan, d: &Datapoint) -> bool {
    match projection {
        Projection::Linear(m) => span.contains(d.freq) && m.rect.contains(m.to_pixel(d)),
        Projection::Polar(_) | Projection::Smith(_) => true,
    }
}

fn horizontal(rect: &PlotRect, y: f64) -> Primitive {
    Primitive::Line(Line { from: Point::new(rect.left - 5.0, y), to: Point::new(rect.right(), y) })
}

/// Y axis (from just below the title) and X axis lines of a frequency chart.
fn frequency_axes(rect: &PlotRect) -> Vec<Primitive> {
    vec![
        Primitive::Line(Line {
            from: Point::new(rect.left, 20.0),
            to: Point::new(rect.left, rect.bottom() + 5.0),
        }),
        horizontal(rect, rect.bottom()),
    ]
}
