// File: crates/vna-chart-core/src/axis.rs
// Summary: Value-axis extents (auto or fixed), epsilon span floor and tick layout.

use crate::datapoint::Datapoint;
use crate::geometry::PlotRect;
use crate::grid::linspace_open;
use crate::series::{FrequencySpan, Series};

/// Span substituted when an extent collapses to a single value.
pub const MIN_SPAN: f64 = 1e-15;

/// Vertical pixels per generated tick.
pub const TICK_SPACING_PX: f64 = 60.0;

/// Value range of an axis. `span` is `max - min`, but never zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisExtent {
    pub min: f64,
    pub max: f64,
    pub span: f64,
}

impl AxisExtent {
    /// Build an extent, flooring a zero span at `MIN_SPAN`. Malformed input
    /// (non-finite bounds, min above max) collapses onto `min` with the same floor.
    pub fn new(min: f64, max: f64) -> Self {
        if !(min.is_finite() && max.is_finite()) {
            log::warn!("non-finite axis extent [{min}, {max}], collapsing to epsilon span");
            let anchor = if min.is_finite() { min } else if max.is_finite() { max } else { 0.0 };
            return Self { min: anchor, max: anchor, span: MIN_SPAN };
        }
        if min > max {
            log::warn!("axis extent min {min} above max {max}, collapsing to epsilon span");
            return Self { min, max: min, span: MIN_SPAN };
        }
        let span = max - min;
        if span == 0.0 {
            log::info!("axis span is zero at {min}, setting to a small value");
            return Self { min, max, span: MIN_SPAN };
        }
        Self { min, max, span }
    }

    /// Fixed extent entered in display units, converted to internal units.
    pub fn from_display(min: f64, max: f64, unit_scale: f64) -> Self {
        Self::new(min / unit_scale, max / unit_scale)
    }

    /// Returns `self` when well formed, otherwise rebuilds it through `new`.
    pub fn sanitized(self) -> Self {
        let well_formed = self.min.is_finite()
            && self.max.is_finite()
            && self.min <= self.max
            && self.span.is_finite()
            && self.span > 0.0;
        if well_formed { self } else { Self::new(self.min, self.max) }
    }

    /// Y pixel of `value` inside `rect`, rounded to whole pixels.
    #[inline]
    pub fn to_pixel_y(&self, value: f64, rect: &PlotRect) -> f64 {
        rect.top + ((self.max - value) / self.span * rect.height).round()
    }

    /// Internal value at pixel row `y`.
    #[inline]
    pub fn from_pixel_y(&self, y: f64, rect: &PlotRect) -> f64 {
        self.max - ((y - rect.top) / rect.height) * self.span
    }
}

/// Auto-scale from the sweeps, or hold a user-pinned extent.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ExtentMode {
    #[default]
    Auto,
    Fixed(AxisExtent),
}

/// Extent of `value_fn` over `data` plus the part of `reference` inside `span`.
/// A fixed extent is returned as given unless malformed. `None` when no sample was scanned.
pub fn compute_extent<F>(
    data: &Series,
    reference: &Series,
    span: &FrequencySpan,
    mode: ExtentMode,
    value_fn: F,
) -> Option<AxisExtent>
where
    F: Fn(&Datapoint) -> f64,
{
    if let ExtentMode::Fixed(extent) = mode {
        return Some(extent.sanitized());
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    let values = data
        .iter()
        .chain(reference.within(span).map(|(_, d)| d))
        .map(&value_fn)
        .filter(|v| v.is_finite());
    for v in values {
        min = min.min(v);
        max = max.max(v);
        any = true;
    }
    if !any {
        return None;
    }
    Some(AxisExtent::new(min, max))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub y: f64,
    /// False for the first tick, which sits on `min` whose label is drawn separately.
    pub labeled: bool,
}

/// Ticks plus the separately placed boundary labels for `max` (top) and `min` (bottom).
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTicks {
    pub ticks: Vec<Tick>,
    pub max_label: Tick,
    pub min_label: Tick,
}

/// Number of ticks for a plot of the given height: one per 60 px, at least one.
pub fn target_ticks(plot_height: f64) -> usize {
    ((plot_height / TICK_SPACING_PX).floor() as usize).max(1)
}

pub fn ticks(extent: &AxisExtent, rect: &PlotRect) -> AxisTicks {
    let ticks = linspace_open(extent.min, extent.span, target_ticks(rect.height))
        .into_iter()
        .enumerate()
        .map(|(i, value)| Tick {
            value,
            y: extent.to_pixel_y(value, rect),
            labeled: i != 0,
        })
        .collect();
    AxisTicks {
        ticks,
        max_label: Tick { value: extent.max, y: rect.top, labeled: true },
        min_label: Tick { value: extent.min, y: rect.bottom(), labeled: true },
    }
}
