// File: crates/vna-chart-core/src/mapper.rs
// Summary: Datapoint → pixel projections (linear frequency chart, unit disk) and their inverses.

use crate::axis::AxisExtent;
use crate::datapoint::Datapoint;
use crate::geometry::{DiskRect, PlotRect, Point};
use crate::scale::FrequencyAxis;

/// Inductance charts keep henries internally and show/accept values scaled by this factor.
pub const INDUCTANCE_DISPLAY_SCALE: f64 = 10e11;

/// Value read back under the cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Readout {
    pub frequency: f64,
    /// In display units.
    pub value: f64,
}

/// Pixel mapping operations shared by every chart projection.
pub trait CoordinateMapper {
    fn to_pixel(&self, d: &Datapoint) -> Point;
    /// Inverse mapping; `None` where the projection has no continuous inverse.
    fn from_pixel(&self, p: Point) -> Option<Readout>;
    /// Whether `p` lies on the plot area, borders included.
    fn contains(&self, p: Point) -> bool;
}

/// Cartesian chart: frequency on X, a scalar derived from each sample on Y.
#[derive(Clone, Copy, Debug)]
pub struct LinearMapper {
    pub rect: PlotRect,
    pub extent: AxisExtent,
    pub x_axis: FrequencyAxis,
    pub value_fn: fn(&Datapoint) -> f64,
    /// Display value = internal value × `unit_scale`.
    pub unit_scale: f64,
}

impl LinearMapper {
    #[inline]
    pub fn to_pixel_y(&self, value: f64) -> f64 {
        self.extent.to_pixel_y(value, &self.rect)
    }

    /// Display-unit value at pixel row `y`.
    #[inline]
    pub fn from_pixel_y(&self, y: f64) -> f64 {
        self.extent.from_pixel_y(y, &self.rect) * self.unit_scale
    }
}

impl CoordinateMapper for LinearMapper {
    fn to_pixel(&self, d: &Datapoint) -> Point {
        Point::new(self.x_axis.to_px(d.freq), self.to_pixel_y((self.value_fn)(d)))
    }

    fn from_pixel(&self, p: Point) -> Option<Readout> {
        Some(Readout { frequency: self.x_axis.from_px(p.x), value: self.from_pixel_y(p.y) })
    }

    fn contains(&self, p: Point) -> bool {
        self.rect.contains(p)
    }
}

/// Reflection coefficient plotted directly on the unit disk; +Im points up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiskMapper {
    pub rect: DiskRect,
}

impl CoordinateMapper for DiskMapper {
    fn to_pixel(&self, d: &Datapoint) -> Point {
        let r = self.rect.radius();
        Point::new(self.rect.center_x + d.re * r, self.rect.center_y - d.im * r)
    }

    fn from_pixel(&self, _p: Point) -> Option<Readout> {
        None
    }

    fn contains(&self, p: Point) -> bool {
        self.rect.contains(p)
    }
}

/// The chart family a frame is drawn with.
#[derive(Clone, Copy, Debug)]
pub enum Projection {
    Linear(LinearMapper),
    Polar(DiskMapper),
    Smith(DiskMapper),
}

impl CoordinateMapper for Projection {
    fn to_pixel(&self, d: &Datapoint) -> Point {
        match self {
            Projection::Linear(m) => m.to_pixel(d),
            Projection::Polar(m) | Projection::Smith(m) => m.to_pixel(d),
        }
    }

    fn from_pixel(&self, p: Point) -> Option<Readout> {
        match self {
            Projection::Linear(m) => m.from_pixel(p),
            Projection::Polar(m) | Projection::Smith(m) => m.from_pixel(p),
        }
    }

    fn contains(&self, p: Point) -> bool {
        match self {
            Projection::Linear(m) => m.contains(p),
            Projection::Polar(m) | Projection::Smith(m) => m.contains(p),
        }
    }
}
