// File: crates/vna-chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (plot rectangles, disk squares, points).

use crate::error::{ChartError, Result};

/// Sub-pixel position on the canvas. Y grows downwards.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Plot area of a Cartesian chart: left/top margin plus drawable width/height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    pub const fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Like `from_ltwh`, but rejects empty or non-finite sizes.
    pub fn try_from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidRect { width, height });
        }
        Ok(Self { left, top, width, height })
    }

    #[inline]
    pub fn right(&self) -> f64 { self.left + self.width }
    #[inline]
    pub fn bottom(&self) -> f64 { self.top + self.height }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }

    /// Part of the segment `a`-`b` inside the rectangle (Liang-Barsky), or `None`
    /// when it misses the rectangle or has a non-finite end.
    pub fn clip_segment(&self, a: Point, b: Point) -> Option<(Point, Point)> {
        if ![a.x, a.y, b.x, b.y].iter().all(|v| v.is_finite()) {
            return None;
        }
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
        let edges = [
            (-dx, a.x - self.left),
            (dx, self.right() - a.x),
            (-dy, a.y - self.top),
            (dy, self.bottom() - a.y),
        ];
        for (p, q) in edges {
            if p == 0.0 {
                // parallel to this edge: outside means no intersection at all
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
        Some((
            Point::new(a.x + t0 * dx, a.y + t0 * dy),
            Point::new(a.x + t1 * dx, a.y + t1 * dy),
        ))
    }
}

/// Square plot area of a disk chart, described by its center and side length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiskRect {
    pub center_x: f64,
    pub center_y: f64,
    pub side: f64,
}

impl DiskRect {
    pub const fn new(center_x: f64, center_y: f64, side: f64) -> Self {
        Self { center_x, center_y, side }
    }

    #[inline]
    pub fn center(&self) -> Point { Point::new(self.center_x, self.center_y) }

    /// Radius of the unit circle in pixels.
    #[inline]
    pub fn radius(&self) -> f64 { self.side / 2.0 }

    /// Bounding square of the unit disk.
    pub fn bounds(&self) -> PlotRect {
        let r = self.radius();
        PlotRect::from_ltwh(self.center_x - r, self.center_y - r, self.side, self.side)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }
}
