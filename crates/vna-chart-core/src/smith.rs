// File: crates/vna-chart-core/src/smith.rs
// Summary: Static background geometry for disk charts: Smith grid (constant R circles, constant X arcs),
// SWR circles and the polar grid. Everything is derived from z = (1 + Γ) / (1 - Γ).

use std::f64::consts::FRAC_1_SQRT_2;

use crate::geometry::{DiskRect, Point};

/// Normalized resistances drawn as full circles.
pub const RESISTANCE_CIRCLES: [f64; 6] = [0.2, 0.5, 1.0, 2.0, 3.0, 5.0];

/// Normalized reactances drawn as arcs (inductive above the real axis, capacitive below).
pub const REACTANCE_ARCS: [f64; 10] = [-5.0, 5.0, -2.0, 2.0, -1.0, 1.0, -0.5, 0.5, -0.2, 0.2];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// Circular arc in screen space: 0° points along +x and positive sweeps turn
/// clockwise on screen (towards +y, which is down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start_deg: f64,
    pub sweep_deg: f64,
}

impl Arc {
    /// Point at `start_deg + t * sweep_deg`.
    pub fn point_at(&self, t: f64) -> Point {
        let a = (self.start_deg + t * self.sweep_deg).to_radians();
        Point::new(self.center.x + self.radius * a.cos(), self.center.y + self.radius * a.sin())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Circle(Circle),
    Arc(Arc),
    Line(Line),
}

/// Constant-SWR circle with the anchor of its label (top-center of the text box).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwrCircle {
    pub swr: f64,
    pub circle: Circle,
    pub label_at: Point,
}

/// Circle of constant normalized resistance `r`: center r/(r+1), radius 1/(r+1).
pub fn resistance_circle(disk: &DiskRect, r: f64) -> Circle {
    let radius = disk.radius();
    Circle {
        center: Point::new(disk.center_x + r / (r + 1.0) * radius, disk.center_y),
        radius: radius / (r + 1.0),
    }
}

/// Part of the constant-reactance circle (center (1, 1/x), radius 1/|x|) that lies
/// inside the unit disk. It starts at Γ = 1 and sweeps 2·atan(x) towards the rim.
pub fn reactance_arc(disk: &DiskRect, x: f64) -> Arc {
    let radius = disk.radius();
    let arc_radius = radius / x.abs();
    Arc {
        center: Point::new(disk.center_x + radius, disk.center_y - radius / x),
        radius: arc_radius,
        start_deg: 90.0_f64.copysign(x),
        sweep_deg: 2.0 * x.atan().to_degrees(),
    }
}

/// Reflection magnitude on the circle of a given SWR.
#[inline]
pub fn swr_to_gamma(swr: f64) -> f64 {
    (swr - 1.0) / (swr + 1.0)
}

/// SWR circles around the disk center. Values ≤ 1 have no circle and are skipped.
pub fn swr_circles(disk: &DiskRect, values: &[f64]) -> Vec<SwrCircle> {
    values
        .iter()
        .copied()
        .filter(|&s| s > 1.0 && s.is_finite())
        .map(|swr| {
            let radius = swr_to_gamma(swr) * disk.radius();
            SwrCircle {
                swr,
                circle: Circle { center: disk.center(), radius },
                label_at: Point::new(disk.center_x, disk.center_y - 4.0 + radius),
            }
        })
        .collect()
}

fn outline(disk: &DiskRect) -> Circle {
    Circle { center: disk.center(), radius: disk.radius() }
}

fn real_axis(disk: &DiskRect) -> Line {
    let r = disk.radius();
    Line {
        from: Point::new(disk.center_x - r, disk.center_y),
        to: Point::new(disk.center_x + r, disk.center_y),
    }
}

/// Smith chart background: rim, real axis, resistance circles and reactance arcs.
pub fn smith_grid(disk: &DiskRect) -> Vec<Primitive> {
    let mut out = vec![Primitive::Circle(outline(disk)), Primitive::Line(real_axis(disk))];
    out.extend(RESISTANCE_CIRCLES.iter().map(|&r| Primitive::Circle(resistance_circle(disk, r))));
    out.extend(REACTANCE_ARCS.iter().map(|&x| Primitive::Arc(reactance_arc(disk, x))));
    out
}

/// Polar chart background: rim, |Γ| = 0.5 circle, axes and both diagonals.
pub fn polar_grid(disk: &DiskRect) -> Vec<Primitive> {
    let r = disk.radius();
    let (cx, cy) = (disk.center_x, disk.center_y);
    let d = r * FRAC_1_SQRT_2;
    vec![
        Primitive::Circle(outline(disk)),
        Primitive::Circle(Circle { center: disk.center(), radius: r / 2.0 }),
        Primitive::Line(real_axis(disk)),
        Primitive::Line(Line { from: Point::new(cx, cy - r), to: Point::new(cx, cy + r) }),
        Primitive::Line(Line { from: Point::new(cx + d, cy + d), to: Point::new(cx - d, cy - d) }),
        Primitive::Line(Line { from: Point::new(cx + d, cy - d), to: Point::new(cx - d, cy + d) }),
    ]
}
