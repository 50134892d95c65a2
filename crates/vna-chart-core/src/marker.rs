// File: crates/vna-chart-core/src/marker.rs
// Summary: Chart markers pinned to a sample of the data sweep.

use crate::geometry::Point;
use crate::locate::Nearest;
use crate::mapper::CoordinateMapper;
use crate::series::{Series, SeriesKind};
use crate::theme::Rgba;

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// Index into the data series, if the marker sits on a data sample.
    pub location: Option<usize>,
    /// Frequency the marker was last placed at.
    pub frequency: Option<f64>,
    pub color: Rgba,
    /// 1-based label drawn next to the marker.
    pub ordinal: usize,
}

impl Marker {
    pub fn new(ordinal: usize, color: Rgba) -> Self {
        Self { location: None, frequency: None, color, ordinal }
    }

    /// Move to a hit-test result. Hits on the reference sweep only carry a frequency.
    pub fn snap(&mut self, hit: &Nearest) {
        self.frequency = Some(hit.frequency);
        self.location = match hit.source {
            SeriesKind::Data => Some(hit.index),
            SeriesKind::Reference => None,
        };
    }

    pub fn clear(&mut self) {
        self.location = None;
        self.frequency = None;
    }

    /// Pixel position on `data`; `None` when unplaced or the index is past the end.
    pub fn position<M: CoordinateMapper>(&self, data: &Series, mapper: &M) -> Option<Point> {
        let d = data.get(self.location?)?;
        Some(mapper.to_pixel(d))
    }
}
