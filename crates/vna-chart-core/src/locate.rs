// File: crates/vna-chart-core/src/locate.rs
// Summary: Nearest-sample hit testing used to snap markers to the pointer.

use crate::datapoint::Datapoint;
use crate::geometry::Point;
use crate::mapper::CoordinateMapper;
use crate::series::{Series, SeriesKind};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nearest {
    pub index: usize,
    pub source: SeriesKind,
    pub frequency: f64,
    /// Pixel distance from the pointer to the sample.
    pub distance: f64,
}

/// Index of the sample closest to `pointer` in pixel space.
///
/// Live data is searched whenever it has samples; the reference sweep is only
/// used when there is no data. Ties resolve to the lowest index. Returns `None`
/// when the pointer is off the plot area or there is nothing to search.
pub fn nearest<M: CoordinateMapper>(
    pointer: Point,
    data: &Series,
    reference: &Series,
    mapper: &M,
) -> Option<Nearest> {
    nearest_plotted(pointer, data, reference, mapper, |_| true)
}

/// Like [`nearest`], but only samples accepted by `plotted` take part, and the
/// data sweep wins whenever at least one of its samples does. Indices stay those
/// of the full series.
pub fn nearest_plotted<M, F>(
    pointer: Point,
    data: &Series,
    reference: &Series,
    mapper: &M,
    plotted: F,
) -> Option<Nearest>
where
    M: CoordinateMapper,
    F: Fn(&Datapoint) -> bool,
{
    if !mapper.contains(pointer) {
        return None;
    }
    closest(pointer, data, SeriesKind::Data, mapper, &plotted)
        .or_else(|| closest(pointer, reference, SeriesKind::Reference, mapper, &plotted))
}

fn closest<M, F>(pointer: Point, series: &Series, source: SeriesKind, mapper: &M, plotted: &F) -> Option<Nearest>
where
    M: CoordinateMapper,
    F: Fn(&Datapoint) -> bool,
{
    let mut best: Option<Nearest> = None;
    for (index, d) in series.iter().enumerate().filter(|(_, d)| plotted(d)) {
        let distance = pointer.distance(mapper.to_pixel(d));
        // strict `<` keeps the first of equally distant samples; NaN never wins
        if best.map_or(!distance.is_nan(), |b| distance < b.distance) {
            best = Some(Nearest { index, source, frequency: d.freq, distance });
        }
    }
    best
}
