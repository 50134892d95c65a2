// File: crates/vna-chart-core/src/series.rs
// Summary: Sweep series model (ascending-frequency samples) and the frequency span derived from it.
// Notes:
// - A chart holds two series: the live `data` sweep and a `reference` sweep
//   that may cover a different frequency range.

use crate::datapoint::Datapoint;
use crate::error::{ChartError, Result};

/// Which of the chart's two series a sample came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Data,
    Reference,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub points: Vec<Datapoint>,
}

impl Series {
    /// Wrap samples as-is. Callers guarantee ascending frequency.
    pub fn new(points: Vec<Datapoint>) -> Self {
        Self { points }
    }

    /// Wrap samples after checking that frequencies never decrease.
    pub fn try_new(points: Vec<Datapoint>) -> Result<Self> {
        for (i, pair) in points.windows(2).enumerate() {
            if pair[1].freq < pair[0].freq {
                return Err(ChartError::Unordered {
                    index: i + 1,
                    previous: pair[0].freq,
                    frequency: pair[1].freq,
                });
            }
        }
        Ok(Self { points })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Datapoint> {
        self.points.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Datapoint> {
        self.points.iter()
    }

    /// Span from first to last sample, or `None` for an empty series.
    pub fn span(&self) -> Option<FrequencySpan> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some(FrequencySpan::new(first.freq, last.freq))
    }

    /// Samples that fall inside `span` (inclusive), keeping their original indices.
    pub fn within<'a>(&'a self, span: &'a FrequencySpan) -> impl Iterator<Item = (usize, &'a Datapoint)> + 'a {
        self.points
            .iter()
            .enumerate()
            .filter(move |(_, d)| span.contains(d.freq))
    }
}

impl From<Vec<Datapoint>> for Series {
    fn from(points: Vec<Datapoint>) -> Self {
        Self::new(points)
    }
}

/// Inclusive frequency range shown on a chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrequencySpan {
    pub start: f64,
    pub stop: f64,
}

impl FrequencySpan {
    pub const fn new(start: f64, stop: f64) -> Self {
        Self { start, stop }
    }

    #[inline]
    pub fn contains(&self, freq: f64) -> bool {
        freq >= self.start && freq <= self.stop
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.stop - self.start
    }

    /// Pick the span for a frame: a fixed span wins, otherwise the data sweep,
    /// otherwise the reference sweep. `None` when there is nothing to show.
    pub fn resolve(data: &Series, reference: &Series, fixed: Option<FrequencySpan>) -> Option<Self> {
        if fixed.is_some() {
            return fixed;
        }
        data.span().or_else(|| reference.span())
    }
}
