// File: crates/vna-chart-core/src/scale.rs
// Summary: Horizontal frequency scale mapping [fstart, fstop] onto the plot width (linear or log10).

use crate::geometry::PlotRect;
use crate::series::FrequencySpan;

/// Horizontal pixels per frequency tick.
pub const FREQ_TICK_SPACING_PX: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScaleKind {
    #[default]
    Linear,
    Log10,
}

/// Frequency → x mapping shared by the Cartesian charts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrequencyAxis {
    pub span: FrequencySpan,
    pub left_px: f64,
    pub width_px: f64,
    pub kind: ScaleKind,
}

impl FrequencyAxis {
    pub fn new(span: FrequencySpan, rect: &PlotRect, kind: ScaleKind) -> Self {
        let kind = if kind == ScaleKind::Log10 && span.start <= 0.0 {
            log::debug!("log frequency axis needs fstart > 0 (got {}), using linear", span.start);
            ScaleKind::Linear
        } else {
            kind
        };
        Self { span, left_px: rect.left, width_px: rect.width, kind }
    }

    /// Span in the axis' own domain (Hz or log Hz).
    fn domain_span(&self) -> f64 {
        match self.kind {
            ScaleKind::Linear => self.span.width(),
            ScaleKind::Log10 => self.span.stop.log10() - self.span.start.log10(),
        }
    }

    /// X pixel of `freq`, rounded to whole pixels. A zero-width span puts every
    /// sample in the middle of the plot.
    pub fn to_px(&self, freq: f64) -> f64 {
        let span = self.domain_span();
        if !(span > 0.0) {
            return self.left_px + (self.width_px / 2.0).floor();
        }
        let offset = match self.kind {
            ScaleKind::Linear => freq - self.span.start,
            ScaleKind::Log10 => freq.max(f64::MIN_POSITIVE).log10() - self.span.start.log10(),
        };
        self.left_px + (self.width_px * offset / span).round()
    }

    /// Frequency under pixel column `px`, clamped to the span and rounded to whole Hz.
    pub fn from_px(&self, px: f64) -> f64 {
        let absx = px - self.left_px;
        if absx <= 0.0 {
            return self.span.start;
        }
        if absx >= self.width_px {
            return self.span.stop;
        }
        let step = self.domain_span() / self.width_px;
        match self.kind {
            ScaleKind::Linear => (self.span.start + absx * step).round(),
            ScaleKind::Log10 => 10f64.powf(self.span.start.log10() + absx * step).round(),
        }
    }

    /// Tick marks every ~100 px: `(x, frequency)` at `(i + 1) * W / ticks`.
    pub fn ticks(&self) -> Vec<(f64, f64)> {
        let count = (self.width_px / FREQ_TICK_SPACING_PX).floor() as usize;
        (0..count)
            .map(|i| {
                let x = self.left_px + ((i + 1) as f64 * self.width_px / count as f64).round();
                (x, self.from_px(x))
            })
            .collect()
    }
}
