// File: crates/vna-chart-core/src/lib.rs
// Summary: Core library entry point; value/pixel mapping, axis scaling and hit testing for VNA sweep charts.

pub mod axis;
pub mod chart;
pub mod datapoint;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod locate;
pub mod mapper;
pub mod marker;
pub mod scale;
pub mod series;
pub mod si;
pub mod smith;
pub mod theme;
pub mod types;

pub use axis::{compute_extent, AxisExtent, AxisTicks, ExtentMode, Tick, MIN_SPAN};
pub use chart::{Chart, ChartConfig, ChartKind, Frame, MarkerGlyph, PlotArea, Trace};
pub use datapoint::Datapoint;
pub use error::{ChartError, Result};
pub use geometry::{DiskRect, PlotRect, Point};
pub use locate::{nearest, nearest_plotted, Nearest};
pub use mapper::{CoordinateMapper, DiskMapper, LinearMapper, Projection, Readout, INDUCTANCE_DISPLAY_SCALE};
pub use marker::Marker;
pub use scale::{FrequencyAxis, ScaleKind};
pub use series::{FrequencySpan, Series, SeriesKind};
pub use smith::{Arc, Circle, Line, Primitive, SwrCircle};
pub use theme::{Rgba, Theme};
pub use types::Insets;
