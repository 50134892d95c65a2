// File: crates/vna-chart-core/src/error.rs
// Summary: Error type for the validating constructors of the core crate.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("frequency must be finite and non-negative, got {0}")]
    InvalidFrequency(f64),

    #[error("sample at {frequency} Hz has a non-finite reflection coefficient")]
    NonFiniteSample { frequency: f64 },

    #[error("sample {index} at {frequency} Hz is below the previous frequency {previous} Hz")]
    Unordered { index: usize, previous: f64, frequency: f64 },

    #[error("plot rectangle must have a positive size, got {width}x{height}")]
    InvalidRect { width: f64, height: f64 },
}

pub type Result<T> = std::result::Result<T, ChartError>;
