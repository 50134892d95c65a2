// File: crates/vna-chart-core/src/datapoint.rs
// Summary: Single sweep sample (frequency + reflection coefficient) and derived RF quantities.

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::error::{ChartError, Result};

/// Reference impedance used by the derived quantities, in ohms.
pub const REF_IMPEDANCE: f64 = 50.0;

const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// One sample of a sweep: frequency in Hz and the reflection coefficient Γ.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Datapoint {
    pub freq: f64,
    pub re: f64,
    pub im: f64,
}

impl Datapoint {
    pub const fn new(freq: f64, re: f64, im: f64) -> Self {
        Self { freq, re, im }
    }

    /// Construct a sample, rejecting negative/non-finite frequencies and non-finite Γ.
    pub fn try_new(freq: f64, re: f64, im: f64) -> Result<Self> {
        if !freq.is_finite() || freq < 0.0 {
            return Err(ChartError::InvalidFrequency(freq));
        }
        if !re.is_finite() || !im.is_finite() {
            return Err(ChartError::NonFiniteSample { frequency: freq });
        }
        Ok(Self { freq, re, im })
    }

    #[inline]
    pub fn gamma(&self) -> Complex64 {
        Complex64::new(self.re, self.im)
    }

    /// |Γ|
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.gamma().norm()
    }

    /// arg Γ in radians.
    #[inline]
    pub fn phase(&self) -> f64 {
        self.gamma().arg()
    }

    /// Z = z0 (1 + Γ) / (1 - Γ). A fully open load (Γ = 1) yields an infinite resistance.
    pub fn impedance(&self, z0: f64) -> Complex64 {
        let g = self.gamma();
        let denom = Complex64::new(1.0, 0.0) - g;
        if denom.norm_sqr() == 0.0 {
            return Complex64::new(f64::INFINITY, 0.0);
        }
        (Complex64::new(1.0, 0.0) + g) / denom * z0
    }

    /// Series inductance (H) that would produce the measured reactance at this frequency.
    pub fn inductive_equivalent(&self) -> f64 {
        if self.freq == 0.0 {
            return 0.0;
        }
        self.impedance(REF_IMPEDANCE).im / (2.0 * PI * self.freq)
    }

    /// Series capacitance (F) that would produce the measured reactance at this frequency.
    pub fn capacitive_equivalent(&self) -> f64 {
        if self.freq == 0.0 {
            return f64::NEG_INFINITY;
        }
        let x = self.impedance(REF_IMPEDANCE).im;
        if x == 0.0 {
            return f64::INFINITY;
        }
        -(1.0 / (2.0 * PI * self.freq * x))
    }

    pub fn vswr(&self) -> f64 {
        let mag = self.magnitude();
        if mag == 1.0 {
            return 1.0;
        }
        (1.0 + mag) / (1.0 - mag)
    }

    /// 20·log10|Γ| in dB.
    pub fn gain(&self) -> f64 {
        let mag = self.magnitude();
        if mag > 0.0 {
            20.0 * mag.log10()
        } else {
            f64::NEG_INFINITY
        }
    }

    /// |X / R|, or -1 when the resistance is zero.
    pub fn q_factor(&self) -> f64 {
        let z = self.impedance(REF_IMPEDANCE);
        if z.re == 0.0 {
            return -1.0;
        }
        (z.im / z.re).abs()
    }

    pub fn wavelength(&self) -> f64 {
        SPEED_OF_LIGHT / self.freq
    }
}
