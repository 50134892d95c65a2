// File: crates/vna-chart-core/src/grid.rs
// Summary: Evenly spaced tick layout helper.

/// `steps` values `start + (i / steps) * span` for i in [0, steps). The end
/// value `start + span` is not included; callers draw that boundary themselves.
pub fn linspace_open(start: f64, span: f64, steps: usize) -> Vec<f64> {
    if steps == 0 { return Vec::new(); }
    (0..steps).map(|i| start + (i as f64 / steps as f64) * span).collect()
}
