// File: crates/mekko-core/src/math.rs
// Summary: Numeric helpers (tick spacing, precision rounding).

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round `value` to the nearest multiple of `precision`.
/// Non-positive precision leaves the value untouched.
pub fn round_to_precision(value: f64, precision: f64) -> f64 {
    if precision <= 0.0 { return value; }
    (value / precision).round() * precision
}
