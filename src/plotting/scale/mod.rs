//! Data-to-axis scaling and tick placement.

mod linear;

pub use linear::LinearScale;

/// Maps data values onto the unit interval of an axis.
pub trait Scale: std::fmt::Debug {
    /// Data value to normalized position (0.0 - 1.0 inside the range).
    fn transform(&self, value: f64) -> f64;

    /// Set the visible data range.
    fn set_range(&mut self, min: f64, max: f64);

    fn range(&self) -> (f64, f64);

    /// Round tick positions within the range.
    fn ticks(&self, num_ticks: usize) -> Vec<f64>;
}

/// Round `step` to 1, 2, 5 or 10 times a power of ten.
pub fn nice_number(step: f64) -> f64 {
    let exponent = step.log10().floor();
    let fraction = step / 10_f64.powf(exponent);
    let nice = if fraction < 1.5 {
        1.0
    } else if fraction < 3.0 {
        2.0
    } else if fraction < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * 10_f64.powf(exponent)
}

/// Evenly spaced round ticks covering `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, num_ticks: usize) -> Vec<f64> {
    if num_ticks < 2 || !(max > min) || !min.is_finite() || !max.is_finite() {
        return vec![(min + max) / 2.0];
    }

    let step = nice_number((max - min) / (num_ticks - 1) as f64);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;

    (first..=last)
        .map(|k| k as f64 * step)
        // snap -0.0 and float noise like 0.30000000000000004
        .map(|t| if t.abs() < step * 1e-9 { 0.0 } else { (t / step).round() * step })
        .collect()
}
