//! Sequential colormaps for heatmaps and colorbars.

use super::color::Color;

/// ColorBrewer "Blues", light to dark.
const BLUES: [&str; 9] = [
    "#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5", "#08519c",
    "#08306b",
];

/// A colormap mapping values in [0, 1] to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    Blues,
    /// Blues reversed: low values dark, high values light.
    #[default]
    BluesR,
}

impl Colormap {
    fn is_reversed(&self) -> bool {
        matches!(self, Colormap::BluesR)
    }

    /// Color at normalized position `t`; values outside [0, 1] are clamped
    /// and NaN maps to transparent.
    pub fn sample(&self, t: f64) -> Color {
        if t.is_nan() {
            return Color::TRANSPARENT;
        }
        let t = t.clamp(0.0, 1.0);
        let t = if self.is_reversed() { 1.0 - t } else { t };

        let anchors = &BLUES;
        let last = anchors.len() - 1;
        let pos = t * last as f64;
        let i = (pos.floor() as usize).min(last - 1);
        let lo = Color::from_hex(anchors[i]).unwrap_or(Color::WHITE);
        let hi = Color::from_hex(anchors[i + 1]).unwrap_or(Color::BLACK);
        lo.lerp(&hi, pos - i as f64)
    }

    /// Color for `value` on the scale `[vmin, vmax]`.
    pub fn map(&self, value: f64, vmin: f64, vmax: f64) -> Color {
        let span = vmax - vmin;
        if span <= 0.0 || !span.is_finite() {
            return self.sample(0.5);
        }
        self.sample((value - vmin) / span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blues_endpoints() {
        assert_eq!(Colormap::Blues.sample(0.0), Color::from_hex("#f7fbff").unwrap());
        assert_eq!(Colormap::Blues.sample(1.0), Color::from_hex("#08306b").unwrap());
    }

    #[test]
    fn test_reversed_flips_direction() {
        for t in [0.0, 0.3, 0.5, 0.8, 1.0] {
            assert_eq!(Colormap::BluesR.sample(t), Colormap::Blues.sample(1.0 - t));
        }
    }

    #[test]
    fn test_map_degenerate_range() {
        assert_eq!(Colormap::Blues.map(3.0, 1.0, 1.0), Colormap::Blues.sample(0.5));
        assert_eq!(Colormap::BluesR.map(f64::NAN, 0.0, 1.0), Color::TRANSPARENT);
    }
}
