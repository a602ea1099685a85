//! Non-data elements of an axes: axis lines, grid, legend, text, colorbar.

mod axis;
mod colorbar;
mod grid;
mod legend;
pub mod text;

pub use axis::AxisConfig;
pub use colorbar::Colorbar;
pub use grid::GridConfig;
pub use legend::{Legend, LegendEntry};
pub use text::{escape_xml, Text};

/// Axis-aligned rectangle, used for both data and pixel extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Inverted bounds that any real point will replace.
    pub fn empty() -> Self {
        Bounds::new(
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
        )
    }

    /// Bounds of the finite `(x, y)` pairs, `None` if there are none.
    pub fn of_points(x: &[f64], y: &[f64]) -> Option<Bounds> {
        let mut bounds = Bounds::empty();
        for (&px, &py) in x.iter().zip(y) {
            if px.is_finite() && py.is_finite() {
                bounds.include_point(px, py);
            }
        }
        bounds.is_valid().then_some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn is_valid(&self) -> bool {
        self.x_min <= self.x_max && self.y_min <= self.y_max
    }

    pub fn include_point(&mut self, x: f64, y: f64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    pub fn include_bounds(&mut self, other: &Bounds) {
        self.x_min = self.x_min.min(other.x_min);
        self.x_max = self.x_max.max(other.x_max);
        self.y_min = self.y_min.min(other.y_min);
        self.y_max = self.y_max.max(other.y_max);
    }

    /// Grow by `fraction` of the width and height on every side.
    pub fn pad(&self, fraction: f64) -> Bounds {
        let x_pad = self.width() * fraction;
        let y_pad = self.height() * fraction;
        Bounds::new(
            self.x_min - x_pad,
            self.x_max + x_pad,
            self.y_min - y_pad,
            self.y_max + y_pad,
        )
    }

    /// Map a point in these (data) bounds to `pixel` bounds. SVG y grows
    /// downward, so the y axis is flipped.
    pub fn project(&self, x: f64, y: f64, pixel: &Bounds) -> (f64, f64) {
        let x_norm = (x - self.x_min) / self.width();
        let y_norm = (y - self.y_min) / self.height();
        (
            pixel.x_min + x_norm * pixel.width(),
            pixel.y_max - y_norm * pixel.height(),
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::new(0.0, 1.0, 0.0, 1.0)
    }
}
