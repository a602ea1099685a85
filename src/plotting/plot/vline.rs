//! Vertical reference line spanning the full height of the axes.

use crate::plotting::element::Bounds;
use crate::plotting::plot::Plot;
use crate::plotting::style::{Color, DashPattern, LineStyle};

#[derive(Debug, Clone)]
pub struct VLine {
    pub x: f64,
    pub line_style: LineStyle,
    pub label: Option<String>,
}

impl VLine {
    pub fn new(x: f64) -> Self {
        VLine {
            x,
            line_style: LineStyle::default(),
            label: None,
        }
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.line_style.color = color.into();
        self
    }

    pub fn linestyle(mut self, dash: DashPattern) -> Self {
        self.line_style.dash = dash;
        self
    }

    pub fn linewidth(mut self, width: f64) -> Self {
        self.line_style.width = width;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Plot for VLine {
    /// Reference lines never move the axis limits.
    fn bounds(&self) -> Option<Bounds> {
        None
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn line_style(&self) -> Option<LineStyle> {
        Some(self.line_style.clone())
    }

    fn render_svg(&self, data_bounds: &Bounds, pixel_bounds: &Bounds) -> String {
        if !self.x.is_finite() {
            return String::new();
        }
        let (px, _) = data_bounds.project(self.x, data_bounds.y_min, pixel_bounds);
        format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
            px,
            pixel_bounds.y_min,
            px,
            pixel_bounds.y_max,
            self.line_style.to_svg_style()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_full_height() {
        let line = VLine::new(0.0).linestyle(DashPattern::Dashed);
        let svg = line.render_svg(
            &Bounds::new(-1.0, 1.0, 0.0, 0.5),
            &Bounds::new(0.0, 200.0, 10.0, 110.0),
        );
        assert!(svg.contains("x1=\"100.00\" y1=\"10.00\" x2=\"100.00\" y2=\"110.00\""));
        assert!(svg.contains("stroke-dasharray"));
    }
}
