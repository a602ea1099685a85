//! Line plots with optional vertex markers.

use crate::plotting::element::Bounds;
use crate::plotting::plot::Plot;
use crate::plotting::style::{Color, DashPattern, LineStyle, Marker, MarkerStyle};

/// Parsed matplotlib format string such as `"r-"`, `"ko"` or `"b--"`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormatSpec {
    pub color: Option<Color>,
    pub dash: Option<DashPattern>,
    pub marker: Option<Marker>,
}

/// Parse `[color][linestyle][marker]`. Unknown characters are ignored.
pub fn parse_format(fmt: &str) -> FormatSpec {
    let mut spec = FormatSpec::default();
    let mut rest = fmt;

    if let Some(c) = rest.chars().next() {
        if let Some(color) = Color::named(&c.to_string()) {
            spec.color = Some(color);
            rest = &rest[c.len_utf8()..];
        }
    }
    if let Some((dash, consumed)) = DashPattern::from_format_str(rest) {
        spec.dash = Some(dash);
        rest = &rest[consumed..];
    }
    spec.marker = rest.chars().find_map(Marker::from_format_char);
    spec
}

#[derive(Debug, Clone)]
pub struct LinePlot {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub line_style: LineStyle,
    /// False for marker-only series such as `"bo"`
    pub show_line: bool,
    pub marker_style: Option<MarkerStyle>,
    pub label: Option<String>,
}

impl LinePlot {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        LinePlot {
            x,
            y,
            line_style: LineStyle::default(),
            show_line: true,
            marker_style: None,
            label: None,
        }
    }

    /// Set line and marker color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.line_style.color = color.into();
        if let Some(ref mut marker) = self.marker_style {
            marker.fill = self.line_style.color.clone();
            marker.edge_color = self.line_style.color.clone();
        }
        self
    }

    pub fn linewidth(mut self, width: f64) -> Self {
        self.line_style.width = width;
        self
    }

    pub fn linestyle(mut self, dash: DashPattern) -> Self {
        self.line_style.dash = dash;
        self.show_line = true;
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker_style = Some(MarkerStyle::new(marker).color(self.line_style.color.clone()));
        self
    }

    /// Opacity applied to both the line and the markers.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.line_style = self.line_style.opacity(alpha);
        if let Some(marker) = self.marker_style.take() {
            self.marker_style = Some(marker.fill_opacity(alpha));
        }
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Apply a matplotlib format string. A marker without a line style
    /// draws markers only.
    pub fn format(mut self, fmt: &str) -> Self {
        let spec = parse_format(fmt);
        if let Some(color) = spec.color {
            self = self.color(color);
        }
        if let Some(marker) = spec.marker {
            self = self.marker(marker);
            self.show_line = spec.dash.is_some();
        }
        if let Some(dash) = spec.dash {
            self = self.linestyle(dash);
        }
        self
    }

    fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .map(|(&x, &y)| (x, y))
            .filter(|(x, y)| x.is_finite() && y.is_finite())
    }
}

impl Plot for LinePlot {
    fn bounds(&self) -> Option<Bounds> {
        Bounds::of_points(&self.x, &self.y)
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn line_style(&self) -> Option<LineStyle> {
        self.show_line.then(|| self.line_style.clone())
    }

    fn marker_style(&self) -> Option<MarkerStyle> {
        self.marker_style.clone()
    }

    fn xy(&self) -> Option<(&[f64], &[f64])> {
        Some((&self.x, &self.y))
    }

    fn render_svg(&self, data_bounds: &Bounds, pixel_bounds: &Bounds) -> String {
        let points: Vec<(f64, f64)> = self
            .finite_points()
            .map(|(x, y)| data_bounds.project(x, y, pixel_bounds))
            .collect();
        let mut svg = String::new();

        if self.show_line && points.len() >= 2 {
            let path: String = points
                .iter()
                .enumerate()
                .map(|(i, (x, y))| {
                    let cmd = if i == 0 { 'M' } else { 'L' };
                    format!("{}{:.2},{:.2} ", cmd, x, y)
                })
                .collect();
            svg.push_str(&format!(
                "<path d=\"{}\" {}/>\n",
                path.trim_end(),
                self.line_style.to_svg_style()
            ));
        }

        if let Some(ref marker) = self.marker_style {
            for &(px, py) in &points {
                svg.push_str(&marker.render_at(px, py));
            }
        }
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        let spec = parse_format("ko");
        assert_eq!(spec.color, Some(Color::BLACK));
        assert_eq!(spec.dash, None);
        assert_eq!(spec.marker, Some(Marker::Circle));

        let spec = parse_format("r-");
        assert_eq!(spec.color, Some(Color::RED));
        assert_eq!(spec.dash, Some(DashPattern::Solid));
        assert_eq!(spec.marker, None);

        let spec = parse_format("--");
        assert_eq!(spec.color, None);
        assert_eq!(spec.dash, Some(DashPattern::Dashed));
    }

    #[test]
    fn test_marker_only_format_hides_line() {
        let plot = LinePlot::new(vec![1.0], vec![2.0]).format("bo");
        assert!(!plot.show_line);
        assert!(plot.line_style().is_none());
        assert_eq!(plot.marker_style().unwrap().fill, Color::BLUE);
    }

    #[test]
    fn test_single_point_marker_renders() {
        let plot = LinePlot::new(vec![1.0], vec![2.0]).format("ro");
        let data = Bounds::new(0.0, 2.0, 0.0, 4.0);
        let pixel = Bounds::new(0.0, 100.0, 0.0, 100.0);
        let svg = plot.render_svg(&data, &pixel);
        assert!(svg.contains("<circle cx=\"50.00\" cy=\"50.00\""));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn test_line_skips_non_finite_points() {
        let plot = LinePlot::new(vec![0.0, 1.0, 2.0], vec![0.0, f64::NAN, 2.0]);
        let data = Bounds::new(0.0, 2.0, 0.0, 2.0);
        let pixel = Bounds::new(0.0, 100.0, 0.0, 100.0);
        let svg = plot.render_svg(&data, &pixel);
        assert!(svg.contains("M0.00,100.00 L100.00,0.00"));
    }
}
