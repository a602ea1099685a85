//! Point markers drawn at line plot vertices.

use super::color::Color;

/// Marker shapes.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Marker {
    #[default]
    None,
    Circle,
    Square,
    Triangle,
    Diamond,
    Cross,
}

impl Marker {
    /// Parse a matplotlib marker character.
    pub fn from_format_char(c: char) -> Option<Self> {
        match c {
            'o' => Some(Marker::Circle),
            's' => Some(Marker::Square),
            '^' => Some(Marker::Triangle),
            'D' | 'd' => Some(Marker::Diamond),
            'x' | 'X' => Some(Marker::Cross),
            _ => None,
        }
    }

    /// SVG path centered on the origin for a marker of radius `r`.
    /// Circles are drawn with `<circle>` and return `None`.
    pub fn to_svg_path(&self, r: f64) -> Option<String> {
        match self {
            Marker::None | Marker::Circle => None,
            Marker::Square => Some(format!(
                "M{:.2},{:.2} L{:.2},{:.2} L{:.2},{:.2} L{:.2},{:.2} Z",
                -r, -r, r, -r, r, r, -r, r
            )),
            Marker::Triangle => {
                let h = r * 1.1547;
                Some(format!(
                    "M0,{:.2} L{:.2},{:.2} L{:.2},{:.2} Z",
                    -h, -r, h * 0.5, r, h * 0.5
                ))
            }
            Marker::Diamond => {
                let s = r * 1.2;
                Some(format!("M0,{:.2} L{:.2},0 L0,{:.2} L{:.2},0 Z", -s, s, s, -s))
            }
            Marker::Cross => {
                let s = r * 0.707;
                Some(format!(
                    "M{:.2},{:.2} L{:.2},{:.2} M{:.2},{:.2} L{:.2},{:.2}",
                    -s, -s, s, s, -s, s, s, -s
                ))
            }
        }
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, Marker::Circle)
    }
}

/// Fill and edge styling for markers.
#[derive(Debug, Clone)]
pub struct MarkerStyle {
    pub marker: Marker,
    /// Diameter in pixels
    pub size: f64,
    pub fill: Color,
    pub edge_color: Color,
    pub edge_width: f64,
    pub fill_opacity: f64,
}

impl MarkerStyle {
    pub fn new(marker: Marker) -> Self {
        MarkerStyle {
            marker,
            ..Default::default()
        }
    }

    /// Set fill and edge to the same color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        let c = color.into();
        self.fill = c.clone();
        self.edge_color = c;
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn to_svg_style(&self) -> String {
        let mut attrs = vec![
            format!("fill=\"{}\"", self.fill.to_svg_string()),
            format!("stroke=\"{}\"", self.edge_color.to_svg_string()),
            format!("stroke-width=\"{}\"", self.edge_width),
        ];
        if self.fill_opacity < 1.0 {
            attrs.push(format!("fill-opacity=\"{}\"", self.fill_opacity));
            attrs.push(format!("stroke-opacity=\"{}\"", self.fill_opacity));
        }
        attrs.join(" ")
    }

    /// SVG element drawing this marker at pixel position `(x, y)`.
    pub fn render_at(&self, x: f64, y: f64) -> String {
        let radius = self.size / 2.0;
        if self.marker.is_circle() {
            format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" {}/>\n",
                x,
                y,
                radius,
                self.to_svg_style()
            )
        } else if let Some(path) = self.marker.to_svg_path(radius) {
            format!(
                "<path d=\"{}\" transform=\"translate({:.2},{:.2})\" {}/>\n",
                path,
                x,
                y,
                self.to_svg_style()
            )
        } else {
            String::new()
        }
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        MarkerStyle {
            marker: Marker::Circle,
            size: 6.0,
            fill: Color::default(),
            edge_color: Color::default(),
            edge_width: 1.0,
            fill_opacity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_renders_as_circle_element() {
        let svg = MarkerStyle::new(Marker::Circle).size(8.0).render_at(10.0, 20.0);
        assert!(svg.starts_with("<circle cx=\"10.00\" cy=\"20.00\" r=\"4.00\""));
    }

    #[test]
    fn test_none_marker_renders_nothing() {
        assert!(MarkerStyle::new(Marker::None).render_at(0.0, 0.0).is_empty());
    }

    #[test]
    fn test_square_path_is_translated() {
        let svg = MarkerStyle::new(Marker::Square).render_at(5.0, 6.0);
        assert!(svg.contains("translate(5.00,6.00)"));
    }
}
