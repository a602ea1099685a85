//! Line styling options.

use super::color::Color;

/// Dash pattern for lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashPattern {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl DashPattern {
    /// SVG `stroke-dasharray` value, `None` for solid lines.
    pub fn to_svg_dasharray(&self) -> Option<&'static str> {
        match self {
            DashPattern::Solid => None,
            DashPattern::Dashed => Some("8,4"),
            DashPattern::Dotted => Some("2,2"),
            DashPattern::DashDot => Some("8,4,2,4"),
        }
    }

    /// Parse a matplotlib line-style prefix (`-`, `--`, `-.`, `:`), returning
    /// the pattern and the number of characters consumed.
    pub fn from_format_str(s: &str) -> Option<(Self, usize)> {
        if s.starts_with("--") {
            Some((DashPattern::Dashed, 2))
        } else if s.starts_with("-.") {
            Some((DashPattern::DashDot, 2))
        } else if s.starts_with(':') {
            Some((DashPattern::Dotted, 1))
        } else if s.starts_with('-') {
            Some((DashPattern::Solid, 1))
        } else {
            None
        }
    }
}

/// Stroke style for lines.
#[derive(Debug, Clone)]
pub struct LineStyle {
    pub color: Color,
    /// Line width in pixels
    pub width: f64,
    pub dash: DashPattern,
    /// Stroke opacity (0.0 - 1.0)
    pub opacity: f64,
}

impl LineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn dash(mut self, dash: DashPattern) -> Self {
        self.dash = dash;
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// SVG presentation attributes for an unfilled stroke.
    pub fn to_svg_style(&self) -> String {
        let mut attrs = vec![
            format!("stroke=\"{}\"", self.color.to_svg_string()),
            format!("stroke-width=\"{}\"", self.width),
            "stroke-linecap=\"round\"".to_string(),
            "stroke-linejoin=\"round\"".to_string(),
            "fill=\"none\"".to_string(),
        ];
        if self.opacity < 1.0 {
            attrs.push(format!("stroke-opacity=\"{}\"", self.opacity));
        }
        if let Some(dasharray) = self.dash.to_svg_dasharray() {
            attrs.push(format!("stroke-dasharray=\"{}\"", dasharray));
        }
        attrs.join(" ")
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle {
            color: Color::default(),
            width: 1.5,
            dash: DashPattern::Solid,
            opacity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_prefixes() {
        assert_eq!(DashPattern::from_format_str("--o"), Some((DashPattern::Dashed, 2)));
        assert_eq!(DashPattern::from_format_str("-"), Some((DashPattern::Solid, 1)));
        assert_eq!(DashPattern::from_format_str(":"), Some((DashPattern::Dotted, 1)));
        assert_eq!(DashPattern::from_format_str("o"), None);
    }

    #[test]
    fn test_svg_style_opacity_and_dash() {
        let style = LineStyle::new().opacity(0.1).dash(DashPattern::Dashed).to_svg_style();
        assert!(style.contains("stroke-opacity=\"0.1\""));
        assert!(style.contains("stroke-dasharray=\"8,4\""));

        let solid = LineStyle::new().to_svg_style();
        assert!(!solid.contains("stroke-opacity"));
        assert!(!solid.contains("dasharray"));
    }
}
