//! Positioned text.

use crate::plotting::style::TextStyle;

#[derive(Debug, Clone)]
pub struct Text {
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub style: TextStyle,
}

impl Text {
    pub fn new(content: impl Into<String>, x: f64, y: f64) -> Self {
        Text {
            content: content.into(),
            x,
            y,
            style: TextStyle::default(),
        }
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Copy of this text moved to `(x, y)`.
    pub fn at(&self, x: f64, y: f64) -> Text {
        Text {
            x,
            y,
            ..self.clone()
        }
    }

    pub fn to_svg(&self) -> String {
        let transform = if self.style.rotation != 0.0 {
            format!(
                " transform=\"rotate({},{:.2},{:.2})\"",
                self.style.rotation, self.x, self.y
            )
        } else {
            String::new()
        };
        format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"{}\" {}{}>{}</text>\n",
            self.x,
            self.y,
            self.style.anchor.to_svg_string(),
            self.style.to_svg_attrs(),
            transform,
            escape_xml(&self.content)
        )
    }
}

/// Escape the XML special characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape_xml("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_rotated_text() {
        let mut t = Text::new("y", 10.0, 20.0);
        t.style.rotation = -90.0;
        assert!(t.to_svg().contains("rotate(-90,10.00,20.00)"));
    }
}
