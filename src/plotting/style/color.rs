//! Colors and conversions to SVG paint values.

use std::fmt;

/// A color for strokes, fills and text.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    /// Opaque RGB color
    Rgb(u8, u8, u8),
    /// RGB color with alpha 0.0-1.0
    Rgba(u8, u8, u8, f64),
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Color::Rgba(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)? as f64 / 255.0,
            )),
            _ => None,
        }
    }

    /// Look up a named color, including matplotlib's single-letter codes.
    pub fn named(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "k" | "black" => Color::BLACK,
            "w" | "white" => Color::WHITE,
            "r" | "red" => Color::RED,
            "g" | "green" => Color::GREEN,
            "b" | "blue" => Color::BLUE,
            "c" | "cyan" => Color::CYAN,
            "m" | "magenta" => Color::MAGENTA,
            "y" | "yellow" => Color::YELLOW,
            "gray" | "grey" => Color::GRAY,
            "lightgray" | "lightgrey" => Color::LIGHT_GRAY,
            "darkgray" | "darkgrey" => Color::DARK_GRAY,
            _ => return None,
        };
        Some(color)
    }

    /// SVG paint string.
    pub fn to_svg_string(&self) -> String {
        match self {
            Color::Rgb(r, g, b) => format!("rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => format!("rgba({},{},{},{})", r, g, b, a),
        }
    }

    pub fn alpha(&self) -> f64 {
        match self {
            Color::Rgb(..) => 1.0,
            Color::Rgba(_, _, _, a) => *a,
        }
    }

    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Rgb(r, g, b) | Color::Rgba(r, g, b, _) => (*r, *g, *b),
        }
    }

    /// Linear blend between `self` (t = 0) and `other` (t = 1) in RGB space.
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let (r0, g0, b0) = self.to_rgb();
        let (r1, g1, b1) = other.to_rgb();
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
    }

    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const GREEN: Color = Color::Rgb(0, 128, 0);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const CYAN: Color = Color::Rgb(0, 191, 191);
    pub const MAGENTA: Color = Color::Rgb(191, 0, 191);
    pub const YELLOW: Color = Color::Rgb(191, 191, 0);
    pub const GRAY: Color = Color::Rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::Rgb(211, 211, 211);
    pub const DARK_GRAY: Color = Color::Rgb(64, 64, 64);
    pub const TRANSPARENT: Color = Color::Rgba(0, 0, 0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Color::Rgb(31, 119, 180)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_svg_string())
    }
}

impl From<&str> for Color {
    /// Hex strings and known names resolve; anything else falls back to black.
    fn from(s: &str) -> Self {
        Color::named(s)
            .or_else(|| Color::from_hex(s))
            .unwrap_or(Color::BLACK)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}

/// Hex codes of matplotlib's default `C0`..`C9` cycle.
pub(crate) const TAB10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Build a palette from hex codes, skipping malformed entries.
pub(crate) fn palette(codes: &[&str]) -> Vec<Color> {
    codes.iter().filter_map(|c| Color::from_hex(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Color::from_hex("#1f77b4"), Some(Color::Rgb(31, 119, 180)));
        assert_eq!(Color::from_hex("ff000080").map(|c| c.to_rgb()), Some((255, 0, 0)));
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#zz0000"), None);
    }

    #[test]
    fn test_named_single_letters() {
        assert_eq!(Color::from("k"), Color::BLACK);
        assert_eq!(Color::from("r"), Color::RED);
        assert_eq!(Color::from("#0000ff"), Color::BLUE);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::rgb(0, 0, 0);
        let b = Color::rgb(200, 100, 50);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), Color::rgb(100, 50, 25));
    }

    #[test]
    fn test_palette_has_ten_colors() {
        assert_eq!(palette(&TAB10).len(), 10);
    }
}
