//! Grid line configuration.

use crate::plotting::style::{Color, LineStyle};

#[derive(Debug, Clone)]
pub struct GridConfig {
    pub visible: bool,
    pub style: LineStyle,
}

impl GridConfig {
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.style.color = color.into();
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.style = self.style.opacity(opacity);
        self
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            visible: true,
            style: LineStyle::new().color(Color::LIGHT_GRAY).width(0.5).opacity(0.8),
        }
    }
}
