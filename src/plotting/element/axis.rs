//! Axis line, tick and tick-label configuration.

use crate::plotting::style::{Color, LineStyle, TextStyle};

#[derive(Debug, Clone)]
pub struct AxisConfig {
    pub visible: bool,
    pub line_style: LineStyle,
    /// Tick mark length in pixels
    pub tick_length: f64,
    /// Gap between tick mark and label
    pub tick_padding: f64,
    pub tick_label_style: TextStyle,
    /// Target tick count; the scale picks nearby round values
    pub num_ticks: usize,
}

impl AxisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tick label for `value`.
    pub fn format_tick(&self, value: f64) -> String {
        if value == 0.0 {
            "0".to_string()
        } else if value.abs() >= 1e4 || value.abs() < 1e-3 {
            format!("{:.1e}", value)
        } else if value.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            let s = format!("{:.3}", value);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        AxisConfig {
            visible: true,
            line_style: LineStyle::new().color(Color::BLACK).width(1.0),
            tick_length: 5.0,
            tick_padding: 3.0,
            tick_label_style: TextStyle::new().font_size(10.0),
            num_ticks: 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tick() {
        let axis = AxisConfig::new();
        assert_eq!(axis.format_tick(0.0), "0");
        assert_eq!(axis.format_tick(-3.0), "-3");
        assert_eq!(axis.format_tick(0.25), "0.25");
        assert_eq!(axis.format_tick(0.1), "0.1");
        assert_eq!(axis.format_tick(0.0004), "4.0e-4");
    }
}
