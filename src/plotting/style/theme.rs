//! Figure themes.

use serde::Deserialize;

use super::color::{palette, Color, TAB10};
use super::text_style::TextStyle;

/// Named themes selectable from configuration.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// White background, light grid
    #[default]
    Default,
    Dark,
    /// No grid, grey axes
    Minimal,
    Seaborn,
}

/// Resolved style settings for a theme.
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    pub background: Color,
    pub plot_background: Color,
    /// Stand-in for black data ink (observations, reference lines)
    pub foreground: Color,
    pub axis_color: Color,
    pub grid_color: Color,
    pub grid_opacity: f64,
    pub show_grid: bool,
    pub title_style: TextStyle,
    pub label_style: TextStyle,
    pub tick_style: TextStyle,
    /// Colors assigned to series without an explicit color
    pub color_cycle: Vec<Color>,
}

impl Theme {
    pub fn config(&self) -> ThemeConfig {
        match self {
            Theme::Default => ThemeConfig::light(Color::WHITE, Color::LIGHT_GRAY, 0.8, true),
            Theme::Minimal => {
                let mut cfg = ThemeConfig::light(Color::WHITE, Color::LIGHT_GRAY, 0.3, false);
                cfg.axis_color = Color::GRAY;
                cfg.tick_style = cfg.tick_style.color(Color::GRAY);
                cfg
            }
            Theme::Seaborn => {
                let mut cfg = ThemeConfig::light(Color::rgb(234, 234, 242), Color::WHITE, 1.0, true);
                cfg.axis_color = Color::rgb(100, 100, 100);
                cfg.color_cycle = palette(&[
                    "#4c72b0", "#dd8452", "#55a868", "#c44e52", "#8172b3", "#937860",
                ]);
                cfg
            }
            Theme::Dark => {
                let text = Color::rgb(220, 220, 220);
                ThemeConfig {
                    background: Color::rgb(30, 30, 30),
                    plot_background: Color::rgb(40, 40, 40),
                    foreground: text.clone(),
                    axis_color: Color::rgb(180, 180, 180),
                    grid_color: Color::rgb(80, 80, 80),
                    grid_opacity: 0.5,
                    show_grid: true,
                    title_style: TextStyle::new().font_size(14.0).bold().color(text.clone()),
                    label_style: TextStyle::new().font_size(12.0).color(text.clone()),
                    tick_style: TextStyle::new().font_size(10.0).color(text),
                    color_cycle: palette(&[
                        "#58a6ff", "#f0883e", "#3fb950", "#f85149", "#a371f7", "#56d4dd",
                    ]),
                }
            }
        }
    }
}

impl ThemeConfig {
    fn light(plot_background: Color, grid_color: Color, grid_opacity: f64, show_grid: bool) -> Self {
        ThemeConfig {
            background: Color::WHITE,
            plot_background,
            foreground: Color::BLACK,
            axis_color: Color::BLACK,
            grid_color,
            grid_opacity,
            show_grid,
            title_style: TextStyle::new().font_size(14.0).bold(),
            label_style: TextStyle::new().font_size(12.0),
            tick_style: TextStyle::new().font_size(10.0),
            color_cycle: palette(&TAB10),
        }
    }

    /// Series color for the `index`-th unstyled plot.
    pub fn cycle_color(&self, index: usize) -> Color {
        if self.color_cycle.is_empty() {
            return Color::default();
        }
        self.color_cycle[index % self.color_cycle.len()].clone()
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Theme::Default.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_names_deserialize() {
        let theme: Theme = serde_json::from_str("\"seaborn\"").unwrap();
        assert_eq!(theme, Theme::Seaborn);
        assert!(serde_json::from_str::<Theme>("\"neon\"").is_err());
    }

    #[test]
    fn test_cycle_wraps() {
        let cfg = Theme::Default.config();
        assert_eq!(cfg.cycle_color(0), cfg.cycle_color(10));
        assert_ne!(cfg.cycle_color(0), cfg.cycle_color(1));
    }

    #[test]
    fn test_foreground_contrasts_with_plot_background() {
        for theme in [Theme::Default, Theme::Dark, Theme::Minimal, Theme::Seaborn] {
            let cfg = theme.config();
            assert_ne!(cfg.foreground, cfg.plot_background);
        }
        assert_eq!(Theme::Default.config().foreground, Color::BLACK);
        assert_eq!(Theme::Dark.config().foreground, Color::rgb(220, 220, 220));
    }

    #[test]
    fn test_minimal_hides_grid() {
        assert!(!Theme::Minimal.config().show_grid);
        assert!(Theme::Default.config().show_grid);
    }
}
