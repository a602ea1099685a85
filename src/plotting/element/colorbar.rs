//! Colorbar drawn to the right of an axes with a heatmap.

use crate::plotting::element::{AxisConfig, Bounds, Text};
use crate::plotting::scale::nice_ticks;
use crate::plotting::style::{Color, Colormap, TextAnchor, TextStyle};

/// Gradient stops per colorbar; the colormaps are piecewise linear over
/// fewer anchors than this.
const GRADIENT_STOPS: usize = 16;

#[derive(Debug, Clone)]
pub struct Colorbar {
    pub colormap: Colormap,
    pub vmin: f64,
    pub vmax: f64,
    pub label: Option<Text>,
    /// Bar width in pixels
    pub width: f64,
    /// Gap between the plot area and the bar
    pub pad: f64,
    pub ticks: AxisConfig,
}

impl Colorbar {
    pub fn new(colormap: Colormap, vmin: f64, vmax: f64) -> Self {
        Colorbar {
            colormap,
            vmin,
            vmax,
            label: None,
            width: 14.0,
            pad: 12.0,
            ticks: AxisConfig::new(),
        }
    }

    pub fn label(mut self, label: impl Into<String>, style: TextStyle) -> Self {
        self.label = Some(Text::new(label, 0.0, 0.0).style(style));
        self
    }

    /// Horizontal space taken from the axes' plot area.
    pub fn reserved_width(&self) -> f64 {
        let label = if self.label.is_some() { 22.0 } else { 0.0 };
        self.pad + self.width + 52.0 + label
    }

    /// Render next to `plot_area`, whose right edge has already been
    /// shrunk by [`reserved_width`](Self::reserved_width).
    pub fn render_svg(&self, plot_area: &Bounds, id: &str) -> String {
        let x = plot_area.x_max + self.pad;
        let top = plot_area.y_min;
        let height = plot_area.height();

        let stops: String = (0..GRADIENT_STOPS)
            .map(|i| {
                let t = i as f64 / (GRADIENT_STOPS - 1) as f64;
                format!(
                    "<stop offset=\"{:.1}%\" stop-color=\"{}\"/>",
                    t * 100.0,
                    self.colormap.sample(t).to_svg_string()
                )
            })
            .collect();

        let mut svg = format!(
            "<defs><linearGradient id=\"{}\" x1=\"0\" y1=\"1\" x2=\"0\" y2=\"0\">{}</linearGradient></defs>\n",
            id, stops
        );
        svg.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"url(#{})\" stroke=\"{}\" stroke-width=\"0.5\"/>\n",
            x,
            top,
            self.width,
            height,
            id,
            Color::BLACK.to_svg_string()
        ));

        let span = self.vmax - self.vmin;
        if span > 0.0 && span.is_finite() {
            for tick in nice_ticks(self.vmin, self.vmax, self.ticks.num_ticks) {
                let py = top + height * (1.0 - (tick - self.vmin) / span);
                let x_end = x + self.width + self.ticks.tick_length;
                svg.push_str(&format!(
                    "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                    x + self.width,
                    py,
                    x_end,
                    py,
                    self.ticks.line_style.to_svg_style()
                ));
                svg.push_str(&format!(
                    "<text x=\"{:.2}\" y=\"{:.2}\" dominant-baseline=\"middle\" {}>{}</text>\n",
                    x_end + self.ticks.tick_padding,
                    py,
                    self.ticks.tick_label_style.to_svg_attrs(),
                    self.ticks.format_tick(tick)
                ));
            }
        }

        if let Some(ref label) = self.label {
            let mut t = label.at(x + self.width + 62.0, top + height / 2.0);
            t.style.anchor = TextAnchor::Middle;
            t.style.rotation = -90.0;
            svg.push_str(&t.to_svg());
        }
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorbar_gradient_and_label() {
        let bar = Colorbar::new(Colormap::BluesR, 0.0, 0.01).label("Probability", TextStyle::new());
        let svg = bar.render_svg(&Bounds::new(50.0, 300.0, 20.0, 220.0), "cbar-0");
        assert!(svg.contains("<linearGradient id=\"cbar-0\""));
        assert_eq!(svg.matches("<stop ").count(), GRADIENT_STOPS);
        assert!(svg.contains("fill=\"url(#cbar-0)\""));
        assert!(svg.contains(">Probability</text>"));
    }

    #[test]
    fn test_flat_range_skips_ticks() {
        let bar = Colorbar::new(Colormap::Blues, 1.0, 1.0);
        let svg = bar.render_svg(&Bounds::new(0.0, 100.0, 0.0, 100.0), "cb");
        assert_eq!(svg.matches("<line ").count(), 0);
        assert_eq!(svg.matches("<text").count(), 0);
        assert!(svg.contains("<linearGradient id=\"cb\""));
    }
}
