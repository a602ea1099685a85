//! Legend entries and layout.

use crate::plotting::element::{escape_xml, Bounds};
use crate::plotting::style::{Color, FillStyle, LineStyle, MarkerStyle, TextStyle};

/// Corner of the plot area the legend is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    TopRight,
    TopLeft,
    BottomLeft,
    BottomRight,
}

impl LegendPosition {
    /// Tried in this order; the first corner with the least overlap wins.
    const CANDIDATES: [LegendPosition; 4] = [
        LegendPosition::TopRight,
        LegendPosition::TopLeft,
        LegendPosition::BottomLeft,
        LegendPosition::BottomRight,
    ];
}

/// One labelled sample in the legend. Whichever styles are set are drawn,
/// line first, then fill swatch, then marker.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub label: String,
    pub line_style: Option<LineStyle>,
    pub marker_style: Option<MarkerStyle>,
    pub fill_style: Option<FillStyle>,
}

impl LegendEntry {
    pub fn new(label: impl Into<String>) -> Self {
        LegendEntry {
            label: label.into(),
            line_style: None,
            marker_style: None,
            fill_style: None,
        }
    }

    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.line_style = Some(style);
        self
    }

    pub fn marker_style(mut self, style: MarkerStyle) -> Self {
        self.marker_style = Some(style);
        self
    }

    pub fn fill_style(mut self, style: FillStyle) -> Self {
        self.fill_style = Some(style);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
    /// Entries are collected regardless; the box is only drawn when visible
    pub visible: bool,
    pub background: FillStyle,
    pub text_style: TextStyle,
    pub padding: f64,
    /// Length of the line sample
    pub line_length: f64,
    pub label_gap: f64,
}

impl Legend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, entry: LegendEntry) {
        self.entries.push(entry);
    }

    /// Rough box width from the longest label; SVG has no text metrics.
    fn box_width(&self) -> f64 {
        let longest = self
            .entries
            .iter()
            .map(|e| e.label.chars().count())
            .max()
            .unwrap_or(0);
        let text_width = longest as f64 * self.text_style.font_size * 0.6;
        self.padding * 2.0 + self.line_length + self.label_gap + text_width
    }

    fn line_height(&self) -> f64 {
        self.text_style.font_size * 1.6
    }

    fn box_height(&self) -> f64 {
        self.entries.len() as f64 * self.line_height() + self.padding * 2.0
    }

    /// Top-left pixel corner of the legend box at `position`.
    fn anchor(&self, position: LegendPosition, plot_area: &Bounds) -> (f64, f64) {
        let margin = 8.0;
        let lx = match position {
            LegendPosition::TopRight | LegendPosition::BottomRight => {
                plot_area.x_max - self.box_width() - margin
            }
            LegendPosition::TopLeft | LegendPosition::BottomLeft => plot_area.x_min + margin,
        };
        let ly = match position {
            LegendPosition::TopRight | LegendPosition::TopLeft => plot_area.y_min + margin,
            LegendPosition::BottomRight | LegendPosition::BottomLeft => {
                plot_area.y_max - self.box_height() - margin
            }
        };
        (lx, ly)
    }

    /// Corner whose box covers the fewest of the pixel `points`.
    fn best_position(&self, plot_area: &Bounds, points: &[(f64, f64)]) -> LegendPosition {
        let (width, height) = (self.box_width(), self.box_height());
        let mut best = (LegendPosition::TopRight, usize::MAX);
        for position in LegendPosition::CANDIDATES {
            let (lx, ly) = self.anchor(position, plot_area);
            let covered = points
                .iter()
                .filter(|&&(px, py)| px >= lx && px <= lx + width && py >= ly && py <= ly + height)
                .count();
            if covered < best.1 {
                best = (position, covered);
            }
        }
        best.0
    }

    /// Render the legend inside `plot_area` (pixel bounds), in the corner
    /// that hides the fewest of the plotted `points`.
    pub fn render_svg(&self, plot_area: &Bounds, points: &[(f64, f64)]) -> String {
        if !self.visible || self.entries.is_empty() {
            return String::new();
        }
        let line_height = self.line_height();
        let height = self.box_height();
        let width = self.box_width();
        let (lx, ly) = self.anchor(self.best_position(plot_area, points), plot_area);

        let mut svg = format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"3\" {}/>\n",
            lx,
            ly,
            width,
            height,
            self.background.to_svg_style()
        );

        for (i, entry) in self.entries.iter().enumerate() {
            let ey = ly + self.padding + (i as f64 + 0.5) * line_height;
            let x1 = lx + self.padding;
            let x2 = x1 + self.line_length;
            let mid = (x1 + x2) / 2.0;

            if let Some(ref line) = entry.line_style {
                svg.push_str(&format!(
                    "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                    x1,
                    ey,
                    x2,
                    ey,
                    line.to_svg_style()
                ));
            }
            if let Some(ref fill) = entry.fill_style {
                let h = line_height * 0.6;
                svg.push_str(&format!(
                    "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>\n",
                    x1,
                    ey - h / 2.0,
                    self.line_length,
                    h,
                    fill.to_svg_style()
                ));
            }
            if let Some(ref marker) = entry.marker_style {
                svg.push_str(&marker.render_at(mid, ey));
            }

            svg.push_str(&format!(
                "<text x=\"{:.2}\" y=\"{:.2}\" dominant-baseline=\"middle\" {}>{}</text>\n",
                x2 + self.label_gap,
                ey,
                self.text_style.to_svg_attrs(),
                escape_xml(&entry.label)
            ));
        }
        svg
    }
}

impl Default for Legend {
    fn default() -> Self {
        Legend {
            entries: Vec::new(),
            visible: false,
            background: FillStyle::new(Color::WHITE)
                .opacity(0.85)
                .stroke(Color::LIGHT_GRAY)
                .stroke_width(1.0),
            text_style: TextStyle::new().font_size(11.0),
            padding: 8.0,
            line_length: 24.0,
            label_gap: 8.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_legend_renders_nothing() {
        let mut legend = Legend::new();
        legend.add_entry(LegendEntry::new("true").line_style(LineStyle::new()));
        let area = Bounds::new(0.0, 400.0, 0.0, 300.0);
        assert!(legend.render_svg(&area, &[]).is_empty());

        legend.visible = true;
        let svg = legend.render_svg(&area, &[]);
        assert!(svg.contains(">true</text>"));
        assert!(svg.contains("<line"));
    }

    #[test]
    fn test_fill_entry_draws_swatch() {
        let mut legend = Legend::new();
        legend.visible = true;
        legend.add_entry(LegendEntry::new("95% credible region").fill_style(FillStyle::new(Color::BLUE)));
        let svg = legend.render_svg(&Bounds::new(0.0, 400.0, 0.0, 300.0), &[]);
        assert_eq!(svg.matches("<rect").count(), 2);
    }

    #[test]
    fn test_placement_avoids_points() {
        let mut legend = Legend::new();
        legend.add_entry(LegendEntry::new("observations"));
        let area = Bounds::new(0.0, 400.0, 0.0, 300.0);
        assert_eq!(legend.best_position(&area, &[]), LegendPosition::TopRight);

        // Rising data fills the top-right and bottom-left corners
        let rising = [(390.0, 15.0), (380.0, 20.0), (15.0, 285.0)];
        assert_eq!(legend.best_position(&area, &rising), LegendPosition::TopLeft);

        let everywhere = [(20.0, 20.0), (380.0, 20.0), (20.0, 280.0), (380.0, 280.0)];
        assert_eq!(legend.best_position(&area, &everywhere), LegendPosition::TopRight);
    }
}
