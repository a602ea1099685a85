//! Figure (canvas) implementation.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::plotting::axes::Axes;
use crate::plotting::backend::SvgBackend;
use crate::plotting::element::Bounds;
use crate::plotting::error::PlotResult;
use crate::plotting::style::{Color, Theme, ThemeConfig};

/// Normalized margins around the subplot grid.
const LEFT: f64 = 0.08;
const RIGHT: f64 = 0.97;
const BOTTOM: f64 = 0.12;
const TOP: f64 = 0.90;

/// A figure containing one or more axes (subplots).
pub struct Figure {
    /// Figure width in pixels
    pub width: f64,
    /// Figure height in pixels
    pub height: f64,
    pub background: Color,
    axes: Vec<Axes>,
    pub theme: ThemeConfig,
    /// Horizontal gap between subplots as a fraction of the subplot width
    pub wspace: f64,
    /// Vertical gap between subplots as a fraction of the subplot height
    pub hspace: f64,
    next_id: usize,
}

impl Figure {
    /// Create a new figure with the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        let theme = Theme::Default.config();
        Figure {
            width,
            height,
            background: theme.background.clone(),
            axes: Vec::new(),
            theme,
            wspace: 0.2,
            hspace: 0.2,
            next_id: 0,
        }
    }

    /// Set the theme. Applies to axes created afterwards.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme.config();
        self.background = self.theme.background.clone();
        self
    }

    /// Add a subplot in a `rows` x `cols` grid. `index` is 1-based and runs
    /// row by row, as in matplotlib.
    pub fn add_subplot(&mut self, rows: usize, cols: usize, index: usize) -> &mut Axes {
        let mut axes = Axes::with_theme(self.theme.clone());
        axes.id = self.next_id;
        self.next_id += 1;
        let slot = (rows.max(1), cols.max(1), index.max(1));
        axes.slot = Some(slot);
        axes.position = self.slot_position(slot);

        self.axes.push(axes);
        let last = self.axes.len() - 1;
        &mut self.axes[last]
    }

    /// Replace all axes with a `rows` x `cols` grid of new subplots.
    pub fn subplots(&mut self, rows: usize, cols: usize) -> &mut [Axes] {
        self.axes.clear();
        for i in 1..=(rows * cols) {
            self.add_subplot(rows, cols, i);
        }
        &mut self.axes
    }

    /// Set the horizontal spacing between subplots and re-layout.
    pub fn subplots_adjust(&mut self, wspace: f64) -> &mut Self {
        self.wspace = wspace;
        for i in 0..self.axes.len() {
            if let Some(slot) = self.axes[i].slot {
                let position = self.slot_position(slot);
                self.axes[i].position = position;
            }
        }
        self
    }

    fn slot_position(&self, (rows, cols, index): (usize, usize, usize)) -> Bounds {
        let index = index - 1;
        let row = index / cols;
        let col = index % cols;

        let cols_f = cols as f64;
        let rows_f = rows as f64;
        let w = (RIGHT - LEFT) / (cols_f + (cols_f - 1.0) * self.wspace);
        let h = (TOP - BOTTOM) / (rows_f + (rows_f - 1.0) * self.hspace);

        let left = LEFT + col as f64 * w * (1.0 + self.wspace);
        let top = TOP - row as f64 * h * (1.0 + self.hspace);
        Bounds::new(left, left + w, top - h, top)
    }

    /// Current axes, creating a single subplot if there is none.
    pub fn gca(&mut self) -> &mut Axes {
        if self.axes.is_empty() {
            return self.add_subplot(1, 1, 1);
        }
        let last = self.axes.len() - 1;
        &mut self.axes[last]
    }

    pub fn axes(&self) -> &[Axes] {
        &self.axes
    }

    pub fn get_axes(&mut self) -> &mut [Axes] {
        &mut self.axes
    }

    /// Render the figure to an SVG string.
    pub fn render(&mut self) -> String {
        let mut backend = SvgBackend::new(self.width, self.height);

        backend.add_content(format!(
            "<rect width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            self.width,
            self.height,
            self.background.to_svg_string()
        ));

        for axes in &mut self.axes {
            backend.add_content(axes.render_svg(self.width, self.height));
        }

        backend.render()
    }

    /// Write the rendered SVG to `path`.
    pub fn save(&mut self, path: impl AsRef<Path>) -> PlotResult<()> {
        let svg = self.render();
        let mut file = File::create(path)?;
        file.write_all(svg.as_bytes())?;
        Ok(())
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_side_by_side_layout() {
        let mut fig = Figure::new(1200.0, 600.0);
        fig.subplots(1, 2);
        fig.subplots_adjust(0.3);
        let [left, right] = fig.axes() else {
            panic!("expected two axes");
        };
        let (l, r) = (left.position, right.position);
        assert!(approx(l.x_min, LEFT));
        assert!(approx(r.x_max, RIGHT));
        assert!(approx(l.width(), r.width()));
        assert!(approx(r.x_min - l.x_max, 0.3 * l.width()));
        assert!(approx(l.y_min, BOTTOM) && approx(l.y_max, TOP));
    }

    #[test]
    fn test_subplots_replace_existing_axes() {
        let mut fig = Figure::default();
        fig.gca();
        assert_eq!(fig.subplots(1, 2).len(), 2);
        assert_eq!(fig.axes().len(), 2);
        assert_ne!(fig.axes()[0].id, fig.axes()[1].id);
    }

    #[test]
    fn test_render_document() {
        let mut fig = Figure::new(400.0, 300.0).theme(Theme::Dark);
        fig.gca().set_title("a & b");
        fig.gca().plot(vec![0.0, 1.0], vec![0.0, 1.0]).build();
        let svg = fig.render();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("a &amp; b"));
        assert!(svg.contains("fill=\"rgb(30,30,30)\""));
        assert!(svg.contains("<path"));
    }

    #[test]
    fn test_save_writes_file() {
        let path = std::env::temp_dir().join(format!("bayesfig-figure-{}.svg", std::process::id()));
        let mut fig = Figure::default();
        fig.gca().plot(vec![1.0], vec![2.0]).format("o").build();
        fig.save(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("</svg>"));
        std::fs::remove_file(&path).unwrap();
    }
}
