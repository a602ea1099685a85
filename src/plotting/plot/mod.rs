//! Plot types that can be added to an axes.

mod fill;
mod line;
mod mesh;
mod vline;

pub use fill::FillBetween;
pub use line::{parse_format, FormatSpec, LinePlot};
pub use mesh::MeshPlot;
pub use vline::VLine;

use crate::plotting::element::{Bounds, LegendEntry};
use crate::plotting::style::{FillStyle, LineStyle, MarkerStyle};

/// A renderable data series.
pub trait Plot {
    /// Data extent used for autoscaling, `None` if the plot should not
    /// influence the axis limits.
    fn bounds(&self) -> Option<Bounds>;

    fn label(&self) -> Option<&str>;

    fn line_style(&self) -> Option<LineStyle> {
        None
    }

    fn marker_style(&self) -> Option<MarkerStyle> {
        None
    }

    fn fill_style(&self) -> Option<FillStyle> {
        None
    }

    /// Legend entry for labelled plots.
    fn legend_entry(&self) -> Option<LegendEntry> {
        self.label().map(|label| {
            let mut entry = LegendEntry::new(label);
            if let Some(style) = self.line_style() {
                entry = entry.line_style(style);
            }
            if let Some(style) = self.fill_style() {
                entry = entry.fill_style(style);
            }
            if let Some(style) = self.marker_style() {
                entry = entry.marker_style(style);
            }
            entry
        })
    }

    /// The x/y coordinates of point-like series.
    fn xy(&self) -> Option<(&[f64], &[f64])> {
        None
    }

    /// SVG elements for this plot given the visible data range and the
    /// pixel rectangle it maps to.
    fn render_svg(&self, data_bounds: &Bounds, pixel_bounds: &Bounds) -> String;
}
