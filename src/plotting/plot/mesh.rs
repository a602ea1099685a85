//! Pseudocolor mesh (heatmap) over a rectilinear grid.

use ndarray::{Array2, ArrayView2};

use crate::plotting::element::Bounds;
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::plot::Plot;
use crate::plotting::style::Colormap;

/// Heatmap whose cell `(i, j)` is centered on `(x[j], y[i])`. Cell edges
/// sit halfway between neighbouring centers and the outer cells are
/// extended symmetrically.
#[derive(Debug, Clone)]
pub struct MeshPlot {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub values: Array2<f64>,
    pub colormap: Colormap,
    pub vmin: f64,
    pub vmax: f64,
    pub label: Option<String>,
}

impl MeshPlot {
    /// `values` must have shape `(y.len(), x.len())`.
    pub fn new(x: Vec<f64>, y: Vec<f64>, values: ArrayView2<'_, f64>) -> PlotResult<Self> {
        if x.is_empty() || y.is_empty() {
            return Err(PlotError::EmptyData);
        }
        if values.dim() != (y.len(), x.len()) {
            return Err(PlotError::ShapeMismatch {
                context: "mesh values",
                expected: (y.len(), x.len()),
                found: values.dim(),
            });
        }
        let (vmin, vmax) = values
            .iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let (vmin, vmax) = if vmin <= vmax { (vmin, vmax) } else { (0.0, 1.0) };

        Ok(MeshPlot {
            x,
            y,
            values: values.to_owned(),
            colormap: Colormap::default(),
            vmin,
            vmax,
            label: None,
        })
    }

    pub fn colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = colormap;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Cell edges for cell centers.
fn cell_edges(centers: &[f64]) -> Vec<f64> {
    match centers {
        [] => Vec::new(),
        [c] => vec![c - 0.5, c + 0.5],
        _ => {
            let n = centers.len();
            let mut edges = Vec::with_capacity(n + 1);
            edges.push(centers[0] - (centers[1] - centers[0]) / 2.0);
            for pair in centers.windows(2) {
                edges.push((pair[0] + pair[1]) / 2.0);
            }
            edges.push(centers[n - 1] + (centers[n - 1] - centers[n - 2]) / 2.0);
            edges
        }
    }
}

impl Plot for MeshPlot {
    fn bounds(&self) -> Option<Bounds> {
        let xe = cell_edges(&self.x);
        let ye = cell_edges(&self.y);
        match (xe.first(), xe.last(), ye.first(), ye.last()) {
            (Some(&x0), Some(&x1), Some(&y0), Some(&y1)) => Some(Bounds::new(
                x0.min(x1),
                x0.max(x1),
                y0.min(y1),
                y0.max(y1),
            )),
            _ => None,
        }
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn render_svg(&self, data_bounds: &Bounds, pixel_bounds: &Bounds) -> String {
        let xe = cell_edges(&self.x);
        let ye = cell_edges(&self.y);
        let mut svg = String::from("<g shape-rendering=\"crispEdges\">\n");

        for ((i, j), &v) in self.values.indexed_iter() {
            if !v.is_finite() {
                continue;
            }
            let (x0, y0) = data_bounds.project(xe[j], ye[i + 1], pixel_bounds);
            let (x1, y1) = data_bounds.project(xe[j + 1], ye[i], pixel_bounds);
            let (left, right) = (x0.min(x1), x0.max(x1));
            let (top, bottom) = (y0.min(y1), y0.max(y1));
            svg.push_str(&format!(
                "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>\n",
                left,
                top,
                right - left,
                bottom - top,
                self.colormap.map(v, self.vmin, self.vmax).to_svg_string()
            ));
        }
        svg.push_str("</g>\n");
        svg
    }
}
