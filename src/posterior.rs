//! Line parameters and gridded posterior mass over (slope, intercept).

use log::debug;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use serde::Deserialize;

use crate::numeric::{argmax_2d, marginalize_rows, normalize};
use crate::plotting::error::check_len;
use crate::plotting::{PlotError, PlotResult};

/// Slope and intercept of `y = slope * x + intercept`.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LineParams {
    pub slope: f64,
    pub intercept: f64,
}

impl LineParams {
    pub fn new(slope: f64, intercept: f64) -> Self {
        LineParams { slope, intercept }
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Line evaluated at the two ends of `(x_min, x_max)`, as `(xs, ys)`.
    pub fn endpoints(&self, (x_min, x_max): (f64, f64)) -> ([f64; 2], [f64; 2]) {
        ([x_min, x_max], [self.eval(x_min), self.eval(x_max)])
    }
}

/// Posterior mass on a rectangular grid. Rows follow the intercept axis and
/// columns the slope axis, so `mass[[i, j]]` belongs to
/// `(slope_axis[j], intercept_axis[i])`. The mass need not be normalized.
#[derive(Debug, Clone)]
pub struct PosteriorGrid {
    slope_axis: Array1<f64>,
    intercept_axis: Array1<f64>,
    mass: Array2<f64>,
}

fn check_increasing(name: &str, axis: ArrayView1<'_, f64>) -> PlotResult<()> {
    if axis.is_empty() {
        return Err(PlotError::EmptyData);
    }
    if axis.iter().any(|v| !v.is_finite()) {
        return Err(PlotError::InvalidData(format!("{} contains non-finite values", name)));
    }
    if let Some(i) = (1..axis.len()).find(|&i| axis[i] <= axis[i - 1]) {
        return Err(PlotError::InvalidData(format!(
            "{} must be strictly increasing ({} then {} at index {})",
            name,
            axis[i - 1],
            axis[i],
            i
        )));
    }
    Ok(())
}

impl PosteriorGrid {
    pub fn new(
        slope_axis: Array1<f64>,
        intercept_axis: Array1<f64>,
        mass: Array2<f64>,
    ) -> PlotResult<Self> {
        check_increasing("slope axis", slope_axis.view())?;
        check_increasing("intercept axis", intercept_axis.view())?;

        let expected = (intercept_axis.len(), slope_axis.len());
        if mass.dim() != expected {
            return Err(PlotError::ShapeMismatch {
                context: "posterior mass (intercepts x slopes)",
                expected,
                found: mass.dim(),
            });
        }
        debug!(
            "Posterior grid: {} slopes x {} intercepts",
            slope_axis.len(),
            intercept_axis.len()
        );

        Ok(PosteriorGrid {
            slope_axis,
            intercept_axis,
            mass,
        })
    }

    /// Build from nested rows, one row per intercept value.
    pub fn from_rows(
        slope_axis: Vec<f64>,
        intercept_axis: Vec<f64>,
        rows: Vec<Vec<f64>>,
    ) -> PlotResult<Self> {
        let n_cols = slope_axis.len();
        for row in &rows {
            check_len("posterior mass row", n_cols, row.len())?;
        }
        let n_rows = rows.len();
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let mass = Array2::from_shape_vec((n_rows, n_cols), flat)
            .map_err(|e| PlotError::InvalidData(format!("posterior mass: {}", e)))?;
        Self::new(Array1::from(slope_axis), Array1::from(intercept_axis), mass)
    }

    pub fn slope_axis(&self) -> ArrayView1<'_, f64> {
        self.slope_axis.view()
    }

    pub fn intercept_axis(&self) -> ArrayView1<'_, f64> {
        self.intercept_axis.view()
    }

    pub fn mass(&self) -> ArrayView2<'_, f64> {
        self.mass.view()
    }

    /// Parameters at the highest-mass cell, `None` if every cell is NaN.
    pub fn mode(&self) -> Option<LineParams> {
        argmax_2d(self.mass.view())
            .map(|(row, col)| LineParams::new(self.slope_axis[col], self.intercept_axis[row]))
    }

    /// Normalized marginal over the slope axis.
    pub fn slope_marginal(&self) -> Array1<f64> {
        normalize(marginalize_rows(self.mass.view()).view())
    }
}
