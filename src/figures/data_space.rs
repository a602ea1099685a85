use log::{debug, warn};
use ndarray::{Array2, ArrayView1};
use rand::RngCore;

use crate::config::FigureConfig;
use crate::numeric::{linspace, meshgrid, normalize_grid};
use crate::plotting::error::check_len;
use crate::plotting::{Colormap, Figure, PlotError, PlotResult};
use crate::posterior::{LineParams, PosteriorGrid};
use crate::prior::PriorPair;

use super::SLOPE_LABEL;

/// Observations plus whatever is known about the line that produced them.
#[derive(Debug, Clone, Copy)]
pub struct DataSpaceInputs<'a> {
    pub x: &'a [f64],
    pub y: &'a [f64],
    pub truth: Option<LineParams>,
    pub priors: Option<PriorPair<'a>>,
    pub posterior: Option<&'a PosteriorGrid>,
}

impl<'a> DataSpaceInputs<'a> {
    pub fn new(x: &'a [f64], y: &'a [f64]) -> Self {
        DataSpaceInputs {
            x,
            y,
            truth: None,
            priors: None,
            posterior: None,
        }
    }

    pub fn with_truth(mut self, truth: LineParams) -> Self {
        self.truth = Some(truth);
        self
    }

    pub fn with_priors(mut self, priors: PriorPair<'a>) -> Self {
        self.priors = Some(priors);
        self
    }

    pub fn with_posterior(mut self, posterior: &'a PosteriorGrid) -> Self {
        self.posterior = Some(posterior);
        self
    }
}

pub struct DataSpaceFigure {
    pub figure: Figure,
    /// Posterior mode, when a posterior was supplied
    pub best_estimate: Option<LineParams>,
}

/// `(min, max)` of the observed x values.
fn observation_range(x: &[f64], y: &[f64]) -> PlotResult<(f64, f64)> {
    check_len("y", x.len(), y.len())?;
    if x.is_empty() {
        return Err(PlotError::EmptyData);
    }
    let min = x.iter().copied().fold(f64::INFINITY, f64::min);
    let max = x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return Err(PlotError::InvalidData("x has no finite values".to_string()));
    }
    Ok((min, max))
}

/// Joint prior density `p(m) p(c)` on the grid spanned by `slopes` and
/// `intercepts`, normalized to sum to one. Rows follow `intercepts`.
pub fn prior_density_grid(
    priors: &PriorPair<'_>,
    slopes: ArrayView1<'_, f64>,
    intercepts: ArrayView1<'_, f64>,
) -> Array2<f64> {
    let (mv, cv) = meshgrid(slopes, intercepts);
    let joint = mv.mapv(|m| priors.slope.pdf(m)) * cv.mapv(|c| priors.intercept.pdf(c));
    if !(joint.sum() > 0.0) {
        warn!("Prior density is zero over the whole parameter grid");
    }
    normalize_grid(joint.view())
}

/// Two panels side by side: the observations with the true, sampled and
/// best-fit lines on the left, and the prior or posterior over
/// (slope, intercept) on the right.
///
/// Lines sampled from the priors are only drawn when no posterior is given
/// and the true parameters are known.
pub fn figure_data_parameter_space(
    inputs: &DataSpaceInputs<'_>,
    config: &FigureConfig,
    rng: &mut dyn RngCore,
) -> PlotResult<DataSpaceFigure> {
    config.validate()?;
    let x_range = observation_range(inputs.x, inputs.y)?;

    let mut fig = Figure::new(config.width, config.height).theme(config.theme);
    fig.subplots(1, 2);
    fig.subplots_adjust(config.wspace);
    let [data_ax, param_ax] = fig.get_axes() else {
        return Err(PlotError::RenderError("expected a 1x2 panel layout".to_string()));
    };

    // Data space
    let ink = data_ax.foreground();
    data_ax
        .plot(inputs.x, inputs.y)
        .format("o")
        .color(ink.clone())
        .label("observations")
        .build();

    if let Some(truth) = inputs.truth {
        let (xs, ys) = truth.endpoints(x_range);
        data_ax.plot(xs, ys).format("r-").label("true").build();
    }

    if inputs.posterior.is_none()
        && inputs.truth.is_some()
        && let Some(priors) = inputs.priors
    {
        for _ in 0..config.n_prior_samples {
            let sample = LineParams::new(priors.slope.sample(rng), priors.intercept.sample(rng));
            let (xs, ys) = sample.endpoints(x_range);
            data_ax.plot(xs, ys).color(ink.clone()).alpha(0.1).build();
        }
        debug!("Drew {} prior sample lines", config.n_prior_samples);
    }

    // Parameter space
    let mut best_estimate = None;
    if let Some(posterior) = inputs.posterior {
        param_ax.pcolormesh(
            posterior.slope_axis(),
            posterior.intercept_axis(),
            posterior.mass(),
            Colormap::BluesR,
        )?;
        param_ax.colorbar("Probability")?;

        best_estimate = posterior.mode();
        match best_estimate {
            Some(best) => {
                debug!("Best estimate: m = {}, c = {}", best.slope, best.intercept);
                param_ax
                    .plot([best.slope], [best.intercept])
                    .format("bo")
                    .label("best guess")
                    .build();
                let (xs, ys) = best.endpoints(x_range);
                data_ax.plot(xs, ys).format("b-").label("best guess").build();
            }
            None => warn!("Posterior grid has no comparable values; no best estimate"),
        }
    } else if let Some(priors) = inputs.priors {
        let grid = linspace(config.prior_grid_min, config.prior_grid_max, config.prior_grid_points);
        let density = prior_density_grid(&priors, grid.view(), grid.view());
        param_ax.pcolormesh(grid.view(), grid.view(), density.view(), Colormap::BluesR)?;
        param_ax.colorbar("Probability")?;
    }

    if let Some(truth) = inputs.truth {
        param_ax
            .plot([truth.slope], [truth.intercept])
            .format("ro")
            .label("true")
            .build();
    }

    data_ax.set_title("Data space");
    data_ax
        .set_xlabel("independent variable, x")
        .set_ylabel("dependent variable, y");
    data_ax.legend();

    param_ax.set_title("Parameter space");
    param_ax.set_xlabel(SLOPE_LABEL).set_ylabel("intercept, c");
    param_ax.legend();

    Ok(DataSpaceFigure {
        figure: fig,
        best_estimate,
    })
}
