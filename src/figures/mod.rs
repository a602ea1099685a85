//! Figures for Bayesian straight-line fitting: the data/parameter-space
//! panel pair, the marginal slope posterior and the Savage-Dickey Bayes
//! factor.

mod bayes_factor;
mod data_space;
mod marginal;

pub use bayes_factor::{plot_m_bayes_factor, savage_dickey, BayesFactor, BayesFactorFigure};
pub use data_space::{
    figure_data_parameter_space, prior_density_grid, DataSpaceFigure, DataSpaceInputs,
};
pub use marginal::{credible_interval, plot_posterior_m, CredibleInterval, MarginalFigure};

use log::warn;
use ndarray::Array1;

use crate::plotting::{Axes, DashPattern};
use crate::posterior::PosteriorGrid;

const SLOPE_LABEL: &str = "slope, m";
const CURVE_WIDTH: f64 = 3.0;

/// Normalized slope marginal, warning when the grid carries no mass.
fn posterior_marginal(posterior: &PosteriorGrid) -> Array1<f64> {
    let marginal = posterior.slope_marginal();
    if marginal.iter().any(|v| !v.is_finite()) {
        warn!("Posterior mass does not sum to a positive finite value; slope marginal is undefined");
    }
    marginal
}

/// Dashed reference line at the null slope, in the theme's foreground.
fn null_line(ax: &mut Axes, null_value: f64) {
    let ink = ax.foreground();
    ax.axvline(null_value)
        .color(ink)
        .linestyle(DashPattern::Dashed)
        .build();
}

/// Credible mass as a percentage: `0.95` as `"95%"`, `0.975` as `"97.5%"`.
pub fn percent_label(mass: f64) -> String {
    let pct = format!("{:.1}", mass * 100.0);
    format!("{}%", pct.trim_end_matches(".0"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_label() {
        assert_eq!(percent_label(0.95), "95%");
        assert_eq!(percent_label(0.9), "90%");
        assert_eq!(percent_label(0.975), "97.5%");
    }
}
