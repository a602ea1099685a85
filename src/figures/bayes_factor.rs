use log::{debug, warn};
use ndarray::{Array1, ArrayView1};

use crate::config::FigureConfig;
use crate::numeric::{interp, normalize};
use crate::plotting::error::check_len;
use crate::plotting::{Figure, PlotError, PlotResult};
use crate::posterior::PosteriorGrid;
use crate::prior::Prior;

use super::{null_line, posterior_marginal, CURVE_WIDTH, SLOPE_LABEL};

/// Savage-Dickey density ratio at the null slope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BayesFactor {
    /// Evidence for the alternative over the null
    pub bf10: f64,
    pub bf01: f64,
    pub prior_density: f64,
    pub posterior_density: f64,
}

/// Ratio of posterior to prior density at `null_value`, both read off
/// their gridded marginals by linear interpolation. A zero prior density
/// gives an infinite or NaN factor.
pub fn savage_dickey(
    axis: ArrayView1<'_, f64>,
    prior: ArrayView1<'_, f64>,
    posterior: ArrayView1<'_, f64>,
    null_value: f64,
) -> PlotResult<BayesFactor> {
    check_len("prior marginal", axis.len(), prior.len())?;
    check_len("posterior marginal", axis.len(), posterior.len())?;
    if axis.is_empty() {
        return Err(PlotError::EmptyData);
    }

    let prior_density = interp(null_value, axis, prior);
    let posterior_density = interp(null_value, axis, posterior);
    if prior_density == 0.0 {
        warn!(
            "Prior density at m = {} is zero; Bayes factor is not finite",
            null_value
        );
    }
    let bf10 = posterior_density / prior_density;
    Ok(BayesFactor {
        bf10,
        bf01: 1.0 / bf10,
        prior_density,
        posterior_density,
    })
}

pub struct BayesFactorFigure {
    pub figure: Figure,
    /// Normalized posterior and prior marginals over the slope axis
    pub posterior: Array1<f64>,
    pub prior: Array1<f64>,
    pub bayes_factor: BayesFactor,
}

/// Prior and posterior slope marginals on one axes, titled with the
/// Bayes factors for `m = null_value`.
pub fn plot_m_bayes_factor(
    posterior: &PosteriorGrid,
    prior: &dyn Prior,
    config: &FigureConfig,
) -> PlotResult<BayesFactorFigure> {
    config.validate()?;
    let slopes = posterior.slope_axis();
    let posterior_m = posterior_marginal(posterior);
    let prior_m = normalize(prior.pdf_grid(slopes).view());
    if prior_m.iter().any(|v| !v.is_finite()) {
        warn!("Prior density is zero over the whole slope axis");
    }

    let bayes_factor = savage_dickey(slopes, prior_m.view(), posterior_m.view(), config.null_value)?;
    debug!(
        "Bayes factor at m = {}: BF10 = {}, BF01 = {}",
        config.null_value, bayes_factor.bf10, bayes_factor.bf01
    );

    let mut fig = Figure::new(config.single_width, config.single_height).theme(config.theme);
    let ax = fig.gca();
    ax.plot(slopes, &posterior_m)
        .linewidth(CURVE_WIDTH)
        .label("posterior")
        .build();
    ax.plot(slopes, &prior_m)
        .linewidth(CURVE_WIDTH)
        .label("prior")
        .build();
    null_line(ax, config.null_value);

    ax.set_xlabel(SLOPE_LABEL).set_ylabel("probability");
    ax.set_title(format!(
        "BF₁₀ = {}, BF₀₁ = {}",
        bayes_factor.bf10, bayes_factor.bf01
    ));
    ax.legend();

    Ok(BayesFactorFigure {
        figure: fig,
        posterior: posterior_m,
        prior: prior_m,
        bayes_factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::linspace;
    use crate::prior::{NormalPrior, UniformPrior};
    use ndarray::{array, Array2};
    use rand::RngCore;

    /// Tent density on [-1.5, 1.5] peaking at 0.
    #[derive(Debug)]
    struct Tent;

    impl Prior for Tent {
        fn pdf(&self, x: f64) -> f64 {
            (3.0 - 2.0 * x.abs()).max(0.0)
        }

        fn sample(&self, _rng: &mut dyn RngCore) -> f64 {
            0.0
        }
    }

    fn symmetric_grid() -> PosteriorGrid {
        let row = array![1.0, 2.0, 3.0, 2.0, 1.0];
        let mass = Array2::from_shape_fn((2, 5), |(_, j)| row[j]);
        PosteriorGrid::new(linspace(-1.0, 1.0, 5), array![0.0, 1.0], mass).unwrap()
    }

    #[test]
    fn test_matching_densities_give_unit_factor() {
        let out = plot_m_bayes_factor(&symmetric_grid(), &Tent, &FigureConfig::default()).unwrap();
        let bf = out.bayes_factor;
        assert!((bf.bf10 - 1.0).abs() < 1e-12);
        assert!((bf.bf01 - 1.0).abs() < 1e-12);
        assert!((bf.posterior_density - 1.0 / 3.0).abs() < 1e-12);
        assert!((out.prior.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_bf01_is_reciprocal() {
        let prior = NormalPrior::new(0.0, 2.0).unwrap();
        let out = plot_m_bayes_factor(&symmetric_grid(), &prior, &FigureConfig::default()).unwrap();
        let bf = out.bayes_factor;
        assert!(bf.bf10 > 1.0);
        assert!((bf.bf01 - 1.0 / bf.bf10).abs() < 1e-12);
    }

    #[test]
    fn test_interpolates_between_grid_points() {
        let axis = array![-1.0, 1.0];
        let prior = array![0.5, 0.5];
        let posterior = array![0.2, 0.8];
        let bf = savage_dickey(axis.view(), prior.view(), posterior.view(), 0.0).unwrap();
        assert!((bf.posterior_density - 0.5).abs() < 1e-12);
        assert!((bf.bf10 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_prior_density_is_infinite() {
        let prior = UniformPrior::new(0.5, 1.0).unwrap();
        let out = plot_m_bayes_factor(&symmetric_grid(), &prior, &FigureConfig::default()).unwrap();
        let bf = out.bayes_factor;
        assert_eq!(bf.prior_density, 0.0);
        assert!(bf.bf10.is_infinite());
        assert_eq!(bf.bf01, 0.0);
        assert_eq!(out.figure.axes()[0].title_text(), Some("BF₁₀ = inf, BF₀₁ = 0"));
    }

    #[test]
    fn test_length_mismatch() {
        let a = array![0.0, 1.0];
        let b = array![1.0];
        assert!(matches!(
            savage_dickey(a.view(), b.view(), a.view(), 0.0),
            Err(PlotError::LengthMismatch { context: "prior marginal", .. })
        ));
    }

    #[test]
    fn test_figure_contents() {
        let mut out = plot_m_bayes_factor(&symmetric_grid(), &Tent, &FigureConfig::default()).unwrap();
        let ax = &out.figure.axes()[0];
        assert!(ax.find_plot("posterior").is_some());
        assert!(ax.find_plot("prior").is_some());
        assert_eq!(ax.plots().len(), 3);
        assert!(ax.title_text().is_some_and(|t| t.starts_with("BF₁₀ = 1")));

        let svg = out.figure.render();
        assert!(svg.contains(">prior<"));
        assert!(svg.contains(">posterior<"));
    }
}
