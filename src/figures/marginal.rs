use log::debug;
use ndarray::{Array1, ArrayView1};

use crate::config::FigureConfig;
use crate::numeric::{cumsum, interp};
use crate::plotting::error::check_len;
use crate::plotting::{Figure, PlotError, PlotResult};
use crate::posterior::PosteriorGrid;

use super::{null_line, percent_label, posterior_marginal, CURVE_WIDTH, SLOPE_LABEL};

/// Equal-tailed interval holding `mass` of a marginal distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CredibleInterval {
    pub low: f64,
    pub high: f64,
    pub mass: f64,
}

impl CredibleInterval {
    /// Whether `value` lies inside, ends included.
    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

/// Invert the cumulative sum of `marginal` at `(1 - mass) / 2` and
/// `(1 + mass) / 2`.
pub fn credible_interval(
    marginal: ArrayView1<'_, f64>,
    axis: ArrayView1<'_, f64>,
    mass: f64,
) -> PlotResult<CredibleInterval> {
    check_len("marginal", axis.len(), marginal.len())?;
    if axis.is_empty() {
        return Err(PlotError::EmptyData);
    }
    if !(mass > 0.0 && mass < 1.0) {
        return Err(PlotError::InvalidConfig(format!("credible mass must be in (0, 1), got {}", mass)));
    }

    let cdf = cumsum(marginal);
    let tail = (1.0 - mass) / 2.0;
    Ok(CredibleInterval {
        low: interp(tail, cdf.view(), axis),
        high: interp(1.0 - tail, cdf.view(), axis),
        mass,
    })
}

pub struct MarginalFigure {
    pub figure: Figure,
    /// Normalized slope marginal, one value per slope grid point
    pub marginal: Array1<f64>,
    pub interval: CredibleInterval,
}

/// Marginal posterior of the slope with its credible region shaded and the
/// null slope marked.
pub fn plot_posterior_m(posterior: &PosteriorGrid, config: &FigureConfig) -> PlotResult<MarginalFigure> {
    config.validate()?;
    let slopes = posterior.slope_axis();
    let marginal = posterior_marginal(posterior);
    let interval = credible_interval(marginal.view(), slopes, config.credible_mass)?;
    debug!(
        "{} credible interval for m: [{}, {}]",
        percent_label(interval.mass),
        interval.low,
        interval.high
    );

    let mut fig = Figure::new(config.single_width, config.single_height).theme(config.theme);
    let ax = fig.gca();

    ax.plot(slopes, &marginal)
        .linewidth(CURVE_WIDTH)
        .label("posterior")
        .build();

    let inside: Vec<bool> = slopes.iter().map(|&m| interval.contains(m)).collect();
    ax.fill_between(slopes, vec![0.0; slopes.len()], &marginal)
        .where_mask(inside)
        .alpha(0.3)
        .label(format!("{} credible region", percent_label(interval.mass)))
        .build()?;

    null_line(ax, config.null_value);

    ax.set_xlabel(SLOPE_LABEL).set_ylabel("probability");
    ax.legend();

    Ok(MarginalFigure {
        figure: fig,
        marginal,
        interval,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::linspace;
    use ndarray::{array, Array2};

    fn gaussian_grid() -> PosteriorGrid {
        let slopes = linspace(-2.0, 2.0, 81);
        let intercepts = linspace(-1.0, 1.0, 3);
        let mass = Array2::from_shape_fn((3, 81), |(_, j)| {
            let m = slopes[j] - 0.5;
            (-m * m / (2.0 * 0.3 * 0.3)).exp()
        });
        PosteriorGrid::new(slopes, intercepts, mass).unwrap()
    }

    #[test]
    fn test_interval_ordered_and_in_range() {
        let grid = gaussian_grid();
        let out = plot_posterior_m(&grid, &FigureConfig::default()).unwrap();
        let ci = out.interval;
        assert!(ci.low <= ci.high);
        assert!(ci.low >= -2.0 && ci.high <= 2.0);
        // Roughly mean +- 1.96 sd for a normal shape
        assert!((ci.low - (0.5 - 1.96 * 0.3)).abs() < 0.1);
        assert!((ci.high - (0.5 + 1.96 * 0.3)).abs() < 0.1);
        assert!((out.marginal.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_interval_uniform_marginal() {
        let marginal = array![0.25, 0.25, 0.25, 0.25];
        let axis = array![0.0, 1.0, 2.0, 3.0];
        let ci = credible_interval(marginal.view(), axis.view(), 0.5).unwrap();
        // cdf = [0.25, 0.5, 0.75, 1.0]; 0.25 -> 0.0, 0.75 -> 2.0
        assert_eq!(ci, CredibleInterval { low: 0.0, high: 2.0, mass: 0.5 });
        assert!(ci.contains(0.0) && ci.contains(2.0) && !ci.contains(2.5));
    }

    #[test]
    fn test_interval_rejects_bad_input() {
        let a = array![0.5, 0.5];
        let b = array![0.0, 1.0, 2.0];
        assert!(matches!(
            credible_interval(a.view(), b.view(), 0.95),
            Err(PlotError::LengthMismatch { expected: 3, found: 2, .. })
        ));
        assert!(matches!(
            credible_interval(a.view(), a.view(), 1.5),
            Err(PlotError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_figure_contents() {
        let grid = gaussian_grid();
        let mut out = plot_posterior_m(&grid, &FigureConfig::default()).unwrap();
        let ax = &out.figure.axes()[0];

        let curve = ax.find_plot("posterior").unwrap();
        assert_eq!(curve.line_style().map(|s| s.width), Some(3.0));
        let region = ax.find_plot("95% credible region").unwrap();
        assert!((region.fill_style().unwrap().opacity - 0.3).abs() < 1e-12);
        assert_eq!(ax.plots().len(), 3);

        let svg = out.figure.render();
        assert!(svg.contains(">95% credible region<"));
        assert!(svg.contains(">probability<"));
        assert!(svg.contains("stroke-dasharray"));
    }

    #[test]
    fn test_region_label_follows_mass() {
        let grid = gaussian_grid();
        let config = FigureConfig {
            credible_mass: 0.9,
            ..FigureConfig::default()
        };
        let out = plot_posterior_m(&grid, &config).unwrap();
        assert!(out.figure.axes()[0].find_plot("90% credible region").is_some());
        assert_eq!(out.interval.mass, 0.9);
    }

    #[test]
    fn test_single_shaded_region() {
        let grid = gaussian_grid();
        let mut out = plot_posterior_m(&grid, &FigureConfig::default()).unwrap();
        let svg = out.figure.render();
        assert_eq!(svg.matches("<polygon").count(), 1);
    }
}
