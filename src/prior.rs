//! Prior distributions over a single line parameter.

use std::fmt::Debug;

use ndarray::{Array1, ArrayView1};
use rand::distributions::Distribution;
use rand::RngCore;
use serde::Deserialize;
use statrs::distribution::{Cauchy, Continuous, Normal, Uniform};

use crate::plotting::{PlotError, PlotResult};

/// A one-dimensional prior: a density to evaluate and a sampler.
pub trait Prior: Debug {
    /// Probability density at `x`.
    fn pdf(&self, x: f64) -> f64;

    /// One random draw.
    fn sample(&self, rng: &mut dyn RngCore) -> f64;

    /// Density evaluated at every point of `xs`.
    fn pdf_grid(&self, xs: ArrayView1<'_, f64>) -> Array1<f64> {
        xs.mapv(|x| self.pdf(x))
    }
}

/// Independent priors on slope and intercept.
#[derive(Debug, Clone, Copy)]
pub struct PriorPair<'a> {
    pub slope: &'a dyn Prior,
    pub intercept: &'a dyn Prior,
}

impl<'a> PriorPair<'a> {
    pub fn new(slope: &'a dyn Prior, intercept: &'a dyn Prior) -> Self {
        PriorPair { slope, intercept }
    }
}

#[derive(Debug, Clone)]
pub struct NormalPrior(Normal);

impl NormalPrior {
    pub fn new(mean: f64, std_dev: f64) -> PlotResult<Self> {
        if !mean.is_finite() || !(std_dev > 0.0) || !std_dev.is_finite() {
            return Err(PlotError::InvalidConfig(format!(
                "normal prior needs a finite mean and positive std_dev, got mean={} std_dev={}",
                mean, std_dev
            )));
        }
        match Normal::new(mean, std_dev) {
            Ok(dist) => Ok(NormalPrior(dist)),
            Err(e) => Err(PlotError::InvalidConfig(format!("normal prior: {}", e))),
        }
    }
}

impl Prior for NormalPrior {
    fn pdf(&self, x: f64) -> f64 {
        self.0.pdf(x)
    }

    fn sample(&self, mut rng: &mut dyn RngCore) -> f64 {
        Distribution::sample(&self.0, &mut rng)
    }
}

/// Flat density on `[low, high]`, both ends included.
#[derive(Debug, Clone)]
pub struct UniformPrior(Uniform);

impl UniformPrior {
    pub fn new(low: f64, high: f64) -> PlotResult<Self> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(PlotError::InvalidConfig(format!(
                "uniform prior needs finite low < high, got [{}, {}]",
                low, high
            )));
        }
        match Uniform::new(low, high) {
            Ok(dist) => Ok(UniformPrior(dist)),
            Err(e) => Err(PlotError::InvalidConfig(format!("uniform prior: {}", e))),
        }
    }
}

impl Prior for UniformPrior {
    fn pdf(&self, x: f64) -> f64 {
        self.0.pdf(x)
    }

    fn sample(&self, mut rng: &mut dyn RngCore) -> f64 {
        Distribution::sample(&self.0, &mut rng)
    }
}

#[derive(Debug, Clone)]
pub struct CauchyPrior(Cauchy);

impl CauchyPrior {
    pub fn new(location: f64, scale: f64) -> PlotResult<Self> {
        if !location.is_finite() || !(scale > 0.0) || !scale.is_finite() {
            return Err(PlotError::InvalidConfig(format!(
                "cauchy prior needs a finite location and positive scale, got location={} scale={}",
                location, scale
            )));
        }
        match Cauchy::new(location, scale) {
            Ok(dist) => Ok(CauchyPrior(dist)),
            Err(e) => Err(PlotError::InvalidConfig(format!("cauchy prior: {}", e))),
        }
    }
}

impl Prior for CauchyPrior {
    fn pdf(&self, x: f64) -> f64 {
        self.0.pdf(x)
    }

    fn sample(&self, mut rng: &mut dyn RngCore) -> f64 {
        Distribution::sample(&self.0, &mut rng)
    }
}

/// Serialized prior, tagged by `kind`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PriorSpec {
    Normal { mean: f64, std_dev: f64 },
    Uniform { low: f64, high: f64 },
    Cauchy { location: f64, scale: f64 },
}

impl PriorSpec {
    pub fn build(&self) -> PlotResult<Box<dyn Prior>> {
        Ok(match *self {
            PriorSpec::Normal { mean, std_dev } => Box::new(NormalPrior::new(mean, std_dev)?),
            PriorSpec::Uniform { low, high } => Box::new(UniformPrior::new(low, high)?),
            PriorSpec::Cauchy { location, scale } => Box::new(CauchyPrior::new(location, scale)?),
        })
    }
}
