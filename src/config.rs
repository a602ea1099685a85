//! Figure configuration.
//!
//! All fields are optional in the JSON file; missing ones take the
//! defaults below.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

use crate::plotting::{PlotError, PlotResult, Theme};

// ============================================================================
// Figure Configuration
// ============================================================================

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FigureConfig {
    /// Two-panel figure size in pixels
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    /// Single-panel figure size in pixels
    #[serde(default = "default_width")]
    pub single_width: f64,
    #[serde(default = "default_height")]
    pub single_height: f64,
    /// Gap between the two panels, as a fraction of a panel width
    #[serde(default = "default_wspace")]
    pub wspace: f64,
    #[serde(default)]
    pub theme: Theme,

    // Prior density grid on the parameter-space panel
    #[serde(default = "default_prior_grid_min")]
    pub prior_grid_min: f64,
    #[serde(default = "default_prior_grid_max")]
    pub prior_grid_max: f64,
    #[serde(default = "default_prior_grid_points")]
    pub prior_grid_points: usize,
    /// Lines drawn from the priors on the data-space panel
    #[serde(default = "default_n_prior_samples")]
    pub n_prior_samples: usize,

    /// Mass of the shaded credible region
    #[serde(default = "default_credible_mass")]
    pub credible_mass: f64,
    /// Slope tested by the Bayes factor and marked on marginal plots
    #[serde(default)]
    pub null_value: f64,
    /// RNG seed for prior samples; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_width() -> f64 { 1200.0 }
fn default_height() -> f64 { 600.0 }
fn default_wspace() -> f64 { 0.3 }
fn default_prior_grid_min() -> f64 { -3.0 }
fn default_prior_grid_max() -> f64 { 3.0 }
fn default_prior_grid_points() -> usize { 100 }
fn default_n_prior_samples() -> usize { 50 }
fn default_credible_mass() -> f64 { 0.95 }

impl Default for FigureConfig {
    fn default() -> Self {
        FigureConfig {
            width: default_width(),
            height: default_height(),
            single_width: default_width(),
            single_height: default_height(),
            wspace: default_wspace(),
            theme: Theme::default(),
            prior_grid_min: default_prior_grid_min(),
            prior_grid_max: default_prior_grid_max(),
            prior_grid_points: default_prior_grid_points(),
            n_prior_samples: default_n_prior_samples(),
            credible_mass: default_credible_mass(),
            null_value: 0.0,
            seed: None,
        }
    }
}

impl FigureConfig {
    /// Load figure configuration from a JSON file
    pub fn load(path: &str) -> std::io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: FigureConfig = serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    pub fn validate(&self) -> PlotResult<()> {
        let sizes = [
            ("width", self.width),
            ("height", self.height),
            ("single_width", self.single_width),
            ("single_height", self.single_height),
        ];
        for (name, value) in sizes {
            if !(value > 0.0) || !value.is_finite() {
                return Err(PlotError::InvalidConfig(format!("{} must be positive, got {}", name, value)));
            }
        }
        if !(self.wspace >= 0.0) {
            return Err(PlotError::InvalidConfig(format!("wspace must be non-negative, got {}", self.wspace)));
        }
        if !(self.credible_mass > 0.0 && self.credible_mass < 1.0) {
            return Err(PlotError::InvalidConfig(format!(
                "credible_mass must be in (0, 1), got {}",
                self.credible_mass
            )));
        }
        if self.prior_grid_points < 2 {
            return Err(PlotError::InvalidConfig(format!(
                "prior_grid_points must be at least 2, got {}",
                self.prior_grid_points
            )));
        }
        if !(self.prior_grid_min < self.prior_grid_max) {
            return Err(PlotError::InvalidConfig(format!(
                "prior grid range [{}, {}] is empty",
                self.prior_grid_min, self.prior_grid_max
            )));
        }
        if !self.null_value.is_finite() {
            return Err(PlotError::InvalidConfig("null_value must be finite".to_string()));
        }
        Ok(())
    }

    /// RNG for prior sampling, seeded from `seed` when set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config: FigureConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FigureConfig::default());
        assert_eq!(config.width, 1200.0);
        assert_eq!(config.prior_grid_points, 100);
        assert_eq!(config.n_prior_samples, 50);
        assert_eq!(config.credible_mass, 0.95);
        assert_eq!(config.theme, Theme::Default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config: FigureConfig =
            serde_json::from_str(r#"{"credible_mass": 0.9, "theme": "dark", "seed": 3}"#).unwrap();
        assert_eq!(config.credible_mass, 0.9);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.height, 600.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = [
            FigureConfig { credible_mass: 1.0, ..FigureConfig::default() },
            FigureConfig { credible_mass: 0.0, ..FigureConfig::default() },
            FigureConfig { prior_grid_points: 1, ..FigureConfig::default() },
            FigureConfig { prior_grid_min: 3.0, ..FigureConfig::default() },
            FigureConfig { width: 0.0, ..FigureConfig::default() },
            FigureConfig { single_height: -5.0, ..FigureConfig::default() },
        ];
        for config in bad {
            assert!(matches!(config.validate(), Err(PlotError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_seeded_rng_repeats() {
        let config = FigureConfig { seed: Some(11), ..FigureConfig::default() };
        assert_eq!(config.rng().next_u64(), config.rng().next_u64());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("bayesfig-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"null_value": 0.5}"#).unwrap();
        let config = FigureConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.null_value, 0.5);
        std::fs::remove_file(&path).unwrap();

        assert!(FigureConfig::load("/nonexistent/bayesfig.json").is_err());
    }
}
