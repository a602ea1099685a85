//! JSON input document for the command-line figures.

use std::fs::File;
use std::io::BufReader;

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::posterior::{LineParams, PosteriorGrid};
use crate::prior::{Prior, PriorSpec};

/// Priors section. The Bayes factor figure only reads the slope prior.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PriorSpecs {
    pub slope: PriorSpec,
    #[serde(default)]
    pub intercept: Option<PriorSpec>,
}

/// Posterior grid as written in JSON: `mass` holds one row per intercept.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PosteriorSpec {
    pub slope_axis: Vec<f64>,
    pub intercept_axis: Vec<f64>,
    pub mass: Vec<Vec<f64>>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct InputDocument {
    #[serde(default)]
    pub x: Vec<f64>,
    #[serde(default)]
    pub y: Vec<f64>,
    #[serde(default)]
    pub truth: Option<LineParams>,
    #[serde(default)]
    pub priors: Option<PriorSpecs>,
    #[serde(default)]
    pub posterior: Option<PosteriorSpec>,
}

impl InputDocument {
    pub fn load(path: &str) -> Result<Self> {
        let file =
            File::open(path).map_err(|e| anyhow::anyhow!("Failed to open input {}: {}", path, e))?;
        let doc: InputDocument = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| anyhow::anyhow!("Failed to parse input {}: {}", path, e))?;
        Ok(doc)
    }

    /// Validated posterior grid, if the document has one.
    pub fn posterior_grid(&self) -> Result<Option<PosteriorGrid>> {
        let Some(ref spec) = self.posterior else {
            return Ok(None);
        };
        let grid = PosteriorGrid::from_rows(
            spec.slope_axis.clone(),
            spec.intercept_axis.clone(),
            spec.mass.clone(),
        )
        .map_err(|e| anyhow::anyhow!("Invalid posterior: {}", e))?;
        Ok(Some(grid))
    }

    /// Posterior grid for figures that cannot do without one.
    pub fn require_posterior(&self) -> Result<PosteriorGrid> {
        match self.posterior_grid()? {
            Some(grid) => Ok(grid),
            None => bail!("Input has no \"posterior\" section"),
        }
    }

    /// Slope prior for figures that cannot do without one.
    pub fn slope_prior(&self) -> Result<Box<dyn Prior>> {
        let Some(ref specs) = self.priors else {
            bail!("Input has no \"priors\" section");
        };
        specs
            .slope
            .build()
            .map_err(|e| anyhow::anyhow!("Invalid slope prior: {}", e))
    }

    /// Built `(slope, intercept)` priors, if the document has a priors
    /// section. A section without an intercept prior is an error here.
    pub fn build_priors(&self) -> Result<Option<(Box<dyn Prior>, Box<dyn Prior>)>> {
        let Some(ref specs) = self.priors else {
            return Ok(None);
        };
        let Some(ref intercept_spec) = specs.intercept else {
            bail!("Input \"priors\" section has no intercept prior");
        };
        let slope = self.slope_prior()?;
        let intercept = intercept_spec
            .build()
            .map_err(|e| anyhow::anyhow!("Invalid intercept prior: {}", e))?;
        Ok(Some((slope, intercept)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
        "x": [0.0, 1.0, 2.0],
        "y": [0.1, 0.9, 2.2],
        "truth": {"slope": 1.0, "intercept": 0.0},
        "priors": {
            "slope": {"kind": "normal", "mean": 0.0, "std_dev": 1.0},
            "intercept": {"kind": "uniform", "low": -1.0, "high": 1.0}
        },
        "posterior": {
            "slope_axis": [0.0, 1.0],
            "intercept_axis": [-1.0, 0.0, 1.0],
            "mass": [[0.1, 0.2], [0.3, 0.9], [0.1, 0.1]]
        }
    }"#;

    #[test]
    fn test_parse_full_document() {
        let doc: InputDocument = serde_json::from_str(FULL).unwrap();
        assert_eq!(doc.x.len(), 3);
        assert_eq!(doc.truth, Some(LineParams::new(1.0, 0.0)));
        let specs = doc.priors.as_ref().unwrap();
        assert_eq!(specs.intercept, Some(PriorSpec::Uniform { low: -1.0, high: 1.0 }));

        let grid = doc.require_posterior().unwrap();
        assert_eq!(grid.mode(), Some(LineParams::new(1.0, 0.0)));

        let (slope, intercept) = doc.build_priors().unwrap().unwrap();
        assert!(slope.pdf(0.0) > intercept.pdf(5.0));
    }

    #[test]
    fn test_missing_sections() {
        let doc: InputDocument = serde_json::from_str(r#"{"x": [1.0], "y": [2.0]}"#).unwrap();
        assert!(doc.posterior_grid().unwrap().is_none());
        assert!(doc.build_priors().unwrap().is_none());
        let err = doc.require_posterior().unwrap_err();
        assert!(err.to_string().contains("posterior"));
        let err = doc.slope_prior().err().unwrap();
        assert!(err.to_string().contains("priors"));
    }

    #[test]
    fn test_slope_only_priors() {
        let doc: InputDocument = serde_json::from_str(
            r#"{"priors": {"slope": {"kind": "normal", "mean": 0.0, "std_dev": 2.0}}}"#,
        )
        .unwrap();
        assert_eq!(doc.priors.as_ref().unwrap().intercept, None);

        let slope = doc.slope_prior().unwrap();
        assert!((slope.pdf(0.0) - 0.199_471_140_200_716_35).abs() < 1e-12);

        let err = doc.build_priors().err().unwrap();
        assert!(err.to_string().contains("intercept prior"));
    }

    #[test]
    fn test_invalid_sections_are_errors() {
        let doc: InputDocument = serde_json::from_str(
            r#"{"posterior": {"slope_axis": [1.0, 0.0], "intercept_axis": [0.0], "mass": [[1.0, 1.0]]}}"#,
        )
        .unwrap();
        assert!(doc.posterior_grid().is_err());

        let doc: InputDocument = serde_json::from_str(
            r#"{"priors": {"slope": {"kind": "cauchy", "location": 0.0, "scale": 0.0},
                           "intercept": {"kind": "normal", "mean": 0.0, "std_dev": 1.0}}}"#,
        )
        .unwrap();
        let err = doc.build_priors().err().unwrap();
        assert!(err.to_string().contains("slope prior"));

        assert!(serde_json::from_str::<InputDocument>(r#"{"priors": {"slope": {"kind": "beta"}}}"#).is_err());
    }

    #[test]
    fn test_load_reports_path() {
        let err = InputDocument::load("/nonexistent/input.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/input.json"));
    }
}
