//! Figures for Bayesian straight-line fitting, rendered to SVG.

pub mod config;
pub mod figures;
pub mod input;
pub mod numeric;
pub mod plotting;
pub mod posterior;
pub mod prior;
