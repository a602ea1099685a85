//! Shaded region between two curves.

use crate::plotting::element::Bounds;
use crate::plotting::error::{check_len, PlotResult};
use crate::plotting::plot::Plot;
use crate::plotting::style::{Color, FillStyle};

/// Region between `y1` and `y2` over `x`, optionally restricted to the
/// points where `mask` is true. Each contiguous run of selected points is
/// drawn as its own polygon; no interpolation happens across run ends.
#[derive(Debug, Clone)]
pub struct FillBetween {
    pub x: Vec<f64>,
    pub y1: Vec<f64>,
    pub y2: Vec<f64>,
    pub mask: Option<Vec<bool>>,
    pub fill_style: FillStyle,
    pub label: Option<String>,
}

impl FillBetween {
    pub fn new(x: Vec<f64>, y1: Vec<f64>, y2: Vec<f64>) -> PlotResult<Self> {
        check_len("fill_between y1", x.len(), y1.len())?;
        check_len("fill_between y2", x.len(), y2.len())?;
        Ok(FillBetween {
            x,
            y1,
            y2,
            mask: None,
            fill_style: FillStyle::default(),
            label: None,
        })
    }

    pub fn mask(mut self, mask: Vec<bool>) -> PlotResult<Self> {
        check_len("fill_between mask", self.x.len(), mask.len())?;
        self.mask = Some(mask);
        Ok(self)
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.fill_style.color = color.into();
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.fill_style = self.fill_style.opacity(alpha);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn selected(&self, i: usize) -> bool {
        let in_mask = self.mask.as_ref().is_none_or(|m| m[i]);
        in_mask && self.x[i].is_finite() && self.y1[i].is_finite() && self.y2[i].is_finite()
    }

    /// Index ranges of contiguous selected points.
    pub fn runs(&self) -> Vec<std::ops::Range<usize>> {
        let mut runs = Vec::new();
        let mut start = None;
        for i in 0..self.x.len() {
            match (self.selected(i), start) {
                (true, None) => start = Some(i),
                (false, Some(s)) => {
                    runs.push(s..i);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push(s..self.x.len());
        }
        runs
    }
}

impl Plot for FillBetween {
    fn bounds(&self) -> Option<Bounds> {
        let mut bounds = Bounds::of_points(&self.x, &self.y1)?;
        if let Some(upper) = Bounds::of_points(&self.x, &self.y2) {
            bounds.include_bounds(&upper);
        }
        Some(bounds)
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn fill_style(&self) -> Option<FillStyle> {
        Some(self.fill_style.clone())
    }

    fn render_svg(&self, data_bounds: &Bounds, pixel_bounds: &Bounds) -> String {
        let mut svg = String::new();
        for run in self.runs() {
            let upper = run.clone().map(|i| (self.x[i], self.y2[i]));
            let lower = run.rev().map(|i| (self.x[i], self.y1[i]));
            let points: Vec<String> = upper
                .chain(lower)
                .map(|(x, y)| {
                    let (px, py) = data_bounds.project(x, y, pixel_bounds);
                    format!("{:.2},{:.2}", px, py)
                })
                .collect();
            svg.push_str(&format!(
                "<polygon points=\"{}\" {}/>\n",
                points.join(" "),
                self.fill_style.to_svg_style()
            ));
        }
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(mask: Vec<bool>) -> FillBetween {
        FillBetween::new(vec![0.0, 1.0, 2.0, 3.0, 4.0], vec![0.0; 5], vec![1.0; 5])
            .unwrap()
            .mask(mask)
            .unwrap()
    }

    #[test]
    fn test_runs_follow_mask() {
        let f = fill(vec![false, true, true, false, true]);
        assert_eq!(f.runs(), vec![1..3, 4..5]);
        assert_eq!(fill(vec![true; 5]).runs(), vec![0..5]);
        assert!(fill(vec![false; 5]).runs().is_empty());
    }

    #[test]
    fn test_one_polygon_per_run() {
        let f = fill(vec![true, true, false, true, true]);
        let data = Bounds::new(0.0, 4.0, 0.0, 1.0);
        let svg = f.render_svg(&data, &Bounds::new(0.0, 400.0, 0.0, 100.0));
        assert_eq!(svg.matches("<polygon").count(), 2);
        assert!(svg.contains("points=\"0.00,0.00 100.00,0.00 100.00,100.00 0.00,100.00\""));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(FillBetween::new(vec![0.0, 1.0], vec![0.0], vec![1.0, 1.0]).is_err());
        let f = FillBetween::new(vec![0.0], vec![0.0], vec![1.0]).unwrap();
        assert!(f.mask(vec![true, false]).is_err());
    }
}
