//! Grid and interpolation helpers over ndarray arrays.
//!
//! These follow the usual array-library conventions: zero sums divide to
//! NaN, interpolation clamps at the ends, and meshgrids use "xy" indexing.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// `n` evenly spaced values from `start` to `stop`, both inclusive.
pub fn linspace(start: f64, stop: f64, n: usize) -> Array1<f64> {
    match n {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, start),
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            Array1::from_shape_fn(n, |i| if i == n - 1 { stop } else { start + step * i as f64 })
        }
    }
}

/// Coordinate matrices for a rectangular grid. Both outputs have shape
/// `(ys.len(), xs.len())`; row `i` of the first holds `xs`, column `j` of
/// the second holds `ys`.
pub fn meshgrid(xs: ArrayView1<'_, f64>, ys: ArrayView1<'_, f64>) -> (Array2<f64>, Array2<f64>) {
    let shape = (ys.len(), xs.len());
    let xx = Array2::from_shape_fn(shape, |(_, j)| xs[j]);
    let yy = Array2::from_shape_fn(shape, |(i, _)| ys[i]);
    (xx, yy)
}

/// Scale `values` to sum to one.
pub fn normalize(values: ArrayView1<'_, f64>) -> Array1<f64> {
    let total = values.sum();
    values.mapv(|v| v / total)
}

/// Scale a grid to sum to one.
pub fn normalize_grid(values: ArrayView2<'_, f64>) -> Array2<f64> {
    let total = values.sum();
    values.mapv(|v| v / total)
}

pub fn cumsum(values: ArrayView1<'_, f64>) -> Array1<f64> {
    values
        .iter()
        .scan(0.0, |acc, &v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}

/// Piecewise-linear interpolation of `(xp, fp)` at `x`.
///
/// `xp` must be non-decreasing. Values left of `xp[0]` return `fp[0]`,
/// right of the last point return the last `fp`. Repeated `xp` values are
/// resolved by interpolating from the last `xp[k] <= x`, so a flat run in
/// `xp` never divides by zero.
///
/// # Panics
///
/// If `xp` is empty or `xp` and `fp` differ in length.
pub fn interp(x: f64, xp: ArrayView1<'_, f64>, fp: ArrayView1<'_, f64>) -> f64 {
    assert_eq!(xp.len(), fp.len(), "interp: xp and fp lengths differ");
    assert!(!xp.is_empty(), "interp: empty sample points");
    let n = xp.len();

    if x.is_nan() {
        return f64::NAN;
    }
    if x < xp[0] {
        return fp[0];
    }
    if x >= xp[n - 1] {
        return fp[n - 1];
    }

    // Count of sample points <= x
    let (mut lo, mut hi) = (0, n);
    while lo < hi {
        let mid = (lo + hi) / 2;
        if xp[mid] <= x {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    let Some(k) = lo.checked_sub(1) else {
        // Only reachable with NaN sample points
        return f64::NAN;
    };
    if k + 1 >= n {
        return fp[n - 1];
    }

    let t = (x - xp[k]) / (xp[k + 1] - xp[k]);
    fp[k] + t * (fp[k + 1] - fp[k])
}

/// `(row, col)` of the largest non-NaN cell. Ties keep
/// the first cell in row-major order.
pub fn argmax_2d(grid: ArrayView2<'_, f64>) -> Option<(usize, usize)> {
    grid.indexed_iter()
        .filter(|(_, v)| !v.is_nan())
        .fold(None, |best: Option<((usize, usize), f64)>, (idx, &v)| match best {
            Some((_, best_v)) if v <= best_v => best,
            _ => Some((idx, v)),
        })
        .map(|(idx, _)| idx)
}

/// Sum over rows, leaving one value per column.
pub fn marginalize_rows(grid: ArrayView2<'_, f64>) -> Array1<f64> {
    grid.sum_axis(Axis(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_linspace() {
        let v = linspace(-3.0, 3.0, 7);
        assert_eq!(v.len(), 7);
        assert_eq!(v[0], -3.0);
        assert_eq!(v[6], 3.0);
        assert!((v[3]).abs() < EPS);
        assert_eq!(linspace(2.0, 5.0, 1), array![2.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_meshgrid_xy_indexing() {
        let xs = array![1.0, 2.0, 3.0];
        let ys = array![10.0, 20.0];
        let (xx, yy) = meshgrid(xs.view(), ys.view());
        assert_eq!(xx.dim(), (2, 3));
        assert_eq!(yy.dim(), (2, 3));
        assert_eq!(xx, array![[1.0, 2.0, 3.0], [1.0, 2.0, 3.0]]);
        assert_eq!(yy, array![[10.0, 10.0, 10.0], [20.0, 20.0, 20.0]]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let v = array![1.0, 3.0, 4.0];
        let once = normalize(v.view());
        let twice = normalize(once.view());
        assert!((once.sum() - 1.0).abs() < EPS);
        for (a, b) in once.iter().zip(twice.iter()) {
            assert!((a - b).abs() < EPS);
        }

        let g = array![[1.0, 1.0], [2.0, 4.0]];
        let once = normalize_grid(g.view());
        let twice = normalize_grid(once.view());
        assert!((once.sum() - 1.0).abs() < EPS);
        assert!((once[[1, 1]] - 0.5).abs() < EPS);
        assert!((&once - &twice).iter().all(|d| d.abs() < EPS));
    }

    #[test]
    fn test_normalize_zero_sum_is_nan() {
        let v = array![0.0, 0.0];
        assert!(normalize(v.view()).iter().all(|x| x.is_nan()));
    }

    #[test]
    fn test_cumsum() {
        let v = array![0.25, 0.25, 0.5];
        assert_eq!(cumsum(v.view()), array![0.25, 0.5, 1.0]);
    }

    #[test]
    fn test_interp_inside_and_clamped() {
        let xp = array![0.0, 1.0, 2.0];
        let fp = array![0.0, 10.0, 30.0];
        assert!((interp(0.5, xp.view(), fp.view()) - 5.0).abs() < EPS);
        assert!((interp(1.5, xp.view(), fp.view()) - 20.0).abs() < EPS);
        assert_eq!(interp(1.0, xp.view(), fp.view()), 10.0);
        assert_eq!(interp(-1.0, xp.view(), fp.view()), 0.0);
        assert_eq!(interp(5.0, xp.view(), fp.view()), 30.0);
        assert!(interp(f64::NAN, xp.view(), fp.view()).is_nan());
    }

    #[test]
    fn test_interp_repeated_sample_points() {
        // Flat cdf stretch: two points share x = 0.5
        let xp = array![0.0, 0.5, 0.5, 1.0];
        let fp = array![-1.0, 0.0, 1.0, 2.0];
        let v = interp(0.5, xp.view(), fp.view());
        assert!(v.is_finite());
        assert_eq!(v, 1.0);
        assert!((interp(0.75, xp.view(), fp.view()) - 1.5).abs() < EPS);
    }

    #[test]
    fn test_argmax_first_occurrence() {
        let g = array![[0.1, 0.2, 0.1], [0.1, 0.1, 0.5], [0.5, 0.1, 0.1]];
        assert_eq!(argmax_2d(g.view()), Some((1, 2)));

        let flat = Array2::<f64>::ones((2, 2));
        assert_eq!(argmax_2d(flat.view()), Some((0, 0)));
    }

    #[test]
    fn test_argmax_skips_nan() {
        let g = array![[f64::NAN, 0.1], [0.3, f64::NAN]];
        assert_eq!(argmax_2d(g.view()), Some((1, 0)));

        let all_nan = Array2::from_elem((2, 2), f64::NAN);
        assert_eq!(argmax_2d(all_nan.view()), None);
        assert_eq!(argmax_2d(Array2::<f64>::zeros((0, 3)).view()), None);
    }

    #[test]
    fn test_marginalize_rows() {
        let g = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        assert_eq!(marginalize_rows(g.view()), array![9.0, 12.0]);
    }
}
