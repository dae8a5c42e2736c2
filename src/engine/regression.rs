//! Degree-2 polynomial least squares of three-point fraction on salary.
//!
//! Salary is expanded into `[1, z, z²]` with `z = (salary − center) / scale`.
//! That basis spans the same polynomials as `[1, salary, salary²]`, so the
//! fit is identical, but the columns stay O(1) instead of O(1e14) for dollar
//! salaries. The system is solved with an SVD.

use nalgebra::{DMatrix, DVector};
use thiserror::Error;

use crate::data::model::Dataset;

/// Polynomial degree of the model.
pub const DEGREE: usize = 2;

#[derive(Debug, Error, PartialEq)]
pub enum FitError {
    #[error("need at least {required} distinct salary values to fit, found {distinct}")]
    InsufficientData { distinct: usize, required: usize },

    #[error("least squares system could not be solved")]
    Singular,
}

// ---------------------------------------------------------------------------
// Feature expansion
// ---------------------------------------------------------------------------

/// Affine rescaling plus power expansion of a single scalar input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolynomialFeatures {
    degree: usize,
    center: f64,
    scale: f64,
}

impl PolynomialFeatures {
    /// Derive the rescaling from the training inputs.
    fn fit(degree: usize, xs: &[f64]) -> Self {
        let n = xs.len().max(1) as f64;
        let center = xs.iter().sum::<f64>() / n;
        let var = xs.iter().map(|x| (x - center).powi(2)).sum::<f64>() / n;
        let scale = if var.sqrt() > 0.0 { var.sqrt() } else { 1.0 };
        PolynomialFeatures {
            degree,
            center,
            scale,
        }
    }

    /// `[1, z, z², ..]` for one input.
    fn expand(&self, x: f64) -> impl Iterator<Item = f64> {
        let z = (x - self.center) / self.scale;
        (0..=self.degree).map(move |p| z.powi(p as i32))
    }

    fn design_matrix(&self, xs: &[f64]) -> DMatrix<f64> {
        let cols = self.degree + 1;
        let values: Vec<f64> = xs.iter().flat_map(|&x| self.expand(x)).collect();
        DMatrix::from_row_slice(xs.len(), cols, &values)
    }
}

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

/// A fitted polynomial. Immutable after [`RegressionModel::fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionModel {
    features: PolynomialFeatures,
    /// Coefficients in the rescaled basis, lowest power first.
    beta: [f64; DEGREE + 1],
}

impl RegressionModel {
    /// Fit three-point fraction on salary over the whole dataset.
    pub fn fit(dataset: &Dataset) -> Result<Self, FitError> {
        Self::fit_xy(&dataset.salaries(), &dataset.three_point_fractions())
    }

    /// Fit `ys` on `xs` by ordinary least squares.
    pub fn fit_xy(xs: &[f64], ys: &[f64]) -> Result<Self, FitError> {
        let required = DEGREE + 1;
        let distinct = count_distinct(xs);
        if distinct < required {
            return Err(FitError::InsufficientData { distinct, required });
        }

        let features = PolynomialFeatures::fit(DEGREE, xs);
        let x = features.design_matrix(xs);
        let y = DVector::from_column_slice(ys);

        let svd = x.svd(true, true);
        let beta = svd.solve(&y, 1e-12).map_err(|_| FitError::Singular)?;
        if !beta.iter().all(|v| v.is_finite()) {
            return Err(FitError::Singular);
        }
        let beta: [f64; DEGREE + 1] = beta
            .as_slice()
            .try_into()
            .map_err(|_| FitError::Singular)?;

        Ok(RegressionModel { features, beta })
    }

    /// Predicted three-point fraction (not yet ×100) at `salary` dollars.
    pub fn predict(&self, salary: f64) -> f64 {
        self.features
            .expand(salary)
            .zip(&self.beta)
            .map(|(f, b)| f * b)
            .sum()
    }

    /// Polynomial in raw salary units: `(intercept, linear, quadratic)`.
    pub fn coefficients(&self) -> (f64, f64, f64) {
        let (m, s) = (self.features.center, self.features.scale);
        let [c0, c1, c2] = self.beta;
        let quadratic = c2 / (s * s);
        let linear = c1 / s - 2.0 * c2 * m / (s * s);
        let intercept = c0 - c1 * m / s + c2 * m * m / (s * s);
        (intercept, linear, quadratic)
    }

    /// Evaluate the model on `linspace(min, max, samples)`.
    pub fn sample_curve(&self, min: f64, max: f64, samples: usize) -> RegressionCurve {
        let salaries = linspace(min, max, samples);
        let percentages = salaries.iter().map(|&s| self.predict(s) * 100.0).collect();
        RegressionCurve {
            salaries,
            percentages,
        }
    }
}

fn count_distinct(xs: &[f64]) -> usize {
    let mut sorted: Vec<f64> = xs.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();
    sorted.len()
}

/// Evenly spaced values over `[start, stop]`, endpoints included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            out[n - 1] = stop;
            out
        }
    }
}

// ---------------------------------------------------------------------------
// Sampled curve for plotting
// ---------------------------------------------------------------------------

/// The regression line: salaries in dollars, predictions in percent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegressionCurve {
    pub salaries: Vec<f64>,
    pub percentages: Vec<f64>,
}

impl RegressionCurve {
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.salaries
            .iter()
            .zip(&self.percentages)
            .map(|(&x, &y)| [x, y])
    }

    pub fn len(&self) -> usize {
        self.salaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.salaries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_quadratic_is_recovered() {
        // y = 0.2 + 3e-8 x - 1e-15 x²
        let xs: Vec<f64> = (1..=20).map(|i| i as f64 * 1.5e6).collect();
        let ys: Vec<f64> = xs.iter().map(|x| 0.2 + 3e-8 * x - 1e-15 * x * x).collect();
        let model = RegressionModel::fit_xy(&xs, &ys).unwrap();

        for (&x, &y) in xs.iter().zip(&ys) {
            assert!((model.predict(x) - y).abs() < 1e-9, "x={x}");
        }

        let (a, b, c) = model.coefficients();
        assert!((a - 0.2).abs() < 1e-8);
        assert!((b - 3e-8).abs() / 3e-8 < 1e-6);
        assert!((c + 1e-15).abs() / 1e-15 < 1e-6);
    }

    #[test]
    fn collinear_data_has_no_curvature() {
        // Collinear points: the quadratic term vanishes.
        let xs = [1.0e6, 2.0e6, 3.0e6, 4.0e6, 5.0e6];
        let ys = [0.31, 0.34, 0.37, 0.40, 0.43];
        let model = RegressionModel::fit_xy(&xs, &ys).unwrap();
        assert!((model.predict(3.0e6) - 0.37).abs() < 1e-10);
        assert!(model.coefficients().2.abs() < 1e-20);
    }

    #[test]
    fn flat_data_has_only_an_intercept() {
        let xs = [1.0e6, 2.0e6, 4.0e6, 8.0e6];
        let ys = [0.35; 4];
        let model = RegressionModel::fit_xy(&xs, &ys).unwrap();
        let (a, b, c) = model.coefficients();
        assert!((a - 0.35).abs() < 1e-12);
        assert!(b.abs() < 1e-18);
        assert!(c.abs() < 1e-24);
    }

    #[test]
    fn three_points_interpolate_exactly() {
        let xs = [1.0e6, 5.0e6, 10.0e6];
        let ys = [0.30, 0.35, 0.40];
        let model = RegressionModel::fit_xy(&xs, &ys).unwrap();
        for (&x, &y) in xs.iter().zip(&ys) {
            assert!((model.predict(x) - y).abs() < 1e-10);
        }
    }

    #[test]
    fn fewer_than_three_distinct_salaries_rejected() {
        let err = RegressionModel::fit_xy(&[1.0e6, 1.0e6, 2.0e6], &[0.3, 0.4, 0.5]).unwrap_err();
        assert_eq!(
            err,
            FitError::InsufficientData {
                distinct: 2,
                required: 3
            }
        );
        assert!(RegressionModel::fit_xy(&[], &[]).is_err());
    }

    #[test]
    fn linspace_matches_numpy() {
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(2.0, 7.0, 1), vec![2.0]);
        assert!(linspace(2.0, 7.0, 0).is_empty());
        let xs = linspace(1.1e6, 4.8e7, 100);
        assert_eq!(xs.len(), 100);
        assert_eq!(xs[0], 1.1e6);
        assert_eq!(xs[99], 4.8e7);
    }

    #[test]
    fn curve_is_percent_scaled() {
        let xs = [1.0e6, 5.0e6, 10.0e6];
        let ys = [0.30, 0.35, 0.40];
        let model = RegressionModel::fit_xy(&xs, &ys).unwrap();
        let curve = model.sample_curve(1.0e6, 10.0e6, 10);
        assert_eq!(curve.len(), 10);
        assert!((curve.percentages[0] - 30.0).abs() < 1e-8);
        assert!((curve.percentages[9] - 40.0).abs() < 1e-8);
        assert_eq!(curve.points().count(), 10);
    }
}
