//! Prediction and comparison engine.
//!
//! ```text
//!   Dataset ──fit──▶ RegressionModel ──sample──▶ RegressionCurve
//!      │                   │
//!      ▼                   ▼
//!   compare()      predict_for_salary()
//! ```
//!
//! [`Engine`] is built once at startup and only read afterwards, so it can be
//! cloned into any number of threads.

pub mod compare;
pub mod predict;
pub mod regression;

use std::sync::Arc;

use crate::config::ModelConfig;
use crate::data::model::Dataset;

use compare::{Comparison, ComparisonError};
use predict::{Prediction, ValidationError};
use regression::{FitError, RegressionCurve, RegressionModel};

/// Read-only context handed to the services and the UI.
#[derive(Debug, Clone)]
pub struct Engine {
    dataset: Arc<Dataset>,
    model: Arc<RegressionModel>,
    curve: Arc<RegressionCurve>,
}

impl Engine {
    /// Fit the model on the full dataset and cache the plotted curve.
    pub fn build(dataset: Dataset, config: &ModelConfig) -> Result<Self, FitError> {
        let model = RegressionModel::fit(&dataset)?;
        let curve = match dataset.salary_range() {
            Some((min, max)) => model.sample_curve(min, max, config.curve_samples),
            None => RegressionCurve::default(),
        };

        let (a, b, c) = model.coefficients();
        log::info!(
            "Fitted 3P% = {a:.6} + {b:.6e}·salary + {c:.6e}·salary² on {} players",
            dataset.len()
        );

        Ok(Engine {
            dataset: Arc::new(dataset),
            model: Arc::new(model),
            curve: Arc::new(curve),
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn model(&self) -> &RegressionModel {
        &self.model
    }

    pub fn curve(&self) -> &RegressionCurve {
        &self.curve
    }

    /// See [`predict::predict_for_salary`].
    pub fn predict(&self, salary_millions: Option<f64>) -> Result<Prediction, ValidationError> {
        predict::predict_for_salary(&self.model, salary_millions)
    }

    /// See [`compare::compare`].
    pub fn compare(&self, name1: &str, name2: &str) -> Result<Comparison, ComparisonError> {
        compare::compare(&self.dataset, name1, name2)
    }
}
