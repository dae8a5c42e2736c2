use std::fmt;

use thiserror::Error;

use super::regression::RegressionModel;

/// Dollars per unit of user input.
pub const SALARY_UNIT: f64 = 1_000_000.0;

/// Rejected salary input. The message is shown to the user verbatim.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum ValidationError {
    #[error("Please enter a valid salary greater than 0.")]
    Missing,

    #[error("Please enter a valid salary greater than 0.")]
    NotPositive(f64),

    #[error("Please enter a valid salary greater than 0.")]
    NotFinite(f64),
}

/// One answered prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// The salary as entered, in millions.
    pub input_salary_millions: f64,
    /// The salary in dollars.
    pub salary: f64,
    /// Predicted three-point accuracy in percent.
    pub predicted_percentage: f64,
}

impl Prediction {
    /// Hover label for the predicted point.
    pub fn hover_text(&self) -> String {
        format!(
            "Salary: ${}M, Predicted 3PT%: {:.2}%",
            self.input_salary_millions, self.predicted_percentage
        )
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Predicted Three-Point Accuracy: {:.2}%",
            self.predicted_percentage
        )
    }
}

/// Validate a salary in millions and predict accuracy for it.
///
/// Absent, non-positive and non-finite inputs never reach the model.
pub fn predict_for_salary(
    model: &RegressionModel,
    salary_input_millions: Option<f64>,
) -> Result<Prediction, ValidationError> {
    let millions = salary_input_millions.ok_or(ValidationError::Missing)?;
    if !millions.is_finite() {
        return Err(ValidationError::NotFinite(millions));
    }
    if millions <= 0.0 {
        return Err(ValidationError::NotPositive(millions));
    }

    let salary = millions * SALARY_UNIT;
    let predicted_percentage = model.predict(salary) * 100.0;
    log::debug!("Predicted {predicted_percentage:.4}% for salary ${salary}");

    Ok(Prediction {
        input_salary_millions: millions,
        salary,
        predicted_percentage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> RegressionModel {
        RegressionModel::fit_xy(&[1.0e6, 5.0e6, 10.0e6], &[0.30, 0.35, 0.40]).unwrap()
    }

    #[test]
    fn rejects_missing_zero_negative_and_nan() {
        let m = model();
        assert_eq!(predict_for_salary(&m, None), Err(ValidationError::Missing));
        assert_eq!(
            predict_for_salary(&m, Some(0.0)),
            Err(ValidationError::NotPositive(0.0))
        );
        assert_eq!(
            predict_for_salary(&m, Some(-5.0)),
            Err(ValidationError::NotPositive(-5.0))
        );
        assert!(matches!(
            predict_for_salary(&m, Some(f64::NAN)),
            Err(ValidationError::NotFinite(v)) if v.is_nan()
        ));
        assert_eq!(
            predict_for_salary(&m, Some(f64::INFINITY)),
            Err(ValidationError::NotFinite(f64::INFINITY))
        );
        assert_eq!(
            predict_for_salary(&m, Some(f64::NEG_INFINITY)),
            Err(ValidationError::NotFinite(f64::NEG_INFINITY))
        );
    }

    #[test]
    fn error_message_is_user_facing() {
        assert_eq!(
            ValidationError::Missing.to_string(),
            "Please enter a valid salary greater than 0."
        );
        assert_eq!(
            ValidationError::NotPositive(-1.0).to_string(),
            ValidationError::Missing.to_string()
        );
        assert_eq!(
            ValidationError::NotFinite(f64::NAN).to_string(),
            ValidationError::Missing.to_string()
        );
    }

    #[test]
    fn converts_millions_and_formats() {
        let p = predict_for_salary(&model(), Some(5.0)).unwrap();
        assert_eq!(p.salary, 5_000_000.0);
        assert!((p.predicted_percentage - 35.0).abs() < 1e-8);
        assert_eq!(p.to_string(), "Predicted Three-Point Accuracy: 35.00%");
        assert_eq!(p.hover_text(), "Salary: $5M, Predicted 3PT%: 35.00%");
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let m = model();
        let a = predict_for_salary(&m, Some(7.25)).unwrap();
        let b = predict_for_salary(&m, Some(7.25)).unwrap();
        assert_eq!(
            a.predicted_percentage.to_bits(),
            b.predicted_percentage.to_bits()
        );
    }
}
