// Metrica - Evaluation metrics for model predictions
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Regression metrics: MSE, MAE

use crate::error::Result;
use crate::metric::{ensure_same_shape, mean, Metric};
use crate::result::MetricResult;

/// Mean Squared Error (MSE)
///
/// MSE = mean((y_true - y_pred)²)
///
/// # Example
///
/// ```
/// use metrica::{MeanSquaredError, Metric};
///
/// let result = MeanSquaredError
///     .calculate(&[3.0, -0.5, 2.0, 7.0], &[2.5, 0.0, 2.0, 8.0])
///     .unwrap();
/// assert_eq!(result.value(), 0.375);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeanSquaredError;

impl MeanSquaredError {
    /// Metric identifier
    pub const NAME: &'static str = "mean_squared_error";
}

impl Metric for MeanSquaredError {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn calculate(&self, y_true: &[f64], y_pred: &[f64]) -> Result<MetricResult> {
        let n = ensure_same_shape(Self::NAME, y_true, y_pred)?;

        let sum: f64 = y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(&t, &p)| (t - p).powi(2))
            .sum();
        let mse = mean(Self::NAME, sum, n);

        #[cfg(feature = "logging")]
        log::debug!("{} over {} samples: {}", Self::NAME, n, mse);

        Ok(MetricResult::new(Self::NAME, mse))
    }
}

/// Mean Absolute Error (MAE)
///
/// MAE = mean(|y_true - y_pred|)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeanAbsoluteError;

impl MeanAbsoluteError {
    /// Metric identifier
    pub const NAME: &'static str = "mean_absolute_error";
}

impl Metric for MeanAbsoluteError {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn calculate(&self, y_true: &[f64], y_pred: &[f64]) -> Result<MetricResult> {
        let n = ensure_same_shape(Self::NAME, y_true, y_pred)?;

        let sum: f64 = y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(&t, &p)| (t - p).abs())
            .sum();
        let mae = mean(Self::NAME, sum, n);

        #[cfg(feature = "logging")]
        log::debug!("{} over {} samples: {}", Self::NAME, n, mae);

        Ok(MetricResult::new(Self::NAME, mae))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MetricError;

    const Y_TRUE: [f64; 4] = [3.0, -0.5, 2.0, 7.0];
    const Y_PRED: [f64; 4] = [2.5, 0.0, 2.0, 8.0];

    #[test]
    fn test_mse_value() {
        let result = MeanSquaredError.calculate(&Y_TRUE, &Y_PRED).unwrap();
        assert_eq!(result.name(), "mean_squared_error");
        assert_eq!(result.value(), 0.375);
    }

    #[test]
    fn test_mae_value() {
        let result = MeanAbsoluteError.calculate(&Y_TRUE, &Y_PRED).unwrap();
        assert_eq!(result.name(), "mean_absolute_error");
        assert_eq!(result.value(), 0.5);
    }

    #[test]
    fn test_perfect_prediction() {
        assert_eq!(MeanSquaredError.calculate(&Y_TRUE, &Y_TRUE).unwrap().value(), 0.0);
        assert_eq!(MeanAbsoluteError.calculate(&Y_TRUE, &Y_TRUE).unwrap().value(), 0.0);
    }

    #[test]
    fn test_mse_penalizes_large_errors() {
        // Same MAE, different spread
        let even = MeanSquaredError.calculate(&[0.0, 0.0], &[1.0, 1.0]).unwrap();
        let skewed = MeanSquaredError.calculate(&[0.0, 0.0], &[0.0, 2.0]).unwrap();
        assert!(skewed.value() > even.value());
    }

    #[test]
    fn test_shape_mismatch() {
        let err = MeanSquaredError.calculate(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(err, MetricError::ShapeMismatch { ref metric, .. } if metric == "mean_squared_error"));

        let err = MeanAbsoluteError.calculate(&[], &[1.0]).unwrap_err();
        assert!(matches!(err, MetricError::ShapeMismatch { ref metric, .. } if metric == "mean_absolute_error"));
    }

    #[test]
    fn test_empty_input_is_nan() {
        assert!(MeanSquaredError.calculate(&[], &[]).unwrap().value().is_nan());
        assert!(MeanAbsoluteError.calculate(&[], &[]).unwrap().value().is_nan());
    }
}
