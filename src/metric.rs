// Metrica - Evaluation metrics for model predictions
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Metric contract
//!
//! Every metric compares ground truth (`y_true`) against predictions
//! (`y_pred`) and reduces them to a single [`MetricResult`]. Metrics are
//! stateless: the only thing an instance owns is its identifier, so one
//! instance can be shared freely between threads.

use crate::error::{MetricError, Result};
use crate::result::{display_value, MetricResult};

/// Trait for evaluation metrics
pub trait Metric: Send + Sync {
    /// Identifier of the metric (snake_case, e.g. `mean_squared_error`)
    fn name(&self) -> &str;

    /// Compute the metric over two sequences of equal length
    ///
    /// Returns [`MetricError::ShapeMismatch`] when the lengths differ.
    fn calculate(&self, y_true: &[f64], y_pred: &[f64]) -> Result<MetricResult>;

    /// Plain one-sentence description of a result
    ///
    /// See [`DescriptionGenerator`](crate::describe::DescriptionGenerator)
    /// for template-driven descriptions.
    fn describe(&self, result: &MetricResult) -> String {
        format!("The {} is {}.", self.name(), display_value(result.value()))
    }
}

/// Check that both inputs have the same length, returning it
pub fn ensure_same_shape(metric: &str, y_true: &[f64], y_pred: &[f64]) -> Result<usize> {
    if y_true.len() != y_pred.len() {
        return Err(MetricError::ShapeMismatch {
            metric: metric.to_string(),
            y_true: y_true.len(),
            y_pred: y_pred.len(),
        });
    }
    Ok(y_true.len())
}

/// Arithmetic mean of `count` elements summing to `sum`; NaN when empty
pub(crate) fn mean(metric: &str, sum: f64, count: usize) -> f64 {
    if count == 0 {
        #[cfg(feature = "logging")]
        log::warn!("{}: mean of empty input is undefined", metric);
        #[cfg(not(feature = "logging"))]
        let _ = metric;
        return f64::NAN;
    }
    sum / count as f64
}
