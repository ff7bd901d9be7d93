// Metrica - Evaluation metrics for model predictions
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Error types for Metrica
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias for metric operations
pub type Result<T> = std::result::Result<T, MetricError>;

/// Main error type for metric operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricError {
    /// Ground truth and predictions differ in length
    #[error(
        "y_true and y_pred must have the same shape for {metric} calculation: \
         got {y_true} and {y_pred} elements"
    )]
    ShapeMismatch {
        metric: String,
        y_true: usize,
        y_pred: usize,
    },

    /// No built-in metric carries this identifier
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),
}

/// Errors while loading or rendering description templates
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    /// Template file could not be read
    #[error("Cannot read template file {path}: {message}")]
    Io { path: String, message: String },

    /// Template file is not valid YAML or has the wrong layout
    #[error("Invalid template file: {0}")]
    Parse(String),

    /// Template string could not be formatted
    #[error("Cannot format template {template:?}: {reason}")]
    Format { template: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_display() {
        let err = MetricError::ShapeMismatch {
            metric: "mean_squared_error".to_string(),
            y_true: 4,
            y_pred: 3,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("mean_squared_error"));
        assert!(msg.contains("same shape"));
        assert!(msg.contains("4 and 3"));
    }

    #[test]
    fn test_unknown_metric_display() {
        let err = MetricError::UnknownMetric("r2".to_string());
        assert_eq!(err.to_string(), "Unknown metric: r2");
    }

    #[test]
    fn test_template_error_display() {
        let err = TemplateError::Format {
            template: "{missing}".to_string(),
            reason: "unknown field 'missing'".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("{missing}"));
        assert!(msg.contains("unknown field"));
    }
}
