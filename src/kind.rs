// Metrica - Evaluation metrics for model predictions
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Built-in metric selection
//!
//! [`MetricKind`] names each built-in metric so it can be chosen at runtime
//! (from a config file, a CLI flag, a report column) and dispatched without
//! boxing.

use crate::classification::{Accuracy, F1Score, LogLoss};
use crate::error::{MetricError, Result};
use crate::metric::Metric;
use crate::regression::{MeanAbsoluteError, MeanSquaredError};
use crate::result::MetricResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Built-in metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// [`MeanSquaredError`]
    MeanSquaredError,
    /// [`MeanAbsoluteError`]
    MeanAbsoluteError,
    /// [`Accuracy`]
    Accuracy,
    /// [`F1Score`]
    F1Score,
    /// [`LogLoss`]
    LogLoss,
}

impl MetricKind {
    /// Every built-in metric, in declaration order
    pub const ALL: [MetricKind; 5] = [
        MetricKind::MeanSquaredError,
        MetricKind::MeanAbsoluteError,
        MetricKind::Accuracy,
        MetricKind::F1Score,
        MetricKind::LogLoss,
    ];

    /// Identifier, identical to the concrete metric's `name()`
    pub fn name(self) -> &'static str {
        match self {
            MetricKind::MeanSquaredError => MeanSquaredError::NAME,
            MetricKind::MeanAbsoluteError => MeanAbsoluteError::NAME,
            MetricKind::Accuracy => Accuracy::NAME,
            MetricKind::F1Score => F1Score::NAME,
            MetricKind::LogLoss => LogLoss::NAME,
        }
    }

    /// Resolve an identifier
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| MetricError::UnknownMetric(name.to_string()))
    }

    /// Concrete calculator for this kind
    pub fn metric(self) -> Box<dyn Metric> {
        match self {
            MetricKind::MeanSquaredError => Box::new(MeanSquaredError),
            MetricKind::MeanAbsoluteError => Box::new(MeanAbsoluteError),
            MetricKind::Accuracy => Box::new(Accuracy),
            MetricKind::F1Score => Box::new(F1Score),
            MetricKind::LogLoss => Box::new(LogLoss),
        }
    }

    /// Compute this metric
    pub fn calculate(self, y_true: &[f64], y_pred: &[f64]) -> Result<MetricResult> {
        match self {
            MetricKind::MeanSquaredError => MeanSquaredError.calculate(y_true, y_pred),
            MetricKind::MeanAbsoluteError => MeanAbsoluteError.calculate(y_true, y_pred),
            MetricKind::Accuracy => Accuracy.calculate(y_true, y_pred),
            MetricKind::F1Score => F1Score.calculate(y_true, y_pred),
            MetricKind::LogLoss => LogLoss.calculate(y_true, y_pred),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricKind {
    type Err = MetricError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// Run several metrics over the same inputs
///
/// Stops at the first error.
pub fn evaluate_all(
    kinds: &[MetricKind],
    y_true: &[f64],
    y_pred: &[f64],
) -> Result<Vec<MetricResult>> {
    kinds
        .iter()
        .map(|kind| kind.calculate(y_true, y_pred))
        .collect()
}
