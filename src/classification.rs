// Metrica - Evaluation metrics for model predictions
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Classification metrics: Accuracy, F1, Log Loss
//!
//! Labels are plain `f64` values. F1 assumes binary labels `0.0` / `1.0`
//! and Log Loss assumes predictions are probabilities of the positive class;
//! neither is validated.

use crate::error::Result;
use crate::metric::{ensure_same_shape, mean, Metric};
use crate::result::MetricResult;

/// Accuracy: fraction of predictions exactly equal to the ground truth
///
/// # Example
///
/// ```
/// use metrica::{Accuracy, Metric};
///
/// let result = Accuracy.calculate(&[1.0, 0.0, 1.0, 1.0], &[1.0, 0.0, 0.0, 1.0]).unwrap();
/// assert_eq!(result.value(), 0.75);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accuracy;

impl Accuracy {
    /// Metric identifier
    pub const NAME: &'static str = "accuracy";
}

impl Metric for Accuracy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn calculate(&self, y_true: &[f64], y_pred: &[f64]) -> Result<MetricResult> {
        let n = ensure_same_shape(Self::NAME, y_true, y_pred)?;

        // Exact comparison, no tolerance
        let correct = y_true
            .iter()
            .zip(y_pred.iter())
            .filter(|(t, p)| t == p)
            .count();
        let accuracy = mean(Self::NAME, correct as f64, n);

        Ok(MetricResult::new(Self::NAME, accuracy))
    }
}

/// Confusion matrix cells for the positive class (label `1.0`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionCounts {
    /// Truth 1, predicted 1
    pub true_positives: usize,
    /// Truth 0, predicted 1
    pub false_positives: usize,
    /// Truth 1, predicted 0
    pub false_negatives: usize,
}

impl ConfusionCounts {
    /// Tally binary labels. Values other than `0.0` / `1.0` land in no cell.
    pub fn tally(y_true: &[f64], y_pred: &[f64]) -> Self {
        let mut counts = Self::default();
        for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
            match (t == 1.0, t == 0.0, p == 1.0, p == 0.0) {
                (true, _, true, _) => counts.true_positives += 1,
                (_, true, true, _) => counts.false_positives += 1,
                (true, _, _, true) => counts.false_negatives += 1,
                _ => {}
            }
        }
        counts
    }

    /// TP / (TP + FP), or 0 when nothing was predicted positive
    pub fn precision(&self) -> f64 {
        ratio(
            self.true_positives,
            self.true_positives + self.false_positives,
        )
    }

    /// TP / (TP + FN), or 0 when there are no actual positives
    pub fn recall(&self) -> f64 {
        ratio(
            self.true_positives,
            self.true_positives + self.false_negatives,
        )
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}

/// F1 Score (harmonic mean of precision and recall)
///
/// F1 = 2 * (precision * recall) / (precision + recall), 0 when both are 0.
///
/// # Example
///
/// ```
/// use metrica::{F1Score, Metric};
///
/// let result = F1Score
///     .calculate(&[1.0, 0.0, 1.0, 1.0, 0.0, 0.0], &[1.0, 0.0, 0.0, 1.0, 0.0, 1.0])
///     .unwrap();
/// assert!((result.value() - 2.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct F1Score;

impl F1Score {
    /// Metric identifier
    pub const NAME: &'static str = "f1_score";

    /// Precision and recall for binary labels
    pub fn precision_recall(y_true: &[f64], y_pred: &[f64]) -> (f64, f64) {
        let counts = ConfusionCounts::tally(y_true, y_pred);
        (counts.precision(), counts.recall())
    }
}

impl Metric for F1Score {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn calculate(&self, y_true: &[f64], y_pred: &[f64]) -> Result<MetricResult> {
        ensure_same_shape(Self::NAME, y_true, y_pred)?;

        let (precision, recall) = Self::precision_recall(y_true, y_pred);
        let f1 = if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        };

        #[cfg(feature = "logging")]
        log::debug!(
            "{}: precision={} recall={} f1={}",
            Self::NAME,
            precision,
            recall,
            f1
        );

        Ok(MetricResult::new(Self::NAME, f1))
    }
}

/// Log Loss (binary cross-entropy)
///
/// LogLoss = -mean(y * ln(p) + (1 - y) * ln(1 - p))
///
/// Predictions are clipped to `[ε, 1 - ε]` (ε = `f64::EPSILON`) so a
/// confident wrong prediction costs at most `-ln(ε)` instead of infinity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogLoss;

impl LogLoss {
    /// Metric identifier
    pub const NAME: &'static str = "log_loss";

    /// Lower clipping bound for probabilities
    pub const EPSILON: f64 = f64::EPSILON;
}

impl Metric for LogLoss {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn calculate(&self, y_true: &[f64], y_pred: &[f64]) -> Result<MetricResult> {
        let n = ensure_same_shape(Self::NAME, y_true, y_pred)?;

        let sum: f64 = y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(&t, &p)| {
                let p = p.clamp(Self::EPSILON, 1.0 - Self::EPSILON);
                t * p.ln() + (1.0 - t) * (1.0 - p).ln()
            })
            .sum();
        let loss = -mean(Self::NAME, sum, n);

        #[cfg(feature = "logging")]
        log::debug!("{} over {} samples: {}", Self::NAME, n, loss);

        Ok(MetricResult::new(Self::NAME, loss))
    }
}
