// Metrica - Evaluation metrics for model predictions
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! # Metrica - Evaluation metrics for model predictions
//!
//! A small set of evaluation metrics behind one trait, plus a template-based
//! generator that turns results into readable sentences.
//!
//! ## Key Features
//!
//! - **One contract**: every metric implements [`Metric`] and returns a [`MetricResult`]
//! - **Regression**: [`MeanSquaredError`], [`MeanAbsoluteError`]
//! - **Classification**: [`Accuracy`], [`F1Score`], [`LogLoss`]
//! - **Descriptions**: YAML templates rendered by [`DescriptionGenerator`]
//!
//! ## Quick Start
//!
//! ```rust
//! use metrica::{DescriptionGenerator, MeanSquaredError, Metric, MetricKind};
//!
//! let y_true = [3.0, -0.5, 2.0, 7.0];
//! let y_pred = [2.5, 0.0, 2.0, 8.0];
//!
//! let result = MeanSquaredError.calculate(&y_true, &y_pred).unwrap();
//! assert_eq!(result.value(), 0.375);
//!
//! // Same metric, chosen by identifier
//! let kind: MetricKind = "mean_absolute_error".parse().unwrap();
//! assert_eq!(kind.calculate(&y_true, &y_pred).unwrap().value(), 0.5);
//!
//! // Describe
//! let text = DescriptionGenerator::new().generate(&result);
//! assert!(text.contains("0.3750"));
//! ```
//!
//! ## Modules
//!
//! - [`metric`]: The `Metric` trait and shape checking
//! - [`result`]: Result values
//! - [`regression`]: Regression metrics
//! - [`classification`]: Classification metrics
//! - [`kind`]: Runtime selection of built-in metrics
//! - [`describe`]: Description templates and generator
//! - [`error`]: Error types
//!
//! ## Feature flags
//!
//! - `logging`: emit diagnostics through the `log` facade

// Modules
pub mod classification;
pub mod describe;
pub mod error;
pub mod kind;
pub mod metric;
pub mod regression;
pub mod result;

// Re-exports for convenient access
pub use classification::{Accuracy, ConfusionCounts, F1Score, LogLoss};
pub use describe::{DescriptionGenerator, GeneratorConfig, TemplateEntry, TemplateStore};
pub use error::{MetricError, Result, TemplateError};
pub use kind::{evaluate_all, MetricKind};
pub use metric::{ensure_same_shape, Metric};
pub use regression::{MeanAbsoluteError, MeanSquaredError};
pub use result::{Metadata, MetricResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
