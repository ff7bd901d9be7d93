// Metrica - Evaluation metrics for model predictions
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Metric result values

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Free-form annotations attached to a result
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// Outcome of a single metric calculation
///
/// Results are plain values: every `calculate` call builds a fresh one and
/// nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    value: f64,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<Metadata>,
}

impl MetricResult {
    /// Create a result without metadata
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            value,
            name: name.into(),
            metadata: None,
        }
    }

    /// Attach metadata
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Calculated metric value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Identifier of the metric that produced this result
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Metadata, if any was attached
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}

impl fmt::Display for MetricResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, display_value(self.value))
    }
}

/// Render a float the way it reads in reports: shortest round-trip digits,
/// integral values keep a trailing `.0`, exponent form outside `1e-4..1e16`.
pub(crate) fn display_value(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = split_exponent(&scientific);
    if !(-4..16).contains(&exponent) {
        return join_exponent(mantissa, exponent);
    }
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Fixed decimals (`{:.4f}` style)
pub(crate) fn display_fixed(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    format!("{:.*}", precision, value)
}

/// Exponent notation with a signed, two-digit exponent (`1.5000e-05`)
pub(crate) fn display_exponent(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    let scientific = format!("{:.*e}", precision, value);
    let (mantissa, exponent) = split_exponent(&scientific);
    join_exponent(mantissa, exponent)
}

/// `precision` significant digits, fixed or exponent form depending on
/// magnitude, trailing zeros removed (`{:.4g}` style)
pub(crate) fn display_general(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    let digits = precision.max(1);
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = split_exponent(&scientific);
    if exponent >= -4 && exponent < digits as i32 {
        let decimals = (digits as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    } else {
        join_exponent(trim_fraction(mantissa), exponent)
    }
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value > 0.0 {
        "inf".to_string()
    } else {
        "-inf".to_string()
    }
}

fn split_exponent(scientific: &str) -> (&str, i32) {
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse().unwrap_or(0)),
        None => (scientific, 0),
    }
}

fn join_exponent(mantissa: &str, exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
