// Metrica - Evaluation metrics for model predictions
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Natural-language descriptions of metric results

use super::store::TemplateStore;
use super::template::render;
use crate::error::TemplateError;
use crate::result::{display_fixed, MetricResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Description generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// YAML template file. `None` uses the bundled templates.
    pub prompt_file: Option<PathBuf>,
    /// Decimal places in the fallback sentence.
    pub fallback_precision: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            prompt_file: None,
            fallback_precision: 4,
        }
    }
}

/// Turns a [`MetricResult`] into a sentence
///
/// The template for `result.name()` is looked up and rendered with the
/// result's value. When there is no template, or it cannot be rendered, the
/// generator falls back to `"The <name> metric value is <value>."`.
///
/// # Example
///
/// ```
/// use metrica::{DescriptionGenerator, MeanSquaredError, Metric};
///
/// let result = MeanSquaredError
///     .calculate(&[3.0, -0.5, 2.0, 7.0], &[2.5, 0.0, 2.0, 8.0])
///     .unwrap();
/// let text = DescriptionGenerator::new().generate(&result);
/// assert!(text.contains("Mean Squared Error"));
/// assert!(text.contains("0.3750"));
/// ```
#[derive(Debug, Clone)]
pub struct DescriptionGenerator {
    store: TemplateStore,
    fallback_precision: usize,
}

impl DescriptionGenerator {
    /// Generator using the bundled templates
    pub fn new() -> Self {
        Self::with_store(TemplateStore::bundled())
    }

    /// Generator using an explicit template store
    pub fn with_store(store: TemplateStore) -> Self {
        Self {
            store,
            fallback_precision: GeneratorConfig::default().fallback_precision,
        }
    }

    /// Generator built from configuration
    pub fn with_config(config: &GeneratorConfig) -> Result<Self, TemplateError> {
        let store = match &config.prompt_file {
            Some(path) => TemplateStore::from_file(path)?,
            None => TemplateStore::bundled(),
        };
        Ok(Self {
            store,
            fallback_precision: config.fallback_precision,
        })
    }

    /// Generator reading templates from a YAML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, TemplateError> {
        Self::with_config(&GeneratorConfig {
            prompt_file: Some(path.into()),
            ..Default::default()
        })
    }

    /// Template store in use
    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// Describe a result
    pub fn generate(&self, result: &MetricResult) -> String {
        if let Some(template) = self.store.get_template(result.name()) {
            match render(template, result.value()) {
                Ok(text) => return text,
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    log::warn!("falling back to generic description: {}", _e);
                }
            }
        }
        self.fallback(result)
    }

    fn fallback(&self, result: &MetricResult) -> String {
        format!(
            "The {} metric value is {}.",
            result.name(),
            display_fixed(result.value(), self.fallback_precision)
        )
    }
}

impl Default for DescriptionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::describe::TemplateEntry;

    fn store_with(name: &str, template: &str) -> TemplateStore {
        let mut store = TemplateStore::new();
        store.insert(name, TemplateEntry::new(template));
        store
    }

    #[test]
    fn test_generate_with_template() {
        let generator = DescriptionGenerator::with_store(store_with("accuracy", "Acc={value:.1%}"));
        let text = generator.generate(&MetricResult::new("accuracy", 0.75));
        assert_eq!(text, "Acc=75.0%");
    }

    #[test]
    fn test_fallback_without_template() {
        let generator = DescriptionGenerator::with_store(TemplateStore::new());
        let text = generator.generate(&MetricResult::new("custom_metric", 0.123456));
        assert_eq!(text, "The custom_metric metric value is 0.1235.");
    }

    #[test]
    fn test_fallback_on_bad_template() {
        let generator = DescriptionGenerator::with_store(store_with("accuracy", "Acc={score}"));
        let text = generator.generate(&MetricResult::new("accuracy", 0.5));
        assert_eq!(text, "The accuracy metric value is 0.5000.");
    }

    #[test]
    fn test_empty_input_reads_nan() {
        use crate::{MeanSquaredError, Metric};

        let result = MeanSquaredError.calculate(&[], &[]).unwrap();

        let bundled = DescriptionGenerator::new().generate(&result);
        assert!(bundled.contains("is nan."), "{}", bundled);
        assert!(!bundled.contains("NaN"));

        let fallback = DescriptionGenerator::with_store(TemplateStore::new()).generate(&result);
        assert_eq!(fallback, "The mean_squared_error metric value is nan.");
        assert_eq!(MeanSquaredError.describe(&result), "The mean_squared_error is nan.");
    }

    #[test]
    fn test_fallback_precision_from_config() {
        let config = GeneratorConfig {
            prompt_file: Some(PathBuf::from("/nonexistent/metrica/prompts.yaml")),
            fallback_precision: 2,
        };
        let generator = DescriptionGenerator::with_config(&config).unwrap();
        assert!(generator.store().is_empty());
        let text = generator.generate(&MetricResult::new("log_loss", 0.6931));
        assert_eq!(text, "The log_loss metric value is 0.69.");
    }

    #[test]
    fn test_default_uses_bundled_templates() {
        let generator = DescriptionGenerator::default();
        let text = generator.generate(&MetricResult::new("mean_squared_error", 0.375));
        assert!(text.contains("Mean Squared Error"));
        assert!(text.contains("0.3750"));
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: GeneratorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.fallback_precision, 4);
    }
}
