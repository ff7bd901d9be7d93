// Metrica - Evaluation metrics for model predictions
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Description template store
//!
//! Templates live in a YAML file keyed by metric identifier:
//!
//! ```yaml
//! metrics:
//!   mean_squared_error:
//!     display_name: Mean Squared Error
//!     description_template: "The Mean Squared Error is {value:.4f}."
//! ```

use crate::error::TemplateError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

/// Templates shipped with the crate
const BUNDLED_PROMPTS: &str = include_str!("../../data/prompts.yaml");

/// Template entry for one metric
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// Human-readable metric name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Format string with a `{value}` placeholder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_template: Option<String>,
}

impl TemplateEntry {
    /// Entry holding only a template
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            display_name: None,
            description_template: Some(template.into()),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PromptFile {
    #[serde(default)]
    metrics: BTreeMap<String, TemplateEntry>,
}

/// Mapping from metric identifier to description template
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateStore {
    entries: BTreeMap<String, TemplateEntry>,
}

impl TemplateStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Templates shipped in `data/prompts.yaml`
    pub fn bundled() -> Self {
        Self::from_yaml_str(BUNDLED_PROMPTS).unwrap_or_default()
    }

    /// Parse a YAML document; an empty document yields an empty store
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TemplateError> {
        if yaml.trim().is_empty() {
            return Ok(Self::new());
        }
        let file: Option<PromptFile> =
            serde_yaml::from_str(yaml).map_err(|e| TemplateError::Parse(e.to_string()))?;
        Ok(Self {
            entries: file.unwrap_or_default().metrics,
        })
    }

    /// Load a YAML template file
    ///
    /// A missing file is not an error: the store is simply empty and every
    /// description falls back to the generic sentence.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(yaml) => Self::from_yaml_str(&yaml),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                #[cfg(feature = "logging")]
                log::warn!("template file {} not found, using fallback descriptions", path.display());
                Ok(Self::new())
            }
            Err(e) => Err(TemplateError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            }),
        }
    }

    /// Serialize back to the YAML file layout
    pub fn to_yaml(&self) -> Result<String, TemplateError> {
        let file = PromptFile {
            metrics: self.entries.clone(),
        };
        serde_yaml::to_string(&file).map_err(|e| TemplateError::Parse(e.to_string()))
    }

    /// Description template for a metric, if one is defined
    pub fn get_template(&self, metric_name: &str) -> Option<&str> {
        self.entries
            .get(metric_name)
            .and_then(|entry| entry.description_template.as_deref())
    }

    /// Full entry for a metric
    pub fn get(&self, metric_name: &str) -> Option<&TemplateEntry> {
        self.entries.get(metric_name)
    }

    /// Add or replace the entry for a metric
    pub fn insert(&mut self, metric_name: impl Into<String>, entry: TemplateEntry) {
        self.entries.insert(metric_name.into(), entry);
    }

    /// Number of metrics with an entry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entries are defined
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
