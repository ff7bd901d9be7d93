// Metrica - Evaluation metrics for model predictions
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Description generation
//!
//! Turns metric results into human-readable sentences using per-metric
//! templates loaded from YAML.

pub mod generator;
pub mod store;
pub mod template;

pub use generator::{DescriptionGenerator, GeneratorConfig};
pub use store::{TemplateEntry, TemplateStore};
pub use template::render;
