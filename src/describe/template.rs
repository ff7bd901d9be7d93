// Metrica - Evaluation metrics for model predictions
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Template rendering
//!
//! Templates use brace placeholders with a single field, `value`:
//!
//! - `{value}`: shortest round-trip form (`0.375`, `1.0`)
//! - `{value:f}` / `{value:.Nf}`: fixed decimals (6 when N is omitted)
//! - `{value:%}` / `{value:.N%}`: percentage (`0.75` -> `75.0%` with N = 1)
//! - `{value:e}` / `{value:.Ne}`: exponent notation (`1.5000e-05` with N = 4)
//! - `{value:g}` / `{value:.Ng}`: N significant digits, trailing zeros dropped
//! - `F`, `E`, `G`: uppercase variants
//! - `{{` and `}}`: literal braces
//!
//! Width, alignment, sign and grouping options are not supported; a template
//! using them fails to render. NaN renders as `nan`.

use crate::error::TemplateError;
use crate::result::{display_exponent, display_fixed, display_general, display_value};

const DEFAULT_PRECISION: usize = 6;

/// Substitute `value` into `template`
pub fn render(template: &str, value: f64) -> Result<String, TemplateError> {
    let fail = |reason: String| TemplateError::Format {
        template: template.to_string(),
        reason,
    };

    let mut out = String::with_capacity(template.len() + 16);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let mut field = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(ch) => field.push(ch),
                        None => return Err(fail("unterminated '{'".to_string())),
                    }
                }
                let (name, spec) = match field.split_once(':') {
                    Some((name, spec)) => (name, spec),
                    None => (field.as_str(), ""),
                };
                if name != "value" {
                    return Err(fail(format!("unknown field '{}'", name)));
                }
                out.push_str(&format_value(value, spec).map_err(fail)?);
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '}' => return Err(fail("single '}' encountered".to_string())),
            _ => out.push(c),
        }
    }

    Ok(out)
}

fn format_value(value: f64, spec: &str) -> Result<String, String> {
    if spec.is_empty() {
        return Ok(display_value(value));
    }

    let last = spec.char_indices().last().map_or(0, |(i, _)| i);
    let (body, kind) = spec.split_at(last);
    let precision = match body {
        "" => DEFAULT_PRECISION,
        _ => body
            .strip_prefix('.')
            .and_then(|digits| digits.parse::<usize>().ok())
            .ok_or_else(|| format!("unsupported format spec '{}'", spec))?,
    };

    match kind {
        "f" => Ok(display_fixed(value, precision)),
        "F" => Ok(display_fixed(value, precision).to_uppercase()),
        "e" => Ok(display_exponent(value, precision)),
        "E" => Ok(display_exponent(value, precision).to_uppercase()),
        "g" => Ok(display_general(value, precision)),
        "G" => Ok(display_general(value, precision).to_uppercase()),
        "%" => Ok(format!("{}%", display_fixed(value * 100.0, precision))),
        _ => Err(format!("unsupported format spec '{}'", spec)),
    }
}
