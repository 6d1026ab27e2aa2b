//! Sample classification payloads.
//!
//! Samples live in `crates/inboxlens-testing/samples/`. Inline payloads can be
//! built with [`payload`] when a test needs a specific shape.

use anyhow::{Context, Result};
use serde_json::{Map, Value, json};
use std::fs;
use std::path::{Path, PathBuf};

/// Billing / Refund at 0.92 with `amount` and `account` fields.
pub const BILLING_REFUND: &str = "billing_refund.json";
/// Exactly 0.5 with an empty `key_values`.
pub const BORDERLINE: &str = "borderline.json";
/// Only `request_type` and `confidence_score`.
pub const PARTIAL: &str = "partial.json";
/// Record nested under `classification`.
pub const ENVELOPE: &str = "envelope.json";
/// Non-string field values (number, bool, null, array, object).
pub const MIXED_VALUES: &str = "mixed_values.json";

/// Sample file manager for test data.
pub struct SampleFiles {
    samples_dir: PathBuf,
}

impl Default for SampleFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFiles {
    pub fn new() -> Self {
        let samples_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples");
        Self { samples_dir }
    }

    pub fn path(&self, sample_name: &str) -> PathBuf {
        self.samples_dir.join(sample_name)
    }

    pub fn read(&self, sample_name: &str) -> Result<String> {
        let path = self.path(sample_name);
        fs::read_to_string(&path).with_context(|| format!("Missing sample {}", path.display()))
    }

    /// Copy a sample file to a destination.
    pub fn copy_to(&self, sample_name: &str, dest: &Path) -> Result<()> {
        fs::copy(self.path(sample_name), dest)
            .with_context(|| format!("Failed to copy sample {}", sample_name))?;
        Ok(())
    }
}

/// Build a payload with the given confidence and fields, other fields populated.
pub fn payload(confidence: f64, fields: &[(&str, &str)]) -> Value {
    let key_values: Map<String, Value> = fields
        .iter()
        .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
        .collect();

    json!({
        "request_type": "Billing",
        "sub_request_type": "Refund",
        "primary_request": "Refund Request",
        "sender_address": "a@b.com",
        "confidence_score": confidence,
        "key_values": key_values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_parse() -> Result<()> {
        let samples = SampleFiles::new();
        for name in [BILLING_REFUND, BORDERLINE, PARTIAL, ENVELOPE, MIXED_VALUES] {
            let _: Value = serde_json::from_str(&samples.read(name)?)?;
        }
        Ok(())
    }

    #[test]
    fn test_payload_keeps_field_order() {
        let value = payload(0.7, &[("zeta", "1"), ("alpha", "2")]);
        let keys: Vec<&String> = value["key_values"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }
}
