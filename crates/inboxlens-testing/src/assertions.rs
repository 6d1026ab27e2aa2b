//! Assertions over `--format json` output.
//!
//! Each returns an error describing the mismatch instead of panicking, so
//! tests can chain them with `?`.

use anyhow::{Context, Result, bail};
use inboxlens_types::SeverityTier;
use serde_json::Value;

fn cards<'a>(json: &'a Value, section: &str) -> Result<&'a Vec<Value>> {
    json["content"][section]
        .as_array()
        .with_context(|| format!("Expected 'content.{}' array in JSON", section))
}

/// Assert the three summary cards hold exactly these values, in order.
pub fn assert_summary(json: &Value, expected: [&str; 3]) -> Result<()> {
    let values: Vec<&str> = cards(json, "summary")?
        .iter()
        .filter_map(|card| card["value"].as_str())
        .collect();

    if values != expected {
        bail!("Expected summary {:?}, got {:?}", expected, values);
    }

    Ok(())
}

/// Assert the field cards hold exactly these `(label, value)` pairs, in order.
pub fn assert_fields(json: &Value, expected: &[(&str, &str)]) -> Result<()> {
    let actual: Vec<(&str, &str)> = cards(json, "fields")?
        .iter()
        .map(|card| {
            (
                card["title"].as_str().unwrap_or_default(),
                card["value"].as_str().unwrap_or_default(),
            )
        })
        .collect();

    if actual != expected {
        bail!("Expected fields {:?}, got {:?}", expected, actual);
    }

    Ok(())
}

pub fn assert_sender(json: &Value, expected: &str) -> Result<()> {
    let sender = json["content"]["header"]["sender_address"]
        .as_str()
        .context("Expected 'content.header.sender_address' in JSON")?;

    if sender != expected {
        bail!("Expected sender {}, got {}", expected, sender);
    }

    Ok(())
}

/// Assert the confidence tier and its solid color token.
pub fn assert_tier(json: &Value, expected: SeverityTier) -> Result<()> {
    let confidence = &json["content"]["confidence"];
    let tier = confidence["tier"]
        .as_str()
        .context("Expected 'content.confidence.tier' in JSON")?;

    if tier != expected.as_str() {
        bail!("Expected tier {}, got {}", expected.as_str(), tier);
    }

    let solid = confidence["solid"].as_str().unwrap_or_default();
    let expected_solid = expected.style().solid.to_string();
    if solid != expected_solid {
        bail!("Expected solid color {}, got {}", expected_solid, solid);
    }

    Ok(())
}

pub fn assert_origin(json: &Value, expected: &str) -> Result<()> {
    let origin = json["content"]["origin"]
        .as_str()
        .context("Expected 'content.origin' in JSON")?;

    if origin != expected {
        bail!("Expected origin {}, got {}", expected, origin);
    }

    Ok(())
}

/// Assert some suggestion's description contains `fragment`.
pub fn assert_suggestion_contains(json: &Value, fragment: &str) -> Result<()> {
    let suggestions = json["suggestions"]
        .as_array()
        .context("Expected 'suggestions' array in JSON")?;

    let found = suggestions
        .iter()
        .filter_map(|s| s["description"].as_str())
        .any(|description| description.contains(fragment));

    if !found {
        bail!("No suggestion contains {:?}: {:?}", fragment, suggestions);
    }

    Ok(())
}
