//! Where the classification payload comes from, and how it becomes a record.

use anyhow::{Context, Result};
use inboxlens_types::Classification;
use is_terminal::IsTerminal;
use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    /// Nothing supplied; the default record is shown.
    None,
    Stdin,
    File(PathBuf),
}

impl PayloadSource {
    /// `-` reads stdin. With no argument, stdin is read only when it is not a terminal.
    pub fn from_arg(arg: Option<&str>, stdin_is_terminal: bool) -> Self {
        match arg {
            Some("-") => PayloadSource::Stdin,
            Some(path) => PayloadSource::File(PathBuf::from(path)),
            None if !stdin_is_terminal => PayloadSource::Stdin,
            None => PayloadSource::None,
        }
    }

    pub fn detect(arg: Option<&str>) -> Self {
        Self::from_arg(arg, std::io::stdin().is_terminal())
    }

    /// Read and parse the payload. `Ok(None)` when there is nothing to read.
    pub fn read(&self) -> Result<Option<Value>> {
        match self {
            PayloadSource::None => Ok(None),
            PayloadSource::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read payload from stdin")?;
                parse_payload(&text).context("Invalid payload on stdin")
            }
            PayloadSource::File(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read payload file {}", path.display()))?;
                parse_payload(&text)
                    .with_context(|| format!("Invalid payload in {}", path.display()))
            }
        }
    }
}

/// Blank input counts as no payload.
pub fn parse_payload(text: &str) -> inboxlens_types::Result<Option<Value>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(text)?))
}

/// Whether the shown record came from a payload or is the fallback default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordOrigin {
    Payload,
    Default,
}

impl RecordOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordOrigin::Payload => "payload",
            RecordOrigin::Default => "default",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedRecord {
    pub record: Classification,
    pub origin: RecordOrigin,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    /// Fail on an unreadable payload instead of falling back.
    pub strict: bool,
    pub clamp_confidence: bool,
}

/// Resolve a source into the record the view shows.
pub fn resolve(source: &PayloadSource, options: ResolveOptions) -> Result<ResolvedRecord> {
    let payload = match source.read() {
        Ok(payload) => payload,
        Err(e) if !options.strict => {
            warn!("{:#}; showing the default record", e);
            None
        }
        Err(e) => return Err(e),
    };

    let (mut record, origin) = match payload.as_ref().and_then(Classification::from_payload) {
        Some(record) => (record, RecordOrigin::Payload),
        None => (Classification::resolve(None), RecordOrigin::Default),
    };

    if options.clamp_confidence {
        record = record.with_clamped_confidence();
    }

    debug!(
        ?origin,
        request_type = %record.request_type,
        confidence = record.confidence_score,
        fields = record.key_values.len(),
        "classification resolved"
    );

    Ok(ResolvedRecord { record, origin })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_arg() {
        assert_eq!(PayloadSource::from_arg(Some("-"), true), PayloadSource::Stdin);
        assert_eq!(
            PayloadSource::from_arg(Some("r.json"), false),
            PayloadSource::File(PathBuf::from("r.json"))
        );
        assert_eq!(PayloadSource::from_arg(None, false), PayloadSource::Stdin);
        assert_eq!(PayloadSource::from_arg(None, true), PayloadSource::None);
    }

    #[test]
    fn test_parse_payload_blank_is_absent() {
        assert!(parse_payload("").unwrap().is_none());
        assert!(parse_payload("  \n").unwrap().is_none());
        assert!(parse_payload("{}").unwrap().is_some());
        assert!(parse_payload("{oops").is_err());
    }

    #[test]
    fn test_resolve_file() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("result.json");
        fs::write(&path, r#"{"request_type": "Billing", "confidence_score": 0.92}"#)?;

        let resolved = resolve(&PayloadSource::File(path), ResolveOptions::default())?;
        assert_eq!(resolved.origin, RecordOrigin::Payload);
        assert_eq!(resolved.record.request_type, "Billing");
        Ok(())
    }

    #[test]
    fn test_resolve_none_is_default() -> Result<()> {
        let resolved = resolve(&PayloadSource::None, ResolveOptions::default())?;
        assert_eq!(resolved.origin, RecordOrigin::Default);
        assert!(resolved.record.is_default());
        Ok(())
    }

    #[test]
    fn test_payload_without_record_is_default_origin() -> Result<()> {
        let dir = TempDir::new()?;

        for (name, text) in [
            ("null.json", "null"),
            ("array.json", "[1, 2]"),
            ("empty_envelope.json", r#"{"classification": null}"#),
        ] {
            let path = dir.path().join(name);
            fs::write(&path, text)?;

            let resolved = resolve(&PayloadSource::File(path), ResolveOptions::default())?;
            assert_eq!(resolved.origin, RecordOrigin::Default, "{}", name);
            assert!(resolved.record.is_default(), "{}", name);
        }
        Ok(())
    }

    #[test]
    fn test_lenient_falls_back_on_unreadable_payload() -> Result<()> {
        let dir = TempDir::new()?;
        let missing = PayloadSource::File(dir.path().join("missing.json"));

        let resolved = resolve(&missing, ResolveOptions::default())?;
        assert_eq!(resolved.origin, RecordOrigin::Default);
        assert!(resolved.record.is_default());
        Ok(())
    }

    #[test]
    fn test_strict_rejects_invalid_json() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json")?;

        let options = ResolveOptions {
            strict: true,
            ..ResolveOptions::default()
        };
        let err = resolve(&PayloadSource::File(path), options).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid payload in"));
        Ok(())
    }

    #[test]
    fn test_clamp_option() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("result.json");
        fs::write(&path, r#"{"confidence_score": 92}"#)?;
        let source = PayloadSource::File(path);

        let raw = resolve(&source, ResolveOptions::default())?;
        assert_eq!(raw.record.confidence_score, 92.0);

        let options = ResolveOptions {
            clamp_confidence: true,
            ..ResolveOptions::default()
        };
        assert_eq!(resolve(&source, options)?.record.confidence_score, 1.0);
        Ok(())
    }
}
