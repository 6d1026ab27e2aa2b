//! The classification record and its default fallback.
//!
//! A record arrives as an optional JSON payload. Absence is a normal case, not
//! a failure: [`Classification::resolve`] always returns a fully populated
//! record, filling every missing or unusable field with its documented default.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

pub const DEFAULT_REQUEST_TYPE: &str = "Not Classified";
pub const DEFAULT_SUB_REQUEST_TYPE: &str = "Unknown";
pub const DEFAULT_PRIMARY_REQUEST: &str = "Unspecified";
pub const DEFAULT_SENDER_ADDRESS: &str = "wells@mail.com";
pub const DEFAULT_CONFIDENCE_SCORE: f64 = 1.0;

/// Key under which upstream navigation state nests the record.
pub const ENVELOPE_KEY: &str = "classification";

/// Result of the upstream classification process.
///
/// Treated as an immutable value once resolved. `key_values` keeps the
/// insertion order of the payload, which is also the display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub request_type: String,
    pub sub_request_type: String,
    pub primary_request: String,
    pub sender_address: String,
    /// Fraction in [0, 1] by convention. Not clamped or validated here.
    pub confidence_score: f64,
    pub key_values: Map<String, Value>,
}

impl Default for Classification {
    fn default() -> Self {
        Self {
            request_type: DEFAULT_REQUEST_TYPE.to_string(),
            sub_request_type: DEFAULT_SUB_REQUEST_TYPE.to_string(),
            primary_request: DEFAULT_PRIMARY_REQUEST.to_string(),
            sender_address: DEFAULT_SENDER_ADDRESS.to_string(),
            confidence_score: DEFAULT_CONFIDENCE_SCORE,
            key_values: Map::new(),
        }
    }
}

impl Classification {
    /// Resolve an optional payload into a fully populated record.
    ///
    /// Absent or unusable payloads resolve to the default record. See
    /// [`Classification::from_payload`] for what counts as a record.
    pub fn resolve(payload: Option<&Value>) -> Self {
        payload.and_then(Self::from_payload).unwrap_or_else(|| {
            debug!("no classification record supplied, using defaults");
            Self::default()
        })
    }

    /// Build a record from a payload, or `None` when the payload holds no record.
    ///
    /// Accepts either the bare record or an envelope of the form
    /// `{"classification": {...}}`. An object counts as an envelope only when
    /// it carries none of the record fields itself; a bare record that happens
    /// to have a `classification` key keeps its own fields. A payload that is
    /// not an object, or an envelope whose record is not an object, holds no
    /// record. Each field falls back to its own default when missing, `null`,
    /// or of the wrong JSON type.
    pub fn from_payload(payload: &Value) -> Option<Self> {
        let object = unwrap_envelope(payload)?;
        let defaults = Self::default();

        Some(Self {
            request_type: string_field(object, "request_type", defaults.request_type),
            sub_request_type: string_field(object, "sub_request_type", defaults.sub_request_type),
            primary_request: string_field(object, "primary_request", defaults.primary_request),
            sender_address: string_field(object, "sender_address", defaults.sender_address),
            confidence_score: number_field(
                object,
                "confidence_score",
                defaults.confidence_score,
            ),
            key_values: map_field(object, "key_values", defaults.key_values),
        })
    }

    /// Return a copy with `confidence_score` clamped to [0, 1].
    ///
    /// NaN clamps to 0.
    #[must_use]
    pub fn with_clamped_confidence(mut self) -> Self {
        self.confidence_score = if self.confidence_score.is_nan() {
            0.0
        } else {
            self.confidence_score.clamp(0.0, 1.0)
        };
        self
    }

    /// Whether this record is exactly the documented default.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

const RECORD_FIELDS: [&str; 6] = [
    "request_type",
    "sub_request_type",
    "primary_request",
    "sender_address",
    "confidence_score",
    "key_values",
];

fn unwrap_envelope(payload: &Value) -> Option<&Map<String, Value>> {
    let object = payload.as_object()?;
    let is_bare = RECORD_FIELDS.iter().any(|field| object.contains_key(*field));

    match object.get(ENVELOPE_KEY) {
        Some(inner) if !is_bare => inner.as_object(),
        _ => Some(object),
    }
}

fn string_field(object: &Map<String, Value>, key: &str, default: String) -> String {
    match object.get(key) {
        Some(Value::String(s)) => s.clone(),
        other => {
            log_fallback(key, other);
            default
        }
    }
}

fn number_field(object: &Map<String, Value>, key: &str, default: f64) -> f64 {
    match object.get(key).and_then(Value::as_f64) {
        Some(n) => n,
        None => {
            log_fallback(key, object.get(key));
            default
        }
    }
}

fn map_field(
    object: &Map<String, Value>,
    key: &str,
    default: Map<String, Value>,
) -> Map<String, Value> {
    match object.get(key) {
        Some(Value::Object(map)) => map.clone(),
        other => {
            log_fallback(key, other);
            default
        }
    }
}

fn log_fallback(key: &str, found: Option<&Value>) {
    match found {
        None => debug!(field = key, "field missing, using default"),
        Some(value) => debug!(field = key, found = %value, "unusable field value, using default"),
    }
}
