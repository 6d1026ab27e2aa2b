//! Core types for inboxlens.
//!
//! The record handed to the results view, plus the three pieces of decision
//! logic every renderer shares:
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`classification`] | `Classification` record and its default fallback |
//! | [`severity`] | confidence → severity tier and color tokens |
//! | [`fields`] | `key_values` → ordered label/value pairs |
//! | [`error`] | error type shared by the workspace |

pub mod classification;
pub mod error;
pub mod fields;
pub mod severity;

pub use classification::Classification;
pub use error::{Error, Result};
pub use fields::{FieldEntry, display_value, enumerate_fields};
pub use severity::{ColorToken, Gradient, SeverityStyle, SeverityTier, map_confidence};
