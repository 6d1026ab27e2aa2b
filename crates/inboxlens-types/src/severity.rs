//! Confidence → severity mapping.
//!
//! Strict thresholds evaluated in order:
//!
//! | Confidence | Tier | Solid | Gradient |
//! |------------|------|-------|----------|
//! | `> 0.8` | high | `#10b981` | `#10b981 → #34d399` |
//! | `> 0.5` | medium | `#f59e0b` | `#f59e0b → #fbbf24` |
//! | otherwise | low | `#ef4444` | `#ef4444 → #f87171` |
//!
//! Values outside [0, 1] are not clamped; they fall into whichever bucket the
//! comparisons select (5.0 is high, -1.0 and NaN are low).

use serde::{Serialize, Serializer};
use std::fmt;

pub const HIGH_THRESHOLD: f64 = 0.8;
pub const MEDIUM_THRESHOLD: f64 = 0.5;

/// Severity tier derived from a confidence value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    High,
    Medium,
    Low,
}

impl SeverityTier {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > HIGH_THRESHOLD {
            SeverityTier::High
        } else if confidence > MEDIUM_THRESHOLD {
            SeverityTier::Medium
        } else {
            SeverityTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::High => "high",
            SeverityTier::Medium => "medium",
            SeverityTier::Low => "low",
        }
    }

    /// Visual tokens for this tier.
    pub fn style(self) -> SeverityStyle {
        let (solid, lighter) = match self {
            SeverityTier::High => (ColorToken::rgb(0x10, 0xb9, 0x81), ColorToken::rgb(0x34, 0xd3, 0x99)),
            SeverityTier::Medium => (ColorToken::rgb(0xf5, 0x9e, 0x0b), ColorToken::rgb(0xfb, 0xbf, 0x24)),
            SeverityTier::Low => (ColorToken::rgb(0xef, 0x44, 0x44), ColorToken::rgb(0xf8, 0x71, 0x71)),
        };

        SeverityStyle {
            tier: self,
            solid,
            gradient: Gradient {
                from: solid,
                to: lighter,
            },
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 24-bit color token. Serializes as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorToken {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorToken {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for ColorToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Left-to-right two-stop gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Gradient {
    pub from: ColorToken,
    pub to: ColorToken,
}

impl Gradient {
    /// Color at position `t` along the gradient (0.0 = `from`, 1.0 = `to`).
    pub fn at(&self, t: f64) -> ColorToken {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let lerp = |a: u8, b: u8| -> u8 {
            let value = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            value.round() as u8
        };

        ColorToken::rgb(
            lerp(self.from.r, self.to.r),
            lerp(self.from.g, self.to.g),
            lerp(self.from.b, self.to.b),
        )
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}

/// Tier plus the tokens a renderer needs to draw the confidence bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SeverityStyle {
    pub tier: SeverityTier,
    pub solid: ColorToken,
    pub gradient: Gradient,
}

/// Map a confidence value to its severity tier and visual tokens.
pub fn map_confidence(confidence: f64) -> SeverityStyle {
    SeverityTier::from_confidence(confidence).style()
}
