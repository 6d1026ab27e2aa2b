use inboxlens_types::{ColorToken, Gradient, SeverityTier};
use serde::Serialize;

use crate::source::RecordOrigin;

/// Everything the results page shows, as raw data.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsViewModel {
    pub header: HeaderViewModel,
    /// Request type, sub request type, primary request; always three.
    pub summary: Vec<CardViewModel>,
    /// One card per `key_values` entry, in payload order.
    pub fields: Vec<CardViewModel>,
    pub confidence: ConfidenceViewModel,
    pub origin: RecordOrigin,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeaderViewModel {
    pub title: String,
    pub sender_address: String,
    pub back_label: String,
}

/// A copyable card. `target` is the `inboxlens copy` target for the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardViewModel {
    pub target: String,
    pub title: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConfidenceViewModel {
    pub score: f64,
    /// `score * 100`, unbounded.
    pub percent: f64,
    pub tier: SeverityTier,
    pub solid: ColorToken,
    pub gradient: Gradient,
}

impl ResultsViewModel {
    /// Summary cards followed by field cards; the focus order of the interactive view.
    pub fn copyable_cards(&self) -> impl Iterator<Item = &CardViewModel> {
        self.summary.iter().chain(self.fields.iter())
    }

    pub fn card_count(&self) -> usize {
        self.summary.len() + self.fields.len()
    }
}
