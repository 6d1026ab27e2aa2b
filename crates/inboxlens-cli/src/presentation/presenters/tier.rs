use crate::presentation::view_models::{CommandResultViewModel, ConfidenceViewModel, StatusBadge};

use super::results::{present_confidence, tier_level};

pub fn present_tier(score: f64) -> CommandResultViewModel<ConfidenceViewModel> {
    let confidence = present_confidence(score);
    let badge = StatusBadge::new(tier_level(confidence.tier), confidence.tier.as_str());

    CommandResultViewModel::new(confidence).with_badge(badge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::StatusLevel;
    use inboxlens_types::SeverityTier;

    #[test]
    fn test_boundaries() {
        assert_eq!(present_tier(0.8).content.tier, SeverityTier::Medium);
        assert_eq!(present_tier(0.5).content.tier, SeverityTier::Low);
        assert_eq!(present_tier(0.5).badge.unwrap().level, StatusLevel::Error);
        assert_eq!(present_tier(5.0).content.tier, SeverityTier::High);
    }
}
