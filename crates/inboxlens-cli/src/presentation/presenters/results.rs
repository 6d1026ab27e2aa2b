use inboxlens_types::{Classification, SeverityTier, enumerate_fields, map_confidence};

use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CardViewModel, CommandResultViewModel, ConfidenceViewModel, Guidance, HeaderViewModel,
    ResultsViewModel, StatusBadge, StatusLevel,
};
use crate::source::{RecordOrigin, ResolvedRecord};

pub const TITLE: &str = "AI Classification Results";
pub const BACK_LABEL: &str = "Back to Upload";

pub const REQUEST_TYPE_TITLE: &str = "Request Type";
pub const SUB_REQUEST_TYPE_TITLE: &str = "Sub Request Type";
pub const PRIMARY_REQUEST_TITLE: &str = "Primary Request Type";

pub fn present_results(resolved: &ResolvedRecord) -> CommandResultViewModel<ResultsViewModel> {
    let content = build_results(&resolved.record, resolved.origin);
    let confidence = content.confidence;
    let first_field = content.fields.first().map(|card| card.title.clone());

    let mut result = CommandResultViewModel::new(content)
        .with_badge(StatusBadge::new(
            tier_level(confidence.tier),
            format!("{} confidence", capitalize(confidence.tier.as_str())),
        ));

    if resolved.origin == RecordOrigin::Default {
        result = result.with_suggestion(
            Guidance::new("No classification payload was supplied; showing the default record")
                .with_command(cmd::SHOW_PAYLOAD),
        );
    }

    if confidence.tier == SeverityTier::Low {
        result = result.with_suggestion(Guidance::new(
            "Low confidence: review this classification before acting on it",
        ));
    }

    if let Some(key) = first_field {
        result = result.with_suggestion(
            Guidance::new("Copy an extracted value").with_command(fmt::copy_field(&key)),
        );
    }

    result
}

/// Build the page content for a resolved record.
pub fn build_results(record: &Classification, origin: RecordOrigin) -> ResultsViewModel {
    let summary = vec![
        CardViewModel {
            target: "request-type".to_string(),
            title: REQUEST_TYPE_TITLE.to_string(),
            value: record.request_type.clone(),
        },
        CardViewModel {
            target: "sub-request-type".to_string(),
            title: SUB_REQUEST_TYPE_TITLE.to_string(),
            value: record.sub_request_type.clone(),
        },
        CardViewModel {
            target: "primary-request".to_string(),
            title: PRIMARY_REQUEST_TITLE.to_string(),
            value: record.primary_request.clone(),
        },
    ];

    let fields = enumerate_fields(&record.key_values)
        .into_iter()
        .map(|entry| CardViewModel {
            target: format!("field:{}", entry.label),
            title: entry.label,
            value: entry.value,
        })
        .collect();

    ResultsViewModel {
        header: HeaderViewModel {
            title: TITLE.to_string(),
            sender_address: record.sender_address.clone(),
            back_label: BACK_LABEL.to_string(),
        },
        summary,
        fields,
        confidence: present_confidence(record.confidence_score),
        origin,
    }
}

pub fn present_confidence(score: f64) -> ConfidenceViewModel {
    let style = map_confidence(score);
    ConfidenceViewModel {
        score,
        percent: score * 100.0,
        tier: style.tier,
        solid: style.solid,
        gradient: style.gradient,
    }
}

pub(super) fn tier_level(tier: SeverityTier) -> StatusLevel {
    match tier {
        SeverityTier::High => StatusLevel::Success,
        SeverityTier::Medium => StatusLevel::Warning,
        SeverityTier::Low => StatusLevel::Error,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scenario_one() -> ResolvedRecord {
        let payload = json!({
            "request_type": "Billing",
            "sub_request_type": "Refund",
            "primary_request": "Refund Request",
            "sender_address": "a@b.com",
            "confidence_score": 0.92,
            "key_values": {"amount": "250", "account": "123"}
        });
        ResolvedRecord {
            record: Classification::resolve(Some(&payload)),
            origin: RecordOrigin::Payload,
        }
    }

    #[test]
    fn test_scenario_one_cards_and_tier() {
        let result = present_results(&scenario_one());
        let content = &result.content;

        assert_eq!(content.header.title, "AI Classification Results");
        assert_eq!(content.header.sender_address, "a@b.com");

        let summary: Vec<(&str, &str)> = content
            .summary
            .iter()
            .map(|c| (c.title.as_str(), c.value.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Request Type", "Billing"),
                ("Sub Request Type", "Refund"),
                ("Primary Request Type", "Refund Request"),
            ]
        );

        let fields: Vec<(&str, &str)> = content
            .fields
            .iter()
            .map(|c| (c.title.as_str(), c.value.as_str()))
            .collect();
        assert_eq!(fields, vec![("amount", "250"), ("account", "123")]);
        assert_eq!(content.fields[0].target, "field:amount");

        assert_eq!(content.confidence.tier, SeverityTier::High);
        assert_eq!(content.confidence.solid.to_string(), "#10b981");

        let badge = result.badge.as_ref().unwrap();
        assert_eq!(badge.level, StatusLevel::Success);
        assert_eq!(badge.label, "High confidence");
    }

    #[test]
    fn test_default_record_suggests_payload() {
        let resolved = ResolvedRecord {
            record: Classification::default(),
            origin: RecordOrigin::Default,
        };
        let result = present_results(&resolved);

        assert!(result.content.fields.is_empty());
        assert_eq!(result.content.confidence.tier, SeverityTier::High);
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.suggestions[0].command.as_deref(), Some(cmd::SHOW_PAYLOAD));
    }

    #[test]
    fn test_low_confidence_badge_and_tip() {
        let mut resolved = scenario_one();
        resolved.record.confidence_score = 0.5;
        resolved.record.key_values.clear();

        let result = present_results(&resolved);
        assert_eq!(result.badge.as_ref().unwrap().level, StatusLevel::Error);
        assert_eq!(result.badge.as_ref().unwrap().label, "Low confidence");
        assert!(result.suggestions[0].description.starts_with("Low confidence"));
    }

    #[test]
    fn test_confidence_percent_is_unbounded() {
        let confidence = present_confidence(92.0);
        assert_eq!(confidence.percent, 9200.0);
        assert_eq!(confidence.tier, SeverityTier::High);

        let confidence = present_confidence(0.925);
        assert!((confidence.percent - 92.5).abs() < 1e-9);
    }
}
