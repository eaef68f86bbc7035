use poem_openapi::Object;

use business::domain::suggestion::model::{Suggestion, SuggestionReason, Suggestions};

use crate::api::session::dto::ShoppingListEntryResponse;

#[derive(Debug, Clone, Object)]
pub struct SuggestionResponse {
    pub item_name: String,
    /// "ran_out", "usage_pattern" or "healthier_alternative"
    pub kind: String,
    /// Human-readable reason, e.g. "Last bought 16 days ago"
    pub reason: String,
    #[oai(skip_serializing_if_is_none)]
    pub days_since_purchase: Option<i64>,
    #[oai(skip_serializing_if_is_none)]
    pub expected_interval_days: Option<u32>,
    /// Pantry item the healthier alternative replaces
    #[oai(skip_serializing_if_is_none)]
    pub found: Option<String>,
    /// Entry to add when the suggestion is accepted
    pub proposal: ShoppingListEntryResponse,
}

impl From<Suggestion> for SuggestionResponse {
    fn from(suggestion: Suggestion) -> Self {
        let reason = suggestion.reason.to_string();
        let (kind, days_since_purchase, expected_interval_days, found) = match suggestion.reason {
            SuggestionReason::RanOut => ("ran_out", None, None, None),
            SuggestionReason::UsagePattern {
                days_since_purchase,
                expected_interval_days,
            } => (
                "usage_pattern",
                Some(days_since_purchase),
                Some(expected_interval_days),
                None,
            ),
            SuggestionReason::HealthierAlternative { found } => {
                ("healthier_alternative", None, None, Some(found))
            }
        };

        Self {
            item_name: suggestion.item_name,
            kind: kind.to_string(),
            reason,
            days_since_purchase,
            expected_interval_days,
            found,
            proposal: suggestion.proposal.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SuggestionsResponse {
    pub ran_out: Vec<SuggestionResponse>,
    pub restock: Vec<SuggestionResponse>,
    pub health_swaps: Vec<SuggestionResponse>,
}

impl From<Suggestions> for SuggestionsResponse {
    fn from(suggestions: Suggestions) -> Self {
        Self {
            ran_out: suggestions.ran_out.into_iter().map(Into::into).collect(),
            restock: suggestions.restock.into_iter().map(Into::into).collect(),
            health_swaps: suggestions.health_swaps.into_iter().map(Into::into).collect(),
        }
    }
}
