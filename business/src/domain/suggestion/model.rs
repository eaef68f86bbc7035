use serde::Serialize;

use crate::domain::shopping_item::model::ShoppingListEntry;

/// Why an item is being proposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SuggestionReason {
    /// The item was removed from the pantry.
    RanOut,
    /// Longer than usual since the last purchase.
    UsagePattern {
        days_since_purchase: i64,
        expected_interval_days: u32,
    },
    /// `found` is in the pantry and has a healthier alternative.
    HealthierAlternative { found: String },
}

impl std::fmt::Display for SuggestionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionReason::RanOut => write!(f, "Ran out recently"),
            SuggestionReason::UsagePattern {
                days_since_purchase,
                ..
            } => write!(f, "Last bought {} days ago", days_since_purchase),
            SuggestionReason::HealthierAlternative { found } => {
                write!(f, "Healthier than {}", found)
            }
        }
    }
}

/// A proposed cart entry with its rationale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub item_name: String,
    pub reason: SuggestionReason,
    pub proposal: ShoppingListEntry,
}

/// The three suggestion streams, kept apart.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Suggestions {
    pub ran_out: Vec<Suggestion>,
    pub restock: Vec<Suggestion>,
    pub health_swaps: Vec<Suggestion>,
}

impl Suggestions {
    pub fn is_empty(&self) -> bool {
        self.ran_out.is_empty() && self.restock.is_empty() && self.health_swaps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ran_out.len() + self.restock.len() + self.health_swaps.len()
    }
}
