//! Suggestion generators. Each one reads the current pantry only and is
//! recomputed from scratch on every call.

use chrono::{DateTime, Utc};

use super::model::{Suggestion, SuggestionReason, Suggestions};
use crate::domain::policy::PantryPolicy;
use crate::domain::reference_data::{
    HealthySwapTable, ReferenceData, UsageIntervalTable, title_case,
};
use crate::domain::session::model::Pantry;

/// One proposal per name that ran out.
pub fn ran_out(pantry: &Pantry, policy: &PantryPolicy, now: DateTime<Utc>) -> Vec<Suggestion> {
    pantry
        .out_of_stock()
        .iter()
        .map(|name| Suggestion {
            item_name: name.clone(),
            reason: SuggestionReason::RanOut,
            proposal: policy.default_entry(name.clone(), now),
        })
        .collect()
}

/// Proposals for history records older than their usual purchase interval.
///
/// Names already out of stock (compared case-insensitively) are skipped, since
/// [`ran_out`] proposes them.
pub fn restock_predictions(
    pantry: &Pantry,
    usage: &UsageIntervalTable,
    policy: &PantryPolicy,
    now: DateTime<Utc>,
) -> Vec<Suggestion> {
    let flagged: Vec<String> = pantry
        .out_of_stock()
        .iter()
        .map(|name| name.to_lowercase())
        .collect();

    pantry
        .history()
        .iter()
        .filter(|record| !flagged.contains(&record.name.to_lowercase()))
        .filter_map(|record| {
            let expected = usage.expected_days(&record.name)?;
            let days_since_purchase = (now - record.last_bought).num_days();
            if days_since_purchase <= i64::from(expected) {
                return None;
            }
            Some(Suggestion {
                item_name: record.name.clone(),
                reason: SuggestionReason::UsagePattern {
                    days_since_purchase,
                    expected_interval_days: expected,
                },
                proposal: policy.default_entry(record.name.clone(), now),
            })
        })
        .collect()
}

/// One proposal per swap-table key found in the pantry, in table order.
pub fn health_swaps(
    pantry: &Pantry,
    swaps: &HealthySwapTable,
    policy: &PantryPolicy,
    now: DateTime<Utc>,
) -> Vec<Suggestion> {
    let stocked: Vec<String> = pantry
        .inventory()
        .iter()
        .map(|item| item.name.to_lowercase())
        .collect();

    swaps
        .iter()
        .filter(|(unhealthy, _)| stocked.iter().any(|name| name == unhealthy))
        .map(|(unhealthy, healthy)| {
            let item_name = title_case(healthy);
            Suggestion {
                proposal: policy.default_entry(item_name.clone(), now),
                item_name,
                reason: SuggestionReason::HealthierAlternative {
                    found: title_case(unhealthy),
                },
            }
        })
        .collect()
}

pub fn suggest(
    pantry: &Pantry,
    reference: &ReferenceData,
    policy: &PantryPolicy,
    now: DateTime<Utc>,
) -> Suggestions {
    Suggestions {
        ran_out: ran_out(pantry, policy, now),
        restock: restock_predictions(pantry, &reference.usage, policy, now),
        health_swaps: health_swaps(pantry, &reference.swaps, policy, now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pantry_item::model::InventoryItem;
    use crate::domain::pantry_item::value_objects::{Category, Quantity, Unit};
    use crate::domain::session::model::HistoryRecord;
    use crate::domain::shared::value_objects::SessionId;
    use chrono::Duration;

    fn item(name: &str, now: DateTime<Utc>) -> InventoryItem {
        InventoryItem {
            name: name.to_string(),
            category: Category::Meat,
            acquired_at: now,
            expires_at: now + Duration::days(5),
            quantity: Quantity::ONE,
            unit: Unit::Kilograms,
        }
    }

    fn pantry_with_history(now: DateTime<Utc>, history: Vec<HistoryRecord>) -> Pantry {
        Pantry::new(SessionId::new("test-session"), now).with_history(history)
    }

    #[test]
    fn should_propose_every_ran_out_item_with_defaults() {
        let now = Utc::now();
        let mut pantry = pantry_with_history(now, vec![]);
        pantry.stock(item("Milk", now));
        pantry.stock(item("Rice", now));
        pantry.remove_from_inventory(0).unwrap();
        pantry.remove_from_inventory(0).unwrap();

        let suggestions = ran_out(&pantry, &PantryPolicy::default(), now);

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].item_name, "Milk");
        assert_eq!(suggestions[0].reason, SuggestionReason::RanOut);
        assert_eq!(suggestions[0].proposal.category, Category::General);
        assert_eq!(suggestions[0].proposal.expires_at, now + Duration::days(7));
    }

    #[test]
    fn should_predict_restock_when_interval_exceeded() {
        let now = Utc::now();
        let pantry = pantry_with_history(
            now,
            vec![
                HistoryRecord::new("Eggs", now - Duration::days(16)),
                HistoryRecord::new("Bread", now - Duration::days(2)),
            ],
        );

        let suggestions = restock_predictions(
            &pantry,
            &UsageIntervalTable::builtin(),
            &PantryPolicy::default(),
            now,
        );

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].item_name, "Eggs");
        assert_eq!(
            suggestions[0].reason,
            SuggestionReason::UsagePattern {
                days_since_purchase: 16,
                expected_interval_days: 14
            }
        );
        assert_eq!(suggestions[0].proposal.quantity, Quantity::ONE);
        assert_eq!(suggestions[0].proposal.unit, Unit::Pieces);
    }

    #[test]
    fn should_not_predict_restock_on_exact_interval() {
        let now = Utc::now();
        let pantry = pantry_with_history(
            now,
            vec![HistoryRecord::new("Eggs", now - Duration::days(14))],
        );

        let suggestions = restock_predictions(
            &pantry,
            &UsageIntervalTable::builtin(),
            &PantryPolicy::default(),
            now,
        );

        assert!(suggestions.is_empty());
    }

    #[test]
    fn should_ignore_history_without_usage_rule() {
        let now = Utc::now();
        let pantry = pantry_with_history(
            now,
            vec![HistoryRecord::new("Saffron", now - Duration::days(400))],
        );

        let suggestions = restock_predictions(
            &pantry,
            &UsageIntervalTable::builtin(),
            &PantryPolicy::default(),
            now,
        );

        assert!(suggestions.is_empty());
    }

    #[test]
    fn should_skip_prediction_for_item_already_out_of_stock() {
        let now = Utc::now();
        let mut pantry = pantry_with_history(
            now,
            vec![HistoryRecord::new("Eggs", now - Duration::days(16))],
        );
        pantry.stock(item("EGGS", now));
        pantry.remove_from_inventory(0).unwrap();

        let all = suggest(&pantry, &ReferenceData::default(), &PantryPolicy::default(), now);

        assert!(all.restock.is_empty());
        assert_eq!(all.ran_out.len(), 1);
        assert_eq!(all.ran_out[0].item_name, "EGGS");
    }

    #[test]
    fn should_propose_healthier_alternative_for_stocked_item() {
        let now = Utc::now();
        let mut pantry = pantry_with_history(now, vec![]);
        pantry.stock(item("Sausage", now));

        let suggestions = health_swaps(
            &pantry,
            &HealthySwapTable::builtin(),
            &PantryPolicy::default(),
            now,
        );

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].item_name, "Lean Chicken Sausage");
        assert_eq!(
            suggestions[0].reason,
            SuggestionReason::HealthierAlternative {
                found: "Sausage".to_string()
            }
        );
        let proposal = &suggestions[0].proposal;
        assert_eq!(proposal.name, "Lean Chicken Sausage");
        assert_eq!(proposal.quantity, Quantity::ONE);
        assert_eq!(proposal.unit, Unit::Pieces);
        assert_eq!(proposal.expires_at, now + Duration::days(7));
    }

    #[test]
    fn should_propose_swap_once_per_key() {
        let now = Utc::now();
        let mut pantry = pantry_with_history(now, vec![]);
        pantry.stock(item("Ketchup", now));
        pantry.stock(item("ketchup", now));

        let suggestions = health_swaps(
            &pantry,
            &HealthySwapTable::builtin(),
            &PantryPolicy::default(),
            now,
        );

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].item_name, "Salsa");
    }

    #[test]
    fn should_follow_swap_table_order() {
        let now = Utc::now();
        let mut pantry = pantry_with_history(now, vec![]);
        pantry.stock(item("soft drinks", now));
        pantry.stock(item("white flour", now));

        let suggestions = health_swaps(
            &pantry,
            &HealthySwapTable::builtin(),
            &PantryPolicy::default(),
            now,
        );

        let names: Vec<&str> = suggestions.iter().map(|s| s.item_name.as_str()).collect();
        assert_eq!(names, ["Almond Flour", "Infused Water"]);
    }

    #[test]
    fn should_accept_swap_proposal_into_cart() {
        let now = Utc::now();
        let mut pantry = pantry_with_history(now, vec![]);
        pantry.stock(item("Sausage", now));
        let all = suggest(&pantry, &ReferenceData::default(), &PantryPolicy::default(), now);

        let accepted = pantry.add_to_list(all.health_swaps[0].proposal.clone());

        assert!(accepted);
        assert_eq!(pantry.shopping_list()[0].name, "Lean Chicken Sausage");
    }

    #[test]
    fn should_describe_reasons() {
        let reason = SuggestionReason::UsagePattern {
            days_since_purchase: 16,
            expected_interval_days: 14,
        };
        assert_eq!(reason.to_string(), "Last bought 16 days ago");
    }

    #[test]
    fn should_report_empty_for_fresh_pantry() {
        let now = Utc::now();
        let pantry = pantry_with_history(now, vec![]);

        let all = suggest(&pantry, &ReferenceData::default(), &PantryPolicy::default(), now);

        assert!(all.is_empty());
        assert_eq!(all.len(), 0);
    }
}
