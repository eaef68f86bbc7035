//! Cart operations and the new-item submission state machine.
//!
//! `Submitted -> DirectlyAdded`, or
//! `Submitted -> AwaitingHealthDecision -> SwappedAndAdded | KeptAndAdded`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::errors::PantryError;
use super::model::{Pantry, PendingDecision};
use crate::domain::pantry_item::model::InventoryItem;
use crate::domain::policy::PantryPolicy;
use crate::domain::reference_data::{HealthySwapTable, title_case};
use crate::domain::shopping_item::model::ShoppingListEntry;

/// Where a submission ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// No swap exists. `added` is false when the name was already listed.
    DirectlyAdded { added: bool },
    /// A swap exists and the item waits for [`Pantry::resolve_pending`].
    AwaitingHealthDecision { suggested_name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionChoice {
    Swapped,
    Kept,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub choice: DecisionChoice,
    /// Name of the entry that was offered to the list.
    pub name: String,
    pub added: bool,
}

impl Pantry {
    /// Adds `entry` unless an entry with the same name is already listed.
    pub fn add_to_list(&mut self, entry: ShoppingListEntry) -> bool {
        if self.has_list_entry(&entry.name) {
            return false;
        }
        self.shopping_list.push(entry);
        true
    }

    /// Starts the submission flow for a new item.
    ///
    /// Fails with `DecisionAlreadyPending` while an earlier swap is unresolved;
    /// submissions are not queued.
    pub fn submit_new_item(
        &mut self,
        entry: ShoppingListEntry,
        swaps: &HealthySwapTable,
    ) -> Result<SubmissionOutcome, PantryError> {
        if self.pending.is_some() {
            return Err(PantryError::DecisionAlreadyPending);
        }

        match swaps.lookup(&entry.name) {
            Some(suggested) => {
                let suggested_name = suggested.to_string();
                self.pending = Some(PendingDecision {
                    original: entry,
                    suggested_name: suggested_name.clone(),
                });
                Ok(SubmissionOutcome::AwaitingHealthDecision { suggested_name })
            }
            None => Ok(SubmissionOutcome::DirectlyAdded {
                added: self.add_to_list(entry),
            }),
        }
    }

    /// Accepts or declines the pending swap. The decision is cleared even
    /// when the resulting entry turns out to be a duplicate.
    pub fn resolve_pending(&mut self, accept: bool) -> Result<Resolution, PantryError> {
        let PendingDecision {
            original,
            suggested_name,
        } = self.pending.take().ok_or(PantryError::NoPendingDecision)?;

        let (choice, entry) = if accept {
            (DecisionChoice::Swapped, original.renamed(title_case(&suggested_name)))
        } else {
            (DecisionChoice::Kept, original)
        };

        let name = entry.name.clone();
        let added = self.add_to_list(entry);
        Ok(Resolution {
            choice,
            name,
            added,
        })
    }

    pub fn remove_from_list(&mut self, index: usize) -> Result<ShoppingListEntry, PantryError> {
        let len = self.shopping_list.len();
        if index >= len {
            return Err(PantryError::IndexOutOfBounds { index, len });
        }
        Ok(self.shopping_list.remove(index))
    }

    /// Moves every listed entry into stock bought at `now` and empties the list.
    ///
    /// Conversion cannot fail, so the move is all-or-nothing.
    pub fn checkout(&mut self, now: DateTime<Utc>) -> Vec<InventoryItem> {
        let bought: Vec<InventoryItem> = self
            .shopping_list
            .drain(..)
            .map(|entry| InventoryItem::from_entry(entry, now))
            .collect();
        self.inventory.extend(bought.iter().cloned());
        bought
    }

    /// Removes a stocked item and remembers that it ran out.
    pub fn remove_from_inventory(&mut self, index: usize) -> Result<InventoryItem, PantryError> {
        let len = self.inventory.len();
        if index >= len {
            return Err(PantryError::IndexOutOfBounds { index, len });
        }
        let item = self.inventory.remove(index);
        if !self.is_out_of_stock(&item.name) {
            self.out_of_stock.push(item.name.clone());
        }
        Ok(item)
    }

    /// Puts a ran-out item back on the list with the default payload and
    /// stops tracking it as out of stock.
    pub fn restore_out_of_stock(
        &mut self,
        name: &str,
        policy: &PantryPolicy,
        now: DateTime<Utc>,
    ) -> bool {
        let added = self.add_to_list(policy.default_entry(name, now));
        self.out_of_stock.retain(|n| n != name);
        added
    }

    /// Stocks an item directly, bypassing the cart.
    pub fn stock(&mut self, item: InventoryItem) {
        self.inventory.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pantry_item::value_objects::{Category, ExpiryInput, Quantity, Unit};
    use crate::domain::shared::value_objects::SessionId;
    use crate::domain::shopping_item::model::NewItemProps;
    use chrono::Duration;
    use proptest::prelude::*;

    fn pantry() -> Pantry {
        Pantry::new(SessionId::new("test-session"), Utc::now())
    }

    fn entry(name: &str) -> ShoppingListEntry {
        ShoppingListEntry::new(NewItemProps {
            name: name.to_string(),
            category: Category::Snacks,
            quantity: 2.0,
            unit: Unit::Packet,
            expires_at: ExpiryInput::from(Utc::now() + Duration::days(30)),
        })
        .unwrap()
    }

    fn stocked(name: &str) -> InventoryItem {
        InventoryItem::from_entry(entry(name), Utc::now())
    }

    #[test]
    fn should_add_entry_once() {
        let mut pantry = pantry();

        assert!(pantry.add_to_list(entry("Oats")));
        assert!(!pantry.add_to_list(entry("Oats")));
        assert_eq!(pantry.shopping_list().len(), 1);
    }

    #[test]
    fn should_treat_names_case_sensitively_when_adding() {
        let mut pantry = pantry();

        assert!(pantry.add_to_list(entry("oats")));
        assert!(pantry.add_to_list(entry("Oats")));
        assert_eq!(pantry.shopping_list().len(), 2);
    }

    #[test]
    fn should_add_directly_when_no_swap_exists() {
        let mut pantry = pantry();
        let swaps = HealthySwapTable::builtin();

        let outcome = pantry.submit_new_item(entry("Quinoa"), &swaps).unwrap();

        assert_eq!(outcome, SubmissionOutcome::DirectlyAdded { added: true });
        assert!(pantry.pending().is_none());
        assert_eq!(pantry.shopping_list()[0].name, "Quinoa");
    }

    #[test]
    fn should_report_duplicate_on_direct_add() {
        let mut pantry = pantry();
        let swaps = HealthySwapTable::builtin();
        pantry.add_to_list(entry("Quinoa"));

        let outcome = pantry.submit_new_item(entry("Quinoa"), &swaps).unwrap();

        assert_eq!(outcome, SubmissionOutcome::DirectlyAdded { added: false });
    }

    #[test]
    fn should_hold_item_when_swap_exists() {
        let mut pantry = pantry();
        let swaps = HealthySwapTable::builtin();

        let outcome = pantry
            .submit_new_item(entry("white sugar syrup"), &swaps)
            .unwrap();

        assert_eq!(
            outcome,
            SubmissionOutcome::AwaitingHealthDecision {
                suggested_name: "maple syrup".to_string()
            }
        );
        assert!(pantry.shopping_list().is_empty());
        assert_eq!(pantry.pending().unwrap().suggested_name, "maple syrup");
    }

    #[test]
    fn should_reject_second_submission_while_decision_pending() {
        let mut pantry = pantry();
        let swaps = HealthySwapTable::builtin();
        pantry.submit_new_item(entry("Ketchup"), &swaps).unwrap();

        let result = pantry.submit_new_item(entry("Quinoa"), &swaps);

        assert!(matches!(result, Err(PantryError::DecisionAlreadyPending)));
        assert_eq!(pantry.pending().unwrap().original.name, "Ketchup");
        assert!(pantry.shopping_list().is_empty());
    }

    #[test]
    fn should_keep_original_when_swap_declined() {
        let mut pantry = pantry();
        let swaps = HealthySwapTable::builtin();
        pantry
            .submit_new_item(entry("white sugar syrup"), &swaps)
            .unwrap();

        let resolution = pantry.resolve_pending(false).unwrap();

        assert_eq!(resolution.choice, DecisionChoice::Kept);
        assert_eq!(resolution.name, "white sugar syrup");
        assert!(resolution.added);
        assert_eq!(pantry.shopping_list()[0].name, "white sugar syrup");
        assert!(pantry.pending().is_none());
    }

    #[test]
    fn should_add_title_cased_swap_when_accepted() {
        let mut pantry = pantry();
        let swaps = HealthySwapTable::builtin();
        let original = entry("Sausage");
        pantry.submit_new_item(original.clone(), &swaps).unwrap();

        let resolution = pantry.resolve_pending(true).unwrap();

        assert_eq!(resolution.choice, DecisionChoice::Swapped);
        let added = &pantry.shopping_list()[0];
        assert_eq!(added.name, "Lean Chicken Sausage");
        assert_eq!(added.quantity, original.quantity);
        assert_eq!(added.unit, original.unit);
        assert_eq!(added.category, original.category);
    }

    #[test]
    fn should_clear_decision_even_when_entry_is_duplicate() {
        let mut pantry = pantry();
        let swaps = HealthySwapTable::builtin();
        pantry.add_to_list(entry("Salsa"));
        pantry.submit_new_item(entry("ketchup"), &swaps).unwrap();

        let resolution = pantry.resolve_pending(true).unwrap();

        assert!(!resolution.added);
        assert!(pantry.pending().is_none());
        assert_eq!(pantry.shopping_list().len(), 1);
    }

    #[test]
    fn should_fail_to_resolve_without_pending_decision() {
        let mut pantry = pantry();
        let result = pantry.resolve_pending(true);
        assert!(matches!(result, Err(PantryError::NoPendingDecision)));
    }

    #[test]
    fn should_remove_entry_by_index() {
        let mut pantry = pantry();
        pantry.add_to_list(entry("Oats"));
        pantry.add_to_list(entry("Rice"));

        let removed = pantry.remove_from_list(0).unwrap();

        assert_eq!(removed.name, "Oats");
        assert_eq!(pantry.shopping_list()[0].name, "Rice");
    }

    #[test]
    fn should_fail_to_remove_entry_out_of_bounds() {
        let mut pantry = pantry();
        pantry.add_to_list(entry("Oats"));

        let result = pantry.remove_from_list(1);

        assert!(matches!(
            result,
            Err(PantryError::IndexOutOfBounds { index: 1, len: 1 })
        ));
        assert_eq!(pantry.shopping_list().len(), 1);
    }

    #[test]
    fn should_move_every_entry_into_stock_on_checkout() {
        let mut pantry = pantry();
        let now = Utc::now();
        pantry.stock(stocked("Rice"));
        pantry.add_to_list(entry("Oats"));
        pantry.add_to_list(entry("Beans"));

        let bought = pantry.checkout(now);

        assert_eq!(bought.len(), 2);
        assert!(pantry.shopping_list().is_empty());
        assert_eq!(pantry.inventory().len(), 3);
        assert_eq!(pantry.inventory()[1].name, "Oats");
        assert_eq!(pantry.inventory()[2].name, "Beans");
        assert!(bought.iter().all(|item| item.acquired_at == now));
    }

    #[test]
    fn should_checkout_empty_list_as_no_op() {
        let mut pantry = pantry();
        assert!(pantry.checkout(Utc::now()).is_empty());
        assert!(pantry.inventory().is_empty());
    }

    #[test]
    fn should_track_removed_item_as_out_of_stock_once() {
        let mut pantry = pantry();
        pantry.stock(stocked("Milk"));
        pantry.stock(stocked("Milk"));

        pantry.remove_from_inventory(0).unwrap();
        pantry.remove_from_inventory(0).unwrap();

        assert_eq!(pantry.out_of_stock(), ["Milk".to_string()]);
        assert!(pantry.inventory().is_empty());
    }

    #[test]
    fn should_fail_to_remove_stock_out_of_bounds() {
        let mut pantry = pantry();
        let result = pantry.remove_from_inventory(0);

        assert!(matches!(
            result,
            Err(PantryError::IndexOutOfBounds { index: 0, len: 0 })
        ));
        assert!(pantry.out_of_stock().is_empty());
    }

    #[test]
    fn should_restore_out_of_stock_item_with_defaults() {
        let mut pantry = pantry();
        let now = Utc::now();
        pantry.stock(stocked("Milk"));
        pantry.remove_from_inventory(0).unwrap();

        let added = pantry.restore_out_of_stock("Milk", &PantryPolicy::default(), now);

        assert!(added);
        assert!(pantry.out_of_stock().is_empty());
        let restored = &pantry.shopping_list()[0];
        assert_eq!(restored.name, "Milk");
        assert_eq!(restored.category, Category::General);
        assert_eq!(restored.quantity, Quantity::ONE);
        assert_eq!(restored.unit, Unit::Pieces);
        assert_eq!(restored.expires_at, now + Duration::days(7));
    }

    #[test]
    fn should_stop_tracking_restored_item_even_if_already_listed() {
        let mut pantry = pantry();
        pantry.stock(stocked("Milk"));
        pantry.remove_from_inventory(0).unwrap();
        pantry.add_to_list(entry("Milk"));

        let added = pantry.restore_out_of_stock("Milk", &PantryPolicy::default(), Utc::now());

        assert!(!added);
        assert!(pantry.out_of_stock().is_empty());
        assert_eq!(pantry.shopping_list().len(), 1);
    }

    proptest! {
        #[test]
        fn checkout_moves_every_entry_exactly_once(
            names in proptest::collection::hash_set("[a-z]{1,8}", 0..12),
            stock in 0usize..5,
        ) {
            let mut pantry = pantry();
            for i in 0..stock {
                pantry.stock(stocked(&format!("stock-{i}")));
            }
            for name in &names {
                pantry.add_to_list(entry(name));
            }
            let listed: Vec<String> =
                pantry.shopping_list().iter().map(|e| e.name.clone()).collect();

            let bought = pantry.checkout(Utc::now());

            prop_assert!(pantry.shopping_list().is_empty());
            prop_assert_eq!(pantry.inventory().len(), stock + listed.len());
            let bought_names: Vec<String> = bought.iter().map(|i| i.name.clone()).collect();
            prop_assert_eq!(bought_names, listed);
        }

        #[test]
        fn repeated_add_mutates_list_once(name in "[A-Za-z ]{1,16}", repeats in 2usize..6) {
            prop_assume!(!name.trim().is_empty());
            let mut pantry = pantry();

            let results: Vec<bool> = (0..repeats).map(|_| pantry.add_to_list(entry(&name))).collect();

            prop_assert!(results[0]);
            prop_assert!(results[1..].iter().all(|added| !added));
            prop_assert_eq!(pantry.shopping_list().len(), 1);
        }

        #[test]
        fn out_of_stock_names_stay_distinct(picks in proptest::collection::vec(0usize..3, 1..10)) {
            let names = ["Milk", "Eggs", "Bread"];
            let mut pantry = pantry();
            for pick in &picks {
                pantry.stock(stocked(names[*pick]));
            }

            while !pantry.inventory().is_empty() {
                pantry.remove_from_inventory(0).unwrap();
            }

            let mut seen = pantry.out_of_stock().to_vec();
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), pantry.out_of_stock().len());
        }
    }
}
