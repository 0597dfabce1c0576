//! Limited-use medicine.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of trying to use one dose of a consumable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseOutcome {
    /// A dose was spent; carries the heal amount.
    Healed(u32),
    /// No doses remain. Nothing was spent and nothing heals.
    Empty,
}

impl UseOutcome {
    pub fn amount(self) -> u32 {
        match self {
            Self::Healed(amount) => amount,
            Self::Empty => 0,
        }
    }
}

/// A medicine with a fixed heal amount and a finite number of uses.
///
/// Exhausted consumables stay in the inventory; they just stop healing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumable {
    name: String,
    #[serde(rename = "heal")]
    heal_amount: u32,
    #[serde(rename = "uses")]
    remaining_uses: u32,
    #[serde(default)]
    price: u32,
}

impl Consumable {
    pub fn new(name: impl Into<String>, heal_amount: u32, uses: u32, price: u32) -> Self {
        Self {
            name: name.into(),
            heal_amount,
            remaining_uses: uses,
            price,
        }
    }

    /// Spends one dose while any remain.
    pub fn use_dose(&mut self) -> UseOutcome {
        if self.remaining_uses == 0 {
            debug!(target: "combat_core.consumable", name = %self.name, "medicine is empty");
            return UseOutcome::Empty;
        }
        self.remaining_uses -= 1;
        debug!(
            target: "combat_core.consumable",
            name = %self.name,
            remaining = self.remaining_uses,
            "dose used"
        );
        UseOutcome::Healed(self.heal_amount)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn heal_amount(&self) -> u32 {
        self.heal_amount
    }

    pub fn remaining_uses(&self) -> u32 {
        self.remaining_uses
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn is_empty(&self) -> bool {
        self.remaining_uses == 0
    }
}

impl fmt::Display for Consumable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:: Heal: {}:: Uses: {}",
            self.name, self.heal_amount, self.remaining_uses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_run_out_then_stay_empty() {
        let mut stim = Consumable::new("Stim", 15, 2, 10);
        assert_eq!(UseOutcome::Healed(15), stim.use_dose());
        assert_eq!(UseOutcome::Healed(15), stim.use_dose());
        assert!(stim.is_empty());
        for _ in 0..3 {
            assert_eq!(UseOutcome::Empty, stim.use_dose());
            assert_eq!(0, stim.remaining_uses());
        }
    }

    #[test]
    fn display_lists_heal_and_uses() {
        let kit = Consumable::new("Med Kit", 40, 1, 25);
        assert_eq!("Med Kit:: Heal: 40:: Uses: 1", kit.to_string());
    }

    #[test]
    fn deserializes_short_field_names() {
        let kit: Consumable =
            serde_json::from_str(r#"{"name":"Bandage","heal":5,"uses":3}"#).unwrap();
        assert_eq!(Consumable::new("Bandage", 5, 3, 0), kit);
    }
}
