use std::fmt;

use serde::{Deserialize, Serialize};

use crate::outcome::{
    AttackOutcome, DamageOutcome, DeathOutcome, EquipOutcome, HealOutcome, RefillOutcome,
    WalletOutcome,
};

/// Anything a combatant did or suffered that a display should report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum CombatEvent {
    Attack(AttackOutcome),
    Heal(HealOutcome),
    Equip(EquipOutcome),
    Damage(DamageOutcome),
    Death(DeathOutcome),
    Wallet(WalletOutcome),
    Refill(RefillOutcome),
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attack(outcome) => fmt::Display::fmt(outcome, f),
            Self::Heal(outcome) => fmt::Display::fmt(outcome, f),
            Self::Equip(outcome) => fmt::Display::fmt(outcome, f),
            Self::Damage(outcome) => fmt::Display::fmt(outcome, f),
            Self::Death(outcome) => fmt::Display::fmt(outcome, f),
            Self::Wallet(outcome) => fmt::Display::fmt(outcome, f),
            Self::Refill(outcome) => fmt::Display::fmt(outcome, f),
        }
    }
}

macro_rules! impl_from_outcome {
    ($($outcome:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$outcome> for CombatEvent {
                fn from(outcome: $outcome) -> Self {
                    Self::$variant(outcome)
                }
            }
        )*
    };
}

impl_from_outcome! {
    AttackOutcome => Attack,
    HealOutcome => Heal,
    EquipOutcome => Equip,
    DamageOutcome => Damage,
    DeathOutcome => Death,
    WalletOutcome => Wallet,
    RefillOutcome => Refill,
}
