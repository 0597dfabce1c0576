//! Player combat and inventory rules.

pub mod combatant;
pub mod consumable;
pub mod event;
pub mod gear;
pub mod health;
pub mod loadout;
pub mod outcome;
pub mod rules;
pub mod wallet;

pub use combatant::{Combatant, Inventory, DEFAULT_NAME};
pub use consumable::{Consumable, UseOutcome};
pub use event::CombatEvent;
pub use gear::{Armor, Shot, Weapon};
pub use health::Health;
pub use loadout::{Loadout, LoadoutError};
pub use outcome::{
    AttackOutcome, DamageOutcome, DeathOutcome, EquipOutcome, GearKind, HealOutcome,
    RefillOutcome, WalletOutcome,
};
pub use rules::Rules;
pub use wallet::Wallet;
