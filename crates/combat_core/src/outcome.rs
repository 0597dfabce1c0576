//! Status results returned by [`Combatant`](crate::Combatant) operations.
//!
//! The `Display` forms are predicate phrases meant to follow the combatant's
//! name, e.g. `"Soldier took 8 damage (2 absorbed) and has 92/100 HP"`.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GearKind {
    Weapon,
    Armor,
    Medicine,
}

impl fmt::Display for GearKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Weapon => "weapon",
            Self::Armor => "armor",
            Self::Medicine => "medicine",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AttackOutcome {
    Hit { weapon: String, damage: u32 },
    OutOfAmmo { weapon: String },
    Unarmed,
}

impl AttackOutcome {
    pub fn damage(&self) -> u32 {
        match self {
            Self::Hit { damage, .. } => *damage,
            Self::OutOfAmmo { .. } | Self::Unarmed => 0,
        }
    }
}

impl fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit { weapon, damage } => write!(f, "fired {weapon} for {damage} damage"),
            Self::OutOfAmmo { weapon } => write!(f, "pulled the trigger on an empty {weapon}"),
            Self::Unarmed => f.write_str("has no weapon to attack with"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HealOutcome {
    /// `amount` is what was actually restored after the max HP cap.
    Healed {
        medicine: String,
        amount: u32,
        hp: u32,
        max_hp: u32,
    },
    Empty {
        medicine: String,
    },
    NoMedicine,
}

impl fmt::Display for HealOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healed {
                medicine,
                amount,
                hp,
                max_hp,
            } => write!(f, "healed {amount} with {medicine} and has {hp}/{max_hp} HP"),
            Self::Empty { medicine } => write!(f, "reached for {medicine} but it is empty"),
            Self::NoMedicine => f.write_str("has no medicine"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EquipOutcome {
    Equipped { kind: GearKind, name: String },
    NothingToEquip { kind: GearKind },
}

impl fmt::Display for EquipOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equipped { name, .. } => write!(f, "equipped {name}"),
            Self::NothingToEquip { kind } => write!(f, "has no {kind} to equip"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageOutcome {
    pub raw: u32,
    pub absorbed: u32,
    pub effective: u32,
    pub hp: u32,
    pub max_hp: u32,
}

impl fmt::Display for DamageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "took {} damage ({} absorbed) and has {}/{} HP",
            self.effective, self.absorbed, self.hp, self.max_hp
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathOutcome {
    pub penalty: u32,
    pub hp: u32,
    pub money: i64,
}

impl fmt::Display for DeathOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fell in battle, respawned with {} HP and paid {} credits",
            self.hp, self.penalty
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletOutcome {
    pub delta: i64,
    pub balance: i64,
}

impl fmt::Display for WalletOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.delta >= 0 {
            write!(f, "got {} credits", self.delta)
        } else {
            write!(f, "lost {} credits", self.delta.unsigned_abs())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefillOutcome {
    pub weapon: String,
    pub ammo: u32,
}

impl fmt::Display for RefillOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "refilled {} to {} rounds", self.weapon, self.ammo)
    }
}
