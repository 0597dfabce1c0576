//! Weapons and armor. The combat rules only read numbers off these.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub const BASE_ARMOR_NAME: &str = "Light Spacesuit";
pub const BASE_ARMOR_DEFENSE: u32 = 2;

/// Result of pulling a weapon's trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shot {
    Fired(u32),
    Empty,
}

/// A weapon with a magazine. Each shot spends one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weapon {
    name: String,
    damage: u32,
    ammo: u32,
    capacity: u32,
    price: u32,
}

impl Weapon {
    /// Creates a weapon with a full magazine.
    pub fn new(name: impl Into<String>, damage: u32, capacity: u32, price: u32) -> Self {
        Self {
            name: name.into(),
            damage,
            ammo: capacity,
            capacity,
            price,
        }
    }

    /// Starts the weapon with `ammo` rounds loaded, capped at `capacity`.
    pub fn with_ammo(mut self, ammo: u32) -> Self {
        self.ammo = ammo.min(self.capacity);
        self
    }

    pub fn fire(&mut self) -> Shot {
        if self.ammo == 0 {
            debug!(target: "combat_core.gear", weapon = %self.name, "magazine empty");
            return Shot::Empty;
        }
        self.ammo -= 1;
        debug!(target: "combat_core.gear", weapon = %self.name, ammo = self.ammo, "shot fired");
        Shot::Fired(self.damage)
    }

    pub fn refill(&mut self) {
        self.ammo = self.capacity;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn price(&self) -> u32 {
        self.price
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:: Damage: {}:: Ammo: {}/{}",
            self.name, self.damage, self.ammo, self.capacity
        )
    }
}

/// A piece of armor. Its defense is subtracted from every incoming hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    name: String,
    defense: u32,
    #[serde(default)]
    price: u32,
}

impl Armor {
    pub fn new(name: impl Into<String>, defense: u32, price: u32) -> Self {
        Self {
            name: name.into(),
            defense,
            price,
        }
    }

    /// The suit every combatant starts in.
    pub fn base() -> Self {
        Self::new(BASE_ARMOR_NAME, BASE_ARMOR_DEFENSE, 0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn defense(&self) -> u32 {
        self.defense
    }

    pub fn price(&self) -> u32 {
        self.price
    }
}

impl fmt::Display for Armor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:: Defense: {}", self.name, self.defense)
    }
}
