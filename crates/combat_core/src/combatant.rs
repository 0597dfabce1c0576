//! The player character: health, credits and three loadouts.
//!
//! Operations never read input themselves. Selections arrive as 0-based
//! indices already resolved by the caller, and every result comes back as a
//! status value from [`crate::outcome`].

use std::fmt;

use tracing::{info, warn};

use crate::consumable::{Consumable, UseOutcome};
use crate::gear::{Armor, Shot, Weapon};
use crate::health::Health;
use crate::loadout::{Loadout, LoadoutError};
use crate::outcome::{
    AttackOutcome, DamageOutcome, DeathOutcome, EquipOutcome, GearKind, HealOutcome,
    RefillOutcome, WalletOutcome,
};
use crate::rules::Rules;
use crate::wallet::Wallet;

pub const DEFAULT_NAME: &str = "Soldier";

#[derive(Debug, Clone)]
pub struct Combatant {
    name: String,
    health: Health,
    wallet: Wallet,
    rules: Rules,
    weapons: Loadout<Weapon>,
    armor: Loadout<Armor>,
    medicine: Loadout<Consumable>,
}

impl Combatant {
    /// Creates a combatant at full health wearing the base armor.
    pub fn new(max_hp: u32, money: i64) -> Self {
        Self::with_rules(max_hp, money, Rules::default(), Armor::base())
    }

    pub fn with_rules(max_hp: u32, money: i64, rules: Rules, base_armor: Armor) -> Self {
        let mut armor = Loadout::new();
        armor.push(base_armor);
        Self {
            name: DEFAULT_NAME.to_owned(),
            health: Health::new(max_hp),
            wallet: Wallet::new(money),
            rules,
            weapons: Loadout::new(),
            armor,
            medicine: Loadout::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn hp(&self) -> u32 {
        self.health.current()
    }

    pub fn max_hp(&self) -> u32 {
        self.health.max()
    }

    pub fn money(&self) -> i64 {
        self.wallet.balance()
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn add_weapon(&mut self, weapon: Weapon) {
        self.weapons.push(weapon);
    }

    pub fn add_armor(&mut self, armor: Armor) {
        self.armor.push(armor);
    }

    pub fn add_medicine(&mut self, medicine: Consumable) {
        self.medicine.push(medicine);
    }

    pub fn weapons(&self) -> &Loadout<Weapon> {
        &self.weapons
    }

    pub fn armor(&self) -> &Loadout<Armor> {
        &self.armor
    }

    pub fn medicine(&self) -> &Loadout<Consumable> {
        &self.medicine
    }

    pub fn equipped_weapon(&self) -> Option<&Weapon> {
        self.weapons.equipped()
    }

    /// The armor loadout is seeded at construction and only ever grows.
    pub fn equipped_armor(&self) -> Option<&Armor> {
        self.armor.equipped()
    }

    pub fn equipped_medicine(&self) -> Option<&Consumable> {
        self.medicine.equipped()
    }

    pub fn has_weapons(&self) -> bool {
        !self.weapons.is_empty()
    }

    pub fn has_armor(&self) -> bool {
        !self.armor.is_empty()
    }

    pub fn has_medicine(&self) -> bool {
        !self.medicine.is_empty()
    }

    pub fn weapon_count(&self) -> usize {
        self.weapons.len()
    }

    pub fn attack(&mut self) -> AttackOutcome {
        let Some(weapon) = self.weapons.equipped_mut() else {
            warn!(target: "combat_core.combatant", name = %self.name, "attack without a weapon");
            return AttackOutcome::Unarmed;
        };
        match weapon.fire() {
            Shot::Fired(damage) => AttackOutcome::Hit {
                weapon: weapon.name().to_owned(),
                damage,
            },
            Shot::Empty => AttackOutcome::OutOfAmmo {
                weapon: weapon.name().to_owned(),
            },
        }
    }

    pub fn refill_weapon(&mut self, index: usize) -> Result<RefillOutcome, LoadoutError> {
        let weapon = self.weapons.get_mut(index)?;
        weapon.refill();
        Ok(RefillOutcome {
            weapon: weapon.name().to_owned(),
            ammo: weapon.ammo(),
        })
    }

    /// Uses one dose of the medicine at `index`; HP never passes max.
    pub fn heal(&mut self, index: usize) -> Result<HealOutcome, LoadoutError> {
        if self.medicine.is_empty() {
            return Ok(HealOutcome::NoMedicine);
        }
        let medicine = self.medicine.get_mut(index)?;
        let name = medicine.name().to_owned();
        let outcome = match medicine.use_dose() {
            UseOutcome::Healed(amount) => HealOutcome::Healed {
                medicine: name,
                amount: self.health.heal(amount),
                hp: self.health.current(),
                max_hp: self.health.max(),
            },
            UseOutcome::Empty => HealOutcome::Empty { medicine: name },
        };
        info!(target: "combat_core.combatant", name = %self.name, %outcome, "heal");
        Ok(outcome)
    }

    pub fn equip_weapon(&mut self, index: usize) -> Result<EquipOutcome, LoadoutError> {
        let equipped = self.weapons.equip(index)?.map(|w| w.name().to_owned());
        Ok(self.equip_outcome(GearKind::Weapon, equipped))
    }

    pub fn equip_armor(&mut self, index: usize) -> Result<EquipOutcome, LoadoutError> {
        let equipped = self.armor.equip(index)?.map(|a| a.name().to_owned());
        Ok(self.equip_outcome(GearKind::Armor, equipped))
    }

    pub fn equip_medicine_at(&mut self, index: usize) -> Result<EquipOutcome, LoadoutError> {
        let equipped = self.medicine.equip(index)?.map(|m| m.name().to_owned());
        Ok(self.equip_outcome(GearKind::Medicine, equipped))
    }

    /// Equips the medicine equal to `item`.
    pub fn equip_medicine(&mut self, item: &Consumable) -> Result<EquipOutcome, LoadoutError> {
        if self.medicine.is_empty() {
            return Ok(EquipOutcome::NothingToEquip {
                kind: GearKind::Medicine,
            });
        }
        let index = self
            .medicine
            .position(|m| m == item)
            .ok_or_else(|| LoadoutError::NotFound {
                name: item.name().to_owned(),
            })?;
        self.equip_medicine_at(index)
    }

    fn equip_outcome(&self, kind: GearKind, name: Option<String>) -> EquipOutcome {
        match name {
            Some(name) => {
                info!(target: "combat_core.combatant", %kind, item = %name, "equipped");
                EquipOutcome::Equipped { kind, name }
            }
            None => EquipOutcome::NothingToEquip { kind },
        }
    }

    /// Applies a hit reduced by the equipped armor's defense, floored at zero.
    pub fn sustain_damage(&mut self, raw: u32) -> DamageOutcome {
        let defense = self.armor.equipped().map_or(0, Armor::defense);
        let absorbed = raw.min(defense);
        let effective = raw - absorbed;
        self.health.damage(effective);
        let outcome = DamageOutcome {
            raw,
            absorbed,
            effective,
            hp: self.health.current(),
            max_hp: self.health.max(),
        };
        info!(target: "combat_core.combatant", name = %self.name, %outcome, "damage");
        outcome
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_depleted()
    }

    /// Respawns at full health and pays the death penalty, even into debt.
    pub fn die(&mut self) -> DeathOutcome {
        self.health.restore();
        let penalty = self.rules.death_penalty;
        self.take_money(penalty);
        let outcome = DeathOutcome {
            penalty,
            hp: self.health.current(),
            money: self.wallet.balance(),
        };
        warn!(target: "combat_core.combatant", name = %self.name, %outcome, "death");
        outcome
    }

    pub fn can_run(&self) -> bool {
        self.health.ratio() > self.rules.run_threshold
    }

    pub fn is_full_hp(&self) -> bool {
        self.health.is_full()
    }

    pub fn add_money(&mut self, amount: u32) -> WalletOutcome {
        WalletOutcome {
            delta: i64::from(amount),
            balance: self.wallet.deposit(amount),
        }
    }

    pub fn take_money(&mut self, amount: u32) -> WalletOutcome {
        WalletOutcome {
            delta: -i64::from(amount),
            balance: self.wallet.withdraw(amount),
        }
    }

    pub fn inventory(&self) -> Inventory<'_> {
        Inventory { combatant: self }
    }
}

/// Printable view of everything a combatant carries.
pub struct Inventory<'a> {
    combatant: &'a Combatant,
}

impl fmt::Display for Inventory<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.combatant;
        writeln!(f, "{}'s Weapons are:", c.name)?;
        for weapon in &c.weapons {
            writeln!(f, "{weapon}")?;
        }
        writeln!(f, "{}'s Medicines are:", c.name)?;
        for medicine in &c.medicine {
            writeln!(f, "{medicine}")?;
        }
        writeln!(f, "{}'s Armors are:", c.name)?;
        for armor in &c.armor {
            writeln!(f, "{armor}")?;
        }
        write!(f, "{} has {} credits.", c.name, c.wallet.balance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soldier() -> Combatant {
        Combatant::new(100, 200)
    }

    fn armed() -> Combatant {
        let mut c = soldier();
        c.add_weapon(Weapon::new("Pistol", 8, 6, 0));
        c.add_weapon(Weapon::new("Rifle", 20, 3, 150));
        c.add_weapon(Weapon::new("Blade", 12, 99, 40));
        c
    }

    #[test]
    fn starts_full_in_base_armor() {
        let c = soldier();
        assert_eq!(DEFAULT_NAME, c.name());
        assert!(c.is_full_hp());
        assert_eq!(Some(&Armor::base()), c.equipped_armor());
        assert!(!c.has_weapons());
        assert!(!c.has_medicine());
    }

    #[test]
    fn armor_absorbs_and_never_heals() {
        let mut c = soldier();
        let hit = c.sustain_damage(10);
        assert_eq!(8, hit.effective);
        assert_eq!(2, hit.absorbed);
        assert_eq!(92, c.hp());

        let graze = c.sustain_damage(1);
        assert_eq!(0, graze.effective);
        assert_eq!(92, c.hp());
    }

    #[test]
    fn damage_floors_at_zero_and_kills() {
        let mut c = soldier();
        let outcome = c.sustain_damage(500);
        assert_eq!(0, outcome.hp);
        assert!(c.is_dead());
    }

    #[test]
    fn death_respawns_and_charges_penalty() {
        let mut c = Combatant::new(100, 30);
        c.sustain_damage(250);
        let outcome = c.die();
        assert_eq!(100, c.hp());
        assert_eq!(-20, c.money());
        assert_eq!(
            DeathOutcome {
                penalty: 50,
                hp: 100,
                money: -20
            },
            outcome
        );
    }

    #[test]
    fn run_threshold_is_strict() {
        let mut c = Combatant::with_rules(100, 0, Rules::default(), Armor::new("None", 0, 0));
        c.sustain_damage(74);
        assert_eq!(26, c.hp());
        assert!(c.can_run());
        c.sustain_damage(1);
        assert_eq!(25, c.hp());
        assert!(!c.can_run());
    }

    #[test]
    fn attack_uses_equipped_weapon() {
        let mut c = armed();
        assert_eq!(8, c.attack().damage());
        c.equip_weapon(1).unwrap();
        assert_eq!(
            AttackOutcome::Hit {
                weapon: "Rifle".into(),
                damage: 20
            },
            c.attack()
        );
    }

    #[test]
    fn attack_without_weapon_is_unarmed() {
        let mut c = soldier();
        assert_eq!(AttackOutcome::Unarmed, c.attack());
    }

    #[test]
    fn empty_weapon_deals_nothing_until_refilled() {
        let mut c = soldier();
        c.add_weapon(Weapon::new("Flare Gun", 30, 1, 0));
        assert_eq!(30, c.attack().damage());
        assert_eq!(
            AttackOutcome::OutOfAmmo {
                weapon: "Flare Gun".into()
            },
            c.attack()
        );
        let refill = c.refill_weapon(0).unwrap();
        assert_eq!(1, refill.ammo);
        assert_eq!(30, c.attack().damage());
        assert!(c.refill_weapon(3).is_err());
    }

    #[test]
    fn equip_weapon_swaps_with_slot_zero() {
        let mut c = armed();
        let outcome = c.equip_weapon(2).unwrap();
        assert_eq!(
            EquipOutcome::Equipped {
                kind: GearKind::Weapon,
                name: "Blade".into()
            },
            outcome
        );
        let names: Vec<_> = c.weapons().iter().map(Weapon::name).collect();
        assert_eq!(vec!["Blade", "Rifle", "Pistol"], names);
    }

    #[test]
    fn equip_on_empty_loadout_is_a_no_op() {
        let mut c = soldier();
        assert_eq!(
            EquipOutcome::NothingToEquip {
                kind: GearKind::Weapon
            },
            c.equip_weapon(0).unwrap()
        );
        assert_eq!(
            EquipOutcome::NothingToEquip {
                kind: GearKind::Medicine
            },
            c.equip_medicine_at(1).unwrap()
        );
    }

    #[test]
    fn equip_armor_changes_mitigation() {
        let mut c = soldier();
        c.add_armor(Armor::new("Plated Suit", 7, 90));
        c.equip_armor(1).unwrap();
        c.sustain_damage(10);
        assert_eq!(97, c.hp());
        assert_eq!(Some(&Armor::base()), c.armor().get(1).ok());
    }

    #[test]
    fn heal_caps_at_max_and_spends_a_dose() {
        let mut c = soldier();
        c.add_medicine(Consumable::new("Med Kit", 40, 2, 25));
        c.sustain_damage(22);
        let outcome = c.heal(0).unwrap();
        assert_eq!(
            HealOutcome::Healed {
                medicine: "Med Kit".into(),
                amount: 20,
                hp: 100,
                max_hp: 100
            },
            outcome
        );
        assert_eq!(1, c.medicine().get(0).unwrap().remaining_uses());
    }

    #[test]
    fn exhausted_medicine_reports_empty() {
        let mut c = soldier();
        c.add_medicine(Consumable::new("Stim", 10, 1, 5));
        c.sustain_damage(52);
        c.heal(0).unwrap();
        assert_eq!(60, c.hp());
        assert_eq!(
            HealOutcome::Empty {
                medicine: "Stim".into()
            },
            c.heal(0).unwrap()
        );
        assert_eq!(60, c.hp());
    }

    #[test]
    fn heal_without_medicine_reports_none() {
        let mut c = soldier();
        assert_eq!(HealOutcome::NoMedicine, c.heal(0).unwrap());
    }

    #[test]
    fn equip_medicine_by_item() {
        let mut c = soldier();
        let stim = Consumable::new("Stim", 10, 1, 5);
        let kit = Consumable::new("Med Kit", 40, 2, 25);
        c.add_medicine(stim.clone());
        c.add_medicine(kit.clone());
        c.equip_medicine(&kit).unwrap();
        assert_eq!(Some(&kit), c.equipped_medicine());
        assert_eq!(Some(&stim), c.medicine().get(1).ok());

        let missing = Consumable::new("Antidote", 5, 1, 5);
        assert_eq!(
            Err(LoadoutError::NotFound {
                name: "Antidote".into()
            }),
            c.equip_medicine(&missing)
        );
    }

    #[test]
    fn money_moves_both_ways() {
        let mut c = soldier();
        assert_eq!(
            WalletOutcome {
                delta: 30,
                balance: 230
            },
            c.add_money(30)
        );
        assert_eq!(-70, c.take_money(300).balance);
    }

    #[test]
    fn inventory_lists_every_collection() {
        let mut c = armed();
        c.set_name("Ada");
        c.add_medicine(Consumable::new("Stim", 10, 1, 5));
        let listing = c.inventory().to_string();
        assert!(listing.starts_with("Ada's Weapons are:\nPistol:: Damage: 8:: Ammo: 6/6\n"));
        assert!(listing.contains("Ada's Medicines are:\nStim:: Heal: 10:: Uses: 1\n"));
        assert!(listing.contains("Ada's Armors are:\nLight Spacesuit:: Defense: 2\n"));
        assert!(listing.ends_with("Ada has 200 credits."));
    }
}
