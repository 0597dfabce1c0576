use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{self, Context, Result};
use combat_core::{Armor, Combatant, Consumable, Rules, Weapon};
use serde::Deserialize;

use crate::encounter::Opponent;

#[derive(Debug, Deserialize)]
pub struct SkirmishConfig {
    pub player: PlayerConfig,
    #[serde(default)]
    pub rules: Rules,
    #[serde(default)]
    pub base_armor: Option<Armor>,
    #[serde(default)]
    pub weapons: Vec<WeaponConfig>,
    #[serde(default)]
    pub armor: Vec<Armor>,
    #[serde(default)]
    pub medicine: Vec<Consumable>,
    #[serde(default)]
    pub opponents: Vec<Opponent>,
    #[serde(default)]
    pub report: Option<ReportConfig>,
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}

impl SkirmishConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&data).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml_str(data: &str) -> Result<Self> {
        let cfg: SkirmishConfig = toml::from_str(data)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.player.max_hp == 0 {
            anyhow::bail!("player.max_hp must be greater than zero");
        }
        let threshold = self.rules.run_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            anyhow::bail!("rules.run_threshold {threshold} is outside 0..=1");
        }
        Ok(())
    }

    /// Builds the starting combatant with every configured item in file order.
    pub fn build_combatant(&self) -> Combatant {
        let base_armor = self.base_armor.clone().unwrap_or_else(Armor::base);
        let mut combatant =
            Combatant::with_rules(self.player.max_hp, self.player.money, self.rules, base_armor);
        if let Some(name) = &self.player.name {
            combatant.set_name(name.clone());
        }
        for weapon in &self.weapons {
            combatant.add_weapon(weapon.to_weapon());
        }
        for armor in &self.armor {
            combatant.add_armor(armor.clone());
        }
        for medicine in &self.medicine {
            combatant.add_medicine(medicine.clone());
        }
        combatant
    }

    pub fn trace_filter(&self) -> Option<&str> {
        self.telemetry.as_ref().and_then(TelemetryConfig::filter)
    }
}

#[derive(Debug, Deserialize)]
pub struct PlayerConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub max_hp: u32,
    #[serde(default)]
    pub money: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeaponConfig {
    pub name: String,
    pub damage: u32,
    pub ammo: u32,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub price: u32,
}

impl WeaponConfig {
    /// Capacity defaults to the starting ammo.
    pub fn to_weapon(&self) -> Weapon {
        let capacity = self.capacity.unwrap_or(self.ammo);
        Weapon::new(self.name.clone(), self.damage, capacity, self.price).with_ammo(self.ammo)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub enable_trace: Option<bool>,
    #[serde(default)]
    pub trace_filter: Option<String>,
}

impl TelemetryConfig {
    /// The filter to install, or `None` when tracing is switched off.
    pub fn filter(&self) -> Option<&str> {
        if !self.enable_trace.unwrap_or(true) {
            return None;
        }
        self.trace_filter.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [player]
        name = "Ada"
        max_hp = 120
        money = 75

        [rules]
        death_penalty = 30

        [[weapons]]
        name = "Pistol"
        damage = 9
        ammo = 6

        [[weapons]]
        name = "Rail Gun"
        damage = 40
        ammo = 1
        capacity = 3
        price = 400

        [[armor]]
        name = "Plated Suit"
        defense = 6
        price = 80

        [[medicine]]
        name = "Stim"
        heal = 15
        uses = 2
        price = 10

        [[opponents]]
        name = "Drone"
        hp = 30
        damage = 8
        bounty = 20

        [telemetry]
        trace_filter = "combat_core=debug"
    "#;

    #[test]
    fn builds_the_configured_combatant() {
        let cfg = SkirmishConfig::from_toml_str(SAMPLE).unwrap();
        let c = cfg.build_combatant();
        assert_eq!("Ada", c.name());
        assert_eq!(120, c.hp());
        assert_eq!(75, c.money());
        assert_eq!(30, c.rules().death_penalty);
        assert_eq!(0.25, c.rules().run_threshold);
        assert_eq!(2, c.weapon_count());
        assert_eq!(Some("Pistol"), c.equipped_weapon().map(Weapon::name));
        assert_eq!(2, c.armor().len());
        assert_eq!(Some(&Armor::base()), c.equipped_armor());
        assert_eq!(1, c.medicine().len());
        assert_eq!(vec![Opponent::new("Drone", 30, 8, 20)], cfg.opponents);
        assert_eq!(Some("combat_core=debug"), cfg.trace_filter());
    }

    #[test]
    fn capacity_defaults_to_ammo() {
        let cfg = SkirmishConfig::from_toml_str(SAMPLE).unwrap();
        let rail = cfg.weapons[1].to_weapon();
        assert_eq!((1, 3), (rail.ammo(), rail.capacity()));
        let pistol = cfg.weapons[0].to_weapon();
        assert_eq!((6, 6), (pistol.ammo(), pistol.capacity()));
    }

    #[test]
    fn base_armor_can_be_overridden() {
        let cfg = SkirmishConfig::from_toml_str(
            r#"
            [player]
            max_hp = 50
            [base_armor]
            name = "Flight Suit"
            defense = 0
            "#,
        )
        .unwrap();
        let c = cfg.build_combatant();
        assert_eq!(Some("Flight Suit"), c.equipped_armor().map(Armor::name));
        assert_eq!("Soldier", c.name());
    }

    #[test]
    fn rejects_zero_max_hp() {
        let err = SkirmishConfig::from_toml_str("[player]\nmax_hp = 0\n").unwrap_err();
        assert!(err.to_string().contains("max_hp"));
    }

    #[test]
    fn rejects_threshold_above_one() {
        let data = "[player]\nmax_hp = 10\n[rules]\nrun_threshold = 1.5\n";
        assert!(SkirmishConfig::from_toml_str(data).is_err());
    }

    #[test]
    fn disabled_telemetry_has_no_filter() {
        let telemetry = TelemetryConfig {
            enable_trace: Some(false),
            trace_filter: Some("debug".into()),
        };
        assert_eq!(None, telemetry.filter());
    }
}
