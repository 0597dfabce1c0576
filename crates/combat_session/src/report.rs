use chrono::Utc;
use combat_core::{Armor, Combatant, Weapon};
use serde::{Deserialize, Serialize};

use crate::encounter::{EncounterOutcome, EncounterRecord};
use crate::session::JournalEntry;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub id: String,
    pub timestamp: String,
    pub player: PlayerSummary,
    pub summary: RunSummary,
    pub encounters: Vec<EncounterRecord>,
    pub journal: Vec<JournalEntry>,
}

impl RunReport {
    pub fn new(
        id: impl Into<String>,
        combatant: &Combatant,
        encounters: Vec<EncounterRecord>,
        journal: Vec<JournalEntry>,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp: Utc::now().to_rfc3339(),
            player: PlayerSummary::from_combatant(combatant),
            summary: summarize_encounters(&encounters),
            encounters,
            journal,
        }
    }

    pub fn summarize(&self) -> String {
        format!(
            "Report {} -> {:?} ({} won, {} fled, {} lost) {} ends with {}/{} HP and {} credits",
            self.id,
            self.summary.status,
            self.summary.victories,
            self.summary.retreats,
            self.summary.deaths,
            self.player.name,
            self.player.hp,
            self.player.max_hp,
            self.player.money
        )
    }
}

fn summarize_encounters(encounters: &[EncounterRecord]) -> RunSummary {
    let mut summary = RunSummary {
        status: RunStatus::Cleared,
        victories: 0,
        retreats: 0,
        deaths: 0,
    };
    for record in encounters {
        match record.outcome {
            EncounterOutcome::Victory { .. } => summary.victories += 1,
            EncounterOutcome::Fled => summary.retreats += 1,
            EncounterOutcome::Defeated { .. } => summary.deaths += 1,
        }
    }
    summary.status = if summary.deaths > 0 {
        RunStatus::Fell
    } else if summary.retreats > 0 {
        RunStatus::Survived
    } else {
        RunStatus::Cleared
    };
    summary
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSummary {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub money: i64,
    pub equipped_weapon: Option<String>,
    pub equipped_armor: Option<String>,
    pub weapons: usize,
    pub medicine_doses: u64,
}

impl PlayerSummary {
    pub fn from_combatant(combatant: &Combatant) -> Self {
        Self {
            name: combatant.name().to_owned(),
            hp: combatant.hp(),
            max_hp: combatant.max_hp(),
            money: combatant.money(),
            equipped_weapon: combatant.equipped_weapon().map(Weapon::name).map(str::to_owned),
            equipped_armor: combatant.equipped_armor().map(Armor::name).map(str::to_owned),
            weapons: combatant.weapon_count(),
            medicine_doses: combatant
                .medicine()
                .iter()
                .map(|m| u64::from(m.remaining_uses()))
                .sum(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub status: RunStatus,
    pub victories: u32,
    pub retreats: u32,
    pub deaths: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// Every opponent was beaten.
    Cleared,
    /// Fled at least once, never died.
    Survived,
    Fell,
}
