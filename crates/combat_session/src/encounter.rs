use serde::{Deserialize, Serialize};

/// A scripted enemy: fixed HP, a fixed hit every turn and a bounty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opponent {
    pub name: String,
    pub hp: u32,
    pub damage: u32,
    #[serde(default)]
    pub bounty: u32,
}

impl Opponent {
    pub fn new(name: impl Into<String>, hp: u32, damage: u32, bounty: u32) -> Self {
        Self {
            name: name.into(),
            hp,
            damage,
            bounty,
        }
    }

    /// Returns the HP left after the hit.
    pub fn take_hit(&mut self, damage: u32) -> u32 {
        self.hp = self.hp.saturating_sub(damage);
        self.hp
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum EncounterOutcome {
    Victory { bounty: u32 },
    Fled,
    Defeated { penalty: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterRecord {
    pub opponent: String,
    pub rounds: u32,
    pub opponent_hp: u32,
    pub outcome: EncounterOutcome,
}
