//! Adapts an input source and a display sink to a [`Combatant`].
//!
//! Menus are shown 1-based; the chosen number is turned into a 0-based index
//! before anything in `combat_core` is called.

use combat_core::{Armor, CombatEvent, Combatant, Consumable, EquipOutcome, HealOutcome, Weapon};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::action::Action;
use crate::encounter::{EncounterOutcome, EncounterRecord, Opponent};
use crate::io::{DisplaySink, InputSource, SessionError};

/// One reported event, tagged with the encounter round it happened in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub round: u32,
    pub actor: String,
    pub event: CombatEvent,
}

pub struct Session<I, D> {
    combatant: Combatant,
    input: I,
    display: D,
    journal: Vec<JournalEntry>,
    round: u32,
}

impl<I: InputSource, D: DisplaySink> Session<I, D> {
    pub fn new(combatant: Combatant, input: I, display: D) -> Self {
        Self {
            combatant,
            input,
            display,
            journal: Vec::new(),
            round: 0,
        }
    }

    pub fn combatant(&self) -> &Combatant {
        &self.combatant
    }

    pub fn combatant_mut(&mut self) -> &mut Combatant {
        &mut self.combatant
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn journal(&self) -> &[JournalEntry] {
        &self.journal
    }

    pub fn into_parts(self) -> (Combatant, Vec<JournalEntry>) {
        (self.combatant, self.journal)
    }

    /// Asks for a new name; a blank answer keeps the current one.
    pub fn choose_name(&mut self) -> Result<(), SessionError> {
        let prompt = format!("{}, please enter your name:", self.combatant.name());
        self.display.show(&prompt)?;
        let name = self.input.read_line()?;
        if !name.is_empty() {
            self.combatant.set_name(name);
        }
        Ok(())
    }

    pub fn show_inventory(&mut self) -> Result<(), SessionError> {
        let listing = self.combatant.inventory().to_string();
        for line in listing.lines() {
            self.display.show(line)?;
        }
        Ok(())
    }

    /// Lets the player pick a medicine and use one dose of it.
    ///
    /// Returns `None` when there is nothing to pick from.
    pub fn heal(&mut self) -> Result<Option<HealOutcome>, SessionError> {
        if !self.combatant.has_medicine() {
            self.display.show("You have no medicine")?;
            return Ok(None);
        }
        let items = numbered(self.combatant.medicine().iter().map(Consumable::to_string));
        let index = self.select("Select a Medicine", items)?;
        let outcome = self.combatant.heal(index)?;
        self.report(outcome.clone())?;
        Ok(Some(outcome))
    }

    pub fn equip_weapon(&mut self) -> Result<EquipOutcome, SessionError> {
        let items = numbered(self.combatant.weapons().iter().map(Weapon::to_string));
        let index = self.select("Select the Weapon to Equip:", items)?;
        let outcome = self.combatant.equip_weapon(index)?;
        self.report(outcome.clone())?;
        Ok(outcome)
    }

    pub fn equip_armor(&mut self) -> Result<EquipOutcome, SessionError> {
        let items = numbered(self.combatant.armor().iter().map(Armor::to_string));
        let index = self.select("Select the Armor to Equip:", items)?;
        let outcome = self.combatant.equip_armor(index)?;
        self.report(outcome.clone())?;
        Ok(outcome)
    }

    pub fn change_medicine(&mut self) -> Result<EquipOutcome, SessionError> {
        let items = numbered(self.combatant.medicine().iter().map(Consumable::to_string));
        let index = self.select("Select the Medicine to Equip:", items)?;
        let outcome = self.combatant.equip_medicine_at(index)?;
        self.report(outcome.clone())?;
        Ok(outcome)
    }

    /// Refills every weapon's magazine.
    pub fn resupply(&mut self) -> Result<(), SessionError> {
        for index in 0..self.combatant.weapon_count() {
            let refill = self.combatant.refill_weapon(index)?;
            self.report(refill)?;
        }
        Ok(())
    }

    pub fn change_loadout(&mut self) -> Result<(), SessionError> {
        self.equip_weapon()?;
        self.equip_armor()?;
        Ok(())
    }

    /// Plays turns until the opponent falls, the player flees or the player
    /// dies. Every player action except a successful escape or a killing
    /// blow is answered by the opponent's hit.
    pub fn run_encounter(
        &mut self,
        opponent: &mut Opponent,
    ) -> Result<EncounterRecord, SessionError> {
        self.display
            .show(&format!("{} appears with {} HP!", opponent.name, opponent.hp))?;
        let mut rounds = 0;
        let outcome = loop {
            rounds += 1;
            self.round += 1;
            self.show_menu(opponent)?;
            let choice = self.input.read_choice(1, Action::ALL.len() as u32)?;
            let action =
                Action::from_choice(choice).ok_or(SessionError::UnknownAction(choice))?;

            match action {
                Action::Attack => {
                    let attack = self.combatant.attack();
                    let damage = attack.damage();
                    self.report(attack)?;
                    if damage > 0 {
                        let left = opponent.take_hit(damage);
                        self.display
                            .show(&format!("{} has {} HP left", opponent.name, left))?;
                    }
                    if opponent.is_defeated() {
                        let reward = self.combatant.add_money(opponent.bounty);
                        self.report(reward)?;
                        break EncounterOutcome::Victory {
                            bounty: opponent.bounty,
                        };
                    }
                }
                Action::Heal => {
                    self.heal()?;
                }
                Action::Run => {
                    if self.combatant.can_run() {
                        let line = format!("{} ran away", self.combatant.name());
                        self.display.show(&line)?;
                        break EncounterOutcome::Fled;
                    }
                    let line = format!("{} is too hurt to run", self.combatant.name());
                    self.display.show(&line)?;
                }
                Action::ChangeWeapon => {
                    self.equip_weapon()?;
                }
                Action::ChangeMedicine => {
                    self.change_medicine()?;
                }
            }

            let hit = self.combatant.sustain_damage(opponent.damage);
            self.report(hit)?;
            if self.combatant.is_dead() {
                let death = self.combatant.die();
                self.report(death)?;
                break EncounterOutcome::Defeated {
                    penalty: death.penalty,
                };
            }
        };

        info!(
            target: "combat_session.encounter",
            opponent = %opponent.name,
            rounds,
            ?outcome,
            "encounter finished"
        );
        Ok(EncounterRecord {
            opponent: opponent.name.clone(),
            rounds,
            opponent_hp: opponent.hp,
            outcome,
        })
    }

    fn show_menu(&mut self, opponent: &Opponent) -> Result<(), SessionError> {
        let status = format!(
            "{}: {}/{} HP | {}: {} HP",
            self.combatant.name(),
            self.combatant.hp(),
            self.combatant.max_hp(),
            opponent.name,
            opponent.hp
        );
        self.display.show(&status)?;
        for action in Action::ALL {
            self.display.show(&action.to_string())?;
        }
        Ok(())
    }

    /// Shows a numbered list and returns the 0-based index of the pick.
    /// An empty list shows a notice and yields index 0, which the core
    /// treats as "nothing to equip".
    fn select(&mut self, prompt: &str, listing: Vec<String>) -> Result<usize, SessionError> {
        if listing.is_empty() {
            return Ok(0);
        }
        self.display.show(prompt)?;
        for line in &listing {
            self.display.show(line)?;
        }
        let choice = self.input.read_choice(1, listing.len() as u32)?;
        Ok(choice as usize - 1)
    }

    fn report(&mut self, event: impl Into<CombatEvent>) -> Result<(), SessionError> {
        let event = event.into();
        let actor = self.combatant.name().to_owned();
        self.display.show(&format!("{actor} {event}"))?;
        self.journal.push(JournalEntry {
            round: self.round,
            actor,
            event,
        });
        Ok(())
    }
}

fn numbered(items: impl Iterator<Item = String>) -> Vec<String> {
    items
        .enumerate()
        .map(|(i, item)| format!("{}) {item}", i + 1))
        .collect()
}
