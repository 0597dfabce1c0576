use std::fmt;

use serde::{Deserialize, Serialize};

/// Encounter menu entries, numbered the way they are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Attack = 1,
    Heal = 2,
    Run = 3,
    ChangeWeapon = 4,
    ChangeMedicine = 5,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Attack,
        Action::Heal,
        Action::Run,
        Action::ChangeWeapon,
        Action::ChangeMedicine,
    ];

    pub fn from_choice(choice: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.choice() == choice)
    }

    pub fn choice(self) -> u32 {
        self as u32
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::Heal => "Heal",
            Self::Run => "Run",
            Self::ChangeWeapon => "Change Weapon",
            Self::ChangeMedicine => "Change Medicine",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}) {}", self.choice(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_round_trip_through_the_menu_numbers() {
        for action in Action::ALL {
            assert_eq!(Some(action), Action::from_choice(action.choice()));
        }
        assert_eq!(None, Action::from_choice(0));
        assert_eq!(None, Action::from_choice(6));
        assert_eq!("4) Change Weapon", Action::ChangeWeapon.to_string());
    }
}
