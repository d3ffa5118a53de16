use serde::{Deserialize, Serialize};

/// Which kind of enemy is attacking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterKind {
    Attack,
    Boss,
}

/// An attack or boss slide about to be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encounter {
    pub kind: EncounterKind,
    /// Negative damage value shown on the slide
    pub amount: i32,
}

impl Encounter {
    pub fn attack(amount: i32) -> Self {
        Self {
            kind: EncounterKind::Attack,
            amount,
        }
    }

    pub fn boss(amount: i32) -> Self {
        Self {
            kind: EncounterKind::Boss,
            amount,
        }
    }
}

/// The full breakdown of one attack roll against the player's armor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackRoll {
    /// Raw d20 result
    pub die: i32,
    /// +1 per 5 floors
    pub floor_bonus: i32,
    /// +2 for bosses
    pub boss_bonus: i32,
    /// Accumulated danger at roll time
    pub danger: i32,
    pub total: i32,
    pub armor: i32,
    pub hit: bool,
    /// HP actually lost (0 on a miss)
    pub damage: i32,
}
