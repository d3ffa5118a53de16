use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// A numeric resource tracked for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Hp,
    MaxHp,
    Gold,
    Armor,
    Danger,
}

impl ResourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Hp => "HP",
            ResourceKind::MaxHp => "Max HP",
            ResourceKind::Gold => "Gold",
            ResourceKind::Armor => "Armor",
            ResourceKind::Danger => "Danger",
        }
    }
}

/// One recorded mutation of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceChange {
    pub kind: ResourceKind,
    pub old: i32,
    pub new: i32,
}

/// The player's resources.
///
/// `hp` may drop to zero or below (that is game over) but never exceeds
/// `max_hp`. `max_hp` and `danger` never decrease within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub hp: i32,
    pub max_hp: i32,
    pub gold: i32,
    pub armor: i32,
    pub danger: i32,
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            hp: STARTING_HP,
            max_hp: STARTING_HP,
            gold: STARTING_GOLD,
            armor: STARTING_ARMOR,
            danger: STARTING_DANGER,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    pub fn get(&self, kind: ResourceKind) -> i32 {
        match kind {
            ResourceKind::Hp => self.hp,
            ResourceKind::MaxHp => self.max_hp,
            ResourceKind::Gold => self.gold,
            ResourceKind::Armor => self.armor,
            ResourceKind::Danger => self.danger,
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}
