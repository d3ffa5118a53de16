//! Curse catalog and active-curse bookkeeping.

use serde::{Deserialize, Serialize};

/// Identifies a curse in the static catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurseId {
    GreedsGambit,
    BrittleBones,
    WitheringTouch,
    MerchantsBan,
}

impl CurseId {
    pub const ALL: [CurseId; 4] = [
        CurseId::GreedsGambit,
        CurseId::BrittleBones,
        CurseId::WitheringTouch,
        CurseId::MerchantsBan,
    ];

    /// Looks up the catalog entry for this curse.
    pub fn curse(&self) -> &'static Curse {
        match self {
            CurseId::GreedsGambit => &GREEDS_GAMBIT,
            CurseId::BrittleBones => &BRITTLE_BONES,
            CurseId::WitheringTouch => &WITHERING_TOUCH,
            CurseId::MerchantsBan => &MERCHANTS_BAN,
        }
    }

    pub fn name(&self) -> &'static str {
        self.curse().name
    }
}

/// Which kind of value a curse multiplier applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKind {
    Gold,
    Damage,
    Healing,
}

/// Sparse effect bundle. Unset multipliers leave values unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurseEffects {
    pub gold_multiplier: Option<f64>,
    pub damage_multiplier: Option<f64>,
    pub healing_multiplier: Option<f64>,
    /// Armor is divided by this once, on acceptance
    pub armor_divider: Option<i32>,
    /// No shops are generated while active
    pub disable_shops: bool,
}

impl CurseEffects {
    pub const NONE: CurseEffects = CurseEffects {
        gold_multiplier: None,
        damage_multiplier: None,
        healing_multiplier: None,
        armor_divider: None,
        disable_shops: false,
    };

    pub fn multiplier(&self, kind: ModifierKind) -> Option<f64> {
        match kind {
            ModifierKind::Gold => self.gold_multiplier,
            ModifierKind::Damage => self.damage_multiplier,
            ModifierKind::Healing => self.healing_multiplier,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curse {
    pub id: CurseId,
    pub name: &'static str,
    pub description: &'static str,
    /// Floors the curse lasts once accepted
    pub duration: u32,
    pub effects: CurseEffects,
}

pub const GREEDS_GAMBIT: Curse = Curse {
    id: CurseId::GreedsGambit,
    name: "Greed's Gambit",
    description: "Gold found is doubled, but so is damage taken.",
    duration: 3,
    effects: CurseEffects {
        gold_multiplier: Some(2.0),
        damage_multiplier: Some(2.0),
        ..CurseEffects::NONE
    },
};

pub const BRITTLE_BONES: Curse = Curse {
    id: CurseId::BrittleBones,
    name: "Brittle Bones",
    description: "Your armor is halved until the curse lifts.",
    duration: 2,
    effects: CurseEffects {
        armor_divider: Some(2),
        ..CurseEffects::NONE
    },
};

pub const WITHERING_TOUCH: Curse = Curse {
    id: CurseId::WitheringTouch,
    name: "Withering Touch",
    description: "Potions heal only half as much.",
    duration: 3,
    effects: CurseEffects {
        healing_multiplier: Some(0.5),
        ..CurseEffects::NONE
    },
};

pub const MERCHANTS_BAN: Curse = Curse {
    id: CurseId::MerchantsBan,
    name: "Merchant's Ban",
    description: "No merchant will trade with you.",
    duration: 2,
    effects: CurseEffects {
        disable_shops: true,
        ..CurseEffects::NONE
    },
};

/// The curse currently afflicting the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveCurse {
    pub id: CurseId,
    /// Floor descents left before the curse lifts
    pub remaining: u32,
    /// Armor removed on acceptance, given back on expiry
    pub armor_penalty: i32,
}

impl ActiveCurse {
    pub fn curse(&self) -> &'static Curse {
        self.id.curse()
    }
}

/// Result of a floor descent for the curse lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurseTick {
    /// The curse is still active with this many floors left
    Continues { id: CurseId, remaining: u32 },
    /// The curse lifted; armor penalty (if any) was restored
    Expired { id: CurseId, armor_restored: i32 },
}
