//! Curse lifecycle: offer, accept, banish, expire.
//!
//! A curse is measured in floor descents, never in time or slides. At most
//! one curse is active, and banishing the witch keeps her away for the rest
//! of the run.

use super::types::{ActiveCurse, CurseId, CurseTick, ModifierKind};
use crate::core::constants::{CURSE_ACCEPT_HP_DIVISOR, CURSE_BANISH_HP_DIVISOR};
use crate::core::error::ActionRejected;
use crate::economy::Economy;
use rand::Rng;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct CurseEngine {
    active: Option<ActiveCurse>,
    witch_banished: bool,
}

/// Divides `hp` by `divisor`, rounding up. Dead players owe nothing.
fn hp_cost(hp: i32, divisor: i32) -> i32 {
    let hp = hp.max(0);
    (hp + divisor - 1) / divisor
}

/// HP cost of accepting a curse at the given HP.
pub fn accept_cost(hp: i32) -> i32 {
    hp_cost(hp, CURSE_ACCEPT_HP_DIVISOR)
}

/// HP cost of banishing the witch at the given HP.
pub fn banish_cost(hp: i32) -> i32 {
    hp_cost(hp, CURSE_BANISH_HP_DIVISOR)
}

impl CurseEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&ActiveCurse> {
        self.active.as_ref()
    }

    pub fn has_active_curse(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_witch_banished(&self) -> bool {
        self.witch_banished
    }

    pub fn shops_disabled(&self) -> bool {
        self.active
            .map(|a| a.curse().effects.disable_shops)
            .unwrap_or(false)
    }

    /// Picks a curse uniformly from the catalog.
    pub fn offer_random_curse(rng: &mut impl Rng) -> CurseId {
        CurseId::ALL[rng.gen_range(0..CurseId::ALL.len())]
    }

    /// Pays the acceptance cost and puts the curse into effect.
    /// Returns the HP paid.
    pub fn accept(&mut self, id: CurseId, economy: &mut Economy) -> Result<i32, ActionRejected> {
        if self.active.is_some() {
            return Err(ActionRejected::CurseAlreadyActive);
        }

        let cost = accept_cost(economy.state().hp);
        economy.pay_hp(cost)?;

        let curse = id.curse();
        let mut armor_penalty = 0;
        if let Some(divider) = curse.effects.armor_divider {
            let armor = economy.state().armor;
            let reduced = armor / divider.max(1);
            armor_penalty = armor - reduced;
            economy.set_armor(reduced);
        }

        self.active = Some(ActiveCurse {
            id,
            remaining: curse.duration,
            armor_penalty,
        });
        info!(curse = curse.name, hp_paid = cost, "curse accepted");
        Ok(cost)
    }

    /// Pays the banishing cost and bars the witch for the rest of the run.
    /// Returns the HP paid.
    pub fn banish(&mut self, economy: &mut Economy) -> Result<i32, ActionRejected> {
        let cost = banish_cost(economy.state().hp);
        economy.pay_hp(cost)?;
        self.witch_banished = true;
        info!(hp_paid = cost, "witch banished");
        Ok(cost)
    }

    /// Counts down the active curse by one floor, lifting it at zero.
    pub fn on_floor_descent(&mut self, economy: &mut Economy) -> Option<CurseTick> {
        let active = self.active.as_mut()?;
        active.remaining = active.remaining.saturating_sub(1);

        if active.remaining > 0 {
            debug!(curse = active.curse().name, remaining = active.remaining, "curse continues");
            return Some(CurseTick::Continues {
                id: active.id,
                remaining: active.remaining,
            });
        }

        let expired = *active;
        self.active = None;
        if expired.armor_penalty > 0 {
            economy.adjust_armor(expired.armor_penalty);
        }
        info!(curse = expired.curse().name, "curse lifted");
        Some(CurseTick::Expired {
            id: expired.id,
            armor_restored: expired.armor_penalty,
        })
    }

    /// Scales `value` by the active curse's multiplier for `kind`, rounding down.
    pub fn modify(&self, value: i32, kind: ModifierKind) -> i32 {
        match self.active.and_then(|a| a.curse().effects.multiplier(kind)) {
            Some(multiplier) => (value as f64 * multiplier).floor() as i32,
            None => value,
        }
    }

    /// Clears the active curse and the banishment.
    pub fn reset(&mut self) {
        self.active = None;
        self.witch_banished = false;
    }
}
