//! Resource mutation rules.
//!
//! Every write to hp, max HP, gold, armor, or danger goes through [`Economy`],
//! which records a [`ResourceChange`] per mutation so the session can report
//! it. Callers guarantee each slide's effect is applied at most once.

use super::types::{PlayerState, ResourceChange, ResourceKind};
use crate::core::error::ActionRejected;

#[derive(Debug, Clone, Default)]
pub struct Economy {
    state: PlayerState,
    changes: Vec<ResourceChange>,
}

impl Economy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn is_dead(&self) -> bool {
        self.state.is_dead()
    }

    /// Drains the mutations recorded since the last call.
    pub fn take_changes(&mut self) -> Vec<ResourceChange> {
        std::mem::take(&mut self.changes)
    }

    fn set(&mut self, kind: ResourceKind, new: i32) {
        let slot = match kind {
            ResourceKind::Hp => &mut self.state.hp,
            ResourceKind::MaxHp => &mut self.state.max_hp,
            ResourceKind::Gold => &mut self.state.gold,
            ResourceKind::Armor => &mut self.state.armor,
            ResourceKind::Danger => &mut self.state.danger,
        };
        let old = *slot;
        if old == new {
            return;
        }
        *slot = new;
        self.changes.push(ResourceChange { kind, old, new });
    }

    /// Heals up to max HP. Returns the HP actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let old = self.state.hp;
        let new = (old + amount.max(0)).min(self.state.max_hp).max(old);
        self.set(ResourceKind::Hp, new);
        new - old
    }

    /// Restores HP to the current maximum.
    pub fn heal_to_full(&mut self) -> i32 {
        let missing = self.state.max_hp - self.state.hp;
        self.heal(missing)
    }

    /// Subtracts HP unconditionally. Returns true if the player is now dead.
    pub fn damage(&mut self, amount: i32) -> bool {
        let new = self.state.hp - amount.max(0);
        self.set(ResourceKind::Hp, new);
        self.is_dead()
    }

    pub fn add_gold(&mut self, amount: i32) {
        let new = self.state.gold + amount.max(0);
        self.set(ResourceKind::Gold, new);
    }

    /// Spends gold only if the full amount is available.
    pub fn spend_gold(&mut self, amount: i32) -> Result<(), ActionRejected> {
        if self.state.gold < amount {
            return Err(ActionRejected::InsufficientGold {
                needed: amount,
                available: self.state.gold,
            });
        }
        let new = self.state.gold - amount;
        self.set(ResourceKind::Gold, new);
        Ok(())
    }

    /// Raises max HP and heals by the same amount.
    pub fn raise_max_hp(&mut self, amount: i32) {
        let amount = amount.max(0);
        let new = self.state.max_hp + amount;
        self.set(ResourceKind::MaxHp, new);
        self.heal(amount);
    }

    pub fn set_armor(&mut self, value: i32) {
        self.set(ResourceKind::Armor, value.max(0));
    }

    pub fn adjust_armor(&mut self, delta: i32) {
        self.set_armor(self.state.armor + delta);
    }

    pub fn increase_danger(&mut self) {
        let new = self.state.danger + 1;
        self.set(ResourceKind::Danger, new);
    }

    /// Pays an HP cost. Refused when the payment would be fatal.
    pub fn pay_hp(&mut self, cost: i32) -> Result<(), ActionRejected> {
        if cost >= self.state.hp {
            return Err(ActionRejected::InsufficientHp {
                cost,
                available: self.state.hp,
            });
        }
        let new = self.state.hp - cost.max(0);
        self.set(ResourceKind::Hp, new);
        Ok(())
    }

    /// Restores starting resources, recording each change.
    pub fn reset(&mut self) {
        let fresh = PlayerState::new();
        self.set(ResourceKind::MaxHp, fresh.max_hp);
        self.set(ResourceKind::Hp, fresh.hp);
        self.set(ResourceKind::Gold, fresh.gold);
        self.set(ResourceKind::Armor, fresh.armor);
        self.set(ResourceKind::Danger, fresh.danger);
    }
}
