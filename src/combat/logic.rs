//! Attack resolution: d20 + bonuses against armor.
//!
//! The outcome is computed and committed in one call. Any dice animation the
//! renderer plays afterwards is cosmetic and cannot change the result.

use super::types::{AttackRoll, Encounter, EncounterKind};
use crate::core::constants::{ATTACK_DIE_SIDES, BOSS_ROLL_BONUS, FLOOR_BONUS_DIVISOR};
use crate::curse::{CurseEngine, ModifierKind};
use crate::economy::Economy;
use rand::Rng;
use tracing::debug;

/// Rolls the attacker's d20.
pub fn roll_d20(rng: &mut impl Rng) -> i32 {
    rng.gen_range(1..=ATTACK_DIE_SIDES)
}

/// +1 to hit for every 5 floors of depth.
pub fn floor_bonus(floor_index: u32) -> i32 {
    (floor_index / FLOOR_BONUS_DIVISOR) as i32
}

/// Computes the roll breakdown without touching any state. `damage` is
/// left at zero; [`resolve_encounter`] fills it in.
pub fn compute_roll(die: i32, floor_index: u32, kind: EncounterKind, danger: i32, armor: i32) -> AttackRoll {
    let floor_bonus = floor_bonus(floor_index);
    let boss_bonus = match kind {
        EncounterKind::Boss => BOSS_ROLL_BONUS,
        EncounterKind::Attack => 0,
    };
    let total = die + floor_bonus + boss_bonus + danger;

    AttackRoll {
        die,
        floor_bonus,
        boss_bonus,
        danger,
        total,
        armor,
        hit: total > armor,
        damage: 0,
    }
}

/// Resolves an encounter for a given die result.
///
/// On a hit the slide's damage (scaled by any curse) is applied. On a miss
/// HP is untouched but danger rises by one for the rest of the run.
pub fn resolve_encounter(
    encounter: Encounter,
    floor_index: u32,
    die: i32,
    economy: &mut Economy,
    curses: &CurseEngine,
) -> AttackRoll {
    let state = economy.state();
    let mut roll = compute_roll(die, floor_index, encounter.kind, state.danger, state.armor);

    if roll.hit {
        let damage = curses.modify(encounter.amount.abs(), ModifierKind::Damage);
        economy.damage(damage);
        roll.damage = damage;
    } else {
        economy.increase_danger();
    }

    debug!(
        die = roll.die,
        total = roll.total,
        armor = roll.armor,
        hit = roll.hit,
        damage = roll.damage,
        "attack resolved"
    );
    roll
}

/// Rolls the die and resolves the encounter.
pub fn roll_encounter(
    encounter: Encounter,
    floor_index: u32,
    economy: &mut Economy,
    curses: &CurseEngine,
    rng: &mut impl Rng,
) -> AttackRoll {
    let die = roll_d20(rng);
    resolve_encounter(encounter, floor_index, die, economy, curses)
}
