//! Procedural floor generation.
//!
//! A floor is laid out once, on its first visit:
//! `FloorIndicator, [Story on floor 1], middle slides..., Boss, Shop | GoldReward`.
//! Middle slides are drawn one at a time so the witch check can see whether
//! she has already been placed on this floor.

use super::types::{Floor, SlideKind};
use crate::core::config::GenerationPolicy;
use crate::core::constants::BOSS_BASE_DAMAGE;
use crate::curse::CurseEngine;
use rand::Rng;
use tracing::debug;

/// Generates the slide sequence for `floor_index`.
pub fn generate_floor(
    floor_index: u32,
    curses: &CurseEngine,
    policy: &GenerationPolicy,
    rng: &mut impl Rng,
) -> Floor {
    let floor_index = floor_index.max(1);
    let slide_count = roll_slide_count(policy, rng);
    let shop_available = roll_shop_available(curses, policy, rng);

    let mut kinds = Vec::with_capacity(slide_count + 1);
    kinds.push(SlideKind::FloorIndicator);

    if floor_index == 1 {
        if let Some(text) = &policy.intro_story {
            kinds.push(SlideKind::Story(text.clone()));
        }
    }

    let mut witch_placed = false;
    for _ in 0..slide_count.saturating_sub(3) {
        let eligible = witch_eligible(floor_index, curses, witch_placed, policy);
        let kind = roll_middle_kind(floor_index, eligible, policy, rng);
        if kind == SlideKind::Witch {
            witch_placed = true;
        }
        kinds.push(kind);
    }

    kinds.push(SlideKind::Boss(boss_damage(floor_index)));

    if shop_available {
        kinds.push(SlideKind::Shop);
    } else {
        kinds.push(SlideKind::GoldReward(roll_payout_gold(floor_index, rng)));
    }

    let floor = Floor::new(floor_index, kinds);
    debug!(
        floor = floor_index,
        slides = floor.len(),
        shop = shop_available,
        witch = witch_placed,
        "floor generated"
    );
    floor
}

/// Number of slides on a floor, uniform within the policy's range.
pub fn roll_slide_count(policy: &GenerationPolicy, rng: &mut impl Rng) -> usize {
    rng.gen_range(policy.min_slides..=policy.max_slides)
}

/// Whether the floor ends in a shop. Never true while a curse bans shops.
pub fn roll_shop_available(
    curses: &CurseEngine,
    policy: &GenerationPolicy,
    rng: &mut impl Rng,
) -> bool {
    if curses.shops_disabled() {
        return false;
    }
    rng.gen_bool(policy.shop_chance)
}

/// The witch may appear deep enough, with no curse active, at most once per
/// floor, and never again after being banished.
pub fn witch_eligible(
    floor_index: u32,
    curses: &CurseEngine,
    witch_placed: bool,
    policy: &GenerationPolicy,
) -> bool {
    floor_index >= policy.witch_min_floor
        && !curses.has_active_curse()
        && !witch_placed
        && !curses.is_witch_banished()
}

/// Draws one middle slide. The witch is checked first; the rest is split
/// between stairs, attacks, and positive rewards.
pub fn roll_middle_kind(
    floor_index: u32,
    witch_eligible: bool,
    policy: &GenerationPolicy,
    rng: &mut impl Rng,
) -> SlideKind {
    if witch_eligible && rng.gen_bool(policy.witch_chance) {
        return SlideKind::Witch;
    }

    let roll: f64 = rng.gen();
    if roll < policy.stairs_chance {
        return SlideKind::Stairs;
    }
    if roll < policy.stairs_chance + policy.attack_chance {
        return SlideKind::Attack(-roll_magnitude(floor_index, rng));
    }

    let magnitude = roll_magnitude(floor_index, rng);
    roll_reward_kind(magnitude, policy, rng)
}

/// Turns a positive magnitude into a max HP potion, gold, or a healing potion.
pub fn roll_reward_kind(magnitude: i32, policy: &GenerationPolicy, rng: &mut impl Rng) -> SlideKind {
    let roll: f64 = rng.gen();
    if roll < policy.max_hp_potion_chance {
        SlideKind::MaxHpPotion
    } else if roll < policy.max_hp_potion_chance + policy.gold_chance {
        SlideKind::GoldReward(magnitude)
    } else {
        SlideKind::Reward(magnitude)
    }
}

/// Attack and reward magnitude: uniform in `1..=floor + 1`.
pub fn roll_magnitude(floor_index: u32, rng: &mut impl Rng) -> i32 {
    rng.gen_range(1..=floor_index as i32 + 1)
}

/// Gold for the final slide of a floor without a shop: uniform in `floor..=2*floor`.
pub fn roll_payout_gold(floor_index: u32, rng: &mut impl Rng) -> i32 {
    let floor = floor_index.max(1) as i32;
    rng.gen_range(floor..=2 * floor)
}

/// Boss damage grows with depth.
pub fn boss_damage(floor_index: u32) -> i32 {
    -(BOSS_BASE_DAMAGE + floor_index as i32)
}
