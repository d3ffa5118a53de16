//! Tunable generation policy and session configuration.
//!
//! Every probability used by floor generation lives here so balance can be
//! adjusted from a JSON file without touching the generator.

use super::constants::*;
use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Probabilities and ranges that shape each generated floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationPolicy {
    /// Fewest slides on a floor, counting the indicator, boss, and payout
    pub min_slides: usize,
    /// Most slides on a floor
    pub max_slides: usize,
    /// Chance a middle slot becomes the witch when she is eligible
    pub witch_chance: f64,
    /// Shallowest floor the witch may appear on
    pub witch_min_floor: u32,
    /// Chance a non-witch middle slot becomes stairs
    pub stairs_chance: f64,
    /// Chance a non-witch middle slot becomes an attack
    pub attack_chance: f64,
    /// Chance a positive reward becomes a max HP potion
    pub max_hp_potion_chance: f64,
    /// Chance a positive reward pays gold; whatever is left heals
    pub gold_chance: f64,
    /// Chance the floor ends in a shop rather than a gold payout
    pub shop_chance: f64,
    /// Story text shown after the first floor's indicator (None disables it)
    pub intro_story: Option<String>,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            min_slides: MIN_SLIDES_PER_FLOOR,
            max_slides: MAX_SLIDES_PER_FLOOR,
            witch_chance: WITCH_CHANCE,
            witch_min_floor: WITCH_MIN_FLOOR,
            stairs_chance: STAIRS_CHANCE,
            attack_chance: ATTACK_CHANCE,
            max_hp_potion_chance: MAX_HP_POTION_CHANCE,
            gold_chance: GOLD_REWARD_CHANCE,
            shop_chance: SHOP_CHANCE,
            intro_story: Some(INTRO_STORY_TEXT.to_string()),
        }
    }
}

impl GenerationPolicy {
    /// Checks ranges and probabilities. Floors always need the indicator,
    /// the boss, and the payout, so fewer than 3 slides is rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_slides < 3 {
            return Err(ConfigError::InvalidPolicy(format!(
                "min_slides must be at least 3, got {}",
                self.min_slides
            )));
        }
        if self.min_slides > self.max_slides {
            return Err(ConfigError::InvalidPolicy(format!(
                "min_slides ({}) exceeds max_slides ({})",
                self.min_slides, self.max_slides
            )));
        }

        let chances = [
            ("witch_chance", self.witch_chance),
            ("stairs_chance", self.stairs_chance),
            ("attack_chance", self.attack_chance),
            ("max_hp_potion_chance", self.max_hp_potion_chance),
            ("gold_chance", self.gold_chance),
            ("shop_chance", self.shop_chance),
        ];
        for (name, value) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidPolicy(format!(
                    "{} must be within 0.0..=1.0, got {}",
                    name, value
                )));
            }
        }

        if self.stairs_chance + self.attack_chance > 1.0 {
            return Err(ConfigError::InvalidPolicy(
                "stairs_chance + attack_chance must not exceed 1.0".to_string(),
            ));
        }

        if self.max_hp_potion_chance + self.gold_chance > 1.0 {
            return Err(ConfigError::InvalidPolicy(
                "max_hp_potion_chance + gold_chance must not exceed 1.0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Presentation delays used when scheduling reveals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealTimings {
    pub dice_roll_seconds: f64,
    pub used_fade_seconds: f64,
    pub restart_delay_seconds: f64,
}

impl Default for RevealTimings {
    fn default() -> Self {
        Self {
            dice_roll_seconds: DICE_ROLL_REVEAL_SECONDS,
            used_fade_seconds: USED_FADE_SECONDS,
            restart_delay_seconds: GAME_OVER_RESTART_SECONDS,
        }
    }
}

/// Top-level configuration for a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescentConfig {
    pub policy: GenerationPolicy,
    /// Random seed for reproducible runs (None = entropy)
    pub seed: Option<u64>,
    pub reveal: RevealTimings,
}

impl DescentConfig {
    /// Loads a JSON config. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        Self::from_json(&text).map_err(|e| match e {
            ConfigError::Parse(_, source) => ConfigError::Parse(path.to_path_buf(), source),
            other => other,
        })
    }

    /// Parses and validates a JSON config string.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: DescentConfig = serde_json::from_str(text)
            .map_err(|e| ConfigError::Parse(Path::new("<inline>").to_path_buf(), e))?;
        config.policy.validate()?;
        Ok(config)
    }
}
