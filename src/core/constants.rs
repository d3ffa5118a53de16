// Session limits
pub const MAX_FLOORS: u32 = 50;

// Starting player resources
pub const STARTING_HP: i32 = 10;
pub const STARTING_GOLD: i32 = 0;
pub const STARTING_ARMOR: i32 = 10;
pub const STARTING_DANGER: i32 = 0;

// Combat: d20 + floor / 5 + boss bonus + danger vs armor
pub const ATTACK_DIE_SIDES: i32 = 20;
pub const FLOOR_BONUS_DIVISOR: u32 = 5;
pub const BOSS_ROLL_BONUS: i32 = 2;
pub const BOSS_BASE_DAMAGE: i32 = 2;

// Shop pricing
pub const SHOP_PRICE_PER_FLOOR: i32 = 2;
pub const SHOP_CONVERSION_MULTIPLIER: i32 = 2;

// Witch choice costs, as divisors of current HP (rounded up)
pub const CURSE_ACCEPT_HP_DIVISOR: i32 = 4;
pub const CURSE_BANISH_HP_DIVISOR: i32 = 2;

// Max HP potions always grant +1
pub const MAX_HP_POTION_AMOUNT: i32 = 1;

// Generation defaults
pub const MIN_SLIDES_PER_FLOOR: usize = 4;
pub const MAX_SLIDES_PER_FLOOR: usize = 9;
pub const WITCH_CHANCE: f64 = 0.05;
pub const WITCH_MIN_FLOOR: u32 = 3;
pub const STAIRS_CHANCE: f64 = 0.20;
pub const ATTACK_CHANCE: f64 = 0.30;
pub const MAX_HP_POTION_CHANCE: f64 = 0.20;
pub const GOLD_REWARD_CHANCE: f64 = 0.30;
pub const SHOP_CHANCE: f64 = 0.20;
pub const INTRO_STORY_TEXT: &str = "Move left/right through the floor, up/down between floors";

// Presentation delays (seconds)
pub const DICE_ROLL_REVEAL_SECONDS: f64 = 0.6; // 6 rolls x 100ms
pub const USED_FADE_SECONDS: f64 = 1.0;
pub const GAME_OVER_RESTART_SECONDS: f64 = 3.0;

// Logging
pub const LOG_ENV_VAR: &str = "DESCENT_LOG";
pub const LOG_FILE_NAME: &str = "descent.log";
