use std::path::PathBuf;

/// Errors raised while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{0}': {1}")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("failed to parse config file '{0}': {1}")]
    Parse(PathBuf, #[source] serde_json::Error),

    #[error("invalid generation policy: {0}")]
    InvalidPolicy(String),
}

/// Why a player choice was turned down. A rejected action never changes state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionRejected {
    #[error("not enough gold: need {needed}, have {available}")]
    InsufficientGold { needed: i32, available: i32 },

    #[error("paying {cost} HP with only {available} left would be fatal")]
    InsufficientHp { cost: i32, available: i32 },

    #[error("there is no open shop here")]
    NoShopHere,

    #[error("there is no witch waiting here")]
    NoWitchHere,

    #[error("a curse is already active")]
    CurseAlreadyActive,

    #[error("the run is over")]
    SessionOver,
}
