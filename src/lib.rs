//! Descent - a slide-based dungeon crawler.
//!
//! The library holds the whole game: floors, combat, shops, witch curses,
//! and the session that ties them together. The terminal front-end in
//! `main.rs` only turns keys into intents and draws session state.

pub mod combat;
pub mod core;
pub mod curse;
pub mod economy;
pub mod floor;
pub mod session;
pub mod shop;

pub use crate::core::config::{DescentConfig, GenerationPolicy, RevealTimings};
pub use crate::core::error::{ActionRejected, ConfigError};
pub use crate::session::{GameSession, Intent, Reveal, SessionEvent, SessionPhase, SlideOutcome};
