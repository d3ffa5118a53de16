//! The game session: intents in, events out.

#![allow(unused_imports)]

pub mod events;
pub mod logic;
pub mod reveal;

pub use events::*;
pub use logic::*;
pub use reveal::*;
