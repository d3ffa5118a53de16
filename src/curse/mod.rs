//! Witch curses: catalog, lifecycle, and effect multipliers.

#![allow(unused_imports)]

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
