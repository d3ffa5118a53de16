//! Shop economy: pricing, conversion of unaffordable shops, and purchases.

#![allow(unused_imports)]

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
