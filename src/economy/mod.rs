//! Player resources and the only code allowed to mutate them.

#![allow(unused_imports)]

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
