//! Combat system types and logic.

#![allow(unused_imports)]

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
