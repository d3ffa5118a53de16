//! Floors: slide types and procedural generation.

#![allow(unused_imports)]

pub mod generation;
pub mod types;

pub use generation::*;
pub use types::*;
