//! Game entities module.
//!
//! This module organizes the animal, creature and spell entity logic.

pub mod animal;
pub mod creature;
pub mod spell;

pub use animal::*;
pub use creature::*;
pub use spell::*;
