//! Board module.
//!
//! The 20×20 grid of squares and the occupancy helpers built on it.

pub mod grid;

pub use grid::*;
