//! Simulation engine for SANDTABLE.
//!
//! Owns the entity store and simulation clock, advances routes one
//! waypoint hop per tick, and applies viewer commands. Completely
//! headless (no transport dependency), enabling deterministic tests
//! that call `advance` directly.

pub mod engine;
pub mod roster;
pub mod store;

pub use engine::SimEngine;
pub use store::{EntityStore, RuntimeEntity};

#[cfg(test)]
mod tests;
