//! Core types and definitions for the SANDTABLE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entity state, commands, the wire protocol, and constants.
//! It has no dependency on the async runtime or any transport.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod protocol;
pub mod state;
pub mod types;
