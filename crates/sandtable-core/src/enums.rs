//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which side a unit fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Blue,
    Red,
}

/// Unit category, mirrored by the map symbology on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    LightInfantry,
    Tank,
    Artillery,
}

/// What a unit is currently doing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    #[default]
    Idle,
    Move,
    Attack,
}

/// Top-level simulation run status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SimStatus {
    #[default]
    Stopped,
    Running,
    Paused,
}
