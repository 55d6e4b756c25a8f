//! Public simulation state — what every connected viewer sees.

use serde::{Deserialize, Serialize};

use crate::enums::{Side, SimStatus, Task, UnitType};
use crate::types::LatLon;

/// Public view of a unit on the sand table.
///
/// This is the representation that crosses the wire. The engine's
/// internal route cursor is stripped before transmission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub unit_type: UnitType,
    pub callsign: String,
    pub position: LatLon,
    pub task: Task,
    pub speed_kph: f64,
    /// Inert for now: carried on the wire but never mutated or clamped.
    pub damage_pct: f64,
    /// Inert for now, same as `damage_pct`.
    pub ammo_pct: f64,
    /// Ordered waypoints walked one hop per tick. May be empty.
    pub route: Vec<LatLon>,
}

/// Simulation clock and run status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimState {
    pub status: SimStatus,
    /// Accumulated simulation seconds. Monotonically non-decreasing;
    /// advances only while running or on an explicit single step.
    pub time_sec: f64,
}
