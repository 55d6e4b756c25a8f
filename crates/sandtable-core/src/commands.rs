//! Simulation control commands sent by viewers.

use serde::{Deserialize, Serialize};

/// Transport-control style commands for the shared simulation clock.
///
/// Every sim command, regardless of effect, results in a `simState`
/// broadcast plus a human-readable log broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimCommand {
    /// Start (or resume) the periodic tick.
    Play,
    /// Freeze the clock; entities hold position.
    Pause,
    /// Halt the clock. The accumulated time is kept, not reset.
    Stop,
    /// Advance exactly one tick, regardless of current status.
    Step,
}
