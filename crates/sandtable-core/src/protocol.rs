//! Wire protocol shared by server and clients.
//!
//! Every frame is one UTF-8 JSON object of the shape
//! `{ "type": "...", "payload": { ... } }`, which serde's adjacently
//! tagged representation produces directly.

use serde::{Deserialize, Serialize};

use crate::commands::SimCommand;
use crate::state::{Entity, SimState};
use crate::types::LatLon;

/// Messages a viewer may send to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum ClientToServer {
    /// Control the shared simulation clock.
    SimCommand { cmd: SimCommand },
    /// Append a waypoint to a unit's route.
    #[serde(rename_all = "camelCase")]
    AddWaypoint { entity_id: String, point: LatLon },
    /// Replace a unit's route with a direct leg to `point`.
    #[serde(rename_all = "camelCase")]
    SetTarget { entity_id: String, point: LatLon },
}

/// Messages the server delivers to viewers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum ServerToClient {
    /// Full authoritative state, sent once per session on join.
    Init {
        sim: SimState,
        entities: Vec<Entity>,
    },
    /// Clock/status change.
    SimState { sim: SimState },
    /// Incremental update for a single unit.
    EntityUpdated { entity: Entity },
    /// Reserved for future extension; never sent by this server.
    EntityCreated { entity: Entity },
    /// Reserved for future extension; never sent by this server.
    #[serde(rename_all = "camelCase")]
    EntityDestroyed { entity_id: String },
    /// Human-readable event row for the client's log panel.
    /// `t` is a local time-of-day string.
    Log { t: String, msg: String },
    /// Per-session error reply, never broadcast.
    Error { message: String },
}
