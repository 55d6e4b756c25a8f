//! Simulation engine — the core of the sand table.
//!
//! `SimEngine` owns the entity store and the shared clock, applies
//! viewer commands, and walks routes one waypoint hop per invocation
//! of [`SimEngine::advance`]. The periodic trigger lives in the server
//! crate; the engine itself knows nothing about timers.

use sandtable_core::commands::SimCommand;
use sandtable_core::constants::{MOVE_SPEED_KPH, STEP_DT_SECS};
use sandtable_core::enums::{SimStatus, Task};
use sandtable_core::state::{Entity, SimState};
use sandtable_core::types::LatLon;

use crate::roster;
use crate::store::EntityStore;

/// The simulation engine. Owns all mutable world state.
pub struct SimEngine {
    store: EntityStore,
    sim: SimState,
}

impl Default for SimEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SimEngine {
    /// Create an engine seeded with the default roster, clock stopped.
    pub fn new() -> Self {
        Self::with_roster(roster::default_roster())
    }

    /// Create an engine with a caller-supplied roster (used by tests
    /// to build small isolated worlds).
    pub fn with_roster(roster: impl IntoIterator<Item = Entity>) -> Self {
        Self {
            store: EntityStore::from_roster(roster),
            sim: SimState::default(),
        }
    }

    /// Current clock and status.
    pub fn sim_state(&self) -> SimState {
        self.sim
    }

    /// Public snapshot of the full roster, arbitrary order.
    pub fn roster(&self) -> Vec<Entity> {
        self.store.all().map(|e| e.to_public()).collect()
    }

    /// Read access to the store.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Advance the clock by `dt_sec` and walk every active route one
    /// waypoint. Returns the units whose position changed this call.
    ///
    /// The hop count is deliberately independent of `dt_sec`: one
    /// invocation moves a unit exactly one waypoint. This keeps the
    /// model deterministic at the cost of unrealistic speed scaling.
    pub fn advance(&mut self, dt_sec: f64) -> Vec<Entity> {
        self.sim.time_sec += dt_sec;
        let mut changed = Vec::new();

        for e in self.store.all_mut() {
            if e.entity.route.len() < 2 {
                continue; // no meaningful path
            }
            if e.route_index >= e.entity.route.len() - 1 {
                continue; // route exhausted, unit holds
            }

            e.route_index += 1;
            e.entity.position = e.entity.route[e.route_index];
            e.entity.task = Task::Move;
            e.entity.speed_kph = MOVE_SPEED_KPH;

            changed.push(e.to_public());
        }

        changed
    }

    /// Apply a clock command. Returns the units moved by it (only
    /// `Step` can move anything; the rest return an empty set).
    ///
    /// `Step` advances unconditionally, even while stopped or paused.
    pub fn apply_sim_command(&mut self, cmd: SimCommand) -> Vec<Entity> {
        match cmd {
            SimCommand::Play => {
                self.sim.status = SimStatus::Running;
                Vec::new()
            }
            SimCommand::Pause => {
                self.sim.status = SimStatus::Paused;
                Vec::new()
            }
            SimCommand::Stop => {
                self.sim.status = SimStatus::Stopped;
                Vec::new()
            }
            SimCommand::Step => self.advance(STEP_DT_SECS),
        }
    }

    /// Append a waypoint to a unit's route. The route cursor is left
    /// alone: a unit mid-route (or parked at its end) simply gets one
    /// more leg to walk. Returns `None` for an unknown id.
    pub fn add_waypoint(&mut self, entity_id: &str, point: LatLon) -> Option<Entity> {
        let e = self.store.get_mut(entity_id)?;
        e.entity.route.push(point);
        Some(e.to_public())
    }

    /// Replace a unit's route with a direct leg from its current
    /// position to `point`, superseding any in-progress route.
    /// Returns `None` for an unknown id.
    pub fn set_target(&mut self, entity_id: &str, point: LatLon) -> Option<Entity> {
        let e = self.store.get_mut(entity_id)?;
        e.entity.route = vec![e.entity.position, point];
        e.route_index = 0;
        e.entity.task = Task::Move;
        e.entity.speed_kph = MOVE_SPEED_KPH;
        Some(e.to_public())
    }
}
