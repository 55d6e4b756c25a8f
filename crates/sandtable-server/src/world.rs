//! The world task — single owner of all mutable simulation state.
//!
//! One task owns the engine and the session registry; a `select!` loop
//! interleaves the periodic tick with session events, so tick-driven
//! and command-driven mutations can never overlap and every mutation's
//! broadcasts complete before the next begins. No lock is needed
//! because nothing else touches the world.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Local;
use tokio::sync::{mpsc, watch};
use tokio::time::MissedTickBehavior;
use tokio_tungstenite::tungstenite::Message;

use sandtable_core::commands::SimCommand;
use sandtable_core::constants::TICK_DT_SECS;
use sandtable_core::enums::SimStatus;
use sandtable_core::protocol::{ClientToServer, ServerToClient};
use sandtable_sim::SimEngine;

use crate::session::SessionId;

/// Events flowing from session tasks into the world task.
#[derive(Debug)]
pub enum WorldEvent {
    /// A viewer completed the WebSocket handshake.
    Connected {
        id: SessionId,
        tx: mpsc::UnboundedSender<Message>,
    },
    /// A viewer's transport closed or errored.
    Disconnected { id: SessionId },
    /// A well-formed frame from a viewer.
    Frame { id: SessionId, msg: ClientToServer },
}

/// Serialize a server frame, logging instead of failing. Our own
/// protocol types cannot realistically fail to encode.
pub(crate) fn encode(msg: &ServerToClient) -> Option<String> {
    match serde_json::to_string(msg) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::error!("failed to encode frame: {e}");
            None
        }
    }
}

/// The shared world: engine plus the broadcast registry.
pub struct World {
    engine: SimEngine,
    sessions: HashMap<SessionId, mpsc::UnboundedSender<Message>>,
}

impl World {
    pub fn new(engine: SimEngine) -> Self {
        Self {
            engine,
            sessions: HashMap::new(),
        }
    }

    /// Number of currently connected sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Run until shutdown is signalled or every event sender is gone.
    pub async fn run(
        mut self,
        mut events: mpsc::UnboundedReceiver<WorldEvent>,
        tick_interval: Duration,
        mut shutdown_rx: watch::Receiver<bool>,
    ) {
        let mut ticker = tokio::time::interval(tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => self.on_tick(),
                event = events.recv() => match event {
                    Some(event) => self.handle_event(event),
                    None => break, // listener and all sessions are gone
                },
                _ = shutdown_rx.changed() => {
                    if *shutdown_rx.borrow() {
                        tracing::info!("world task shutting down");
                        break;
                    }
                }
            }
        }
    }

    fn handle_event(&mut self, event: WorldEvent) {
        match event {
            WorldEvent::Connected { id, tx } => self.on_connected(id, tx),
            WorldEvent::Disconnected { id } => self.drop_session(id),
            WorldEvent::Frame { id, msg } => self.on_frame(id, msg),
        }
    }

    /// Periodic tick. A complete no-op unless the clock is running.
    fn on_tick(&mut self) {
        if self.engine.sim_state().status != SimStatus::Running {
            return;
        }
        let changed = self.engine.advance(TICK_DT_SECS);
        self.broadcast(&ServerToClient::SimState {
            sim: self.engine.sim_state(),
        });
        for entity in changed {
            self.broadcast(&ServerToClient::EntityUpdated { entity });
        }
    }

    /// New viewer: deliver the authoritative snapshot before anything
    /// else, then announce the join to everyone.
    fn on_connected(&mut self, id: SessionId, tx: mpsc::UnboundedSender<Message>) {
        let init = ServerToClient::Init {
            sim: self.engine.sim_state(),
            entities: self.engine.roster(),
        };
        match encode(&init) {
            Some(text) if tx.send(Message::text(text.clone())).is_ok() => {}
            _ => return, // already gone, never entered the registry
        }
        self.sessions.insert(id, tx);
        tracing::info!("session {} connected ({} total)", id.0, self.sessions.len());
        self.broadcast_log(format!("Viewer {} joined", id.0));
    }

    fn drop_session(&mut self, id: SessionId) {
        if self.sessions.remove(&id).is_some() {
            tracing::info!("session {} removed ({} total)", id.0, self.sessions.len());
            self.broadcast_log(format!("Viewer {} left", id.0));
        }
    }

    fn on_frame(&mut self, id: SessionId, msg: ClientToServer) {
        match msg {
            ClientToServer::SimCommand { cmd } => {
                let changed = self.engine.apply_sim_command(cmd);
                self.broadcast(&ServerToClient::SimState {
                    sim: self.engine.sim_state(),
                });
                for entity in changed {
                    self.broadcast(&ServerToClient::EntityUpdated { entity });
                }
                self.broadcast_log(sim_command_text(cmd).to_string());
            }
            ClientToServer::AddWaypoint { entity_id, point } => {
                match self.engine.add_waypoint(&entity_id, point) {
                    Some(entity) => self.broadcast(&ServerToClient::EntityUpdated { entity }),
                    None => self.send_error(id, format!("unknown entity: {entity_id}")),
                }
            }
            ClientToServer::SetTarget { entity_id, point } => {
                match self.engine.set_target(&entity_id, point) {
                    Some(entity) => self.broadcast(&ServerToClient::EntityUpdated { entity }),
                    None => self.send_error(id, format!("unknown entity: {entity_id}")),
                }
            }
        }
    }

    /// Fan a frame out to every connected session. A failed send means
    /// the session's writer is gone; it is removed, never retried.
    fn broadcast(&mut self, msg: &ServerToClient) {
        let Some(text) = encode(msg) else { return };
        let mut dead = Vec::new();
        for (id, tx) in &self.sessions {
            if tx.send(Message::text(text.clone())).is_err() {
                dead.push(*id);
            }
        }
        for id in dead {
            self.drop_session(id);
        }
    }

    fn broadcast_log(&mut self, msg: String) {
        let row = ServerToClient::Log {
            t: Local::now().format("%H:%M:%S").to_string(),
            msg,
        };
        self.broadcast(&row);
    }

    /// Reply to one session only (protocol errors are never broadcast).
    fn send_error(&mut self, id: SessionId, message: String) {
        let reply = ServerToClient::Error { message };
        let Some(text) = encode(&reply) else { return };
        if let Some(tx) = self.sessions.get(&id) {
            if tx.send(Message::text(text)).is_err() {
                self.drop_session(id);
            }
        }
    }
}

fn sim_command_text(cmd: SimCommand) -> &'static str {
    match cmd {
        SimCommand::Play => "Simulation started",
        SimCommand::Pause => "Simulation paused",
        SimCommand::Stop => "Simulation stopped",
        SimCommand::Step => "Simulation stepped forward",
    }
}
