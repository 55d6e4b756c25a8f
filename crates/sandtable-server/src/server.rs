//! Listener and lifecycle: accepts connections, spawns the world task,
//! and hands each socket to its session task.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::net::TcpListener;
use tokio::sync::{mpsc, watch};

use sandtable_sim::SimEngine;

use crate::config::ServerConfig;
use crate::session::{run_session, SessionId};
use crate::world::World;

/// The SANDTABLE server: one world task plus one task pair per viewer.
pub struct Server {
    config: ServerConfig,
    next_session: AtomicU64,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        Self {
            config,
            next_session: AtomicU64::new(1),
            shutdown_tx,
            shutdown_rx,
        }
    }

    /// Bind to the configured address and serve until shutdown.
    pub async fn run(&self) -> std::io::Result<()> {
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("listening on ws://{}", self.config.bind_addr);
        self.run_with_listener(listener).await
    }

    /// Serve with a pre-bound listener (useful for tests on port 0).
    pub async fn run_with_listener(&self, listener: TcpListener) -> std::io::Result<()> {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let world = World::new(SimEngine::new());
        tokio::spawn(world.run(
            event_rx,
            self.config.tick_interval,
            self.shutdown_rx.clone(),
        ));

        let mut shutdown_rx = self.shutdown_rx.clone();
        loop {
            tokio::select! {
                result = listener.accept() => match result {
                    Ok((stream, peer_addr)) => {
                        let id = SessionId(self.next_session.fetch_add(1, Ordering::Relaxed));
                        tracing::info!("accepted {peer_addr} as session {}", id.0);
                        tokio::spawn(run_session(stream, id, event_tx.clone()));
                    }
                    // Transient (fd exhaustion, aborted handshake): keep serving.
                    Err(e) => tracing::warn!("accept failed: {e}"),
                },
                _ = shutdown_rx.changed() => {
                    if *shutdown_rx.borrow() {
                        tracing::info!("listener shutting down");
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    /// Signal the listener and the world task to stop.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }
}
