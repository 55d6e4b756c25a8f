//! WebSocket server for SANDTABLE.
//!
//! One world task owns the simulation engine and the session registry
//! and serializes every mutation; per-session reader/writer tasks do
//! nothing but frame I/O. See `world` for the event loop and `session`
//! for the transport seam.

pub mod config;
pub mod server;
pub mod session;
pub mod world;

pub use config::ServerConfig;
pub use server::Server;
