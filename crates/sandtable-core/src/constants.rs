//! Simulation constants and tuning parameters.

/// Speed (kph) assigned to any unit actively walking its route.
///
/// Motion is tick-quantized (one waypoint hop per tick), so this value
/// is display data rather than a kinematic input.
pub const MOVE_SPEED_KPH: f64 = 6.0;

/// Interval between periodic ticks (milliseconds).
pub const TICK_INTERVAL_MS: u64 = 800;

/// Simulation seconds added per periodic tick.
pub const TICK_DT_SECS: f64 = TICK_INTERVAL_MS as f64 / 1000.0;

/// Simulation seconds added per manual single step.
pub const STEP_DT_SECS: f64 = 1.0;

/// Default WebSocket bind address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:4000";
