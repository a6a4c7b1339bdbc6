//! Reactive spread/avoidance control for a scripted duty agent.
//!
//! The automation host owns navigation and the avoidance registry; this
//! crate decides where people should stand. [`SpreadController`] opens a
//! bounded [`SpreadWindow`], hands per-member [`AvoidanceZone`]s to the
//! host's [`AvoidanceArbiter`], and yields back to the scheduler between
//! registrations so navigation keeps running underneath. At most one spread
//! operation may drive the agent at a time; see [`MovementError::LeaseHeld`].
pub mod config;
pub mod error;
pub mod host;
pub mod spread;
pub mod task;
pub mod window;
pub mod zone;

pub use config::{DEFAULT_SPREAD_DISTANCE, SpreadConfig};
pub use error::{MovementError, Result};
pub use host::{AvoidanceArbiter, Mover};
pub use spread::SpreadController;
pub use window::SpreadWindow;
pub use zone::{ActiveWhile, Anchor, AvoidanceZone};
