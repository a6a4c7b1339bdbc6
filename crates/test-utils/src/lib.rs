//! In-memory host fakes shared by tests and the demo harness.
//!
//! Everything here plays the host's side of the collaborator traits without
//! a game attached: a scriptable world table, a zone-recording avoidance
//! arbiter, and a command-logging mover.
pub mod host;
pub mod world;

pub use host::{MockArbiter, MockMover, MoveCommand};
pub use world::{CombatantBuilder, MockWorld};
