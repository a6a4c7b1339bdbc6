//! Collaborator interfaces the automation host implements.
//!
//! The controller drives the agent exclusively through these two traits, so
//! tests and the demo harness can stand in for the host with in-memory
//! fakes.

use party_core::Vec3;

use crate::zone::AvoidanceZone;

/// The host's avoidance registry plus the steering status its navigation
/// layer reports back.
pub trait AvoidanceArbiter: Send + Sync {
    /// Hands a zone to the host. The host owns it until its activation
    /// predicate goes false; registration itself cannot fail.
    fn register(&self, zone: AvoidanceZone);

    /// True while navigation is actively steering the agent out of a zone.
    fn is_running_out(&self) -> bool;
}

/// Low-level movement commands executed by the host's navigator.
pub trait Mover: Send + Sync {
    /// Start walking toward `point`, superseding any previous destination.
    fn move_towards(&self, point: Vec3);

    /// Halt scripted movement.
    fn stop(&self);
}
