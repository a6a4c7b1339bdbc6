//! Tunable spacing and timing for spread operations.

use std::time::Duration;

/// Default minimum separation between party members, in yalms.
pub const DEFAULT_SPREAD_DISTANCE: f32 = 6.5;

/// Knobs shared by every spread variant.
///
/// [`SpreadConfig::default`] matches the tuning the shipped duty routines
/// were written against; bespoke mechanics can override per controller.
#[derive(Clone, Copy, Debug)]
pub struct SpreadConfig {
    /// Sideways shift magnitude for directional spreads.
    pub side_offset: f32,
    /// How far a member may roam from a shared anchor before navigation
    /// pulls it back.
    pub leash_radius: f32,
    /// Extra clearance the nearest member must have before the agent claims
    /// a displacement point for itself.
    pub claim_margin: f32,
    /// Poll interval for cooperative waits.
    pub poll_interval: Duration,
}

impl Default for SpreadConfig {
    fn default() -> Self {
        Self {
            side_offset: 20.0,
            leash_radius: 40.0,
            claim_margin: 2.0,
            poll_interval: Duration::from_millis(30),
        }
    }
}
