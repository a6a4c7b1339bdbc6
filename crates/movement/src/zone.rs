//! Avoidance-zone values handed to the host's avoidance subsystem.

use std::fmt;
use std::sync::Arc;

use party_core::{ObjectId, Vec3};

use crate::window::SpreadWindow;

/// How a zone's center is resolved while the zone is active.
#[derive(Clone)]
pub enum Anchor {
    /// The host tracks the owning object's live position.
    Owner,
    /// Point captured once at registration time.
    Fixed(Vec3),
    /// Recomputed on every query.
    Dynamic(Arc<dyn Fn() -> Vec3 + Send + Sync>),
}

impl Anchor {
    /// Center of the zone right now. `owner_position` feeds
    /// [`Anchor::Owner`]; the other variants ignore it.
    pub fn resolve(&self, owner_position: Vec3) -> Vec3 {
        match self {
            Anchor::Owner => owner_position,
            Anchor::Fixed(point) => *point,
            Anchor::Dynamic(provider) => provider(),
        }
    }
}

impl fmt::Debug for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::Owner => f.write_str("Owner"),
            Anchor::Fixed(point) => f.debug_tuple("Fixed").field(point).finish(),
            Anchor::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Activation predicate the host evaluates each time it considers a zone.
pub type ActiveWhile = Box<dyn Fn() -> bool + Send + Sync>;

/// Time-bounded circular region the navigation layer steers the agent out
/// of.
///
/// Created per member by the spread operations and owned by the host's
/// avoidance subsystem from registration until [`AvoidanceZone::is_active`]
/// goes false. The controller never tracks zones after handing them over.
pub struct AvoidanceZone {
    /// Object the zone belongs to.
    pub owner: ObjectId,
    pub anchor: Anchor,
    /// Minimum separation enforced around the anchor.
    pub radius: f32,
    /// Maximum roam distance from the anchor, for mechanics that need the
    /// group held together.
    pub leash_radius: Option<f32>,
    pub active_while: ActiveWhile,
}

impl AvoidanceZone {
    /// Zone centered on the owner itself for the window's duration.
    pub fn on_object(owner: ObjectId, radius: f32, window: &SpreadWindow) -> Self {
        Self::anchored(owner, Anchor::Owner, radius, None, window)
    }

    pub fn anchored(
        owner: ObjectId,
        anchor: Anchor,
        radius: f32,
        leash_radius: Option<f32>,
        window: &SpreadWindow,
    ) -> Self {
        Self {
            owner,
            anchor,
            radius,
            leash_radius,
            active_while: Box::new(window.activation_predicate()),
        }
    }

    pub fn is_active(&self) -> bool {
        (self.active_while)()
    }
}

impl fmt::Debug for AvoidanceZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvoidanceZone")
            .field("owner", &self.owner)
            .field("anchor", &self.anchor)
            .field("radius", &self.radius)
            .field("leash_radius", &self.leash_radius)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn anchors_resolve_to_their_center() {
        let owner_position = Vec3::new(1.0, 2.0, 3.0);

        assert_eq!(Anchor::Owner.resolve(owner_position), owner_position);
        assert_eq!(Anchor::Fixed(Vec3::ONE).resolve(owner_position), Vec3::ONE);

        let tracked = Anchor::Dynamic(Arc::new(|| Vec3::new(9.0, 0.0, 0.0)));
        assert_eq!(tracked.resolve(owner_position), Vec3::new(9.0, 0.0, 0.0));
    }

    #[tokio::test(start_paused = true)]
    async fn zones_expire_with_their_window() {
        let window = SpreadWindow::open(Duration::from_millis(300));
        let zone = AvoidanceZone::on_object(ObjectId(7), 6.5, &window);

        assert!(zone.is_active());
        tokio::time::advance(Duration::from_millis(301)).await;
        assert!(!zone.is_active());
    }
}
