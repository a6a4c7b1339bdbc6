use glam::Vec3;

use crate::ids::{NpcId, ObjectId, SpellId};
use crate::roles::JobRoles;

/// Point-in-time view of one battle character the host has loaded.
///
/// A `Combatant` is a plain snapshot: the host refreshes the world table every
/// tick and queries hand out copies, so holding one across an await never
/// observes later movement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Combatant {
    pub id: ObjectId,
    pub npc_id: NpcId,
    pub position: Vec3,
    pub roles: JobRoles,
    pub is_dead: bool,
    /// True for the controlled agent's own character.
    pub is_me: bool,
    /// Action currently being cast, if any.
    pub casting: Option<SpellId>,
}

impl Combatant {
    pub fn is_alive(&self) -> bool {
        !self.is_dead
    }

    /// Euclidean distance to `point`.
    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.position.distance(point)
    }

    /// Squared Euclidean distance to `point`. Cheaper than [`distance_to`]
    /// when only the ordering matters.
    ///
    /// [`distance_to`]: Self::distance_to
    pub fn distance_squared_to(&self, point: Vec3) -> f32 {
        self.position.distance_squared(point)
    }
}
