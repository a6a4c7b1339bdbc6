//! Pure world model and party queries shared across the workspace.
//!
//! `party-core` defines the snapshot types the host fills in each tick
//! (combatants, rosters, identities), the [`WorldOracle`] read interface, and
//! the stateless geometry and selector helpers the spread logic is built on.
//! Nothing here is async and nothing mutates world state; supporting crates
//! depend on the types re-exported here.
pub mod combatant;
pub mod geometry;
pub mod ids;
pub mod roles;
pub mod roster;
pub mod select;
pub mod world;

pub use combatant::Combatant;
pub use glam::Vec3;
pub use ids::{NpcId, ObjectId, SpellId};
pub use roles::JobRoles;
pub use roster::PartyRoster;
pub use world::WorldOracle;
