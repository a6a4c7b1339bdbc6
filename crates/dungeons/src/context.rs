//! Shared handles a routine works with while driving the agent.

use std::sync::Arc;

use movement::{Mover, SpreadController};
use party_core::{PartyRoster, WorldOracle};

/// Everything a [`DungeonRoutine`] gets for one tick: the world view, the
/// current roster, direct movement, and the spread controller.
///
/// Clones share the underlying handles, including the spread controller's
/// movement lease.
///
/// [`DungeonRoutine`]: crate::routine::DungeonRoutine
#[derive(Clone)]
pub struct RoutineContext {
    pub world: Arc<dyn WorldOracle>,
    pub roster: Arc<PartyRoster>,
    pub mover: Arc<dyn Mover>,
    pub spread: SpreadController,
}

impl RoutineContext {
    pub fn new(
        world: Arc<dyn WorldOracle>,
        roster: Arc<PartyRoster>,
        mover: Arc<dyn Mover>,
        spread: SpreadController,
    ) -> Self {
        Self {
            world,
            roster,
            mover,
            spread,
        }
    }
}
