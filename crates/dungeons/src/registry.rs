//! Zone-indexed dispatch to duty routines.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::context::RoutineContext;
use crate::duties;
use crate::error::Result;
use crate::ids::ZoneId;
use crate::routine::DungeonRoutine;

/// Looks up the routine for whatever zone the agent is standing in.
pub struct DungeonRegistry {
    routines: HashMap<ZoneId, Arc<dyn DungeonRoutine>>,
}

impl DungeonRegistry {
    /// Registry over an explicit routine set. A later routine for the same
    /// zone replaces an earlier one.
    pub fn new(routines: impl IntoIterator<Item = Arc<dyn DungeonRoutine>>) -> Self {
        Self {
            routines: routines
                .into_iter()
                .map(|routine| (routine.zone_id(), routine))
                .collect(),
        }
    }

    /// Every duty this crate ships.
    pub fn standard() -> Self {
        Self::new([
            Arc::new(duties::Sastasha) as Arc<dyn DungeonRoutine>,
            Arc::new(duties::CopperbellMines),
            Arc::new(duties::TheGrandCosmos),
            Arc::new(duties::Paglthan),
            Arc::new(duties::TheMothercrystal),
        ])
    }

    pub fn get(&self, zone: ZoneId) -> Option<&Arc<dyn DungeonRoutine>> {
        self.routines.get(&zone)
    }

    pub fn zones(&self) -> impl Iterator<Item = ZoneId> + '_ {
        self.routines.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.routines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routines.is_empty()
    }

    /// Runs the routine registered for `zone`, if any. An unscripted zone is
    /// not an error; the tick is simply reported unhandled.
    pub async fn run_zone(&self, zone: ZoneId, ctx: &RoutineContext) -> Result<bool> {
        match self.get(zone) {
            Some(routine) => {
                debug!(
                    target: "dungeons::registry",
                    %zone,
                    dungeon = %routine.dungeon_id(),
                    "running routine",
                );
                routine.run(ctx).await
            }
            None => {
                trace!(target: "dungeons::registry", %zone, "no routine registered");
                Ok(false)
            }
        }
    }
}

impl Default for DungeonRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
