//! The per-duty routine contract.

use std::collections::HashSet;

use async_trait::async_trait;

use party_core::SpellId;

use crate::context::RoutineContext;
use crate::dodge;
use crate::error::Result;
use crate::ids::{DungeonId, ZoneId};

/// One duty's scripted behavior, invoked once per tick while its zone is
/// active.
///
/// Most shipped duties rely entirely on the default [`run`], which dodges
/// the casts named by [`follow_dodge_spells`] by sticking to the nearest
/// ally; duties with charted mechanics override `run` and reach for the
/// spread controller in the context.
///
/// [`run`]: Self::run
/// [`follow_dodge_spells`]: Self::follow_dodge_spells
#[async_trait]
pub trait DungeonRoutine: Send + Sync {
    /// Which duty this routine scripts.
    fn dungeon_id(&self) -> DungeonId;

    /// Zone the routine activates in.
    fn zone_id(&self) -> ZoneId;

    /// Enemy casts dodged by following an ally. `None` disables the
    /// behavior.
    fn follow_dodge_spells(&self) -> Option<&'static HashSet<SpellId>> {
        None
    }

    /// Drives the duty for one tick. Returns whether the routine fully
    /// handled this tick's movement; `false` lets the caller apply its own.
    async fn run(&self, ctx: &RoutineContext) -> Result<bool> {
        dodge::follow_dodge_spells(ctx, self.follow_dodge_spells()).await?;
        Ok(false)
    }
}
