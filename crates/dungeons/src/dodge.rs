//! Dodge-by-following: stick to the nearest safe ally while a telegraphed
//! cast resolves, trusting the ally to stand somewhere survivable.

use std::collections::HashSet;
use std::time::Duration;

use tokio::time::{Instant, sleep};
use tracing::debug;

use party_core::{SpellId, select};

use crate::context::RoutineContext;
use crate::error::Result;

/// Poll interval while tracking the ally.
const FOLLOW_POLL: Duration = Duration::from_millis(30);

/// Upper bound on one follow. Telegraphs resolve well inside this; hitting
/// it means the cast data is wrong and the agent should not stay glued to
/// an ally forever.
const FOLLOW_LIMIT: Duration = Duration::from_secs(10);

/// Follows the nearest safe ally while any hostile cast in `spells` is
/// resolving, then halts. Returns whether the agent followed at all.
pub async fn follow_dodge_spells(
    ctx: &RoutineContext,
    spells: Option<&HashSet<SpellId>>,
) -> Result<bool> {
    let Some(spells) = spells else {
        return Ok(false);
    };
    if spells.is_empty() || !dodge_cast_active(ctx, spells) {
        return Ok(false);
    }

    debug!(target: "dungeons::dodge", "hostile telegraph up, following nearest ally");
    let deadline = Instant::now() + FOLLOW_LIMIT;
    let mut followed = false;
    while dodge_cast_active(ctx, spells) && Instant::now() < deadline {
        let Some(ally) = select::closest_ally(&*ctx.world, &ctx.roster) else {
            break;
        };
        ctx.mover.move_towards(ally.position);
        followed = true;
        sleep(FOLLOW_POLL).await;
    }
    if followed {
        ctx.mover.stop();
    }
    Ok(followed)
}

/// True while any living hostile combatant is casting one of `spells`.
fn dodge_cast_active(ctx: &RoutineContext, spells: &HashSet<SpellId>) -> bool {
    ctx.world.combatants().iter().any(|c| {
        c.is_alive()
            && !c.is_me
            && !ctx.roster.is_member(c.npc_id)
            && c.casting.is_some_and(|spell| spells.contains(&spell))
    })
}
