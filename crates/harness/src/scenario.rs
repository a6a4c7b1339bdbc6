//! One pass through every party mechanic against a scripted world.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use dungeons::{DungeonId, DungeonRegistry, DungeonRoutine, RoutineContext, ZoneId, dodge};
use movement::SpreadController;
use party_core::{Combatant, JobRoles, NpcId, ObjectId, PartyRoster, SpellId, Vec3, select};
use test_utils::{CombatantBuilder, MockArbiter, MockMover, MockWorld};

use crate::config::HarnessConfig;

/// Hydroball, the telegraphed cast the drill duty dodges by following.
const HYDROBALL: SpellId = SpellId(1397);
/// Charged Whisker, the cast the drill duty spreads the party for.
const CHARGED_WHISKER: SpellId = SpellId(569);

const AGENT: ObjectId = ObjectId(1);
const BOSS: ObjectId = ObjectId(9);

static DRILL_DODGE: LazyLock<HashSet<SpellId>> = LazyLock::new(|| HashSet::from([HYDROBALL]));

/// Stand-in duty scripted into Sastasha's zone: follows an ally through
/// Hydroball and spreads the party for Charged Whisker.
struct SastashaDrill {
    window: Duration,
    distance: f32,
}

#[async_trait]
impl DungeonRoutine for SastashaDrill {
    fn dungeon_id(&self) -> DungeonId {
        DungeonId::Sastasha
    }

    fn zone_id(&self) -> ZoneId {
        ZoneId::Sastasha
    }

    fn follow_dodge_spells(&self) -> Option<&'static HashSet<SpellId>> {
        Some(&DRILL_DODGE)
    }

    async fn run(&self, ctx: &RoutineContext) -> dungeons::Result<bool> {
        if dodge::follow_dodge_spells(ctx, self.follow_dodge_spells()).await? {
            return Ok(true);
        }
        if let Some(target) = ctx.world.current_target() {
            if target.casting == Some(CHARGED_WHISKER) {
                ctx.spread.spread(self.window, self.distance).await?;
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// The assembled drill: scripted world, recording fakes, and the controller
/// stack wired over them.
pub struct Scenario {
    config: HarnessConfig,
    world: MockWorld,
    arbiter: MockArbiter,
    mover: MockMover,
    ctx: RoutineContext,
}

impl Scenario {
    /// Stands the party up: the agent at the origin, allies fanned out along
    /// +X with roles cycling tank, healer, melee, caster.
    pub fn new(config: HarnessConfig) -> Self {
        let world = MockWorld::new();
        world.insert(CombatantBuilder::new(AGENT.0, 0).me().build());

        let roles = [
            JobRoles::TANK,
            JobRoles::HEALER,
            JobRoles::DPS | JobRoles::MELEE,
            JobRoles::DPS,
        ];
        let mut members = Vec::new();
        for slot in 0..config.party_size {
            let npc = NpcId(101 + slot as u32);
            members.push(npc);
            world.insert(
                CombatantBuilder::new(2 + slot as u32, npc.0)
                    .at(4.0 * (slot + 1) as f32, 0.0, 0.0)
                    .roles(roles[slot % roles.len()])
                    .build(),
            );
        }

        let roster = Arc::new(PartyRoster::from_members(members));
        let arbiter = MockArbiter::new();
        let mover = MockMover::new();
        let spread = SpreadController::new(
            Arc::new(world.clone()),
            roster.clone(),
            Arc::new(arbiter.clone()),
            Arc::new(mover.clone()),
        );
        let ctx = RoutineContext::new(
            Arc::new(world.clone()),
            roster,
            Arc::new(mover.clone()),
            spread,
        );

        Self {
            config,
            world,
            arbiter,
            mover,
            ctx,
        }
    }

    pub async fn run(&self) -> Result<()> {
        self.selector_tour();
        self.uniform_spread().await?;
        self.displacement_claim().await?;
        self.directional_spread().await?;
        self.fixed_spread().await?;
        self.duty_ticks().await?;
        Ok(())
    }

    /// Walks the selector queries and logs who they pick.
    fn selector_tour(&self) {
        let world = &self.world;
        let roster = &self.ctx.roster;
        let name =
            |c: Option<Combatant>| c.map_or_else(|| "nobody".to_owned(), |c| c.id.to_string());

        info!(
            closest = %name(select::closest_ally(world, roster)),
            furthest = %name(select::furthest_ally(world, roster)),
            "ally extremes",
        );
        info!(
            tank = %name(select::closest_tank(world, roster)),
            melee = %name(select::closest_melee(world, roster)),
            dps = %name(select::closest_dps(world, roster)),
            "role picks",
        );

        let rally = Vec3::new(30.0, 0.0, 0.0);
        info!(
            member = %name(select::closest_party_member(world, roster, Some(rally))),
            "closest to the rally point",
        );
    }

    /// Mutual avoidance across the whole party.
    async fn uniform_spread(&self) -> Result<()> {
        // Navigation reports steering for the first two polls, then settles.
        self.arbiter.script_running_out([true, true]);
        let handled = self
            .ctx
            .spread
            .spread(self.config.spread_window, self.config.spread_distance)
            .await?;

        info!(
            handled,
            owners = ?self.arbiter.owners(),
            stops = self.mover.stops(),
            "uniform spread",
        );
        Ok(())
    }

    /// Half spread with a priority target: the agent claims the displacement
    /// point on its line to the boss.
    async fn displacement_claim(&self) -> Result<()> {
        self.world
            .insert(CombatantBuilder::new(BOSS.0, 999).at(20.0, 0.0, 0.0).build());
        self.world.set_target(Some(BOSS));

        let handled = self
            .ctx
            .spread
            .half_spread(
                self.config.spread_window,
                self.config.spread_distance,
                Some(BOSS),
            )
            .await?;

        info!(
            handled,
            destination = ?self.mover.last_towards(),
            "half spread",
        );
        Ok(())
    }

    /// Directional spread, then the agent crosses the reference line to show
    /// the shared anchor tracking it and flipping sides.
    async fn directional_spread(&self) -> Result<()> {
        // Push everyone to the agent's side of the boss.
        let reference = Vec3::new(20.0, 0.0, 0.0);
        let before = self.arbiter.zone_count();
        self.ctx
            .spread
            .spread_directional(
                self.config.spread_window,
                reference,
                self.config.spread_distance,
            )
            .await?;

        let resolve_latest = || {
            self.arbiter
                .with_zones(|zones| zones.last().map(|z| z.anchor.resolve(Vec3::ZERO)))
        };
        let near_side = resolve_latest();
        self.world.set_position(AGENT, Vec3::new(40.0, 0.0, 0.0));
        let far_side = resolve_latest();
        self.world.set_position(AGENT, Vec3::ZERO);

        info!(
            zones = self.arbiter.zone_count() - before,
            near = ?near_side,
            far = ?far_side,
            "directional spread anchors",
        );
        Ok(())
    }

    /// Fixed-point spread around the nearest member's position.
    async fn fixed_spread(&self) -> Result<()> {
        let before = self.arbiter.zone_count();
        self.ctx
            .spread
            .spread_at(self.config.spread_window, None, self.config.spread_distance)
            .await?;

        let anchor = self
            .arbiter
            .with_zones(|zones| zones.last().map(|z| z.anchor.resolve(Vec3::ZERO)));
        info!(
            zones = self.arbiter.zone_count() - before,
            anchor = ?anchor,
            "fixed spread",
        );
        Ok(())
    }

    /// Three duty ticks through the registry: a stub zone, then the drill
    /// duty dodging Hydroball and spreading for Charged Whisker.
    async fn duty_ticks(&self) -> Result<()> {
        let standard = DungeonRegistry::standard();
        let handled = standard.run_zone(ZoneId::TheGrandCosmos, &self.ctx).await?;
        info!(handled, zones = standard.len(), "stub duty tick");

        let drill = DungeonRegistry::new([Arc::new(SastashaDrill {
            window: self.config.spread_window,
            distance: self.config.spread_distance,
        }) as Arc<dyn DungeonRoutine>]);

        // Boss opens with Hydroball; a side task ends the cast shortly after.
        self.world.set_casting(BOSS, Some(HYDROBALL));
        let cast_ends = tokio::spawn({
            let world = self.world.clone();
            async move {
                tokio::time::sleep(Duration::from_millis(100)).await;
                world.set_casting(BOSS, None);
            }
        });
        let handled = drill.run_zone(ZoneId::Sastasha, &self.ctx).await?;
        cast_ends.await?;
        info!(handled, "dodge tick");

        self.world.set_casting(BOSS, Some(CHARGED_WHISKER));
        let handled = drill.run_zone(ZoneId::Sastasha, &self.ctx).await?;
        info!(handled, "spread tick");
        Ok(())
    }
}
