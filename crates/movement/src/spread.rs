//! Spread operations: deciding where the party should stand while a
//! telegraphed attack resolves, and driving the agent accordingly.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Semaphore, SemaphorePermit};
use tokio::task::yield_now;
use tracing::debug;

use party_core::{Combatant, ObjectId, PartyRoster, Vec3, WorldOracle, geometry, select};

use crate::config::SpreadConfig;
use crate::error::{MovementError, Result};
use crate::host::{AvoidanceArbiter, Mover};
use crate::task;
use crate::window::SpreadWindow;
use crate::zone::{Anchor, AvoidanceZone};

/// Drives one agent through the spread mechanics of a duty.
///
/// All four operations share a skeleton: open a [`SpreadWindow`], register
/// one avoidance zone per living party member (furthest from the agent
/// first, so the urgent nearby reassignments land last), then stop the
/// agent's own movement once navigation reports it is no longer steering out
/// of a zone. Absent inputs (no player loaded, no target, no members) skip
/// registration but never change an operation's return value.
///
/// A single-permit lease serializes operations; a second call while one is
/// in flight fails with [`MovementError::LeaseHeld`]. Clones share the
/// lease, so handing clones to concurrent tasks stays safe.
#[derive(Clone)]
pub struct SpreadController {
    world: Arc<dyn WorldOracle>,
    roster: Arc<PartyRoster>,
    avoidance: Arc<dyn AvoidanceArbiter>,
    mover: Arc<dyn Mover>,
    config: SpreadConfig,
    lease: Arc<Semaphore>,
}

impl SpreadController {
    pub fn new(
        world: Arc<dyn WorldOracle>,
        roster: Arc<PartyRoster>,
        avoidance: Arc<dyn AvoidanceArbiter>,
        mover: Arc<dyn Mover>,
    ) -> Self {
        Self::with_config(world, roster, avoidance, mover, SpreadConfig::default())
    }

    pub fn with_config(
        world: Arc<dyn WorldOracle>,
        roster: Arc<PartyRoster>,
        avoidance: Arc<dyn AvoidanceArbiter>,
        mover: Arc<dyn Mover>,
        config: SpreadConfig,
    ) -> Self {
        Self {
            world,
            roster,
            avoidance,
            mover,
            config,
            lease: Arc::new(Semaphore::new(1)),
        }
    }

    pub fn config(&self) -> &SpreadConfig {
        &self.config
    }

    /// Spreads the party out by making every member an obstacle to every
    /// other for `time_to_spread`.
    ///
    /// After registering, polls until navigation stops steering or the
    /// window closes, and issues a stop only when avoidance settled on its
    /// own. Always reports the tick as handled.
    pub async fn spread(&self, time_to_spread: Duration, spread_distance: f32) -> Result<bool> {
        let _lease = self.acquire_lease()?;
        let window = SpreadWindow::open(time_to_spread);

        let members = self.members_far_to_near();
        debug!(
            target: "movement::spread",
            members = members.len(),
            radius = spread_distance,
            window_ms = time_to_spread.as_millis() as u64,
            "registering mutual avoidance",
        );
        for member in &members {
            self.avoidance
                .register(AvoidanceZone::on_object(member.id, spread_distance, &window));
        }

        let settled = task::wait_until(window.remaining(), self.config.poll_interval, || {
            !self.avoidance.is_running_out()
        })
        .await;
        if settled {
            self.mover.stop();
        }
        Ok(true)
    }

    /// Half spread: with a priority target present, first tries to claim a
    /// displacement point on the agent→target line for the agent alone;
    /// otherwise falls back to mutual avoidance, yielding once per
    /// registration.
    ///
    /// The fast path returns `Ok(false)` to signal that this tick's movement
    /// was only partially decided and the caller's own logic should still
    /// run. Every other outcome is `Ok(true)`.
    pub async fn half_spread(
        &self,
        time_to_spread: Duration,
        spread_distance: f32,
        priority_target: Option<ObjectId>,
    ) -> Result<bool> {
        let _lease = self.acquire_lease()?;
        let window = SpreadWindow::open(time_to_spread);

        if let Some(priority) = priority_target {
            if let Some(point) = self.claimable_displacement_point() {
                debug!(
                    target: "movement::spread",
                    %priority,
                    x = point.x,
                    z = point.z,
                    "claiming displacement point",
                );
                self.mover.move_towards(point);
                yield_now().await;
                return Ok(false);
            }
        }

        for member in self.members_far_to_near() {
            self.avoidance
                .register(AvoidanceZone::on_object(member.id, spread_distance, &window));
            yield_now().await;
        }
        self.stop_if_settled();
        Ok(true)
    }

    /// Pushes the whole party to one side: every member shares a live anchor
    /// at the agent's position shifted sideways away from `reference`, with
    /// a leash holding the group near it.
    pub async fn spread_directional(
        &self,
        time_to_spread: Duration,
        reference: Vec3,
        spread_distance: f32,
    ) -> Result<bool> {
        let _lease = self.acquire_lease()?;
        let window = SpreadWindow::open(time_to_spread);

        if let Some(player) = self.world.player() {
            let anchor = self.sideways_anchor(player, reference);
            let members = self.members_far_to_near();
            debug!(
                target: "movement::spread",
                members = members.len(),
                reference_x = reference.x,
                "registering directional spread",
            );
            for member in members {
                self.avoidance.register(AvoidanceZone::anchored(
                    member.id,
                    anchor.clone(),
                    spread_distance,
                    Some(self.config.leash_radius),
                    &window,
                ));
                yield_now().await;
            }
        }
        self.stop_if_settled();
        Ok(true)
    }

    /// Spreads the party around a fixed point: the supplied one, or the
    /// nearest other member's position captured at invocation time.
    pub async fn spread_at(
        &self,
        time_to_spread: Duration,
        anchor_point: Option<Vec3>,
        spread_distance: f32,
    ) -> Result<bool> {
        let _lease = self.acquire_lease()?;
        let window = SpreadWindow::open(time_to_spread);

        let anchor_point = anchor_point
            .or_else(|| select::closest_member(&*self.world, &self.roster).map(|m| m.position));
        match anchor_point {
            Some(point) => {
                for member in self.members_far_to_near() {
                    self.avoidance.register(AvoidanceZone::anchored(
                        member.id,
                        Anchor::Fixed(point),
                        spread_distance,
                        Some(self.config.leash_radius),
                        &window,
                    ));
                    yield_now().await;
                }
            }
            None => {
                debug!(target: "movement::spread", "no anchor candidate, nothing to register");
            }
        }
        self.stop_if_settled();
        Ok(true)
    }

    /// Candidate displacement point for the half-spread fast path, if the
    /// line geometry is solvable and the nearest other member has left the
    /// point to the agent.
    fn claimable_displacement_point(&self) -> Option<Vec3> {
        let player = self.world.player()?;
        let target = self.world.current_target()?;
        let point = geometry::inverse_square_offset(player.position, target.position)?;
        let ally = select::closest_member(&*self.world, &self.roster)?;

        let claimable =
            ally.distance_to(point) - self.config.claim_margin > player.distance_to(point);
        claimable.then_some(point)
    }

    /// Live anchor tracking the agent, offset away from `reference` along X.
    /// The offset sign follows whichever side of the reference the agent is
    /// on at query time; `player`'s position at invocation covers the agent
    /// dropping out of the world mid-window.
    fn sideways_anchor(&self, player: Combatant, reference: Vec3) -> Anchor {
        let world = Arc::clone(&self.world);
        let magnitude = self.config.side_offset;
        let fallback = player.position;
        Anchor::Dynamic(Arc::new(move || {
            let base = world.player().map_or(fallback, |p| p.position);
            let side = geometry::lateral_offset(base.x, reference.x, magnitude);
            Vec3::new(base.x + side, base.y, base.z)
        }))
    }

    /// Living broad-roster members, furthest from the agent first. Empty
    /// when the agent itself is not loaded.
    fn members_far_to_near(&self) -> Vec<Combatant> {
        let Some(player) = self.world.player() else {
            return Vec::new();
        };
        let mut members: Vec<Combatant> = self
            .world
            .combatants()
            .into_iter()
            .filter(|c| c.is_alive() && self.roster.is_member(c.npc_id))
            .collect();
        members.sort_by(|a, b| {
            b.distance_squared_to(player.position)
                .total_cmp(&a.distance_squared_to(player.position))
        });
        members
    }

    /// Stops scripted movement unless navigation is still steering out of a
    /// zone.
    fn stop_if_settled(&self) {
        if !self.avoidance.is_running_out() {
            self.mover.stop();
        }
    }

    fn acquire_lease(&self) -> Result<SemaphorePermit<'_>> {
        self.lease
            .try_acquire()
            .map_err(|_| MovementError::LeaseHeld)
    }
}
