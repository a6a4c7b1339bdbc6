//! End-to-end behavior of the four spread operations against host fakes.

use std::sync::Arc;
use std::time::Duration;

use movement::{MovementError, SpreadController};
use party_core::{NpcId, ObjectId, PartyRoster, Vec3};
use test_utils::{CombatantBuilder, MockArbiter, MockMover, MockWorld};

const WINDOW: Duration = Duration::from_millis(300);
const RADIUS: f32 = 6.5;

struct Rig {
    world: MockWorld,
    arbiter: MockArbiter,
    mover: MockMover,
    controller: SpreadController,
}

/// Agent at the origin plus three party members at x = 2, 5 and 9.
fn rig() -> Rig {
    let world = MockWorld::new();
    world.insert(CombatantBuilder::new(1, 0).me().build());
    world.insert(CombatantBuilder::new(2, 101).at(2.0, 0.0, 0.0).build());
    world.insert(CombatantBuilder::new(3, 102).at(5.0, 0.0, 0.0).build());
    world.insert(CombatantBuilder::new(4, 103).at(9.0, 0.0, 0.0).build());

    let roster = Arc::new(PartyRoster::from_members([
        NpcId(101),
        NpcId(102),
        NpcId(103),
    ]));
    let arbiter = MockArbiter::new();
    let mover = MockMover::new();
    let controller = SpreadController::new(
        Arc::new(world.clone()),
        roster,
        Arc::new(arbiter.clone()),
        Arc::new(mover.clone()),
    );
    Rig {
        world,
        arbiter,
        mover,
        controller,
    }
}

/// Points the rig's agent at a boss standing at `position`.
fn add_boss_target(rig: &Rig, position: Vec3) {
    rig.world
        .insert(CombatantBuilder::new(9, 999).at(position.x, position.y, position.z).build());
    rig.world.set_target(Some(ObjectId(9)));
}

#[tokio::test(start_paused = true)]
async fn spread_registers_per_member_then_stops() {
    let rig = rig();
    // Navigation steers for two polls, then settles.
    rig.arbiter.script_running_out([true, true]);

    let handled = rig.controller.spread(WINDOW, RADIUS).await.unwrap();

    assert!(handled);
    // Furthest member first; the agent itself gets no zone.
    assert_eq!(
        rig.arbiter.owners(),
        vec![ObjectId(4), ObjectId(3), ObjectId(2)]
    );
    assert_eq!(rig.mover.stops(), 1);
}

#[tokio::test(start_paused = true)]
async fn spread_skips_the_stop_while_navigation_is_busy() {
    let rig = rig();
    rig.arbiter.set_running_out(true);

    let handled = rig.controller.spread(WINDOW, RADIUS).await.unwrap();

    assert!(handled);
    assert_eq!(rig.arbiter.zone_count(), 3);
    assert_eq!(rig.mover.stops(), 0);
}

#[tokio::test(start_paused = true)]
async fn spread_zones_expire_with_the_window() {
    let rig = rig();
    rig.controller.spread(WINDOW, RADIUS).await.unwrap();

    assert_eq!(rig.arbiter.active_zone_count(), 3);
    tokio::time::advance(Duration::from_millis(301)).await;
    assert_eq!(rig.arbiter.active_zone_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn dead_and_foreign_combatants_get_no_zone() {
    let rig = rig();
    rig.world.kill(ObjectId(3));
    rig.world
        .insert(CombatantBuilder::new(9, 999).at(1.0, 0.0, 0.0).build());

    rig.controller.spread(WINDOW, RADIUS).await.unwrap();

    assert_eq!(rig.arbiter.owners(), vec![ObjectId(4), ObjectId(2)]);
}

#[tokio::test(start_paused = true)]
async fn spread_without_a_player_registers_nothing() {
    let rig = rig();
    rig.world.remove(ObjectId(1));

    let handled = rig.controller.spread(WINDOW, RADIUS).await.unwrap();

    assert!(handled);
    assert_eq!(rig.arbiter.zone_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn half_spread_claims_the_displacement_point() {
    let rig = rig();
    rig.world.remove(ObjectId(3));
    rig.world.remove(ObjectId(4));
    rig.world
        .set_position(ObjectId(2), Vec3::new(5.0, 0.0, 0.0));
    add_boss_target(&rig, Vec3::new(10.0, 0.0, 0.0));

    let handled = rig
        .controller
        .half_spread(WINDOW, RADIUS, Some(ObjectId(9)))
        .await
        .unwrap();

    // The fast path moved the agent and deferred the rest of the tick.
    assert!(!handled);
    assert_eq!(rig.mover.last_towards(), Some(Vec3::new(-10.0, 0.0, 0.0)));
    assert_eq!(rig.arbiter.zone_count(), 0);
    assert_eq!(rig.mover.stops(), 0);
}

#[tokio::test(start_paused = true)]
async fn half_spread_defers_to_a_closer_ally() {
    let rig = rig();
    rig.world.remove(ObjectId(3));
    rig.world.remove(ObjectId(4));
    // The ally already stands next to the displacement point at (-10, 0, 0).
    rig.world
        .set_position(ObjectId(2), Vec3::new(-9.0, 0.0, 0.0));
    add_boss_target(&rig, Vec3::new(10.0, 0.0, 0.0));

    let handled = rig
        .controller
        .half_spread(WINDOW, RADIUS, Some(ObjectId(9)))
        .await
        .unwrap();

    assert!(handled);
    assert!(rig.mover.last_towards().is_none());
    assert_eq!(rig.arbiter.zone_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn half_spread_without_priority_skips_the_fast_path() {
    let rig = rig();
    rig.world.remove(ObjectId(3));
    rig.world.remove(ObjectId(4));
    rig.world
        .set_position(ObjectId(2), Vec3::new(5.0, 0.0, 0.0));
    add_boss_target(&rig, Vec3::new(10.0, 0.0, 0.0));

    let handled = rig.controller.half_spread(WINDOW, RADIUS, None).await.unwrap();

    assert!(handled);
    assert!(rig.mover.last_towards().is_none());
    assert_eq!(rig.arbiter.zone_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn half_spread_falls_through_when_x_aligned() {
    let rig = rig();
    rig.world.remove(ObjectId(3));
    rig.world.remove(ObjectId(4));
    rig.world
        .set_position(ObjectId(2), Vec3::new(5.0, 0.0, 0.0));
    // Target straight ahead on the Z axis: the line solve has no slope.
    add_boss_target(&rig, Vec3::new(0.0, 0.0, 10.0));

    let handled = rig
        .controller
        .half_spread(WINDOW, RADIUS, Some(ObjectId(9)))
        .await
        .unwrap();

    assert!(handled);
    assert!(rig.mover.last_towards().is_none());
    assert_eq!(rig.arbiter.zone_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn directional_anchor_tracks_the_agent_and_flips_sides() {
    let rig = rig();
    let reference = Vec3::new(10.0, 0.0, 0.0);

    let handled = rig
        .controller
        .spread_directional(WINDOW, reference, RADIUS)
        .await
        .unwrap();

    assert!(handled);
    rig.arbiter.with_zones(|zones| {
        assert_eq!(zones.len(), 3);
        for zone in zones {
            assert_eq!(zone.leash_radius, Some(40.0));
        }
    });

    let resolve =
        |rig: &Rig| rig.arbiter.with_zones(|zones| zones[0].anchor.resolve(Vec3::ZERO));

    // Agent left of the reference: pushed further left.
    assert_eq!(resolve(&rig), Vec3::new(-20.0, 0.0, 0.0));

    // The anchor is live; crossing the reference flips the side.
    rig.world
        .set_position(ObjectId(1), Vec3::new(30.0, 0.0, 5.0));
    assert_eq!(resolve(&rig), Vec3::new(50.0, 0.0, 5.0));

    // Equal X resolves to the negative side.
    rig.world
        .set_position(ObjectId(1), Vec3::new(10.0, 0.0, 0.0));
    assert_eq!(resolve(&rig), Vec3::new(-10.0, 0.0, 0.0));
}

#[tokio::test(start_paused = true)]
async fn directional_members_share_one_anchor() {
    let rig = rig();

    rig.controller
        .spread_directional(WINDOW, Vec3::new(10.0, 0.0, 0.0), RADIUS)
        .await
        .unwrap();

    rig.world
        .set_position(ObjectId(1), Vec3::new(-8.0, 1.0, 2.0));
    rig.arbiter.with_zones(|zones| {
        let anchors: Vec<Vec3> = zones.iter().map(|z| z.anchor.resolve(Vec3::ZERO)).collect();
        assert!(anchors.iter().all(|a| *a == Vec3::new(-28.0, 1.0, 2.0)));
    });
}

#[tokio::test(start_paused = true)]
async fn spread_at_prefers_the_supplied_point() {
    let rig = rig();
    let point = Vec3::new(3.0, 0.0, -4.0);

    let handled = rig
        .controller
        .spread_at(WINDOW, Some(point), RADIUS)
        .await
        .unwrap();

    assert!(handled);
    rig.arbiter.with_zones(|zones| {
        assert_eq!(zones.len(), 3);
        for zone in zones {
            assert_eq!(zone.anchor.resolve(Vec3::ZERO), point);
            assert_eq!(zone.leash_radius, Some(40.0));
        }
    });
}

#[tokio::test(start_paused = true)]
async fn spread_at_captures_the_closest_member_once() {
    let rig = rig();

    rig.controller.spread_at(WINDOW, None, RADIUS).await.unwrap();

    // Nearest other member stood at x = 2 at invocation; later movement
    // must not drag the anchor along.
    rig.world
        .set_position(ObjectId(2), Vec3::new(70.0, 0.0, 0.0));
    rig.arbiter.with_zones(|zones| {
        for zone in zones {
            assert_eq!(zone.anchor.resolve(Vec3::ZERO), Vec3::new(2.0, 0.0, 0.0));
        }
    });
}

#[tokio::test(start_paused = true)]
async fn spread_at_with_no_candidates_registers_nothing() {
    let rig = rig();
    for id in [2, 3, 4] {
        rig.world.remove(ObjectId(id));
    }

    let handled = rig.controller.spread_at(WINDOW, None, RADIUS).await.unwrap();

    assert!(handled);
    assert_eq!(rig.arbiter.zone_count(), 0);
    assert_eq!(rig.mover.stops(), 1);
}

#[tokio::test(start_paused = true)]
async fn concurrent_spreads_are_rejected() {
    let rig = rig();
    // Keeps the first spread polling for its whole window.
    rig.arbiter.set_running_out(true);

    let first = tokio::spawn({
        let controller = rig.controller.clone();
        async move { controller.spread(WINDOW, RADIUS).await }
    });
    tokio::task::yield_now().await;

    let second = rig.controller.half_spread(WINDOW, RADIUS, None).await;
    assert_eq!(second, Err(MovementError::LeaseHeld));

    // Once the first operation finishes, the lease frees up again.
    assert!(first.await.unwrap().unwrap());
    assert!(rig.controller.spread(WINDOW, RADIUS).await.is_ok());
}
