//! Nearest/furthest party-member queries.
//!
//! All selectors filter to living combatants first, order by Euclidean
//! distance, and return `None` when nothing qualifies. Ties between
//! equal-distance candidates resolve to whichever the world enumerates
//! first; callers must not rely on which one that is.

use glam::Vec3;

use crate::combatant::Combatant;
use crate::roles::JobRoles;
use crate::roster::PartyRoster;
use crate::world::WorldOracle;

/// Nearest living safe-roster member, measured from the agent.
pub fn closest_ally(world: &dyn WorldOracle, roster: &PartyRoster) -> Option<Combatant> {
    let origin = world.player()?.position;
    safe_members(world, roster).min_by(by_distance_to(origin))
}

/// Furthest living safe-roster member, measured from the agent.
pub fn furthest_ally(world: &dyn WorldOracle, roster: &PartyRoster) -> Option<Combatant> {
    let origin = world.player()?.position;
    safe_members(world, roster).max_by(by_distance_to(origin))
}

/// Nearest living broad-roster member whose job deals damage.
pub fn closest_dps(world: &dyn WorldOracle, roster: &PartyRoster) -> Option<Combatant> {
    closest_with_roles(world, roster, JobRoles::DPS)
}

/// Nearest living broad-roster member on a tank job.
pub fn closest_tank(world: &dyn WorldOracle, roster: &PartyRoster) -> Option<Combatant> {
    closest_with_roles(world, roster, JobRoles::TANK)
}

/// Nearest living broad-roster member on a melee job.
pub fn closest_melee(world: &dyn WorldOracle, roster: &PartyRoster) -> Option<Combatant> {
    closest_with_roles(world, roster, JobRoles::MELEE)
}

/// Nearest living safe-roster member measured from `point` instead of the
/// agent. Returns `None` without touching the world when no point is given.
pub fn closest_party_member(
    world: &dyn WorldOracle,
    roster: &PartyRoster,
    point: Option<Vec3>,
) -> Option<Combatant> {
    let point = point?;
    safe_members(world, roster).min_by(by_distance_to(point))
}

/// Nearest living broad-roster member other than the agent itself.
pub fn closest_member(world: &dyn WorldOracle, roster: &PartyRoster) -> Option<Combatant> {
    let origin = world.player()?.position;
    world
        .combatants()
        .into_iter()
        .filter(|c| c.is_alive() && !c.is_me && roster.is_member(c.npc_id))
        .min_by(by_distance_to(origin))
}

fn safe_members<'r>(
    world: &dyn WorldOracle,
    roster: &'r PartyRoster,
) -> impl Iterator<Item = Combatant> + 'r {
    world
        .combatants()
        .into_iter()
        .filter(|c| c.is_alive() && roster.is_safe_member(c.npc_id))
}

fn closest_with_roles(
    world: &dyn WorldOracle,
    roster: &PartyRoster,
    roles: JobRoles,
) -> Option<Combatant> {
    let origin = world.player()?.position;
    world
        .combatants()
        .into_iter()
        .filter(|c| c.is_alive() && roster.is_member(c.npc_id) && c.roles.contains(roles))
        .min_by(by_distance_to(origin))
}

fn by_distance_to(point: Vec3) -> impl Fn(&Combatant, &Combatant) -> std::cmp::Ordering {
    move |a, b| {
        a.distance_squared_to(point)
            .total_cmp(&b.distance_squared_to(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{NpcId, ObjectId};

    struct TestWorld {
        combatants: Vec<Combatant>,
    }

    impl WorldOracle for TestWorld {
        fn combatants(&self) -> Vec<Combatant> {
            self.combatants.clone()
        }

        fn player(&self) -> Option<Combatant> {
            self.combatants.iter().copied().find(|c| c.is_me)
        }

        fn current_target(&self) -> Option<Combatant> {
            None
        }
    }

    /// World whose queries must never run.
    struct PanicWorld;

    impl WorldOracle for PanicWorld {
        fn combatants(&self) -> Vec<Combatant> {
            panic!("world was queried");
        }

        fn player(&self) -> Option<Combatant> {
            panic!("world was queried");
        }

        fn current_target(&self) -> Option<Combatant> {
            panic!("world was queried");
        }
    }

    fn member(object_id: u32, npc_id: u32, x: f32) -> Combatant {
        Combatant {
            id: ObjectId(object_id),
            npc_id: NpcId(npc_id),
            position: Vec3::new(x, 0.0, 0.0),
            roles: JobRoles::empty(),
            is_dead: false,
            is_me: false,
            casting: None,
        }
    }

    fn me() -> Combatant {
        Combatant {
            is_me: true,
            ..member(1, 0, 0.0)
        }
    }

    fn roster() -> PartyRoster {
        PartyRoster::from_members([NpcId(10), NpcId(11), NpcId(12)])
    }

    #[test]
    fn closest_and_furthest_pick_the_extremes() {
        let world = TestWorld {
            combatants: vec![
                me(),
                member(2, 10, 5.0),
                member(3, 11, 2.0),
                member(4, 12, 9.0),
            ],
        };

        let closest = closest_ally(&world, &roster()).unwrap();
        let furthest = furthest_ally(&world, &roster()).unwrap();

        assert_eq!(closest.id, ObjectId(3));
        assert_eq!(furthest.id, ObjectId(4));
    }

    #[test]
    fn dead_members_are_never_selected() {
        let mut near = member(2, 10, 1.0);
        near.is_dead = true;
        let world = TestWorld {
            combatants: vec![me(), near, member(3, 11, 6.0)],
        };

        assert_eq!(closest_ally(&world, &roster()).unwrap().id, ObjectId(3));

        let mut far = member(3, 11, 6.0);
        far.is_dead = true;
        let world = TestWorld {
            combatants: vec![me(), near, far],
        };
        assert!(closest_ally(&world, &roster()).is_none());
    }

    #[test]
    fn strangers_are_not_allies() {
        let world = TestWorld {
            combatants: vec![me(), member(2, 99, 1.0), member(3, 10, 4.0)],
        };

        assert_eq!(closest_ally(&world, &roster()).unwrap().id, ObjectId(3));
    }

    #[test]
    fn lone_member_is_both_closest_and_furthest() {
        let world = TestWorld {
            combatants: vec![me(), member(2, 10, 3.0)],
        };

        assert_eq!(
            closest_ally(&world, &roster()).unwrap().id,
            furthest_ally(&world, &roster()).unwrap().id,
        );

        let world = TestWorld {
            combatants: vec![me(), member(2, 10, 3.0), member(3, 11, 7.0)],
        };
        assert_ne!(
            closest_ally(&world, &roster()).unwrap().id,
            furthest_ally(&world, &roster()).unwrap().id,
        );
    }

    #[test]
    fn role_queries_search_the_broad_roster() {
        let roster = PartyRoster::new([NpcId(10)], [NpcId(20)]);
        let mut wanderer = member(2, 20, 2.0);
        wanderer.roles = JobRoles::DPS;
        let world = TestWorld {
            combatants: vec![me(), wanderer, member(3, 10, 5.0)],
        };

        assert_eq!(closest_dps(&world, &roster).unwrap().id, ObjectId(2));
        // The safe-tier query still skips the wanderer.
        assert_eq!(closest_ally(&world, &roster).unwrap().id, ObjectId(3));
    }

    #[test]
    fn melee_query_requires_the_melee_flag() {
        let mut caster = member(2, 10, 1.0);
        caster.roles = JobRoles::DPS;
        let mut dragoon = member(3, 11, 4.0);
        dragoon.roles = JobRoles::DPS | JobRoles::MELEE;
        let world = TestWorld {
            combatants: vec![me(), caster, dragoon],
        };

        assert_eq!(closest_melee(&world, &roster()).unwrap().id, ObjectId(3));
        assert_eq!(closest_dps(&world, &roster()).unwrap().id, ObjectId(2));
    }

    #[test]
    fn point_query_without_a_point_skips_the_world() {
        assert!(closest_party_member(&PanicWorld, &roster(), None).is_none());
    }

    #[test]
    fn point_query_measures_from_the_point() {
        let world = TestWorld {
            combatants: vec![me(), member(2, 10, 1.0), member(3, 11, 9.0)],
        };

        let picked =
            closest_party_member(&world, &roster(), Some(Vec3::new(10.0, 0.0, 0.0))).unwrap();
        assert_eq!(picked.id, ObjectId(3));
    }

    #[test]
    fn closest_member_never_returns_the_agent() {
        // Roster that (unusually) contains the agent's own npc id.
        let roster = PartyRoster::from_members([NpcId(0), NpcId(10)]);
        let world = TestWorld {
            combatants: vec![me(), member(2, 10, 5.0)],
        };

        assert_eq!(closest_member(&world, &roster).unwrap().id, ObjectId(2));
    }

    #[test]
    fn selectors_need_a_loaded_player() {
        let world = TestWorld {
            combatants: vec![member(2, 10, 5.0)],
        };

        assert!(closest_ally(&world, &roster()).is_none());
        assert!(closest_member(&world, &roster()).is_none());
    }
}
