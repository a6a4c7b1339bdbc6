//! Scriptable in-memory world table.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use party_core::{Combatant, JobRoles, NpcId, ObjectId, SpellId, Vec3, WorldOracle};

/// In-memory stand-in for the host's object table.
///
/// Tests mutate it between awaits to simulate combatants moving, dying, or
/// casting. Every oracle call is counted so a test can assert that a code
/// path never touched the world.
#[derive(Clone, Default)]
pub struct MockWorld {
    state: Arc<Mutex<State>>,
    queries: Arc<AtomicUsize>,
}

#[derive(Default)]
struct State {
    combatants: Vec<Combatant>,
    target: Option<ObjectId>,
}

impl MockWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `combatant`, replacing any existing entry with the same object
    /// id.
    pub fn insert(&self, combatant: Combatant) {
        let mut state = self.state.lock().unwrap();
        state.combatants.retain(|c| c.id != combatant.id);
        state.combatants.push(combatant);
    }

    pub fn remove(&self, id: ObjectId) {
        self.state.lock().unwrap().combatants.retain(|c| c.id != id);
    }

    /// Sets the agent's hard target.
    pub fn set_target(&self, id: Option<ObjectId>) {
        self.state.lock().unwrap().target = id;
    }

    pub fn set_position(&self, id: ObjectId, position: Vec3) {
        self.update(id, |c| c.position = position);
    }

    pub fn kill(&self, id: ObjectId) {
        self.update(id, |c| c.is_dead = true);
    }

    pub fn set_casting(&self, id: ObjectId, spell: Option<SpellId>) {
        self.update(id, |c| c.casting = spell);
    }

    /// Number of oracle calls served so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn update(&self, id: ObjectId, apply: impl FnOnce(&mut Combatant)) {
        let mut state = self.state.lock().unwrap();
        if let Some(combatant) = state.combatants.iter_mut().find(|c| c.id == id) {
            apply(combatant);
        }
    }
}

impl WorldOracle for MockWorld {
    fn combatants(&self) -> Vec<Combatant> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.state.lock().unwrap().combatants.clone()
    }

    fn player(&self) -> Option<Combatant> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.state
            .lock()
            .unwrap()
            .combatants
            .iter()
            .copied()
            .find(|c| c.is_me)
    }

    fn current_target(&self) -> Option<Combatant> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        state
            .target
            .and_then(|id| state.combatants.iter().copied().find(|c| c.id == id))
    }
}

/// Builder for combatant snapshots with quiet defaults: alive, roleless,
/// standing at the origin, casting nothing.
pub struct CombatantBuilder {
    inner: Combatant,
}

impl CombatantBuilder {
    pub fn new(id: u32, npc_id: u32) -> Self {
        Self {
            inner: Combatant {
                id: ObjectId(id),
                npc_id: NpcId(npc_id),
                position: Vec3::ZERO,
                roles: JobRoles::empty(),
                is_dead: false,
                is_me: false,
                casting: None,
            },
        }
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.inner.position = Vec3::new(x, y, z);
        self
    }

    pub fn roles(mut self, roles: JobRoles) -> Self {
        self.inner.roles = roles;
        self
    }

    pub fn dead(mut self) -> Self {
        self.inner.is_dead = true;
        self
    }

    pub fn me(mut self) -> Self {
        self.inner.is_me = true;
        self
    }

    pub fn casting(mut self, spell: SpellId) -> Self {
        self.inner.casting = Some(spell);
        self
    }

    pub fn build(self) -> Combatant {
        self.inner
    }
}
