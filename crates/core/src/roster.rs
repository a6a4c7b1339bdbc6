use std::collections::HashSet;

use crate::ids::NpcId;

/// NPC identities the agent recognizes as its current duty party.
///
/// Two tiers mirror how duty support parties are declared: the *safe* tier is
/// the members worth sticking to when dodging (they reliably resolve
/// mechanics), while the *broad* tier is everyone in the party, including
/// members that wander. Broad is always a superset of safe.
#[derive(Clone, Debug, Default)]
pub struct PartyRoster {
    safe: HashSet<NpcId>,
    broad: HashSet<NpcId>,
}

impl PartyRoster {
    /// Builds a roster from explicit tiers. Safe ids are folded into the
    /// broad tier so the superset invariant holds regardless of input.
    pub fn new(
        safe: impl IntoIterator<Item = NpcId>,
        broad: impl IntoIterator<Item = NpcId>,
    ) -> Self {
        let safe: HashSet<NpcId> = safe.into_iter().collect();
        let mut broad: HashSet<NpcId> = broad.into_iter().collect();
        broad.extend(safe.iter().copied());
        Self { safe, broad }
    }

    /// Roster where every member is safe to stick to.
    pub fn from_members(members: impl IntoIterator<Item = NpcId>) -> Self {
        let safe: HashSet<NpcId> = members.into_iter().collect();
        Self {
            broad: safe.clone(),
            safe,
        }
    }

    pub fn is_safe_member(&self, id: NpcId) -> bool {
        self.safe.contains(&id)
    }

    pub fn is_member(&self, id: NpcId) -> bool {
        self.broad.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.broad.len()
    }

    pub fn is_empty(&self) -> bool {
        self.broad.is_empty()
    }
}
