use crate::combatant::Combatant;

/// Read-only window into the host's live object table.
///
/// The host owns the authoritative world state; this trait is the narrow
/// slice the spread logic needs from it. Implementations must answer from the
/// current tick's data and never block. Tests substitute an in-memory fake.
pub trait WorldOracle: Send + Sync {
    /// Every battle character currently loaded, the agent included.
    /// Order is whatever the host's object table yields.
    fn combatants(&self) -> Vec<Combatant>;

    /// The controlled agent's own character, if it is loaded.
    fn player(&self) -> Option<Combatant>;

    /// The agent's current hard target, if any.
    fn current_target(&self) -> Option<Combatant>;
}
