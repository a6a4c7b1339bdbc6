use bitflags::bitflags;

bitflags! {
    /// Role classification of a combatant's current job.
    ///
    /// Flags combine: a dragoon carries `DPS | MELEE`, a paladin just `TANK`.
    /// An empty set means the job has no combat role (chocobo, quest NPC).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct JobRoles: u8 {
        const TANK   = 1 << 0;
        const HEALER = 1 << 1;
        const DPS    = 1 << 2;
        const MELEE  = 1 << 3;
    }
}
