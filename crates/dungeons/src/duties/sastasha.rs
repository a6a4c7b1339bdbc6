use crate::ids::{DungeonId, ZoneId};
use crate::routine::DungeonRoutine;

/// Sastasha, the lv. 15 opener of A Realm Reborn.
pub struct Sastasha;

impl DungeonRoutine for Sastasha {
    fn dungeon_id(&self) -> DungeonId {
        DungeonId::Sastasha
    }

    fn zone_id(&self) -> ZoneId {
        ZoneId::Sastasha
    }
}
