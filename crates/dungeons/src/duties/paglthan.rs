use crate::ids::{DungeonId, ZoneId};
use crate::routine::DungeonRoutine;

/// Paglth'an, the lv. 80 finale dungeon of Shadowbringers patch 5.5.
pub struct Paglthan;

impl DungeonRoutine for Paglthan {
    fn dungeon_id(&self) -> DungeonId {
        DungeonId::Paglthan
    }

    fn zone_id(&self) -> ZoneId {
        ZoneId::Paglthan
    }
}
