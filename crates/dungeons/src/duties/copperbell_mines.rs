use crate::ids::{DungeonId, ZoneId};
use crate::routine::DungeonRoutine;

/// Copperbell Mines, lv. 17.
pub struct CopperbellMines;

impl DungeonRoutine for CopperbellMines {
    fn dungeon_id(&self) -> DungeonId {
        DungeonId::CopperbellMines
    }

    fn zone_id(&self) -> ZoneId {
        ZoneId::CopperbellMines
    }
}
