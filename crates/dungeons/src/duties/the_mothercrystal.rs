use crate::ids::{DungeonId, ZoneId};
use crate::routine::DungeonRoutine;

/// The Mothercrystal, the lv. 89 solo trial of Endwalker.
pub struct TheMothercrystal;

impl DungeonRoutine for TheMothercrystal {
    fn dungeon_id(&self) -> DungeonId {
        DungeonId::TheMothercrystal
    }

    fn zone_id(&self) -> ZoneId {
        ZoneId::TheMothercrystal
    }
}
