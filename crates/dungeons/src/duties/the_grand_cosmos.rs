use crate::ids::{DungeonId, ZoneId};
use crate::routine::DungeonRoutine;

/// The Grand Cosmos, the lv. 80 dungeon of Shadowbringers patch 5.1.
pub struct TheGrandCosmos;

impl DungeonRoutine for TheGrandCosmos {
    fn dungeon_id(&self) -> DungeonId {
        DungeonId::TheGrandCosmos
    }

    fn zone_id(&self) -> ZoneId {
        ZoneId::TheGrandCosmos
    }
}
