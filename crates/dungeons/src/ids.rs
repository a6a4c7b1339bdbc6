//! Duty identifiers for the content this crate scripts.

use strum::{AsRefStr, Display, EnumString, FromRepr};

/// Duties with a scripted routine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DungeonId {
    Sastasha,
    CopperbellMines,
    TheGrandCosmos,
    Paglthan,
    TheMothercrystal,
}

/// Territory ids of the zones those duties run in, as the host reports
/// them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, FromRepr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u16)]
pub enum ZoneId {
    TheGrandCosmos = 884,
    Paglthan = 938,
    TheMothercrystal = 995,
    Sastasha = 1036,
    CopperbellMines = 1038,
}

impl ZoneId {
    /// Zone for a raw territory id, if we script anything there.
    pub fn from_territory(territory: u16) -> Option<Self> {
        Self::from_repr(territory)
    }

    pub fn territory(self) -> u16 {
        self as u16
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn territory_ids_round_trip() {
        assert_eq!(ZoneId::from_territory(1036), Some(ZoneId::Sastasha));
        assert_eq!(ZoneId::from_territory(884), Some(ZoneId::TheGrandCosmos));
        assert_eq!(ZoneId::Sastasha.territory(), 1036);
        assert_eq!(ZoneId::from_territory(1037), None);
    }

    #[test]
    fn names_serialize_snake_case() {
        assert_eq!(ZoneId::TheGrandCosmos.to_string(), "the_grand_cosmos");
        assert_eq!(
            DungeonId::from_str("copperbell_mines").unwrap(),
            DungeonId::CopperbellMines
        );
    }
}
