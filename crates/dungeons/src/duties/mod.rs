//! The shipped duty routines.
//!
//! These are intentionally thin: zone coverage plus the shared follow-dodge
//! default. Bespoke per-boss logic belongs in [`run`] overrides as each
//! duty's mechanics get charted.
//!
//! [`run`]: crate::routine::DungeonRoutine::run

mod copperbell_mines;
mod paglthan;
mod sastasha;
mod the_grand_cosmos;
mod the_mothercrystal;

pub use copperbell_mines::CopperbellMines;
pub use paglthan::Paglthan;
pub use sastasha::Sastasha;
pub use the_grand_cosmos::TheGrandCosmos;
pub use the_mothercrystal::TheMothercrystal;
