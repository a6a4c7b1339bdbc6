//! Scripted duty routines for the supported dungeons and trials.
//!
//! Each duty implements [`DungeonRoutine`] and is dispatched by zone through
//! a [`DungeonRegistry`]. The shared dodge-by-following behavior lives in
//! [`dodge`]; spread mechanics come from the `movement` crate via the
//! [`RoutineContext`] handed to every run.
pub mod context;
pub mod dodge;
pub mod duties;
pub mod error;
pub mod ids;
pub mod registry;
pub mod routine;

pub use context::RoutineContext;
pub use error::{Result, RoutineError};
pub use ids::{DungeonId, ZoneId};
pub use registry::DungeonRegistry;
pub use routine::DungeonRoutine;
