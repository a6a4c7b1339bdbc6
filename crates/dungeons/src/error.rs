//! Error surface of dungeon routines.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RoutineError>;

#[derive(Debug, Error)]
pub enum RoutineError {
    /// The movement layer refused an operation.
    #[error(transparent)]
    Movement(#[from] movement::MovementError),
}
