//! Error surface of the movement layer.
//!
//! Absence of a qualifying combatant is never an error here; selectors
//! return `None` and spread operations simply register nothing. Errors are
//! reserved for misuse of the controller itself.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MovementError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MovementError {
    /// Another spread operation already holds the movement lease. The caller
    /// should let the running operation finish rather than retry.
    #[error("another spread operation is already driving the agent")]
    LeaseHeld,
}
