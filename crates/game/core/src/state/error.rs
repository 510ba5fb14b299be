//! Errors raised when rebuilding state from persisted data.

use super::Side;

/// A persisted battle could not be turned back into valid state.
///
/// Returned before anything is mutated, so a failed restore leaves the
/// engine exactly as it was.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RestoreError {
    #[error("move '{name}' is invalid: {reason}")]
    InvalidMove { name: String, reason: &'static str },

    #[error("health {value} of '{name}' is outside [0, 1]")]
    HealthOutOfRange { name: String, value: f64 },

    #[error("PP {value} for move {slot} of side {side} exceeds max {max}")]
    PpOutOfRange {
        side: Side,
        slot: usize,
        value: u32,
        max: u32,
    },

    #[error("both combatants are defeated")]
    BothDefeated,
}
