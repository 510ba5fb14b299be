//! Public runtime API surface.
//!
//! Types exposed to consumers of the runtime crate: the error type and the
//! reports returned by a battle session.

pub mod errors;
pub mod report;

pub use errors::{Result, RuntimeError};
pub use report::{OpponentTurn, RoundReport};
