//! Data-driven content definitions and loaders.
//!
//! This crate houses the static battle content and provides loaders for RON
//! data files:
//! - Roster (the two combatants and their move sets)
//!
//! Content is turned into battle state by `battle-core` and never changes
//! during a battle.
//!
//! All loaders deserialize RON straight into battle-core types through its `serde` feature.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, RosterLoader};
