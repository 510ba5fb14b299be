//! Panels composing the battle screen.
pub mod combatant;
pub mod footer;
pub mod header;
pub mod messages;
pub mod moves;
