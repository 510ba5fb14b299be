//! Roster loader.
//!
//! Loads the two combatants and their moves from RON files.

use std::path::Path;

use battle_core::Roster;

use crate::loaders::{LoadResult, read_file};

/// Roster shipped with the game.
const BUILTIN_ROSTER: &str = include_str!("../../data/roster.ron");

/// Loader for roster definitions from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    ///
    /// RON format: `(a: CombatantSpec, b: CombatantSpec)`
    ///
    /// The roster is validated by building it once, so a file with the wrong
    /// number of moves or a zero max PP fails here rather than mid-battle.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid roster {}: {}", path.display(), e))
    }

    /// Parse and validate a roster from RON text.
    pub fn parse(content: &str) -> LoadResult<Roster> {
        let roster: Roster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        roster.build_state()?;

        Ok(roster)
    }

    /// The built-in roster embedded at compile time.
    pub fn builtin() -> LoadResult<Roster> {
        Self::parse(BUILTIN_ROSTER)
    }
}
