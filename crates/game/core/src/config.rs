/// Battle rule constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Number of random draws the opponent makes before giving up on finding
    /// a move with PP left.
    pub opponent_draw_limit: u32,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Every combatant carries exactly this many moves.
    pub const MOVES_PER_COMBATANT: usize = 4;
    /// Number of sides in a battle.
    pub const SIDES: usize = 2;

    /// Health at or below this value after a hit is treated as zero.
    pub const HEALTH_EPSILON: f64 = 1e-9;

    /// Divisor turning a move's power into a health fraction.
    pub const POWER_SCALE: f64 = 100.0;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_OPPONENT_DRAW_LIMIT: u32 = 10;

    pub fn new() -> Self {
        Self {
            opponent_draw_limit: Self::DEFAULT_OPPONENT_DRAW_LIMIT,
        }
    }

    pub fn with_opponent_draw_limit(opponent_draw_limit: u32) -> Self {
        Self {
            opponent_draw_limit,
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
