//! Attack resolution results.

use crate::state::Side;

/// A successful hit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitReport {
    pub attacker: Side,
    pub move_index: usize,
    pub move_name: String,
    /// Health fraction removed before clamping.
    pub damage: f64,
    /// Defender health after the hit.
    pub defender_health: f64,
    /// PP left on the move after this use.
    pub pp_remaining: u32,
    /// The defender reached zero and the battle is over.
    pub defeated: bool,
}

impl HitReport {
    pub fn defender(&self) -> Side {
        self.attacker.opponent()
    }
}

/// Why an attack was turned into a no-op.
///
/// Rejections never change state and never notify observers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackRejection {
    #[error("the battle is already over")]
    BattleOver,

    #[error("side {attempted} tried to act during side {active}'s turn")]
    OutOfTurn { attempted: Side, active: Side },

    #[error("move index {index} is out of range")]
    InvalidMove { index: usize },

    #[error("no PP left for {name}")]
    NoPp { index: usize, name: String },
}

/// Outcome of [`crate::BattleEngine::attack`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    Hit(HitReport),
    Rejected(AttackRejection),
}

impl AttackResult {
    pub fn is_hit(&self) -> bool {
        matches!(self, AttackResult::Hit(_))
    }

    pub fn hit(&self) -> Option<&HitReport> {
        match self {
            AttackResult::Hit(report) => Some(report),
            AttackResult::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&AttackRejection> {
        match self {
            AttackResult::Hit(_) => None,
            AttackResult::Rejected(reason) => Some(reason),
        }
    }
}

impl From<AttackRejection> for AttackResult {
    fn from(reason: AttackRejection) -> Self {
        AttackResult::Rejected(reason)
    }
}
