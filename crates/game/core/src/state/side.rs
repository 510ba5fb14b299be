use strum::{Display, EnumIter, EnumString};

/// One of the two sides in a battle.
///
/// Side `A` is the human-controlled combatant and always acts first. Side `B`
/// is the opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Position of this side in two-element arrays.
    pub const fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }

    /// Persisted turn flag: `true` means it is side A's turn.
    pub const fn turn_flag(self) -> bool {
        matches!(self, Side::A)
    }

    pub const fn from_turn_flag(flag: bool) -> Self {
        if flag { Side::A } else { Side::B }
    }
}

/// Terminal result of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    pub winner: Side,
}

impl Outcome {
    pub const fn won_by(winner: Side) -> Self {
        Self { winner }
    }

    pub const fn loser(&self) -> Side {
        self.winner.opponent()
    }
}
