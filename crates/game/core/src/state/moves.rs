use super::RestoreError;
use crate::config::BattleConfig;

/// An attack option with a damage value and a consumable use count (PP).
///
/// `pp_current` always stays within `0..=pp_max`. It only moves through
/// [`Move::consume`] and [`Move::reset`] once the move is in play.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    name: String,
    power: f64,
    pp_current: u32,
    pp_max: u32,
}

impl Move {
    /// Creates a move at full PP.
    ///
    /// `pp_max` must be positive; callers outside the crate go through
    /// [`crate::MoveSpec::build`] or [`Move::from_parts`], which validate it.
    pub(crate) fn new(name: impl Into<String>, power: f64, pp_max: u32) -> Self {
        debug_assert!(pp_max > 0, "move must have positive max PP");
        Self {
            name: name.into(),
            power,
            pp_current: pp_max,
            pp_max,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn pp_current(&self) -> u32 {
        self.pp_current
    }

    pub fn pp_max(&self) -> u32 {
        self.pp_max
    }

    pub fn is_depleted(&self) -> bool {
        self.pp_current == 0
    }

    /// Health fraction removed from the defender by one use.
    pub fn damage(&self) -> f64 {
        self.power / BattleConfig::POWER_SCALE
    }

    /// Spends one PP. Returns `false` and leaves the move untouched when
    /// it is already depleted.
    pub fn consume(&mut self) -> bool {
        if self.pp_current == 0 {
            return false;
        }
        self.pp_current -= 1;
        true
    }

    /// Restores PP to the maximum.
    pub fn reset(&mut self) {
        self.pp_current = self.pp_max;
    }

    /// Copy of this move with a different current PP, if it fits the range.
    pub(crate) fn with_pp_current(&self, pp_current: u32) -> Option<Self> {
        (pp_current <= self.pp_max).then(|| Self {
            pp_current,
            ..self.clone()
        })
    }

    /// Rebuilds a move from persisted fields, checking the PP invariant.
    pub fn from_parts(
        name: impl Into<String>,
        power: f64,
        pp_current: u32,
        pp_max: u32,
    ) -> Result<Self, RestoreError> {
        let name = name.into();
        let reason = if pp_max == 0 {
            Some("max PP must be positive")
        } else if pp_current > pp_max {
            Some("current PP exceeds max PP")
        } else if !power.is_finite() || power < 0.0 {
            Some("power must be a non-negative number")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(RestoreError::InvalidMove { name, reason }),
            None => Ok(Self {
                name,
                power,
                pp_current,
                pp_max,
            }),
        }
    }
}
