use super::{Combatant, Outcome, RestoreError, Side};

/// Canonical snapshot of a battle: both combatants and the turn cursor.
///
/// A fresh battle has both sides at full health and full PP with side A to
/// move. The battle is over once either combatant's health reaches zero.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    combatants: [Combatant; 2],
    active_turn: Side,
    outcome: Option<Outcome>,
}

impl BattleState {
    /// Creates a fresh battle. Both combatants are reset to full health and PP.
    pub fn new(mut a: Combatant, mut b: Combatant) -> Self {
        a.reset();
        b.reset();
        Self {
            combatants: [a, b],
            active_turn: Side::A,
            outcome: None,
        }
    }

    /// Rebuilds a battle mid-fight from persisted combatants.
    ///
    /// The outcome is derived from the healths: a combatant at zero has lost.
    pub fn from_parts(a: Combatant, b: Combatant, active_turn: Side) -> Result<Self, RestoreError> {
        let outcome = derive_outcome(&a, &b)?;
        Ok(Self {
            combatants: [a, b],
            active_turn,
            outcome,
        })
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub(crate) fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        &mut self.combatants[side.index()]
    }

    pub fn combatants(&self) -> &[Combatant; 2] {
        &self.combatants
    }

    pub fn active_turn(&self) -> Side {
        self.active_turn
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub(crate) fn flip_turn(&mut self) {
        self.active_turn = self.active_turn.opponent();
    }

    pub(crate) fn finish(&mut self, winner: Side) {
        self.outcome = Some(Outcome::won_by(winner));
    }

    /// Re-derives the outcome after fields were replaced wholesale.
    pub(crate) fn refresh_outcome(&mut self) -> Result<(), RestoreError> {
        let [a, b] = &self.combatants;
        self.outcome = derive_outcome(a, b)?;
        Ok(())
    }

    pub(crate) fn set_active_turn(&mut self, side: Side) {
        self.active_turn = side;
    }

    /// Full health, full PP, side A to move, outcome cleared.
    pub fn reset(&mut self) {
        for combatant in &mut self.combatants {
            combatant.reset();
        }
        self.active_turn = Side::A;
        self.outcome = None;
    }
}

fn derive_outcome(a: &Combatant, b: &Combatant) -> Result<Option<Outcome>, RestoreError> {
    match (a.is_defeated(), b.is_defeated()) {
        (true, true) => Err(RestoreError::BothDefeated),
        (true, false) => Ok(Some(Outcome::won_by(Side::B))),
        (false, true) => Ok(Some(Outcome::won_by(Side::A))),
        (false, false) => Ok(None),
    }
}
