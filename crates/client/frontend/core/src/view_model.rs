//! View-model derived from [`battle_core::BattleSnapshot`].
//!
//! Everything a frontend draws is computed here, so renderers only lay out
//! strings and flags.

use battle_core::{BattleConfig, BattleSnapshot, CombatantView, GameOver, MoveView, Side};

/// Side driven by the human player.
pub const PLAYER_SIDE: Side = Side::A;

/// One move as a clickable/pressable button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveButton {
    /// `NAME (PP: cur/max)`
    pub label: String,
    pub enabled: bool,
    pub pp_current: u32,
    pub pp_max: u32,
}

impl MoveButton {
    fn from_move(mv: &MoveView, actionable: bool) -> Self {
        Self {
            label: format!("{} (PP: {}/{})", mv.name, mv.pp_current, mv.pp_max),
            enabled: actionable && mv.pp_current > 0,
            pp_current: mv.pp_current,
            pp_max: mv.pp_max,
        }
    }
}

/// Name, health and moves of one combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatantPanel {
    pub side: Side,
    pub name: String,
    pub health_percent: u8,
    /// `NN%`
    pub health_label: String,
    /// It is this combatant's turn and the battle is running.
    pub active: bool,
    pub defeated: bool,
    pub moves: [MoveButton; BattleConfig::MOVES_PER_COMBATANT],
}

impl CombatantPanel {
    fn from_view(view: &CombatantView, snapshot: &BattleSnapshot) -> Self {
        let running = !snapshot.is_over();
        let active = running && snapshot.active_turn == view.side;
        let actionable = active && view.side == PLAYER_SIDE;

        Self {
            side: view.side,
            name: view.name.clone(),
            health_percent: view.health_percent,
            health_label: format!("{}%", view.health_percent),
            active,
            defeated: snapshot
                .game_over
                .as_ref()
                .is_some_and(|over| over.winner != view.side),
            moves: std::array::from_fn(|slot| MoveButton::from_move(&view.moves[slot], actionable)),
        }
    }
}

/// Presentation-ready battle screen.
#[derive(Clone, Debug, PartialEq)]
pub struct BattleView {
    pub combatants: [CombatantPanel; BattleConfig::SIDES],
    /// "Turn of NAME" or "NAME has been defeated!"
    pub turn_label: String,
    pub game_over: Option<GameOver>,
}

impl BattleView {
    pub fn from_snapshot(snapshot: &BattleSnapshot) -> Self {
        Self {
            combatants: [Side::A, Side::B]
                .map(|side| CombatantPanel::from_view(snapshot.combatant(side), snapshot)),
            turn_label: snapshot.turn_label.clone(),
            game_over: snapshot.game_over.clone(),
        }
    }

    pub fn combatant(&self, side: Side) -> &CombatantPanel {
        &self.combatants[side.index()]
    }

    pub fn player(&self) -> &CombatantPanel {
        self.combatant(PLAYER_SIDE)
    }

    pub fn opponent(&self) -> &CombatantPanel {
        self.combatant(PLAYER_SIDE.opponent())
    }

    /// The player's move buttons.
    pub fn buttons(&self) -> &[MoveButton; BattleConfig::MOVES_PER_COMBATANT] {
        &self.player().moves
    }

    pub fn is_player_turn(&self) -> bool {
        self.player().active
    }

    pub fn is_over(&self) -> bool {
        self.game_over.is_some()
    }
}
