//! Battle screen state driven by key actions.
use std::sync::mpsc::{self, Receiver};

use battle_core::{BattleSnapshot, RngOracle};
use battle_runtime::{BattleSession, EntropyRng, RepositoryError, RuntimeError};
use client_frontend_core::{
    BattleView, FrontendConfig, MessageConfig, MessageEntry, MessageLog,
    format::{failure, opponent_messages, round_messages},
};

use crate::input::KeyAction;

/// Whether the event loop keeps going after an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Session, latest view and message log of the running battle.
pub struct AppState<R: RngOracle = EntropyRng> {
    session: BattleSession<R>,
    updates: Receiver<BattleSnapshot>,
    view: BattleView,
    messages: MessageLog,
    message_config: MessageConfig,
    round: u32,
}

impl<R: RngOracle> AppState<R> {
    pub fn new(mut session: BattleSession<R>, config: &FrontendConfig) -> Self {
        let (tx, updates) = mpsc::channel::<BattleSnapshot>();
        session.subscribe(tx);

        let snapshot = session.snapshot();
        let mut messages = MessageLog::new(config.messages.capacity);
        messages.push_text(format!(
            "{} vs {}! Press 1-4 to attack.",
            snapshot.combatants[0].name, snapshot.combatants[1].name
        ));

        Self {
            session,
            updates,
            view: BattleView::from_snapshot(&snapshot),
            messages,
            message_config: config.messages.clone(),
            round: 0,
        }
    }

    pub fn view(&self) -> &BattleView {
        &self.view
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// Completed player rounds since the last reset.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn opponent_auto(&self) -> bool {
        self.session.opponent_auto()
    }

    /// Apply pending engine notifications. Returns true when the view changed.
    pub fn sync(&mut self) -> bool {
        let Some(latest) = self.updates.try_iter().last() else {
            return false;
        };
        self.view = BattleView::from_snapshot(&latest);
        true
    }

    pub fn handle(&mut self, action: KeyAction) -> Flow {
        match action {
            KeyAction::Quit => {
                tracing::info!("Quit requested after {} rounds", self.round);
                return Flow::Quit;
            }
            KeyAction::Attack(slot) => self.attack(slot),
            KeyAction::OpponentMove => self.opponent_move(),
            KeyAction::SaveDatabase => self.save_database(),
            KeyAction::LoadDatabase => self.load_database(),
            KeyAction::SaveFile => self.save_file(),
            KeyAction::LoadFile => self.load_file(),
            KeyAction::Reset => self.reset(),
            KeyAction::None => {}
        }

        self.sync();
        Flow::Continue
    }

    fn attack(&mut self, slot: usize) {
        let round = self.round + 1;
        let report = self.session.play_round(slot);
        if report.player.is_hit() {
            self.round = round;
        }

        let snapshot = self.session.snapshot();
        self.messages.extend(round_messages(
            &report,
            &snapshot,
            round,
            &self.message_config,
        ));
    }

    fn opponent_move(&mut self) {
        match self.session.opponent_turn() {
            Some(turn) => {
                let snapshot = self.session.snapshot();
                self.messages
                    .extend(opponent_messages(&turn, &snapshot, &self.message_config));
            }
            None if self.view.is_over() => {}
            None => self
                .messages
                .push(MessageEntry::warning("It is not the opponent's turn.")),
        }
    }

    /// Runs the opponent's pending turn after a restore, if any.
    fn resume(&mut self) {
        if let Some(turn) = self.session.resume() {
            let snapshot = self.session.snapshot();
            self.messages
                .extend(opponent_messages(&turn, &snapshot, &self.message_config));
        }
    }

    fn save_database(&mut self) {
        match self.session.save() {
            Ok(id) => self.messages.push_text(format!("Battle saved ({id}).")),
            Err(e) => self.messages.push(failure("Save", &e)),
        }
    }

    pub fn load_database(&mut self) {
        match self.session.load_latest() {
            Ok(saved) => {
                self.messages
                    .push_text(format!("Loaded '{}' ({}).", saved.label, saved.id));
                self.resume();
            }
            Err(e) if is_not_found(&e) => {
                self.messages
                    .push(MessageEntry::warning("No saved battle yet."));
            }
            Err(e) => self.messages.push(failure("Load", &e)),
        }
    }

    fn save_file(&mut self) {
        match self.session.save_to_file() {
            Ok(()) => self.messages.push_text("Progress written to the save file."),
            Err(e) => self.messages.push(failure("File save", &e)),
        }
    }

    fn load_file(&mut self) {
        match self.session.load_from_file() {
            Ok(()) => {
                self.messages.push_text("Progress loaded from the save file.");
                self.resume();
            }
            Err(e) if is_not_found(&e) => {
                self.messages.push(MessageEntry::warning("No save file yet."));
            }
            Err(e) => self.messages.push(failure("File load", &e)),
        }
    }

    fn reset(&mut self) {
        self.session.reset();
        self.round = 0;
        self.messages.push_text("A new battle begins!");
    }
}

fn is_not_found(err: &RuntimeError) -> bool {
    matches!(err, RuntimeError::Repository(RepositoryError::NotFound))
}
