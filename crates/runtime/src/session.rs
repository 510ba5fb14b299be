//! Battle session orchestration.
//!
//! A [`BattleSession`] owns the engine and its persistence collaborators. It
//! turns a player's move choice into a full round (player hit, then the
//! opponent's automatic answer) and moves battles in and out of storage.

use std::path::Path;

use battle_content::RosterLoader;
use battle_core::{
    AttackResult, BattleEngine, BattleObserver, BattleSnapshot, RngOracle, Roster, Side,
};

use crate::api::{OpponentTurn, Result, RoundReport, RuntimeError};
use crate::config::{DEFAULT_SAVE_LABEL, RuntimeConfig, StorageKind};
use crate::repository::{
    BattleRepository, FlatFileSave, InMemoryBattleRepository, InMemorySlotRepo, RecordId,
    SavedBattle, SlotRepository,
};
use crate::rng::EntropyRng;

/// One running battle plus where it is saved.
pub struct BattleSession<R = EntropyRng> {
    engine: BattleEngine<R>,
    repository: Box<dyn BattleRepository>,
    save_file: Box<dyn SlotRepository>,
    save_label: String,
    opponent_auto: bool,
}

impl BattleSession<EntropyRng> {
    /// Create a new session builder
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }
}

impl<R: RngOracle> BattleSession<R> {
    pub fn new(
        engine: BattleEngine<R>,
        repository: Box<dyn BattleRepository>,
        save_file: Box<dyn SlotRepository>,
    ) -> Self {
        Self {
            engine,
            repository,
            save_file,
            save_label: DEFAULT_SAVE_LABEL.to_string(),
            opponent_auto: true,
        }
    }

    pub fn with_save_label(mut self, label: impl Into<String>) -> Self {
        self.save_label = label.into();
        self
    }

    pub fn with_opponent_auto(mut self, enabled: bool) -> Self {
        self.opponent_auto = enabled;
        self
    }

    pub fn engine(&self) -> &BattleEngine<R> {
        &self.engine
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        self.engine.snapshot()
    }

    pub fn subscribe(&mut self, observer: impl BattleObserver + 'static) {
        self.engine.subscribe(observer);
    }

    pub fn opponent_auto(&self) -> bool {
        self.opponent_auto
    }

    /// True while the battle waits on side B.
    pub fn opponent_pending(&self) -> bool {
        let state = self.engine.state();
        !state.is_over() && state.active_turn() == Side::B
    }

    /// Player attacks with side A's move at `move_index`; when that lands and
    /// the opponent is still standing, the opponent answers at once.
    ///
    /// A player left with no PP on any move passes instead, so the battle
    /// keeps going.
    pub fn play_round(&mut self, move_index: usize) -> RoundReport {
        let player = self.engine.attack(Side::A, move_index);
        self.log_attack(&player);

        let player_passed = self.player_out_of_moves() && self.engine.pass_turn(Side::A).is_ok();
        if player_passed {
            tracing::warn!("Player has no PP left on any move; passing the turn");
        }

        let opponent = if self.opponent_auto && (player.is_hit() || player_passed) {
            self.opponent_turn()
        } else {
            None
        };

        RoundReport {
            player,
            player_passed,
            opponent,
        }
    }

    fn player_out_of_moves(&self) -> bool {
        let state = self.engine.state();
        !state.is_over()
            && state.active_turn() == Side::A
            && state
                .combatant(Side::A)
                .moves()
                .iter()
                .all(|mv| mv.is_depleted())
    }

    /// Lets side B act if it is its turn.
    ///
    /// When the bounded random draw finds nothing, B passes and the turn
    /// returns to A.
    pub fn opponent_turn(&mut self) -> Option<OpponentTurn> {
        if !self.opponent_pending() {
            return None;
        }

        match self.engine.random_opponent_attack() {
            Some(result) => {
                self.log_attack(&result);
                Some(OpponentTurn::Attacked(result))
            }
            None => {
                tracing::warn!("Opponent found no move with PP left; passing the turn");
                match self.engine.pass_turn(Side::B) {
                    Ok(()) => Some(OpponentTurn::Passed),
                    Err(reason) => {
                        tracing::debug!("Opponent could not pass: {}", reason);
                        None
                    }
                }
            }
        }
    }

    /// Lets a restored battle continue when it was saved on the opponent's
    /// turn. Does nothing unless automatic responses are on.
    pub fn resume(&mut self) -> Option<OpponentTurn> {
        if self.opponent_auto {
            self.opponent_turn()
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.engine.reset_battle();
        tracing::info!("Battle reset");
    }

    /// Save to the battle repository under the configured label.
    pub fn save(&self) -> Result<RecordId> {
        self.save_as(&self.save_label)
    }

    pub fn save_as(&self, label: &str) -> Result<RecordId> {
        let state = self.engine.state();
        let id = self
            .repository
            .save(
                label,
                state.active_turn(),
                state.combatant(Side::A),
                state.combatant(Side::B),
            )
            .inspect_err(|e| tracing::warn!("Database save failed: {}", e))?;

        tracing::info!("Saved battle {} as '{}'", id, label);
        Ok(id)
    }

    /// Replace the current battle with the most recent saved one.
    ///
    /// The engine is untouched when loading or validation fails.
    pub fn load_latest(&mut self) -> Result<SavedBattle> {
        let saved = self
            .repository
            .load_latest()
            .inspect_err(|e| tracing::warn!("Database load failed: {}", e))?;
        let state = saved.clone().into_state()?;

        if let Ok(json) = saved.to_json() {
            tracing::debug!("Restoring saved battle:\n{}", json);
        }

        self.engine.restore_state(state);
        tracing::info!("Loaded battle {} ('{}')", saved.id, saved.label);
        Ok(saved)
    }

    pub fn saved_battle_count(&self) -> Result<usize> {
        Ok(self.repository.count()?)
    }

    /// Write the compact progress record to the save file.
    pub fn save_to_file(&self) -> Result<()> {
        self.save_file
            .write(&self.engine.save_slot())
            .inspect_err(|e| tracing::warn!("File save failed: {}", e))?;
        tracing::info!("Saved battle progress to file");
        Ok(())
    }

    /// Apply the save file's progress record to the current combatants.
    ///
    /// The engine is untouched when reading or validation fails.
    pub fn load_from_file(&mut self) -> Result<()> {
        let slot = self
            .save_file
            .read()
            .inspect_err(|e| tracing::warn!("File load failed: {}", e))?;
        self.engine.apply_save_slot(&slot)?;
        tracing::info!("Loaded battle progress from file");
        Ok(())
    }

    fn log_attack(&self, result: &AttackResult) {
        match result {
            AttackResult::Hit(hit) => {
                let state = self.engine.state();
                tracing::debug!(
                    "{} used {} for {:.2}, {} at {:.2}",
                    state.combatant(hit.attacker).name(),
                    hit.move_name,
                    hit.damage,
                    state.combatant(hit.defender()).name(),
                    hit.defender_health
                );
                if hit.defeated {
                    tracing::info!(
                        "Battle over: {} defeated {}",
                        state.combatant(hit.attacker).name(),
                        state.combatant(hit.defender()).name()
                    );
                }
            }
            AttackResult::Rejected(reason) => {
                tracing::debug!("Attack rejected: {}", reason);
            }
        }
    }
}

/// Builder for [`BattleSession`].
///
/// Anything not provided explicitly is derived from the [`RuntimeConfig`].
pub struct SessionBuilder {
    config: RuntimeConfig,
    roster: Option<Roster>,
    repository: Option<Box<dyn BattleRepository>>,
    save_file: Option<Box<dyn SlotRepository>>,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            roster: None,
            repository: None,
            save_file: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Use this roster instead of the configured or built-in one
    pub fn roster(mut self, roster: Roster) -> Self {
        self.roster = Some(roster);
        self
    }

    pub fn repository(mut self, repository: impl BattleRepository + 'static) -> Self {
        self.repository = Some(Box::new(repository));
        self
    }

    pub fn save_file(mut self, save_file: impl SlotRepository + 'static) -> Self {
        self.save_file = Some(Box::new(save_file));
        self
    }

    /// Build with `rand`'s generator, seeded from the config when set.
    pub fn build(self) -> Result<BattleSession<EntropyRng>> {
        let rng = EntropyRng::from_seed_option(self.config.seed);
        self.build_with_rng(rng)
    }

    pub fn build_with_rng<R: RngOracle>(self, rng: R) -> Result<BattleSession<R>> {
        let roster = match self.roster {
            Some(roster) => roster,
            None => load_roster(self.config.roster_path.as_deref())?,
        };
        let state = roster.build_state()?;
        let engine = BattleEngine::with_config(state, self.config.battle.clone(), rng);

        let repository = match self.repository {
            Some(repository) => repository,
            None => open_repository(&self.config)?,
        };
        let save_file = self
            .save_file
            .unwrap_or_else(|| default_save_file(&self.config));

        tracing::info!(
            "Battle session ready: {} vs {} ({} storage)",
            engine.state().combatant(Side::A).name(),
            engine.state().combatant(Side::B).name(),
            self.config.storage
        );

        Ok(BattleSession::new(engine, repository, save_file)
            .with_save_label(self.config.save_label)
            .with_opponent_auto(self.config.opponent_auto))
    }
}

fn load_roster(path: Option<&Path>) -> Result<Roster> {
    let loaded = match path {
        Some(path) => RosterLoader::load(path),
        None => RosterLoader::builtin(),
    };
    loaded.map_err(|e| RuntimeError::RosterLoad(format!("{e:#}")))
}

fn open_repository(config: &RuntimeConfig) -> Result<Box<dyn BattleRepository>> {
    match config.storage {
        StorageKind::Memory => Ok(Box::new(InMemoryBattleRepository::new())),
        #[cfg(feature = "sqlite")]
        StorageKind::Sqlite => Ok(Box::new(crate::repository::SqliteBattleRepository::open(
            &config.database_path,
        )?)),
        #[cfg(not(feature = "sqlite"))]
        StorageKind::Sqlite => Err(RuntimeError::StorageUnavailable("sqlite")),
    }
}

fn default_save_file(config: &RuntimeConfig) -> Box<dyn SlotRepository> {
    match config.storage {
        StorageKind::Memory => Box::new(InMemorySlotRepo::new()),
        StorageKind::Sqlite => Box::new(FlatFileSave::new(&config.save_file_path)),
    }
}
