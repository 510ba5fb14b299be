use std::cell::RefCell;
use std::rc::Rc;

use battle_content::RosterLoader;
use battle_core::{
    AttackRejection, BattleEngine, BattleSnapshot, Combatant, RngOracle, SaveSlot, Side,
};
use battle_runtime::{
    BattleRepository, BattleSession, FlatFileSave, InMemoryBattleRepository, InMemorySlotRepo,
    OpponentTurn, RecordId, RepositoryError, RuntimeConfig, RuntimeError, SavedBattle,
    SlotRepository,
};
use battle_runtime::repository::Result as RepoResult;
use tempfile::TempDir;

/// Always picks the same move slot.
struct FixedPick(u32);

impl RngOracle for FixedPick {
    fn next_u32(&mut self) -> u32 {
        self.0
    }
}

/// Repository whose every call fails.
struct BrokenRepository;

impl BattleRepository for BrokenRepository {
    fn save(&self, _: &str, _: Side, _: &Combatant, _: &Combatant) -> RepoResult<RecordId> {
        Err(RepositoryError::Io(std::io::Error::other("disk unplugged")))
    }

    fn load_latest(&self) -> RepoResult<SavedBattle> {
        Err(RepositoryError::Io(std::io::Error::other("disk unplugged")))
    }

    fn count(&self) -> RepoResult<usize> {
        Ok(0)
    }
}

fn session_with(
    pick: u32,
    repository: impl BattleRepository + 'static,
    save_file: impl SlotRepository + 'static,
) -> BattleSession<FixedPick> {
    let state = RosterLoader::builtin().unwrap().build_state().unwrap();
    BattleSession::new(
        BattleEngine::new(state, FixedPick(pick)),
        Box::new(repository),
        Box::new(save_file),
    )
}

fn session(pick: u32) -> BattleSession<FixedPick> {
    session_with(pick, InMemoryBattleRepository::new(), InMemorySlotRepo::new())
}

// ============================================================================
// Rounds
// ============================================================================

#[test]
fn round_is_player_hit_then_opponent_answer() {
    let mut session = session(3);

    let report = session.play_round(0);

    let player = report.player_hit().expect("player hit");
    assert_eq!(player.move_name, "Llamarada");
    let opponent = report.opponent_hit().expect("opponent answered");
    assert_eq!(opponent.move_name, "Esfera Aural");

    let snapshot = session.snapshot();
    assert_eq!(snapshot.combatant(Side::B).health_percent, 80);
    assert_eq!(snapshot.combatant(Side::A).health_percent, 95);
    assert_eq!(snapshot.active_turn, Side::A);
}

#[test]
fn rejected_player_attack_gets_no_answer() {
    let mut session = session(3);

    let report = session.play_round(9);

    assert_eq!(
        report.player.rejection(),
        Some(&AttackRejection::InvalidMove { index: 9 })
    );
    assert!(report.opponent.is_none());
    assert_eq!(session.engine().state().active_turn(), Side::A);
}

#[test]
fn manual_opponent_waits_to_be_triggered() {
    let mut session = session(1).with_opponent_auto(false);

    let report = session.play_round(3);
    assert!(report.opponent.is_none());
    assert!(session.opponent_pending());

    let turn = session.opponent_turn().expect("opponent acts");
    assert!(matches!(turn, OpponentTurn::Attacked(ref result) if result.is_hit()));
    assert!(!session.opponent_pending());
}

#[test]
fn opponent_without_pp_passes_the_turn() {
    let slots = InMemorySlotRepo::new();
    slots
        .write(&SaveSlot {
            health: [1.0, 1.0],
            active_turn: Side::A,
            pp: [[2, 6, 7, 10], [0, 0, 0, 0]],
        })
        .unwrap();
    let mut session = session_with(0, InMemoryBattleRepository::new(), slots);
    session.load_from_file().unwrap();

    let report = session.play_round(3);

    assert_eq!(report.opponent, Some(OpponentTurn::Passed));
    assert_eq!(session.engine().state().active_turn(), Side::A);
    assert_eq!(session.engine().save_slot().pp[1], [0, 0, 0, 0]);
    assert!(session.play_round(3).player.is_hit());
}

fn session_with_slot(pick: u32, slot: SaveSlot) -> BattleSession<FixedPick> {
    let slots = InMemorySlotRepo::new();
    slots.write(&slot).unwrap();
    let mut session = session_with(pick, InMemoryBattleRepository::new(), slots);
    session.load_from_file().unwrap();
    session
}

#[test]
fn player_without_pp_passes_and_opponent_answers() {
    let mut session = session_with_slot(
        3,
        SaveSlot {
            health: [0.5, 1.0],
            active_turn: Side::A,
            pp: [[0, 0, 0, 0], [3, 5, 7, 6]],
        },
    );

    let report = session.play_round(0);

    assert!(report.player_passed);
    assert_eq!(
        report.player.rejection(),
        Some(&AttackRejection::NoPp {
            index: 0,
            name: "Llamarada".into()
        })
    );
    let opponent = report.opponent_hit().expect("opponent answered");
    assert_eq!(opponent.move_name, "Esfera Aural");
    assert_eq!(session.snapshot().active_turn, Side::A);
    assert_eq!(session.snapshot().combatant(Side::A).health_percent, 45);
}

#[test]
fn player_with_pp_left_does_not_pass() {
    let mut session = session_with_slot(
        3,
        SaveSlot {
            health: [1.0, 1.0],
            active_turn: Side::A,
            pp: [[0, 6, 7, 10], [3, 5, 7, 6]],
        },
    );

    let report = session.play_round(0);

    assert!(!report.player_passed);
    assert!(report.opponent.is_none());
    assert_eq!(session.snapshot().active_turn, Side::A);
}

#[test]
fn manual_opponent_is_pending_after_player_pass() {
    let mut session = session_with_slot(
        3,
        SaveSlot {
            health: [1.0, 1.0],
            active_turn: Side::A,
            pp: [[0, 0, 0, 0], [3, 5, 7, 6]],
        },
    )
    .with_opponent_auto(false);

    let report = session.play_round(2);

    assert!(report.player_passed);
    assert!(report.opponent.is_none());
    assert!(session.opponent_pending());
}

#[test]
fn no_answer_once_opponent_is_defeated() {
    let slots = InMemorySlotRepo::new();
    slots
        .write(&SaveSlot {
            health: [1.0, 0.1],
            active_turn: Side::A,
            pp: [[2, 6, 7, 10], [3, 5, 7, 6]],
        })
        .unwrap();
    let mut session = session_with(0, InMemoryBattleRepository::new(), slots);
    session.load_from_file().unwrap();

    let report = session.play_round(0);

    assert!(report.player_hit().unwrap().defeated);
    assert!(report.opponent.is_none());
    let snapshot = session.snapshot();
    assert_eq!(snapshot.game_over.unwrap().winner, Side::A);
    assert_eq!(snapshot.turn_label, "Mega Lucario has been defeated!");
}

#[test]
fn observers_see_both_halves_of_a_round() {
    let mut session = session(2);
    let seen: Rc<RefCell<Vec<BattleSnapshot>>> = Rc::default();
    let sink = Rc::clone(&seen);
    session.subscribe(move |snapshot: &BattleSnapshot| sink.borrow_mut().push(snapshot.clone()));

    session.play_round(1);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].turn_label, "Turn of Mega Lucario");
    assert_eq!(seen[1].turn_label, "Turn of Mega Charizard");
}

#[test]
fn reset_restores_fresh_battle() {
    let mut session = session(0);
    session.play_round(0);
    session.play_round(1);

    session.reset();

    let fresh = RosterLoader::builtin().unwrap().build_state().unwrap();
    assert_eq!(session.engine().state(), &fresh);
}

// ============================================================================
// Database persistence
// ============================================================================

#[test]
fn database_round_trip_restores_battle() {
    let mut session = session(3);
    session.play_round(0);
    session.play_round(2);
    let before = session.engine().state().clone();

    let id = session.save().unwrap();
    session.reset();
    let saved = session.load_latest().unwrap();

    assert_eq!(saved.id, id);
    assert_eq!(saved.label, "Manual save");
    assert_eq!(session.engine().state(), &before);
    assert_eq!(session.saved_battle_count().unwrap(), 1);
}

#[test]
fn custom_label_is_stored() {
    let session = session(0).with_save_label("Before the finale");
    session.save().unwrap();
    session.save_as("Checkpoint").unwrap();

    let mut session = session;
    assert_eq!(session.load_latest().unwrap().label, "Checkpoint");
}

#[test]
fn loading_from_empty_database_keeps_current_battle() {
    let mut session = session(3);
    session.play_round(0);
    let before = session.engine().state().clone();

    let err = session.load_latest().unwrap_err();

    assert!(matches!(
        err,
        RuntimeError::Repository(RepositoryError::NotFound)
    ));
    assert_eq!(session.engine().state(), &before);
}

#[test]
fn database_failures_are_surfaced() {
    let mut session = session_with(3, BrokenRepository, InMemorySlotRepo::new());
    session.play_round(0);
    let before = session.engine().state().clone();

    assert!(matches!(
        session.save(),
        Err(RuntimeError::Repository(RepositoryError::Io(_)))
    ));
    assert!(session.load_latest().is_err());
    assert_eq!(session.engine().state(), &before);
}

#[test]
fn resume_lets_opponent_finish_a_saved_turn() {
    let mut session = session(3).with_opponent_auto(false);
    session.play_round(0);
    session.save().unwrap();

    let mut session = session.with_opponent_auto(true);
    session.reset();
    session.load_latest().unwrap();
    assert!(session.opponent_pending());

    assert!(matches!(
        session.resume(),
        Some(OpponentTurn::Attacked(_))
    ));
    assert_eq!(session.engine().state().active_turn(), Side::A);
}

// ============================================================================
// Flat-file persistence
// ============================================================================

#[test]
fn file_round_trip_restores_health_turn_and_pp() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("battle.sav");
    let mut session = session_with(3, InMemoryBattleRepository::new(), FlatFileSave::new(&path))
        .with_opponent_auto(false);
    session.play_round(0);
    session.opponent_turn();
    session.play_round(2);
    let before = session.engine().save_slot();
    assert_eq!(before.active_turn, Side::B);

    session.save_to_file().unwrap();
    session.reset();
    session.load_from_file().unwrap();

    assert_eq!(session.engine().save_slot(), before);
}

#[test]
fn malformed_file_leaves_battle_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("battle.sav");
    std::fs::write(&path, "0.5\n0.5\ntrue\n1\n").unwrap();
    let mut session = session_with(3, InMemoryBattleRepository::new(), FlatFileSave::new(&path));
    session.play_round(0);
    let before = session.engine().state().clone();

    let err = session.load_from_file().unwrap_err();

    assert!(matches!(
        err,
        RuntimeError::Repository(RepositoryError::Malformed { line: 5, .. })
    ));
    assert_eq!(session.engine().state(), &before);
}

#[test]
fn file_pp_above_roster_max_is_rejected() {
    let slots = InMemorySlotRepo::new();
    slots
        .write(&SaveSlot {
            health: [0.5, 0.5],
            active_turn: Side::A,
            pp: [[3, 6, 7, 10], [3, 5, 7, 6]],
        })
        .unwrap();
    let mut session = session_with(0, InMemoryBattleRepository::new(), slots);
    let before = session.engine().state().clone();

    assert!(matches!(
        session.load_from_file(),
        Err(RuntimeError::Restore(_))
    ));
    assert_eq!(session.engine().state(), &before);
}

#[test]
fn missing_file_reports_not_found() {
    let dir = TempDir::new().unwrap();
    let mut session = session_with(
        0,
        InMemoryBattleRepository::new(),
        FlatFileSave::new(dir.path().join("none.sav")),
    );

    assert!(matches!(
        session.load_from_file(),
        Err(RuntimeError::Repository(RepositoryError::NotFound))
    ));
}

// ============================================================================
// Builder
// ============================================================================

#[test]
fn builder_uses_builtin_roster_and_config() {
    let mut config = RuntimeConfig::in_memory();
    config.seed = Some(5);
    config.save_label = "Quick".into();

    let mut session = BattleSession::builder().config(config).build().unwrap();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.combatant(Side::A).name, "Mega Charizard");
    assert_eq!(snapshot.combatant(Side::B).name, "Mega Lucario");

    session.play_round(3);
    session.save().unwrap();
    assert_eq!(session.load_latest().unwrap().label, "Quick");
}

#[test]
fn builder_loads_roster_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.ron");
    std::fs::write(
        &path,
        r#"(
            a: (name: "Left", moves: [
                (name: "A1", power: 50.0, pp_max: 1),
                (name: "A2", power: 10.0, pp_max: 1),
                (name: "A3", power: 10.0, pp_max: 1),
                (name: "A4", power: 10.0, pp_max: 1),
            ]),
            b: (name: "Right", moves: [
                (name: "B1", power: 5.0, pp_max: 2),
                (name: "B2", power: 5.0, pp_max: 2),
                (name: "B3", power: 5.0, pp_max: 2),
                (name: "B4", power: 5.0, pp_max: 2),
            ]),
        )"#,
    )
    .unwrap();
    let mut config = RuntimeConfig::in_memory();
    config.roster_path = Some(path);

    let session = BattleSession::builder()
        .config(config)
        .build_with_rng(FixedPick(0))
        .unwrap();

    assert_eq!(session.snapshot().combatant(Side::A).name, "Left");
}

#[test]
fn builder_reports_unreadable_roster() {
    let dir = TempDir::new().unwrap();
    let mut config = RuntimeConfig::in_memory();
    config.roster_path = Some(dir.path().join("missing.ron"));

    let result = BattleSession::builder().config(config).build();

    assert!(matches!(result, Err(RuntimeError::RosterLoad(_))));
}
