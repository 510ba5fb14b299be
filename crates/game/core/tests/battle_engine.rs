use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use battle_core::{
    AttackRejection, AttackResult, BattleConfig, BattleEngine, BattleSnapshot, BattleState,
    Combatant, CombatantSpec, MoveSpec, PcgRng, RestoreError, RngOracle, Roster, SaveSlot, Side,
};

/// RNG replaying a fixed list of values, then repeating the last one.
struct ScriptedRng {
    values: VecDeque<u32>,
    last: u32,
    draws: Rc<RefCell<u32>>,
}

impl ScriptedRng {
    fn new(values: &[u32]) -> Self {
        Self {
            values: values.iter().copied().collect(),
            last: values.last().copied().unwrap_or(0),
            draws: Rc::new(RefCell::new(0)),
        }
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        *self.draws.borrow_mut() += 1;
        match self.values.pop_front() {
            Some(value) => {
                self.last = value;
                value
            }
            None => self.last,
        }
    }
}

fn roster() -> Roster {
    Roster::new(
        CombatantSpec::new(
            "Mega Charizard",
            vec![
                MoveSpec::new("Llamarada", 20.0, 2),
                MoveSpec::new("Garra Dragon", 12.0, 6),
                MoveSpec::new("Acrobata", 11.0, 7),
                MoveSpec::new("Lanzallamas", 8.0, 10),
            ],
        ),
        CombatantSpec::new(
            "Mega Lucario",
            vec![
                MoveSpec::new("Abocajarro", 25.0, 3),
                MoveSpec::new("Patada Alta", 12.0, 5),
                MoveSpec::new("Puno Certero", 10.0, 7),
                MoveSpec::new("Esfera Aural", 5.0, 6),
            ],
        ),
    )
}

fn engine() -> BattleEngine {
    BattleEngine::from_roster(&roster(), PcgRng::seeded(7)).unwrap()
}

fn engine_with_rng<R: RngOracle>(rng: R) -> BattleEngine<R> {
    BattleEngine::from_roster(&roster(), rng).unwrap()
}

/// Engine whose side B starts at the given health.
fn engine_with_b_health(health: f64) -> BattleEngine {
    let fresh = roster().build_state().unwrap();
    let a = fresh.combatant(Side::A).clone();
    let b = fresh.combatant(Side::B);
    let b = Combatant::from_parts(b.name(), health, b.moves().clone()).unwrap();
    let state = BattleState::from_parts(a, b, Side::A).unwrap();
    BattleEngine::new(state, PcgRng::seeded(7))
}

fn assert_invariants(state: &BattleState) {
    for combatant in state.combatants() {
        assert!((0.0..=1.0).contains(&combatant.health()));
        for mv in combatant.moves() {
            assert!(mv.pp_current() <= mv.pp_max());
        }
    }
}

#[test]
fn fresh_battle_starts_with_side_a() {
    let engine = engine();
    let state = engine.state();
    assert_eq!(state.active_turn(), Side::A);
    assert!(!state.is_over());
    assert_eq!(state.combatant(Side::A).health(), 1.0);
    assert_eq!(state.combatant(Side::B).health(), 1.0);
    for combatant in state.combatants() {
        for mv in combatant.moves() {
            assert_eq!(mv.pp_current(), mv.pp_max());
        }
    }
}

#[test]
fn power_twenty_takes_defender_to_eighty_percent() {
    let mut engine = engine();

    let result = engine.attack(Side::A, 0);

    let hit = result.hit().expect("attack should land");
    assert_eq!(hit.defender(), Side::B);
    assert_eq!(hit.defender_health, 0.80);
    assert_eq!(hit.pp_remaining, 1);
    assert!(!hit.defeated);
    assert_eq!(engine.state().combatant(Side::B).health(), 0.80);
    assert_eq!(engine.state().active_turn(), Side::B);
}

#[test]
fn low_health_defender_is_clamped_to_zero() {
    let mut engine = engine_with_b_health(0.08);

    let hit = engine.attack(Side::A, 0).hit().cloned().unwrap();

    assert_eq!(hit.defender_health, 0.0);
    assert!(hit.defeated);
    assert_eq!(engine.state().combatant(Side::B).health(), 0.0);
}

#[test]
fn defeat_ends_battle_without_flipping_turn() {
    let mut engine = engine_with_b_health(0.08);

    engine.attack(Side::A, 0);

    let state = engine.state();
    assert!(state.is_over());
    assert_eq!(state.outcome().unwrap().winner, Side::A);
    assert_eq!(state.active_turn(), Side::A);

    let before = engine.state().clone();
    assert_eq!(
        engine.attack(Side::A, 1),
        AttackResult::Rejected(AttackRejection::BattleOver)
    );
    assert_eq!(
        engine.attack(Side::B, 1),
        AttackResult::Rejected(AttackRejection::BattleOver)
    );
    assert_eq!(engine.state(), &before);
}

#[test]
fn move_with_two_pp_is_exhausted_after_two_uses() {
    let mut engine = engine();

    assert!(engine.attack(Side::A, 0).is_hit());
    assert!(engine.attack(Side::B, 3).is_hit());
    assert!(engine.attack(Side::A, 0).is_hit());
    assert!(engine.attack(Side::B, 3).is_hit());
    assert_eq!(engine.state().combatant(Side::A).moves()[0].pp_current(), 0);

    let result = engine.attack(Side::A, 0);
    assert!(matches!(
        result,
        AttackResult::Rejected(AttackRejection::NoPp { index: 0, .. })
    ));
    assert_eq!(engine.state().combatant(Side::A).moves()[0].pp_current(), 0);
}

#[test]
fn depleted_move_leaves_state_unchanged() {
    let mut engine = engine();
    engine.attack(Side::A, 0);
    engine.attack(Side::B, 3);
    engine.attack(Side::A, 0);
    engine.attack(Side::B, 3);

    let before = engine.state().clone();
    let result = engine.attack(Side::A, 0);

    assert!(result.rejection().is_some());
    assert_eq!(engine.state(), &before);

    // Idempotent: repeating the no-op changes nothing either.
    engine.attack(Side::A, 0);
    assert_eq!(engine.state(), &before);
}

#[test]
fn out_of_range_index_is_rejected() {
    let mut engine = engine();
    let before = engine.state().clone();

    assert_eq!(
        engine.attack(Side::A, 4),
        AttackResult::Rejected(AttackRejection::InvalidMove { index: 4 })
    );
    assert_eq!(engine.state(), &before);
}

#[test]
fn acting_out_of_turn_is_rejected() {
    let mut engine = engine();
    let before = engine.state().clone();

    assert_eq!(
        engine.attack(Side::B, 0),
        AttackResult::Rejected(AttackRejection::OutOfTurn {
            attempted: Side::B,
            active: Side::A,
        })
    );
    assert_eq!(engine.state(), &before);
}

#[test]
fn reset_matches_fresh_battle() {
    let mut engine = engine_with_b_health(0.08);
    engine.attack(Side::A, 0);
    assert!(engine.state().is_over());

    engine.reset_battle();

    assert_eq!(engine.state(), &roster().build_state().unwrap());
}

#[test]
fn reset_mid_battle_matches_fresh_battle() {
    let mut engine = engine();
    engine.attack(Side::A, 1);
    engine.attack(Side::B, 0);
    engine.attack(Side::A, 2);

    engine.reset_battle();

    assert_eq!(engine.state(), engine_with_rng(PcgRng::default()).state());
}

#[test]
fn observers_receive_one_snapshot_per_hit() {
    let mut engine = engine();
    let received: Rc<RefCell<Vec<BattleSnapshot>>> = Rc::default();
    let sink = Rc::clone(&received);
    engine.subscribe(move |snapshot: &BattleSnapshot| sink.borrow_mut().push(snapshot.clone()));

    engine.attack(Side::A, 0);
    engine.attack(Side::A, 0); // out of turn, no notification

    let received = received.borrow();
    assert_eq!(received.len(), 1);
    let snapshot = &received[0];
    assert_eq!(snapshot.combatant(Side::B).health_percent, 80);
    assert_eq!(snapshot.combatant(Side::A).moves[0].pp_current, 1);
    assert_eq!(snapshot.combatant(Side::A).moves[0].pp_max, 2);
    assert_eq!(snapshot.active_turn, Side::B);
    assert_eq!(snapshot.turn_label, "Turn of Mega Lucario");
    assert!(snapshot.game_over.is_none());
}

#[test]
fn game_over_snapshot_names_the_winner() {
    let mut engine = engine_with_b_health(0.08);
    let received: Rc<RefCell<Vec<BattleSnapshot>>> = Rc::default();
    let sink = Rc::clone(&received);
    engine.subscribe(move |snapshot: &BattleSnapshot| sink.borrow_mut().push(snapshot.clone()));

    engine.attack(Side::A, 0);

    let snapshot = received.borrow().last().cloned().unwrap();
    let over = snapshot.game_over.as_ref().expect("battle should be over");
    assert_eq!(over.winner, Side::A);
    assert_eq!(over.winner_name, "Mega Charizard");
    assert_eq!(over.loser_name, "Mega Lucario");
    assert_eq!(snapshot.turn_label, "Mega Lucario has been defeated!");
    assert_eq!(snapshot.combatant(Side::B).health_percent, 0);
}

#[test]
fn channel_observer_forwards_snapshots() {
    let mut engine = engine();
    let (tx, rx) = std::sync::mpsc::channel();
    engine.subscribe(tx);

    engine.attack(Side::A, 2);
    engine.reset_battle();

    let first = rx.try_recv().unwrap();
    assert_eq!(first.combatant(Side::B).health_percent, 89);
    let second = rx.try_recv().unwrap();
    assert_eq!(second.combatant(Side::B).health_percent, 100);
    assert!(rx.try_recv().is_err());
}

#[test]
fn random_opponent_attack_uses_scripted_pick() {
    let mut engine = engine_with_rng(ScriptedRng::new(&[2]));
    engine.attack(Side::A, 3);

    let result = engine.random_opponent_attack().expect("opponent should act");

    let hit = result.hit().unwrap();
    assert_eq!(hit.attacker, Side::B);
    assert_eq!(hit.move_index, 2);
    assert_eq!(hit.move_name, "Puno Certero");
    assert_eq!(engine.state().active_turn(), Side::A);
}

#[test]
fn random_opponent_attack_is_deterministic_for_a_seed() {
    let play = |seed: u64| {
        let mut engine = engine_with_rng(PcgRng::seeded(seed));
        let mut picks = Vec::new();
        for _ in 0..4 {
            engine.attack(Side::A, 3);
            let result = engine.random_opponent_attack().unwrap();
            picks.push(result.hit().unwrap().move_index);
        }
        picks
    };

    assert_eq!(play(1234), play(1234));
}

#[test]
fn random_opponent_attack_redraws_past_depleted_moves() {
    // Slots 0..=2 empty, slot 3 usable. Nine draws land on empty slots, the
    // tenth reaches slot 3.
    let script = [0, 1, 2, 0, 1, 2, 0, 1, 2, 3];
    let rng = ScriptedRng::new(&script);
    let draws = Rc::clone(&rng.draws);
    let mut engine = engine_with_rng(rng);
    let slot = SaveSlot {
        health: [1.0, 1.0],
        active_turn: Side::B,
        pp: [[2, 6, 7, 10], [0, 0, 0, 6]],
    };
    engine.apply_save_slot(&slot).unwrap();

    let result = engine.random_opponent_attack().expect("tenth draw is usable");

    assert_eq!(result.hit().unwrap().move_index, 3);
    assert_eq!(*draws.borrow(), 10);
}

#[test]
fn random_opponent_attack_gives_up_after_draw_limit() {
    // The script never reaches the usable slot within ten draws.
    let rng = ScriptedRng::new(&[0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 3]);
    let draws = Rc::clone(&rng.draws);
    let mut engine = engine_with_rng(rng);
    let slot = SaveSlot {
        health: [1.0, 1.0],
        active_turn: Side::B,
        pp: [[2, 6, 7, 10], [0, 0, 0, 6]],
    };
    engine.apply_save_slot(&slot).unwrap();
    let before = engine.state().clone();

    assert!(engine.random_opponent_attack().is_none());
    assert_eq!(*draws.borrow(), BattleConfig::DEFAULT_OPPONENT_DRAW_LIMIT);
    assert_eq!(engine.state(), &before);
}

#[test]
fn random_attack_out_of_turn_draws_nothing() {
    let rng = ScriptedRng::new(&[0, 1, 2, 3]);
    let draws = Rc::clone(&rng.draws);
    let mut engine = engine_with_rng(rng);
    let before = engine.state().clone();

    assert!(engine.random_opponent_attack().is_none());
    assert!(engine.random_attack(Side::B).is_none());
    assert_eq!(*draws.borrow(), 0);
    assert_eq!(engine.state(), &before);

    let result = engine.random_attack(Side::A).expect("A is on turn");
    assert_eq!(result.hit().unwrap().move_index, 0);
    assert_eq!(*draws.borrow(), 1);
}

#[test]
fn pass_turn_hands_control_back_without_touching_pp() {
    let mut engine = engine();
    engine.attack(Side::A, 3);
    let pp_before = engine.save_slot().pp;

    engine.pass_turn(Side::B).unwrap();

    assert_eq!(engine.state().active_turn(), Side::A);
    assert_eq!(engine.save_slot().pp, pp_before);
    assert_eq!(
        engine.pass_turn(Side::B),
        Err(AttackRejection::OutOfTurn {
            attempted: Side::B,
            active: Side::A,
        })
    );
}

#[test]
fn pass_turn_is_rejected_once_battle_is_over() {
    let mut engine = engine_with_b_health(0.08);
    engine.attack(Side::A, 0);

    assert_eq!(engine.pass_turn(Side::A), Err(AttackRejection::BattleOver));
}

#[test]
fn random_opponent_attack_does_nothing_after_defeat() {
    let mut engine = engine_with_b_health(0.08);
    engine.attack(Side::A, 0);
    let before = engine.state().clone();

    assert!(engine.random_opponent_attack().is_none());
    assert_eq!(engine.state(), &before);
}

#[test]
fn apply_save_slot_restores_progress() {
    let mut engine = engine();
    let slot = SaveSlot {
        health: [0.45, 0.3],
        active_turn: Side::B,
        pp: [[1, 2, 3, 4], [0, 5, 6, 1]],
    };

    engine.apply_save_slot(&slot).unwrap();

    assert_eq!(engine.save_slot(), slot);
    assert!(!engine.state().is_over());
}

#[test]
fn apply_save_slot_with_zero_health_ends_battle() {
    let mut engine = engine();
    let slot = SaveSlot {
        health: [0.0, 0.5],
        active_turn: Side::A,
        pp: [[1, 2, 3, 4], [0, 5, 6, 1]],
    };

    engine.apply_save_slot(&slot).unwrap();

    assert_eq!(engine.state().outcome().unwrap().winner, Side::B);
}

#[test]
fn invalid_save_slot_leaves_engine_unchanged() {
    let mut engine = engine();
    engine.attack(Side::A, 1);
    let before = engine.state().clone();

    let too_much_pp = SaveSlot {
        health: [1.0, 1.0],
        active_turn: Side::A,
        pp: [[3, 6, 7, 10], [3, 5, 7, 6]],
    };
    assert_eq!(
        engine.apply_save_slot(&too_much_pp),
        Err(RestoreError::PpOutOfRange {
            side: Side::A,
            slot: 0,
            value: 3,
            max: 2,
        })
    );
    assert_eq!(engine.state(), &before);

    let bad_health = SaveSlot {
        health: [1.0, 1.2],
        active_turn: Side::A,
        pp: [[2, 6, 7, 10], [3, 5, 7, 6]],
    };
    assert!(matches!(
        engine.apply_save_slot(&bad_health),
        Err(RestoreError::HealthOutOfRange { .. })
    ));
    assert_eq!(engine.state(), &before);

    let both_down = SaveSlot {
        health: [0.0, 0.0],
        active_turn: Side::A,
        pp: [[0, 0, 0, 0], [0, 0, 0, 0]],
    };
    assert_eq!(
        engine.apply_save_slot(&both_down),
        Err(RestoreError::BothDefeated)
    );
    assert_eq!(engine.state(), &before);
}

#[test]
fn invariants_hold_through_random_play() {
    for seed in 0..50 {
        let mut engine = engine_with_rng(PcgRng::seeded(seed));
        let mut picker = PcgRng::seeded(seed.wrapping_mul(31).wrapping_add(1));

        for _ in 0..200 {
            if engine.state().is_over() {
                break;
            }
            let side = engine.state().active_turn();
            match side {
                Side::A => {
                    let index = picker.pick_index(5);
                    engine.attack(Side::A, index);
                }
                Side::B => {
                    if engine.random_opponent_attack().is_none() {
                        // Draw limit hit; nothing else can change this battle.
                        break;
                    }
                }
            }
            assert_invariants(engine.state());
        }
        assert_invariants(engine.state());
    }
}
