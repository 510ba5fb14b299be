//! Narration of battle events as log messages.

use std::fmt::Display;

use battle_core::{AttackRejection, AttackResult, BattleSnapshot, HitReport, Side};
use battle_runtime::{OpponentTurn, RoundReport};

use crate::config::MessageConfig;
use crate::message::MessageEntry;

/// Messages describing one player round, in the order things happened.
pub fn round_messages(
    report: &RoundReport,
    snapshot: &BattleSnapshot,
    round: u32,
    config: &MessageConfig,
) -> Vec<MessageEntry> {
    let mut messages = Vec::new();
    push_attack(&mut messages, &report.player, snapshot, config);
    if report.player_passed {
        let player = &snapshot.combatant(Side::A).name;
        messages.push(MessageEntry::warning(format!(
            "{player} has no PP left and passes."
        )));
    }

    if let Some(turn) = &report.opponent {
        push_opponent(&mut messages, turn, snapshot, config);
    }

    messages.into_iter().map(|m| m.in_round(round)).collect()
}

/// Messages for an opponent turn taken outside a player round.
pub fn opponent_messages(
    turn: &OpponentTurn,
    snapshot: &BattleSnapshot,
    config: &MessageConfig,
) -> Vec<MessageEntry> {
    let mut messages = Vec::new();
    push_opponent(&mut messages, turn, snapshot, config);
    messages
}

/// Messages for a single attack result.
pub fn attack_messages(
    result: &AttackResult,
    snapshot: &BattleSnapshot,
    config: &MessageConfig,
) -> Vec<MessageEntry> {
    let mut messages = Vec::new();
    push_attack(&mut messages, result, snapshot, config);
    messages
}

pub fn hit_text(hit: &HitReport, snapshot: &BattleSnapshot) -> String {
    let attacker = &snapshot.combatant(hit.attacker).name;
    let defender = &snapshot.combatant(hit.defender()).name;
    let percent = (hit.defender_health * 100.0).round().clamp(0.0, 100.0) as u8;
    format!(
        "{attacker} used {}! {defender} is at {percent}%.",
        hit.move_name
    )
}

pub fn rejection_text(rejection: &AttackRejection) -> String {
    match rejection {
        AttackRejection::BattleOver => "The battle is over. Reset to play again.".to_string(),
        AttackRejection::OutOfTurn { .. } => "Wait for your turn.".to_string(),
        AttackRejection::InvalidMove { index } => format!("There is no move {}.", index + 1),
        AttackRejection::NoPp { name, .. } => format!("{name} has no PP left!"),
    }
}

/// `"<action> failed: <reason>"` as an error entry.
pub fn failure(action: &str, err: &impl Display) -> MessageEntry {
    MessageEntry::error(format!("{action} failed: {err}"))
}

fn push_opponent(
    messages: &mut Vec<MessageEntry>,
    turn: &OpponentTurn,
    snapshot: &BattleSnapshot,
    config: &MessageConfig,
) {
    match turn {
        OpponentTurn::Attacked(result) => push_attack(messages, result, snapshot, config),
        OpponentTurn::Passed => {
            let opponent = &snapshot.combatant(Side::B).name;
            messages.push(MessageEntry::warning(format!(
                "{opponent} could not pick a move and passes."
            )));
        }
    }
}

fn push_attack(
    messages: &mut Vec<MessageEntry>,
    result: &AttackResult,
    snapshot: &BattleSnapshot,
    config: &MessageConfig,
) {
    match result {
        AttackResult::Hit(hit) => {
            messages.push(MessageEntry::info(hit_text(hit, snapshot)));
            if hit.defeated {
                let defender = &snapshot.combatant(hit.defender()).name;
                messages.push(MessageEntry::info(format!("{defender} has been defeated!")));
            }
        }
        AttackResult::Rejected(rejection) if config.show_rejections => {
            messages.push(MessageEntry::warning(rejection_text(rejection)));
        }
        AttackResult::Rejected(_) => {}
    }
}
