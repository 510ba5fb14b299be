//! SQLite-backed BattleRepository implementation.

mod schema;

use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use arrayvec::ArrayVec;
use battle_core::{BattleConfig, Combatant, Move, Side};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Transaction, params};

use crate::repository::{BattleRepository, RecordId, RepositoryError, Result, SavedBattle};

/// BattleRepository storing each save as rows in a SQLite database.
///
/// The schema is created on open. Saves run inside one transaction and are
/// rolled back as a whole when any row fails to insert.
pub struct SqliteBattleRepository {
    conn: Mutex<Connection>,
}

impl SqliteBattleRepository {
    /// Open (or create) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }

        let conn = Connection::open(path)?;
        tracing::debug!("Opened battle database at {}", path.display());
        Self::from_connection(conn)
    }

    /// Private database that disappears with the repository.
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    /// Wrap an existing connection, creating the schema if needed.
    pub fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(schema::CREATE_TABLES)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| RepositoryError::LockPoisoned)
    }
}

impl BattleRepository for SqliteBattleRepository {
    fn save(&self, label: &str, turn: Side, a: &Combatant, b: &Combatant) -> Result<RecordId> {
        let mut conn = self.lock()?;
        let saved_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        let tx = conn.transaction()?;
        match insert_battle(&tx, label, turn, &saved_at, a, b) {
            Ok(id) => {
                tx.commit()?;
                tracing::debug!("Saved battle {} ({})", id, label);
                Ok(id)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback() {
                    tracing::warn!("Rollback after failed save also failed: {}", rollback_err);
                }
                tracing::warn!("Save of '{}' rolled back: {}", label, err);
                Err(err)
            }
        }
    }

    fn load_latest(&self) -> Result<SavedBattle> {
        let conn = self.lock()?;

        let game = conn
            .query_row(schema::SELECT_LATEST_GAME, [], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, bool>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })
            .optional()?;
        let Some((game_id, label, turn_a, saved_at)) = game else {
            return Err(RepositoryError::NotFound);
        };

        let saved_at = DateTime::parse_from_rfc3339(&saved_at)
            .map_err(|e| {
                RepositoryError::CorruptedData(format!("bad timestamp on game {game_id}: {e}"))
            })?
            .with_timezone(&Utc);

        let mut combatant_a = None;
        let mut combatant_b = None;

        let mut stmt = conn.prepare(schema::SELECT_COMBATANTS)?;
        let rows = stmt.query_map(params![game_id], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, f64>(3)?,
            ))
        })?;

        for row in rows {
            let (combatant_id, side_label, name, health) = row?;
            let side: Side = side_label.parse().map_err(|_| {
                RepositoryError::CorruptedData(format!(
                    "unknown side {side_label:?} on game {game_id}"
                ))
            })?;

            let moves = load_moves(&conn, combatant_id, &name)?;
            let combatant = Combatant::from_parts(name, health, moves)
                .map_err(|e| RepositoryError::CorruptedData(e.to_string()))?;

            match side {
                Side::A => combatant_a = Some(combatant),
                Side::B => combatant_b = Some(combatant),
            }
        }

        let (Some(combatant_a), Some(combatant_b)) = (combatant_a, combatant_b) else {
            return Err(RepositoryError::CorruptedData(format!(
                "game {game_id} is missing a combatant"
            )));
        };

        tracing::debug!("Loaded battle #{} ({})", game_id, label);

        Ok(SavedBattle {
            id: RecordId(game_id),
            label,
            active_turn: Side::from_turn_flag(turn_a),
            saved_at,
            combatant_a,
            combatant_b,
        })
    }

    fn count(&self) -> Result<usize> {
        let conn = self.lock()?;
        let count = conn.query_row(schema::COUNT_GAMES, [], |row| row.get::<_, i64>(0))?;
        Ok(count as usize)
    }
}

fn insert_battle(
    tx: &Transaction<'_>,
    label: &str,
    turn: Side,
    saved_at: &str,
    a: &Combatant,
    b: &Combatant,
) -> Result<RecordId> {
    tx.execute(schema::INSERT_GAME, params![label, turn.turn_flag(), saved_at])?;
    let game_id = tx.last_insert_rowid();

    for (side, combatant) in [(Side::A, a), (Side::B, b)] {
        tx.execute(
            schema::INSERT_COMBATANT,
            params![game_id, side.to_string(), combatant.name(), combatant.health()],
        )?;
        let combatant_id = tx.last_insert_rowid();

        for (slot, mv) in combatant.moves().iter().enumerate() {
            tx.execute(
                schema::INSERT_MOVE,
                params![
                    combatant_id,
                    slot as i64,
                    mv.name(),
                    mv.pp_current(),
                    mv.pp_max(),
                    mv.power()
                ],
            )?;
        }
    }

    Ok(RecordId(game_id))
}

fn load_moves(
    conn: &Connection,
    combatant_id: i64,
    owner: &str,
) -> Result<[Move; BattleConfig::MOVES_PER_COMBATANT]> {
    let mut stmt = conn.prepare(schema::SELECT_MOVES)?;
    let rows = stmt.query_map(params![combatant_id], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, u32>(1)?,
            row.get::<_, u32>(2)?,
            row.get::<_, f64>(3)?,
        ))
    })?;

    let mut moves = ArrayVec::<Move, { BattleConfig::MOVES_PER_COMBATANT }>::new();
    for row in rows {
        let (name, pp_current, pp_max, power) = row?;
        let mv = Move::from_parts(name, power, pp_current, pp_max)
            .map_err(|e| RepositoryError::CorruptedData(e.to_string()))?;
        moves.try_push(mv).map_err(|_| {
            RepositoryError::CorruptedData(format!(
                "{owner} has more than {} moves",
                BattleConfig::MOVES_PER_COMBATANT
            ))
        })?;
    }

    moves.into_inner().map_err(|partial| {
        RepositoryError::CorruptedData(format!(
            "{owner} has {} moves, expected {}",
            partial.len(),
            BattleConfig::MOVES_PER_COMBATANT
        ))
    })
}
