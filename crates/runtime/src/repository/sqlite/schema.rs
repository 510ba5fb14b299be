//! Relational layout of saved battles.
//!
//! `saved_games` 1 → 2 `combatants` 1 → 4 `moves`. Child rows cascade with
//! their parent.

pub(super) const CREATE_TABLES: &str = "
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS saved_games (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    label    TEXT    NOT NULL,
    turn_a   INTEGER NOT NULL,
    saved_at TEXT    NOT NULL
);

CREATE TABLE IF NOT EXISTS combatants (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    game_id INTEGER NOT NULL REFERENCES saved_games(id) ON DELETE CASCADE,
    side    TEXT    NOT NULL CHECK (side IN ('A', 'B')),
    name    TEXT    NOT NULL,
    health  REAL    NOT NULL,
    UNIQUE (game_id, side)
);

CREATE TABLE IF NOT EXISTS moves (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    combatant_id INTEGER NOT NULL REFERENCES combatants(id) ON DELETE CASCADE,
    slot         INTEGER NOT NULL,
    name         TEXT    NOT NULL,
    pp_current   INTEGER NOT NULL,
    pp_max       INTEGER NOT NULL,
    power        REAL    NOT NULL,
    UNIQUE (combatant_id, slot)
);

CREATE INDEX IF NOT EXISTS saved_games_latest ON saved_games (saved_at, id);
";

pub(super) const INSERT_GAME: &str =
    "INSERT INTO saved_games (label, turn_a, saved_at) VALUES (?1, ?2, ?3)";

pub(super) const INSERT_COMBATANT: &str =
    "INSERT INTO combatants (game_id, side, name, health) VALUES (?1, ?2, ?3, ?4)";

pub(super) const INSERT_MOVE: &str = "INSERT INTO moves \
     (combatant_id, slot, name, pp_current, pp_max, power) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

pub(super) const SELECT_LATEST_GAME: &str = "SELECT id, label, turn_a, saved_at FROM saved_games \
     ORDER BY saved_at DESC, id DESC LIMIT 1";

pub(super) const SELECT_COMBATANTS: &str =
    "SELECT id, side, name, health FROM combatants WHERE game_id = ?1 ORDER BY side";

pub(super) const SELECT_MOVES: &str = "SELECT name, pp_current, pp_max, power FROM moves \
     WHERE combatant_id = ?1 ORDER BY slot";

pub(super) const COUNT_GAMES: &str = "SELECT COUNT(*) FROM saved_games";
