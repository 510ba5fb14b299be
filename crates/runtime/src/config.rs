//! Runtime configuration read from the environment.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use battle_core::BattleConfig;
use directories::ProjectDirs;

/// Label used for database saves when none is configured.
pub const DEFAULT_SAVE_LABEL: &str = "Manual save";

const DB_FILE_NAME: &str = "battles.sqlite3";
const SAVE_FILE_NAME: &str = "battle.sav";

/// Backend behind the battle repository.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StorageKind {
    #[default]
    Sqlite,
    Memory,
}

impl FromStr for StorageKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "sqlite" | "db" => Ok(StorageKind::Sqlite),
            "memory" | "mem" => Ok(StorageKind::Memory),
            other => Err(format!("unknown storage backend '{other}'")),
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StorageKind::Sqlite => "sqlite",
            StorageKind::Memory => "memory",
        };
        write!(f, "{}", label)
    }
}

/// Settings for a [`BattleSession`](crate::BattleSession).
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    pub storage: StorageKind,
    pub database_path: PathBuf,
    pub save_file_path: PathBuf,
    /// RON roster to load instead of the built-in one.
    pub roster_path: Option<PathBuf>,
    /// Fixed seed for the opponent's move picks; entropy when unset.
    pub seed: Option<u64>,
    pub save_label: String,
    /// Let the opponent respond right after every player attack.
    pub opponent_auto: bool,
    pub battle: BattleConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            storage: StorageKind::default(),
            database_path: data_dir.join(DB_FILE_NAME),
            save_file_path: data_dir.join(SAVE_FILE_NAME),
            roster_path: None,
            seed: None,
            save_label: DEFAULT_SAVE_LABEL.to_string(),
            opponent_auto: true,
            battle: BattleConfig::default(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_STORAGE`: `sqlite` or `memory` (default: sqlite)
    /// - `BATTLE_DB_PATH`: SQLite database file
    /// - `BATTLE_SAVE_FILE`: flat save file
    /// - `BATTLE_ROSTER`: RON roster file (default: built-in roster)
    /// - `BATTLE_SEED`: u64 seed for the opponent's picks
    /// - `BATTLE_SAVE_LABEL`: label for database saves (default: "Manual save")
    /// - `BATTLE_OPPONENT_AUTO`: opponent answers every attack (default: true)
    /// - `BATTLE_OPPONENT_DRAWS`: draws before the opponent gives up (default: 10)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup("BATTLE_STORAGE") {
            match value.parse() {
                Ok(storage) => config.storage = storage,
                Err(reason) => {
                    tracing::warn!("Ignoring BATTLE_STORAGE: {}", reason);
                }
            }
        }

        if let Some(path) = lookup("BATTLE_DB_PATH").filter(|v| !v.is_empty()) {
            config.database_path = PathBuf::from(path);
        }

        if let Some(path) = lookup("BATTLE_SAVE_FILE").filter(|v| !v.is_empty()) {
            config.save_file_path = PathBuf::from(path);
        }

        config.roster_path = lookup("BATTLE_ROSTER")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        config.seed = lookup("BATTLE_SEED").and_then(|v| v.trim().parse().ok());

        if let Some(label) = lookup("BATTLE_SAVE_LABEL").filter(|v| !v.trim().is_empty()) {
            config.save_label = label;
        }

        if let Some(auto) = lookup("BATTLE_OPPONENT_AUTO").and_then(|v| parse_bool(&v)) {
            config.opponent_auto = auto;
        }

        if let Some(draws) = lookup("BATTLE_OPPONENT_DRAWS").and_then(|v| v.trim().parse().ok()) {
            config.battle = BattleConfig::with_opponent_draw_limit(draws);
        }

        config
    }

    /// Keep everything in memory: no database file and no save file on disk.
    pub fn in_memory() -> Self {
        Self {
            storage: StorageKind::Memory,
            ..Self::default()
        }
    }
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", "battle")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
