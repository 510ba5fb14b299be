//! Flat-file SlotRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::Lines;

use battle_core::{BattleConfig, SaveSlot, Side};

use crate::repository::{RepositoryError, Result, SlotRepository};

/// Plain-text save file holding one [`SaveSlot`].
///
/// # File Format
///
/// One value per line, in this order:
/// 1. health of side A (`0.0..=1.0`)
/// 2. health of side B
/// 3. turn flag, `true` when it is side A's turn
/// 4. PP of side A's four moves, one per line
/// 5. PP of side B's four moves, one per line
///
/// The format carries no version marker.
pub struct FlatFileSave {
    path: PathBuf,
}

impl FlatFileSave {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renders a slot in the save-file format.
    pub fn encode(slot: &SaveSlot) -> String {
        let mut lines = Vec::with_capacity(3 + 2 * BattleConfig::MOVES_PER_COMBATANT);
        lines.push(slot.health[Side::A.index()].to_string());
        lines.push(slot.health[Side::B.index()].to_string());
        lines.push(slot.active_turn.turn_flag().to_string());
        for side in [Side::A, Side::B] {
            lines.extend(slot.pp[side.index()].iter().map(u32::to_string));
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// Parses the save-file format.
    ///
    /// Errors carry the 1-based line number of the offending value.
    pub fn decode(text: &str) -> Result<SaveSlot> {
        let mut reader = FieldReader::new(text);

        let health_a = reader.next_field("health of side A", parse_health)?;
        let health_b = reader.next_field("health of side B", parse_health)?;
        let turn_a = reader.next_field("turn flag", parse_flag)?;

        let mut pp = [[0u32; BattleConfig::MOVES_PER_COMBATANT]; BattleConfig::SIDES];
        for side in [Side::A, Side::B] {
            for (slot, value) in pp[side.index()].iter_mut().enumerate() {
                let what = format!("PP of side {} move {}", side, slot + 1);
                *value = reader.next_field(&what, |text| text.parse().ok())?;
            }
        }

        reader.expect_end()?;

        Ok(SaveSlot {
            health: [health_a, health_b],
            active_turn: Side::from_turn_flag(turn_a),
            pp,
        })
    }
}

impl SlotRepository for FlatFileSave {
    fn write(&self, slot: &SaveSlot) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }

        let temp_path = self.path.with_extension("tmp");

        // Write to temp file
        fs::write(&temp_path, Self::encode(slot)).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!("Wrote save slot to {}", self.path.display());

        Ok(())
    }

    fn read(&self) -> Result<SaveSlot> {
        if !self.path.exists() {
            return Err(RepositoryError::NotFound);
        }

        let text = fs::read_to_string(&self.path).map_err(RepositoryError::Io)?;
        let slot = Self::decode(&text)?;

        tracing::debug!("Read save slot from {}", self.path.display());

        Ok(slot)
    }
}

/// Walks the file one value per line, tracking the line number.
struct FieldReader<'a> {
    lines: Lines<'a>,
    line: usize,
}

impl<'a> FieldReader<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line: 0,
        }
    }

    fn next_field<T>(&mut self, what: &str, parse: impl FnOnce(&str) -> Option<T>) -> Result<T> {
        self.line += 1;
        let Some(raw) = self.lines.next() else {
            return Err(RepositoryError::Malformed {
                line: self.line,
                reason: format!("missing {what}"),
            });
        };

        let text = raw.trim();
        parse(text).ok_or_else(|| RepositoryError::Malformed {
            line: self.line,
            reason: format!("invalid {what}: {text:?}"),
        })
    }

    fn expect_end(&mut self) -> Result<()> {
        for raw in self.lines.by_ref() {
            self.line += 1;
            if !raw.trim().is_empty() {
                return Err(RepositoryError::Malformed {
                    line: self.line,
                    reason: "unexpected trailing content".to_string(),
                });
            }
        }
        Ok(())
    }
}

fn parse_health(text: &str) -> Option<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|health| (0.0..=1.0).contains(health))
}

fn parse_flag(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
