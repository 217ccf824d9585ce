//! Save-game snapshots.
//!
//! The field names match the JSON save files written by earlier releases
//! of the game, so old saves keep loading. Everything read back is treated
//! as untrusted and clamped into range by [`crate::Session::restore`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading or writing a save.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The save file could not be read or written.
    #[error("save file I/O failed")]
    Io(#[from] std::io::Error),
    /// The save file is not valid save JSON.
    #[error("save file is malformed")]
    Parse(#[from] serde_json::Error),
}

/// Persisted session progress.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    /// Player left edge.
    pub player_x: f64,
    /// Player top edge.
    pub player_y: f64,
    /// Active level; may be out of range in a tampered file.
    pub current_level: i64,
    /// Seconds of play before the save, zero if the timer never started.
    pub elapsed_time: f64,
    /// Health at save time; may be out of range in a tampered file.
    pub current_health: i64,
    /// Jumps launched.
    #[serde(default)]
    pub jumps: u32,
    /// Damaging falls.
    #[serde(default)]
    pub falls: u32,
    /// Coin total as displayed; the flags below are authoritative.
    #[serde(default)]
    pub total_coins_collected: usize,
    /// Collected flag of each coin, in table order.
    #[serde(default)]
    pub coins: Vec<bool>,
}

impl SaveData {
    /// Parses a save from JSON.
    ///
    /// # Errors
    /// Returns [`SaveError::Parse`] when the JSON is malformed or a required
    /// field is missing.
    pub fn from_json(json: &str) -> Result<Self, SaveError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Renders the save as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`SaveError::Parse`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a save file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SaveError> {
        let json = fs::read_to_string(path)?;
        let save = Self::from_json(&json)?;
        log::info!("loaded save from {}", path.display());
        Ok(save)
    }

    /// Writes the save to `path`, replacing any existing file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn store(&self, path: &Path) -> Result<(), SaveError> {
        fs::write(path, self.to_json()?)?;
        log::info!("saved game to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn legacy_save_without_counters_loads() {
        let json = r#"{
            "player_x": 120.5,
            "player_y": 300,
            "current_level": 4,
            "elapsed_time": 75.25,
            "current_health": 88
        }"#;
        let save = SaveData::from_json(json).unwrap_or_else(|e| panic!("save: {e}"));
        assert_relative_eq!(save.player_x, 120.5);
        assert_eq!(save.current_level, 4);
        assert_eq!(save.jumps, 0);
        assert!(save.coins.is_empty());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let err = SaveData::from_json(r#"{ "player_x": 1 }"#);
        assert!(matches!(err, Err(SaveError::Parse(_))));
    }

    #[test]
    fn json_round_trip_keeps_flags() {
        let save = SaveData {
            coins: vec![true, false],
            total_coins_collected: 1,
            ..SaveData::default()
        };
        let json = save.to_json().unwrap_or_else(|e| panic!("encode: {e}"));
        assert_eq!(SaveData::from_json(&json).ok(), Some(save));
    }
}
