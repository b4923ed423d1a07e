//! Local persistence for in-progress games.
//!
//! A single save file lives under the storage root:
//!
//! ```text
//! <root>/
//!   save.json    # The current day's GameState, pretty-printed
//! ```
//!
//! One day, one save: loading checks the saved `daily_game_id` against
//! the day being played and discards anything stale.

use std::{fs, io, path::PathBuf};

use crate::model::GameState;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// Local file-based storage for the day's game.
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Creates a new storage instance rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Returns the default storage root: `~/.airdate/`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".airdate"))
    }

    // ── Save file ──

    /// Writes the current game state, replacing any previous save.
    pub fn save(&self, state: &GameState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;
        fs::write(self.save_path(), json)?;
        Ok(())
    }

    /// Loads the saved game state, if any.
    ///
    /// A save that no longer parses is treated as absent, not fatal;
    /// the next `save` overwrites it.
    pub fn load(&self) -> Result<Option<GameState>> {
        let json = match fs::read_to_string(self.save_path()) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&json) {
            Ok(state) => Ok(Some(state)),
            Err(_) => Ok(None),
        }
    }

    /// Loads the saved state only if it belongs to the given day's game.
    pub fn load_for_day(&self, daily_game_id: &str) -> Result<Option<GameState>> {
        Ok(self
            .load()?
            .filter(|state| state.daily_game_id == daily_game_id))
    }

    /// Removes the save file. A missing file is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(self.save_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn save_path(&self) -> PathBuf {
        self.root.join("save.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    use crate::model::{CorrectAnswer, DailyGame, GameState, GameStatus};

    fn test_storage() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("airdate")).unwrap();
        (dir, storage)
    }

    fn sample_game() -> DailyGame {
        DailyGame {
            id: "1995-08-15".into(),
            answer: CorrectAnswer {
                decade: "1990s".into(),
                year: "1995".into(),
                month: "Aug".into(),
            },
            headlines: [
                "clips/1995-08-15-a.mp3".into(),
                "clips/1995-08-15-b.mp3".into(),
                "clips/1995-08-15-c.mp3".into(),
            ],
            radio_station: "Radio 4".into(),
            transcripts: None,
        }
    }

    fn sample_state() -> GameState {
        GameState::new(&sample_game())
    }

    #[test]
    fn save_and_load_round_trip() {
        let (_dir, storage) = test_storage();
        let mut state = sample_state();
        state.headlines_heard = 2;
        state.ring_states.decade.incorrect_guesses.push("1950s".into());

        storage.save(&state).unwrap();
        let loaded = storage.load().unwrap().unwrap();

        assert_eq!(loaded, state);
    }

    #[test]
    fn load_without_a_save_returns_none() {
        let (_dir, storage) = test_storage();

        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn load_discards_a_malformed_save() {
        let (_dir, storage) = test_storage();
        fs::write(storage.save_path(), "{ not json").unwrap();

        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn load_for_day_returns_a_matching_save() {
        let (_dir, storage) = test_storage();
        storage.save(&sample_state()).unwrap();

        let loaded = storage.load_for_day("1995-08-15").unwrap();

        assert!(loaded.is_some());
    }

    #[test]
    fn load_for_day_discards_a_stale_save() {
        let (_dir, storage) = test_storage();
        storage.save(&sample_state()).unwrap();

        let loaded = storage.load_for_day("1997-03-02").unwrap();

        assert!(loaded.is_none());
    }

    #[test]
    fn clear_removes_the_save() {
        let (_dir, storage) = test_storage();
        storage.save(&sample_state()).unwrap();

        storage.clear().unwrap();

        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn clear_without_a_save_is_fine() {
        let (_dir, storage) = test_storage();

        storage.clear().unwrap();
    }

    #[test]
    fn save_overwrites_the_previous_save() {
        let (_dir, storage) = test_storage();
        storage.save(&sample_state()).unwrap();

        let mut later = sample_state();
        later.game_status = GameStatus::Won;
        storage.save(&later).unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded.game_status, GameStatus::Won);
    }
}
