//! Daily puzzle loading.
//!
//! Puzzles are JSON files named after their day:
//!
//! ```text
//! <dir>/
//!   1995-08-15.json    # DailyGame for that day
//! ```
//!
//! When no file exists for the requested day, callers fall back to the
//! built-in sample puzzle so the game is always playable.

use std::path::{Path, PathBuf};
use std::{fs, io};

use crate::dial::segments;
use crate::model::{CorrectAnswer, DailyGame};

/// Errors that can occur while loading a puzzle.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid puzzle: {0}")]
    Invalid(String),
}

pub type Result<T> = core::result::Result<T, PuzzleError>;

/// Returns the default puzzle directory: `~/.airdate/puzzles/`.
pub fn default_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".airdate").join("puzzles"))
}

/// Today's puzzle id in the local timezone, `YYYY-MM-DD`.
pub fn today_id() -> String {
    jiff::Zoned::now().date().to_string()
}

/// Loads and validates a puzzle from an explicit file path.
pub fn load_from(path: &Path) -> Result<DailyGame> {
    let json = fs::read_to_string(path)?;
    let game: DailyGame = serde_json::from_str(&json)?;
    validate(&game)?;
    Ok(game)
}

/// Loads the puzzle file for one day from a directory, if present.
pub fn for_day(dir: &Path, daily_game_id: &str) -> Result<Option<DailyGame>> {
    let path = dir.join(format!("{daily_game_id}.json"));
    if !path.is_file() {
        return Ok(None);
    }
    load_from(&path).map(Some)
}

/// Checks that a puzzle's answer actually exists on the dial.
pub fn validate(game: &DailyGame) -> Result<()> {
    if game.id.is_empty() {
        return Err(PuzzleError::Invalid("missing id".into()));
    }
    let answer = &game.answer;
    if !segments::DECADES.contains(&answer.decade.as_str()) {
        return Err(PuzzleError::Invalid(format!(
            "decade {:?} is not on the dial",
            answer.decade
        )));
    }
    if !segments::years_for_decade(&answer.decade).contains(&answer.year) {
        return Err(PuzzleError::Invalid(format!(
            "year {:?} is not in the {} decade",
            answer.year, answer.decade
        )));
    }
    if !segments::MONTHS.contains(&answer.month.as_str()) {
        return Err(PuzzleError::Invalid(format!(
            "month {:?} is not on the dial",
            answer.month
        )));
    }
    Ok(())
}

/// The built-in sample puzzle, labelled with the given day.
pub fn sample(daily_game_id: &str) -> DailyGame {
    DailyGame {
        id: daily_game_id.to_string(),
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
        transcripts: Some(vec![
            "Shares in Netscape, the internet software firm, tripled on their \
             first day of trading in New York."
                .into(),
            "Jerry Garcia, guitarist and founder of the Grateful Dead, has died \
             in California at the age of fifty-three."
                .into(),
            "Crowds queued at midnight as Microsoft launched its Windows 95 \
             operating system around the world."
                .into(),
        ]),
    }
}
