//! Game state: the aggregate the reducer advances.

use serde::{Deserialize, Serialize};

use super::puzzle::DailyGame;
use super::ring::{RingKind, RingStates};

/// Where the day's game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// No headline has been played yet.
    NotStarted,

    /// Underway: at least one headline played, dial still open.
    Playing,

    /// The month ring was confirmed. Terminal.
    Won,

    /// A third wrong guess landed. Terminal.
    Lost,
}

impl GameStatus {
    /// True once the game has been won or lost.
    pub fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "not started",
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }
}

/// The broadcast date being guessed, fixed for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectAnswer {
    pub decade: String,
    pub year: String,
    pub month: String,
}

impl CorrectAnswer {
    /// The answer component for one ring.
    pub fn for_ring(&self, ring: RingKind) -> &str {
        match ring {
            RingKind::Decade => &self.decade,
            RingKind::Year => &self.year,
            RingKind::Month => &self.month,
        }
    }
}

/// The aggregate game state.
///
/// Created once per calendar puzzle, advanced only through the reducer,
/// and replaced wholesale when a new day's puzzle loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Which day's puzzle this state belongs to (`YYYY-MM-DD`).
    /// A save from a different day is discarded on load.
    pub daily_game_id: String,

    pub correct_answer: CorrectAnswer,

    /// The three headline clip paths, in play order.
    pub audio_files: [String; 3],

    /// Station the headlines aired on, e.g. "Radio 4". Display only.
    pub radio_station: String,

    /// Transcript per clip, when the puzzle provides them. Display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcripts: Option<Vec<String>>,

    /// The ring currently accepting rotation and guesses.
    pub current_ring: RingKind,

    /// Headline plays charged against the shared budget, 0..=3.
    pub headlines_heard: u8,

    /// Which clip plays next, 0..=2.
    pub current_headline_index: u8,

    pub ring_states: RingStates,

    pub game_status: GameStatus,
}

impl GameState {
    /// Fresh state for a daily puzzle: all rings unlocked and resting on
    /// their zero-rotation segment, nothing played yet.
    pub fn new(game: &DailyGame) -> Self {
        Self {
            daily_game_id: game.id.clone(),
            correct_answer: game.answer.clone(),
            audio_files: game.headlines.clone(),
            radio_station: game.radio_station.clone(),
            transcripts: game.transcripts.clone(),
            current_ring: RingKind::Decade,
            headlines_heard: 0,
            current_headline_index: 0,
            ring_states: RingStates::at_rest(),
            game_status: GameStatus::NotStarted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn fresh_state_starts_at_the_decade_ring() {
        let state = GameState::new(&sample_game());

        assert_eq!(state.daily_game_id, "1995-08-15");
        assert_eq!(state.game_status, GameStatus::NotStarted);
        assert_eq!(state.current_ring, RingKind::Decade);
        assert_eq!(state.headlines_heard, 0);
        assert_eq!(state.current_headline_index, 0);
        assert_eq!(state.audio_files[2], "clips/1995-08-15-c.mp3");
        assert_eq!(state.ring_states.decade.selected_value, "1940s");
        assert_eq!(state.ring_states.year.selected_value, "1940");
        assert_eq!(state.ring_states.month.selected_value, "Jan");
    }

    #[test]
    fn state_serializes_with_camel_case_keys() {
        let state = GameState::new(&sample_game());
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["dailyGameId"], "1995-08-15");
        assert_eq!(json["gameStatus"], "not_started");
        assert_eq!(json["currentRing"], "decade");
        assert_eq!(json["headlinesHeard"], 0);
        assert_eq!(json["ringStates"]["decade"]["isLocked"], false);
        assert_eq!(json["ringStates"]["month"]["color"], "none");
        assert_eq!(json["correctAnswer"]["month"], "Aug");
    }

    #[test]
    fn state_round_trips_through_json() {
        let state = GameState::new(&sample_game());
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(back, state);
    }

    #[test]
    fn answer_components_index_by_ring() {
        let answer = sample_game().answer;

        assert_eq!(answer.for_ring(RingKind::Decade), "1990s");
        assert_eq!(answer.for_ring(RingKind::Year), "1995");
        assert_eq!(answer.for_ring(RingKind::Month), "Aug");
    }

    #[test]
    fn won_and_lost_are_over() {
        assert!(!GameStatus::NotStarted.is_over());
        assert!(!GameStatus::Playing.is_over());
        assert!(GameStatus::Won.is_over());
        assert!(GameStatus::Lost.is_over());
    }
}
