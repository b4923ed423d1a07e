//! The daily puzzle definition a game is built from.

use serde::{Deserialize, Serialize};

use super::game::CorrectAnswer;

/// One day's puzzle: the answer, the clips, and display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyGame {
    /// Calendar id, `YYYY-MM-DD`.
    pub id: String,

    pub answer: CorrectAnswer,

    /// Exactly three headline clips, in play order.
    pub headlines: [String; 3],

    /// Station the headlines aired on, e.g. "Radio 4".
    pub radio_station: String,

    /// Transcript per clip, for text display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcripts: Option<Vec<String>>,
}
