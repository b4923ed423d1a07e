//! Ring types: the three concentric dials and their per-ring state.

use serde::{Deserialize, Serialize};

use crate::dial::segments;

/// One of the three concentric dials, in gameplay order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RingKind {
    Decade,
    Year,
    Month,
}

impl RingKind {
    /// All rings, in the order they are played.
    pub const ALL: [Self; 3] = [Self::Decade, Self::Year, Self::Month];

    /// The ring that becomes current after this one is confirmed.
    /// `None` for Month, the last ring.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Decade => Some(Self::Year),
            Self::Year => Some(Self::Month),
            Self::Month => None,
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Decade => "Decade",
            Self::Year => "Year",
            Self::Month => "Month",
        }
    }
}

/// Scoring tier a ring earns when confirmed, or the failure marker
/// applied on a loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RingColor {
    /// Nothing earned yet.
    None,

    /// Confirmed off the first headline.
    Gold,

    /// Confirmed off the second headline.
    Silver,

    /// Confirmed off the third headline.
    Bronze,

    /// Never confirmed before the game was lost.
    Red,
}

impl RingColor {
    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Bronze => "bronze",
            Self::Red => "red",
        }
    }
}

/// Selection and scoring state for a single ring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingState {
    /// True once the value is confirmed correct or the game has ended.
    pub is_locked: bool,

    pub color: RingColor,

    /// The segment value at 12 o'clock: the player's working guess.
    pub selected_value: String,

    /// Set on a wrong submission; the UI acknowledges with a clear action.
    pub show_incorrect_flash: bool,

    /// Wrong submissions for this ring, in the order they were made.
    pub incorrect_guesses: Vec<String>,
}

impl RingState {
    /// An unlocked ring resting on the given value.
    pub fn new(selected_value: impl Into<String>) -> Self {
        Self {
            is_locked: false,
            color: RingColor::None,
            selected_value: selected_value.into(),
            show_incorrect_flash: false,
            incorrect_guesses: Vec::new(),
        }
    }
}

/// State for all three rings. Every ring is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingStates {
    pub decade: RingState,
    pub year: RingState,
    pub month: RingState,
}

impl RingStates {
    /// All rings unlocked, each resting on its first segment, the value
    /// at 12 o'clock when rotation is zero.
    pub fn at_rest() -> Self {
        let first_year = segments::years_for_decade(segments::DECADES[0])
            .into_iter()
            .next()
            .unwrap_or_default();
        Self {
            decade: RingState::new(segments::DECADES[0]),
            year: RingState::new(first_year),
            month: RingState::new(segments::MONTHS[0]),
        }
    }

    pub fn get(&self, ring: RingKind) -> &RingState {
        match ring {
            RingKind::Decade => &self.decade,
            RingKind::Year => &self.year,
            RingKind::Month => &self.month,
        }
    }

    pub fn get_mut(&mut self, ring: RingKind) -> &mut RingState {
        match ring {
            RingKind::Decade => &mut self.decade,
            RingKind::Year => &mut self.year,
            RingKind::Month => &mut self.month,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rings_progress_decade_year_month() {
        assert_eq!(RingKind::Decade.next(), Some(RingKind::Year));
        assert_eq!(RingKind::Year.next(), Some(RingKind::Month));
        assert_eq!(RingKind::Month.next(), None);
    }

    #[test]
    fn ring_states_index_by_kind() {
        let mut states = RingStates::at_rest();
        states.get_mut(RingKind::Year).selected_value = "1987".to_string();

        assert_eq!(states.get(RingKind::Year).selected_value, "1987");
        assert_eq!(states.get(RingKind::Decade).selected_value, "1940s");
        assert_eq!(states.get(RingKind::Month).selected_value, "Jan");
    }

    #[test]
    fn rings_at_rest_are_unlocked_and_colorless() {
        let states = RingStates::at_rest();
        for ring in RingKind::ALL {
            let state = states.get(ring);
            assert!(!state.is_locked);
            assert_eq!(state.color, RingColor::None);
            assert!(!state.show_incorrect_flash);
            assert!(state.incorrect_guesses.is_empty());
        }
        assert_eq!(states.year.selected_value, "1940");
    }
}
