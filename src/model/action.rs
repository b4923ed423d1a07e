//! Actions: every way the game state can change.
//!
//! Dispatching one of these through the reducer is the only way state
//! advances. Audio timing and drag gestures in flight never become
//! actions; they stay transient in the UI.

use super::game::GameState;
use super::ring::{RingColor, RingKind};

/// One input to the reducer.
#[derive(Debug, Clone)]
pub enum GameAction {
    /// Rotate a ring's selection to a new value.
    /// Rejected while the ring is locked.
    SetRingValue { ring: RingKind, value: String },

    /// Confirm the working guess for a ring.
    ///
    /// `is_correct` is computed by the caller against the correct
    /// answer; the reducer only applies the consequences.
    SubmitGuess {
        ring: RingKind,
        guessed_value: String,
        is_correct: bool,
    },

    /// Force-lock a ring with a color, bypassing the guess flow.
    /// Escape hatch for scripted states; applies unconditionally.
    #[allow(dead_code)] // Only dispatched from tests.
    LockRing { ring: RingKind, color: RingColor },

    /// UI acknowledgment that the wrong-guess feedback was shown.
    ClearIncorrectFlash { ring: RingKind },

    /// The current headline clip started playing.
    /// Charges the budget only the first time a clip plays.
    PlayHeadline,

    /// Advance to the next headline clip.
    NextHeadline,

    /// Force the game won. Escape hatch.
    #[allow(dead_code)] // Only dispatched from tests.
    WinGame,

    /// Force the game lost. Escape hatch.
    #[allow(dead_code)] // Only dispatched from tests.
    LoseGame,

    /// Replace the whole state: a new day's puzzle, or a replay of the
    /// current one.
    ResetGame(Box<GameState>),
}
