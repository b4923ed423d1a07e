//! Core data model for Airdate.
//!
//! These types define the game's state shape: the three rings, the
//! aggregate game state, the action vocabulary, and the daily puzzle.
//! They serialize with the camelCase field names the puzzle and save
//! files use.

mod action;
mod game;
mod puzzle;
mod ring;

pub use action::GameAction;
pub use game::{CorrectAnswer, GameState, GameStatus};
pub use puzzle::DailyGame;
pub use ring::{RingColor, RingKind, RingState, RingStates};
