//! A small store wrapping the reducer: holds the current state and
//! reports whether a dispatched action actually changed it.

use std::rc::Rc;

use crate::model::{GameAction, GameState};
use crate::reducer;

pub struct Store {
    state: Rc<GameState>,
}

impl Store {
    pub fn new(state: GameState) -> Self {
        Self {
            state: Rc::new(state),
        }
    }

    /// The current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run one action through the reducer. Returns true when the state
    /// changed, so callers know to redraw and persist.
    pub fn dispatch(&mut self, action: &GameAction) -> bool {
        let next = reducer::reduce(Rc::clone(&self.state), action);
        let changed = !Rc::ptr_eq(&self.state, &next);
        self.state = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::{CorrectAnswer, DailyGame, GameStatus, RingKind};

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
    fn dispatch_reports_a_change() {
        let mut store = Store::new(GameState::new(&sample_game()));

        assert!(store.dispatch(&GameAction::PlayHeadline));
        assert_eq!(store.state().game_status, GameStatus::Playing);
        assert_eq!(store.state().headlines_heard, 1);
    }

    #[test]
    fn dispatch_reports_a_rejected_action() {
        let mut store = Store::new(GameState::new(&sample_game()));
        store.dispatch(&GameAction::PlayHeadline);

        // Replaying the already-charged clip changes nothing.
        assert!(!store.dispatch(&GameAction::PlayHeadline));
    }

    #[test]
    fn dispatch_rejects_rotation_on_a_locked_ring() {
        let mut store = Store::new(GameState::new(&sample_game()));
        store.dispatch(&GameAction::PlayHeadline);
        store.dispatch(&GameAction::SetRingValue {
            ring: RingKind::Decade,
            value: "1990s".into(),
        });
        store.dispatch(&GameAction::SubmitGuess {
            ring: RingKind::Decade,
            guessed_value: "1990s".into(),
            is_correct: true,
        });

        assert!(!store.dispatch(&GameAction::SetRingValue {
            ring: RingKind::Decade,
            value: "1950s".into(),
        }));
        assert_eq!(store.state().ring_states.decade.selected_value, "1990s");
    }
}
