//! The game reducer: one pure function advancing the day's game.
//!
//! Every gameplay rule lives here: ring progression, the shared
//! headline budget, medal tiers, the loss cascade. The reducer never
//! touches the terminal, the clock, or the filesystem.
//!
//! State flows in and out as `Rc<GameState>`. An action that changes
//! nothing hands back the same `Rc`, so callers can tell a real change
//! from a no-op with a pointer comparison and skip redraws and saves.

use std::rc::Rc;

use crate::dial::segments;
use crate::model::{GameAction, GameState, GameStatus, RingColor, RingKind};

/// Apply one action to the current state.
pub fn reduce(state: Rc<GameState>, action: &GameAction) -> Rc<GameState> {
    match action {
        GameAction::SetRingValue { ring, value } => set_ring_value(state, *ring, value),
        GameAction::SubmitGuess {
            ring,
            guessed_value,
            is_correct,
        } => submit_guess(state, *ring, guessed_value, *is_correct),
        GameAction::LockRing { ring, color } => {
            let mut next = (*state).clone();
            let slot = next.ring_states.get_mut(*ring);
            slot.is_locked = true;
            slot.color = *color;
            Rc::new(next)
        }
        GameAction::ClearIncorrectFlash { ring } => {
            if !state.ring_states.get(*ring).show_incorrect_flash {
                return state;
            }
            let mut next = (*state).clone();
            next.ring_states.get_mut(*ring).show_incorrect_flash = false;
            Rc::new(next)
        }
        GameAction::PlayHeadline => play_headline(state),
        GameAction::NextHeadline => {
            if state.current_headline_index >= 2 {
                return state;
            }
            let mut next = (*state).clone();
            next.current_headline_index += 1;
            Rc::new(next)
        }
        GameAction::WinGame => force_status(state, GameStatus::Won),
        GameAction::LoseGame => force_status(state, GameStatus::Lost),
        GameAction::ResetGame(new_state) => Rc::new((**new_state).clone()),
    }
}

fn set_ring_value(state: Rc<GameState>, ring: RingKind, value: &str) -> Rc<GameState> {
    if state.ring_states.get(ring).is_locked {
        return state;
    }

    let mut next = (*state).clone();
    next.ring_states.get_mut(ring).selected_value = value.to_string();

    // Moving the decade dial drags the year dial with it: the year keeps
    // its slot within the decade, so 1995 under 1990s shows 1985 under
    // 1980s.
    if ring == RingKind::Decade && !state.ring_states.year.is_locked {
        if let Some(year) = year_in_decade(&state.ring_states.year.selected_value, value) {
            next.ring_states.year.selected_value = year;
        }
    }

    Rc::new(next)
}

fn submit_guess(
    state: Rc<GameState>,
    ring: RingKind,
    guessed_value: &str,
    is_correct: bool,
) -> Rc<GameState> {
    // A locked ring takes no further guesses, whatever the caller thinks.
    if state.ring_states.get(ring).is_locked {
        return state;
    }

    if is_correct {
        Rc::new(correct_guess(&state, ring, guessed_value))
    } else {
        Rc::new(incorrect_guess(&state, ring, guessed_value))
    }
}

fn correct_guess(state: &GameState, ring: RingKind, guessed_value: &str) -> GameState {
    let mut next = state.clone();

    let slot = next.ring_states.get_mut(ring);
    slot.is_locked = true;
    slot.color = color_for_headlines(state.headlines_heard);

    // Confirming the decade settles which years the year dial shows;
    // an unlocked year selection is re-based into the confirmed decade.
    if ring == RingKind::Decade && !state.ring_states.year.is_locked {
        if let Some(year) = year_in_decade(&state.ring_states.year.selected_value, guessed_value) {
            next.ring_states.year.selected_value = year;
        }
    }

    match ring.next() {
        Some(next_ring) => next.current_ring = next_ring,
        None => {
            // Month was the last ring: the dial is complete.
            next.current_ring = ring;
            next.game_status = GameStatus::Won;
        }
    }

    next
}

fn incorrect_guess(state: &GameState, ring: RingKind, guessed_value: &str) -> GameState {
    // Third strike: the budget was already spent before this guess.
    if state.headlines_heard >= 3 {
        return lose(state, ring, guessed_value);
    }

    let mut next = state.clone();
    let slot = next.ring_states.get_mut(ring);
    slot.incorrect_guesses.push(guessed_value.to_string());
    slot.show_incorrect_flash = true;

    // A wrong guess spends the attempt: the next clip is up and counts
    // as heard whether or not the player replays it.
    next.current_headline_index = (state.current_headline_index + 1).min(2);
    next.headlines_heard = (state.headlines_heard + 1).min(3);

    next
}

fn lose(state: &GameState, ring: RingKind, guessed_value: &str) -> GameState {
    let mut next = state.clone();
    next.game_status = GameStatus::Lost;

    // Every ring locks and shows the real answer. Medals already earned
    // stay; rings never completed turn red.
    for kind in RingKind::ALL {
        let slot = next.ring_states.get_mut(kind);
        slot.is_locked = true;
        slot.selected_value = state.correct_answer.for_ring(kind).to_string();
        if slot.color == RingColor::None {
            slot.color = RingColor::Red;
        }
    }

    // The losing guess still goes on the record, flash and all.
    let slot = next.ring_states.get_mut(ring);
    slot.incorrect_guesses.push(guessed_value.to_string());
    slot.show_incorrect_flash = true;

    next
}

fn play_headline(state: Rc<GameState>) -> Rc<GameState> {
    let first_play = state.headlines_heard == state.current_headline_index;
    let starting = state.game_status == GameStatus::NotStarted;
    if !first_play && !starting {
        return state;
    }

    let mut next = (*state).clone();
    if starting {
        next.game_status = GameStatus::Playing;
    }
    // Replaying an already-charged clip is free.
    if first_play {
        next.headlines_heard = (state.headlines_heard + 1).min(3);
    }
    Rc::new(next)
}

fn force_status(state: Rc<GameState>, status: GameStatus) -> Rc<GameState> {
    if state.game_status == status {
        return state;
    }
    let mut next = (*state).clone();
    next.game_status = status;
    Rc::new(next)
}

/// Medal tier for a correct guess: the fewer clips heard, the better.
fn color_for_headlines(headlines_heard: u8) -> RingColor {
    match headlines_heard {
        1 => RingColor::Gold,
        2 => RingColor::Silver,
        3 => RingColor::Bronze,
        _ => RingColor::None,
    }
}

/// Re-base a year label into another decade, keeping its final digit:
/// `("1995", "1980s")` → `1985`.
///
/// `None` when the decade has no year list; an unparseable year takes
/// the decade's first slot.
fn year_in_decade(year: &str, decade: &str) -> Option<String> {
    let years = segments::years_for_decade(decade);
    let offset = year.parse::<usize>().map_or(0, |y| y % 10);
    years.get(offset).cloned()
}
