//! Application loop and input handling.
//!
//! Every keypress becomes at most one reducer action. The loop saves
//! after each action that changed the state, so quitting at any moment
//! loses nothing.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::model::{DailyGame, GameAction, GameState};
use crate::storage::Storage;
use crate::store::Store;

use super::screens::{finish, DialScreen};

/// Runs the TUI event loop until the user quits.
pub fn run(store: &mut Store, storage: &Storage, game: &DailyGame) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, store, storage, game);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    store: &mut Store,
    storage: &Storage,
    game: &DailyGame,
) -> io::Result<()> {
    let mut dial = DialScreen::new(store.state());

    loop {
        terminal.draw(|frame| {
            let state = store.state();
            if state.game_status.is_over() {
                finish::render(frame, state);
            } else {
                dial.render(frame, state);
            }
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if store.state().game_status.is_over() {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => return Ok(()),
                    KeyCode::Char('r') => {
                        let fresh = GameState::new(game);
                        dispatch(store, storage, &GameAction::ResetGame(Box::new(fresh)))?;
                        dial = DialScreen::new(store.state());
                    }
                    _ => {}
                }
                continue;
            }

            // A wrong-guess flash stays up until the next keypress.
            let current = store.state().current_ring;
            if store.state().ring_states.get(current).show_incorrect_flash {
                dispatch(
                    store,
                    storage,
                    &GameAction::ClearIncorrectFlash { ring: current },
                )?;
            }

            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Left | KeyCode::Char('h') => {
                    if let Some(action) = dial.turn(store.state(), 1.0) {
                        if dispatch(store, storage, &action)? {
                            dial.sync(store.state());
                        }
                    }
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    if let Some(action) = dial.turn(store.state(), -1.0) {
                        if dispatch(store, storage, &action)? {
                            dial.sync(store.state());
                        }
                    }
                }
                KeyCode::Enter => {
                    // Resubmitting a value already marked wrong is a no-op.
                    let already_tried = {
                        let rs = store.state().ring_states.get(current);
                        rs.incorrect_guesses.contains(&rs.selected_value)
                    };
                    if !already_tried {
                        let action = submit_current(store.state());
                        if dispatch(store, storage, &action)? {
                            dial.sync(store.state());
                        }
                    }
                }
                KeyCode::Char('p') => {
                    dial.reveal(store.state());
                    dispatch(store, storage, &GameAction::PlayHeadline)?;
                }
                KeyCode::Char('n') => {
                    // Only step past a clip that has actually been heard.
                    if store.state().headlines_heard > store.state().current_headline_index {
                        dispatch(store, storage, &GameAction::NextHeadline)?;
                    }
                }
                _ => {}
            }
        }
    }
}

/// Dispatch one action and persist on change. Returns whether the state
/// changed.
fn dispatch(store: &mut Store, storage: &Storage, action: &GameAction) -> io::Result<bool> {
    let changed = store.dispatch(action);
    if changed {
        storage.save(store.state()).map_err(io::Error::other)?;
    }
    Ok(changed)
}

/// Submit the current ring's selected value, graded against the answer.
fn submit_current(state: &GameState) -> GameAction {
    let ring = state.current_ring;
    let guessed_value = state.ring_states.get(ring).selected_value.clone();
    let is_correct = guessed_value == state.correct_answer.for_ring(ring);
    GameAction::SubmitGuess {
        ring,
        guessed_value,
        is_correct,
    }
}
