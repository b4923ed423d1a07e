//! Terminal UI for playing the day's game.

mod app;
mod screens;

pub use app::run;
