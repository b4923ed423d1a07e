//! Screen rendering and input handling.

mod dial;
pub mod finish;

pub use dial::DialScreen;

use ratatui::style::{Color, Modifier, Style};

use crate::model::RingColor;

/// Style for a ring's earned color.
fn medal_style(color: RingColor) -> Style {
    match color {
        RingColor::None => Style::default().fg(Color::DarkGray),
        RingColor::Gold => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        RingColor::Silver => Style::default().fg(Color::White),
        RingColor::Bronze => Style::default().fg(Color::Rgb(205, 127, 50)),
        RingColor::Red => Style::default().fg(Color::Red),
    }
}
