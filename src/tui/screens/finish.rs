//! Finish screen: the verdict once the game is won or lost.

use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Padding, Paragraph};
use ratatui::Frame;

use crate::model::{GameState, GameStatus, RingKind};

use super::medal_style;

pub fn render(frame: &mut Frame, state: &GameState) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(3), // verdict
        Constraint::Length(1), // separator
        Constraint::Length(2), // answer
        Constraint::Min(0),    // rings
        Constraint::Length(1), // help
    ])
    .split(area);

    let muted = Style::default().fg(Color::DarkGray);
    let normal = Style::default().fg(Color::Gray);

    let verdict = if state.game_status == GameStatus::Won {
        Span::styled(
            "You placed the broadcast!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "The dial beat you today",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    };
    let header = Paragraph::new(Line::from(vec![verdict]))
        .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
    frame.render_widget(header, chunks[0]);

    let sep = Paragraph::new(Line::from(vec![Span::styled(
        "─".repeat(area.width.saturating_sub(4) as usize),
        muted,
    )]))
    .block(Block::default().padding(Padding::new(2, 2, 0, 0)));
    frame.render_widget(sep, chunks[1]);

    let answer = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(
                "{} {}",
                state.correct_answer.month, state.correct_answer.year
            ),
            normal,
        ),
        Span::styled(format!("  {}", state.radio_station), muted),
        Span::styled(
            format!("   headlines heard {}/3", state.headlines_heard),
            muted,
        ),
    ]))
    .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
    frame.render_widget(answer, chunks[2]);

    let items: Vec<ListItem> = RingKind::ALL
        .iter()
        .map(|&ring| {
            let rs = state.ring_states.get(ring);
            let mut spans = vec![
                Span::styled(format!("{:<6}", ring.label()), normal),
                Span::styled(format!("  ● {:<5}", rs.selected_value), medal_style(rs.color)),
                Span::styled(format!("  {}", rs.color.label()), muted),
            ];
            if !rs.incorrect_guesses.is_empty() {
                spans.push(Span::styled(
                    format!("  ({} wrong)", rs.incorrect_guesses.len()),
                    muted,
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();
    let rings = List::new(items).block(Block::default().padding(Padding::new(2, 2, 1, 0)));
    frame.render_widget(rings, chunks[3]);

    let help = Paragraph::new(Line::from(vec![Span::styled(" r replay  q quit", muted)]));
    frame.render_widget(help, chunks[4]);
}
