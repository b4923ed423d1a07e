//! Dial screen: the play surface.
//!
//! Owns the transient view state the reducer doesn't track: the dial's
//! current rotation in degrees and how many transcripts are on screen.
//! Rotation is re-derived from the selected value whenever the game
//! state changes, so a resumed game picks up where the dial left off.

use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Padding, Paragraph};
use ratatui::Frame;

use crate::dial::{
    rotation_for_value, segment_angle_width, segment_at_top, segments, snap_to_segment,
};
use crate::model::{GameAction, GameState, RingColor, RingKind};

use super::medal_style;

pub struct DialScreen {
    /// Accumulated rotation of the current ring, in degrees.
    rotation: f64,

    /// How many transcripts are visible, 0..=3.
    revealed: usize,
}

impl DialScreen {
    pub fn new(state: &GameState) -> Self {
        let mut screen = Self {
            rotation: 0.0,
            // Clips charged so far, capped at the one currently up.
            revealed: state.headlines_heard.min(state.current_headline_index + 1) as usize,
        };
        screen.sync(state);
        screen
    }

    /// Turn the dial by whole segments. Positive is counterclockwise.
    ///
    /// Returns the selection action for whatever lands at 12 o'clock.
    pub fn turn(&mut self, state: &GameState, steps: f64) -> Option<GameAction> {
        let ring = state.current_ring;
        let values = segments::segments_for(ring, &state.ring_states.decade.selected_value);
        if values.is_empty() {
            return None;
        }

        let width = segment_angle_width(values.len());
        self.rotation = snap_to_segment(self.rotation + steps * width, values.len());
        let index = segment_at_top(self.rotation, values.len());

        Some(GameAction::SetRingValue {
            ring,
            value: values[index].clone(),
        })
    }

    /// Re-aim the dial at the current ring's selected value.
    ///
    /// Called after every state change: a confirmed ring hands the dial
    /// to the next ring, and a decade move re-bases the year list.
    pub fn sync(&mut self, state: &GameState) {
        let ring = state.current_ring;
        self.rotation = rotation_for_value(
            ring,
            &state.ring_states.get(ring).selected_value,
            &state.ring_states.decade.selected_value,
        );
    }

    /// Show the transcript for the clip that is about to play.
    pub fn reveal(&mut self, state: &GameState) {
        self.revealed = self.revealed.max(state.current_headline_index as usize + 1);
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(3), // header
            Constraint::Length(1), // separator
            Constraint::Length(1), // counters
            Constraint::Length(5), // rings
            Constraint::Length(1), // flash
            Constraint::Min(0),    // headlines
            Constraint::Length(1), // help
        ])
        .split(area);

        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        // Header: title, station, day.
        let header = Paragraph::new(Line::from(vec![
            Span::styled("Airdate", highlight),
            Span::styled(
                format!("  {}  {}", state.radio_station, state.daily_game_id),
                muted,
            ),
        ]))
        .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
        frame.render_widget(header, chunks[0]);

        // Thin separator.
        let sep = Paragraph::new(Line::from(vec![Span::styled(
            "─".repeat(area.width.saturating_sub(4) as usize),
            muted,
        )]))
        .block(Block::default().padding(Padding::new(2, 2, 0, 0)));
        frame.render_widget(sep, chunks[1]);

        // Budget counters.
        let wrong_total: usize = RingKind::ALL
            .iter()
            .map(|&ring| state.ring_states.get(ring).incorrect_guesses.len())
            .sum();
        let misses: String = (0..3)
            .map(|i| if i < wrong_total { '■' } else { '□' })
            .collect();
        let counters = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("headlines {}/3", state.headlines_heard),
                normal,
            ),
            Span::styled("   misses ", muted),
            Span::styled(misses, normal),
        ]))
        .block(Block::default().padding(Padding::new(2, 0, 0, 0)));
        frame.render_widget(counters, chunks[2]);

        // One row per ring: locked rings show their medal, the current
        // ring shows a window onto the dial, later rings stay dim.
        let items: Vec<ListItem> = RingKind::ALL
            .iter()
            .map(|&ring| ring_row(state, ring, muted, normal, highlight))
            .collect();
        let rings = List::new(items).block(Block::default().padding(Padding::new(2, 2, 1, 0)));
        frame.render_widget(rings, chunks[3]);

        // Wrong-guess flash, cleared by the next keypress.
        let current = state.ring_states.get(state.current_ring);
        if current.show_incorrect_flash {
            if let Some(guess) = current.incorrect_guesses.last() {
                let flash = Paragraph::new(Line::from(vec![Span::styled(
                    format!("✗ {guess} was wrong"),
                    Style::default().fg(Color::Red),
                )]))
                .block(Block::default().padding(Padding::new(2, 0, 0, 0)));
                frame.render_widget(flash, chunks[4]);
            }
        }

        // Headlines heard so far, plus the play hint for the next one.
        let mut headline_items: Vec<ListItem> = Vec::new();
        for i in 0..self.revealed.min(3) {
            let text = state
                .transcripts
                .as_ref()
                .and_then(|t| t.get(i).cloned())
                .unwrap_or_else(|| format!("(headline {} played)", i + 1));
            let style = if i + 1 == self.revealed { normal } else { muted };
            headline_items.push(ListItem::new(Line::from(vec![
                Span::styled(format!("♪ {}  ", i + 1), style),
                Span::styled(text, style),
            ])));
        }
        if self.revealed <= state.current_headline_index as usize {
            headline_items.push(ListItem::new(Line::from(vec![Span::styled(
                format!("▶ p  play headline {}", state.current_headline_index + 1),
                normal,
            )])));
        }
        let headlines =
            List::new(headline_items).block(Block::default().padding(Padding::new(2, 2, 1, 0)));
        frame.render_widget(headlines, chunks[5]);

        // Help line.
        let help = Paragraph::new(Line::from(vec![Span::styled(
            " ←→ turn dial  ⏎ guess  p play  n next  q quit",
            muted,
        )]));
        frame.render_widget(help, chunks[6]);
    }
}

fn ring_row(
    state: &GameState,
    ring: RingKind,
    muted: Style,
    normal: Style,
    highlight: Style,
) -> ListItem<'static> {
    let rs = state.ring_states.get(ring);
    let label = format!("{:<6}", ring.label());

    if rs.is_locked {
        let mut spans = vec![
            Span::styled(format!("  {label}"), normal),
            Span::styled(format!("  ● {}", rs.selected_value), medal_style(rs.color)),
        ];
        if rs.color != RingColor::None {
            spans.push(Span::styled(format!("  {}", rs.color.label()), muted));
        }
        return ListItem::new(Line::from(spans));
    }

    if ring == state.current_ring {
        let values = segments::segments_for(ring, &state.ring_states.decade.selected_value);
        let spans = match values.iter().position(|v| *v == rs.selected_value) {
            Some(i) => {
                let prev = &values[(i + values.len() - 1) % values.len()];
                let next = &values[(i + 1) % values.len()];
                vec![
                    Span::styled("› ", highlight),
                    Span::styled(label, highlight),
                    Span::styled(format!("  ‹ {prev}  "), muted),
                    Span::styled(format!("[{}]", rs.selected_value), highlight),
                    Span::styled(format!("  {next} ›"), muted),
                ]
            }
            None => vec![
                Span::styled("› ", highlight),
                Span::styled(label, highlight),
                Span::styled(format!("  [{}]", rs.selected_value), highlight),
            ],
        };
        return ListItem::new(Line::from(spans));
    }

    ListItem::new(Line::from(vec![
        Span::styled(format!("  {label}"), normal),
        Span::styled("  · · ·", muted),
    ]))
}
