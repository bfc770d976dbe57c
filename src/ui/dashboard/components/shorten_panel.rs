//! Shorten panel component
//!
//! Renders the long-URL input field and the short-URL display

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub fn render_shorten_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    // Input field with a trailing cursor marker
    let input_line = Line::from(vec![
        Span::styled(state.input.clone(), Style::default().fg(Color::White)),
        Span::styled("█", Style::default().fg(Color::DarkGray)),
    ]);
    let input_block = Block::default()
        .title("LONG URL [Enter to shorten]")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(input_line).block(input_block), chunks[0]);

    // Short URL display. Hidden until a response has arrived, mirroring the
    // invisible display element before the first shorten.
    let display_line = match &state.short_url {
        Some(short_url) => Line::from(Span::styled(
            short_url.clone(),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )),
        None if state.shorten_in_flight => {
            let frame = SPINNER_FRAMES[state.tick % SPINNER_FRAMES.len()];
            Line::from(Span::styled(
                format!("{} shortening...", frame),
                Style::default().fg(Color::DarkGray),
            ))
        }
        None => Line::from(""),
    };
    let display_block = Block::default()
        .title("SHORT URL [Ctrl+Y to copy]")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(display_line).block(display_block), chunks[1]);
}
