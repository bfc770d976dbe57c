//! Dashboard logs panel component
//!
//! Renders activity logs with event formatting

use super::super::state::DashboardState;
use crate::events::{EventType, Source};

use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn source_color(source: &Source) -> Color {
    match source {
        Source::Config => Color::Magenta,
        Source::Shortener => Color::LightGreen,
        Source::TopUrls => Color::LightBlue,
        Source::Clipboard => Color::Yellow,
    }
}

/// Compact `HH:MM:SS` slice of a full `%Y-%m-%d %H:%M:%S` timestamp.
fn format_compact_timestamp(timestamp: &str) -> &str {
    timestamp.split(' ').nth(1).unwrap_or(timestamp)
}

pub fn render_logs_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    // Account for borders and padding when deciding how many lines fit
    let max_logs = (area.height.saturating_sub(3)) as usize;
    let log_count = if max_logs > 0 { max_logs } else { 1 };

    let log_lines: Vec<Line> = state
        .activity_logs
        .iter()
        .filter(|event| event.should_display())
        .rev()
        .take(log_count)
        .map(|event| {
            let status_icon = match event.event_type {
                EventType::Success => "✅",
                EventType::Error => "❌",
                EventType::Refresh => "",
                EventType::Waiting => "",
            };

            Line::from(vec![
                Span::raw(format!("{} ", status_icon)),
                Span::styled(
                    format!("{} ", format_compact_timestamp(&event.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    event.msg.clone(),
                    Style::default().fg(source_color(&event.source)),
                ),
            ])
        })
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("Starting up...")])
    } else {
        Paragraph::new(log_lines)
    };

    let logs_block = Block::default()
        .title("ACTIVITY LOG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(log_paragraph.block(logs_block).wrap(Wrap { trim: true }), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_timestamp_drops_date() {
        assert_eq!(format_compact_timestamp("2026-08-25 12:34:56"), "12:34:56");
        assert_eq!(format_compact_timestamp("12:34:56"), "12:34:56");
    }
}
