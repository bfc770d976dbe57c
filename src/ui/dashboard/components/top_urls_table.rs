//! Top-URLs table component
//!
//! Renders one row per backend-ranked entry with paging info in the title

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};

pub fn render_top_urls_table(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header = Row::new(vec!["LONG URL", "SHORT URL", "FOLLOWS", "CREATES"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = state
        .top_urls
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.long_url.clone())
                    .style(Style::default().fg(Color::LightBlue)),
                Cell::from(state.full_short_url(entry)),
                Cell::from(entry.follow_count.to_string()),
                Cell::from(entry.create_count.to_string()),
            ])
        })
        .collect();

    let title = if state.loading_top_urls {
        format!("TOP URLS - loading page {}...", state.current_page)
    } else {
        match state.pagination.total_page {
            Some(total) => format!("TOP URLS - page {}/{}", state.current_page, total),
            None => format!("TOP URLS - page {}", state.current_page),
        }
    };

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(45),
            Constraint::Percentage(35),
            Constraint::Length(9),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(table, area);
}
