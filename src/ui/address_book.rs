//! Address book panel

use crate::app::App;
use crate::store::StoredEntry;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

fn entry_lines(stored: &StoredEntry) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            stored.entry.full_name(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(stored.entry.address_line()),
        Line::from(Span::styled(
            format!("added {}", stored.added_at.format("%Y-%m-%d %H:%M")),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ]
}

/// Draw the stored entries, newest last
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let entries = app.book_entries();
    let block = Block::default()
        .title(format!(" Address book ({}) ", entries.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    if entries.is_empty() {
        let empty = Paragraph::new("No entries yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|stored| ListItem::new(entry_lines(stored)))
        .collect();

    // Selecting the newest entry keeps it scrolled into view
    let mut list_state = ListState::default().with_selected(entries.len().checked_sub(1));
    frame.render_stateful_widget(List::new(items).block(block), area, &mut list_state);
}
