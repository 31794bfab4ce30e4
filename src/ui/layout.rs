//! Layout components (sections, status bar)

use crate::app::App;
use crate::platform::{QUIT_SHORTCUT, RESET_SHORTCUT};
use crate::state::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Height of a form block holding two single-line fields and a help line
pub const FORM_HEIGHT: u16 = 2 * 3 + 1 + 2;

/// Width of the address book column
const BOOK_WIDTH: u16 = 40;

/// Create the main layout: (workflow column, address book column)
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),             // Forms and candidates
            Constraint::Length(BOOK_WIDTH), // Address book
        ])
        .split(rows[0]);

    (columns[0], columns[1])
}

/// Split the workflow column into (address form, candidates, personal form)
pub fn split_workflow(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FORM_HEIGHT), // Find an address
            Constraint::Min(3),              // Candidates
            Constraint::Length(FORM_HEIGHT), // Personal info
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.focus.label()),
        Style::default().fg(Color::Cyan),
    )];

    spans.push(Span::styled(
        focus_hints(app.state.focus),
        Style::default().fg(Color::Gray),
    ));

    if app.state.is_lookup_in_flight() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("Searching…", Style::default().fg(Color::Yellow)));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = format!(" {}:quit ", QUIT_SHORTCUT);
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the focused section
fn focus_hints(focus: Focus) -> String {
    match focus {
        Focus::AddressForm => format!("Tab:next  Enter:find  {}:clear", RESET_SHORTCUT),
        Focus::Candidates => "j/k:nav  Enter:select  Tab:next  Esc:back".to_string(),
        Focus::PersonalForm => {
            format!("Tab:next  Enter:add to book  {}:clear  Esc:back", RESET_SHORTCUT)
        }
    }
}
