//! UI module for rendering the TUI

mod address_book;
mod candidates;
mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::Focus;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let state = &app.state;

    let (workflow_area, book_area) = layout::create_layout(area);
    let (address_area, candidates_area, personal_area) = layout::split_workflow(workflow_area);

    forms::draw_form(
        frame,
        address_area,
        "🏠 Find an address",
        &state.address_form,
        state.focus == Focus::AddressForm,
        "Enter: find addresses",
    );

    candidates::draw(frame, candidates_area, app);

    // Personal info only makes sense once an address is picked
    if state.selected_address_id.is_some() {
        let help = match state.selected_candidate() {
            Some(candidate) => format!("Enter: add {} to address book", candidate.summary()),
            None => "Enter: add to address book".to_string(),
        };
        forms::draw_form(
            frame,
            personal_area,
            "✏️ Add personal info to address",
            &state.personal_form,
            state.focus == Focus::PersonalForm,
            &help,
        );
    } else {
        draw_personal_placeholder(frame, personal_area);
    }

    address_book::draw(frame, book_area, app);

    layout::draw_status_bar(frame, app);

    if let Some(error) = &state.error {
        components::render_error_dialog(frame, &error.to_string());
    }
}

fn draw_personal_placeholder(frame: &mut Frame, area: Rect) {
    let placeholder = Paragraph::new("Select an address to add personal info.")
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" ✏️ Add personal info to address ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(placeholder, area);
}
