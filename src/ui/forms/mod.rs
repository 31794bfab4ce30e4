//! Form rendering module
//!
//! `draw_form` renders any [`FormState`] as a titled block with one boxed
//! field per row, in the field set's declaration order.

mod field_renderer;

use crate::state::{FormFieldKey, FormState};
use field_renderer::{draw_field, draw_help_text};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Height of one boxed field
const FIELD_HEIGHT: u16 = 3;

/// Draw a form with a legend, its fields and a help line
pub fn draw_form<K: FormFieldKey>(
    frame: &mut Frame,
    area: Rect,
    legend: &str,
    form: &FormState<K>,
    is_focused: bool,
    help: &str,
) {
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(format!(" {} ", legend))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = form
        .fields()
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let active_index = form.active_field().index();
    for (index, field) in form.fields().iter().enumerate() {
        draw_field(
            frame,
            chunks[index],
            field,
            is_focused && index == active_index,
        );
    }

    if let Some(help_area) = chunks.last() {
        draw_help_text(frame, *help_area, help);
    }
}
