//! Candidate address list, rendered as radio options

use crate::app::App;
use crate::state::{AddressCandidate, Focus};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Radio marker for a candidate
fn radio(is_selected: bool) -> &'static str {
    if is_selected {
        "(•) "
    } else {
        "( ) "
    }
}

fn candidate_line(candidate: &AddressCandidate, is_selected: bool) -> Line<'static> {
    let marker_style = if is_selected {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut spans = vec![
        Span::styled(radio(is_selected), marker_style),
        Span::raw(candidate.summary()),
    ];
    if !candidate.municipality.is_empty() && candidate.municipality != candidate.city {
        spans.push(Span::styled(
            format!(" ({})", candidate.municipality),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Draw the candidate list
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let is_focused = state.focus == Focus::Candidates;

    let title = if state.is_lookup_in_flight() {
        " Addresses (searching…) ".to_string()
    } else {
        format!(" Addresses ({}) ", state.candidates.len())
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    if state.candidates.is_empty() {
        let empty = Paragraph::new("No addresses yet. Enter a zip code and house number.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .candidates
        .iter()
        .map(|candidate| ListItem::new(candidate_line(candidate, state.is_selected(candidate))))
        .collect();

    let highlight = if is_focused {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let list = List::new(items).block(block).highlight_style(highlight);

    // Keeps the cursor row scrolled into view
    let mut list_state = ListState::default().with_selected(Some(state.candidate_cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(municipality: &str) -> AddressCandidate {
        AddressCandidate {
            id: "a".to_string(),
            street: "Dorpsstraat".to_string(),
            house_number: "60".to_string(),
            postcode: "1211EP".to_string(),
            city: "Hilversum".to_string(),
            municipality: municipality.to_string(),
            province: String::new(),
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_selected_candidate_has_filled_radio() {
        let line = candidate_line(&candidate(""), true);
        assert_eq!(text(&line), "(•) Dorpsstraat 60, 1211EP Hilversum");
    }

    #[test]
    fn test_unselected_candidate_has_empty_radio() {
        let line = candidate_line(&candidate(""), false);
        assert!(text(&line).starts_with("( ) "));
    }

    #[test]
    fn test_municipality_shown_when_different_from_city() {
        assert!(text(&candidate_line(&candidate("Wijdemeren"), false)).ends_with("(Wijdemeren)"));
        assert!(text(&candidate_line(&candidate("Hilversum"), false)).ends_with("1211EP Hilversum"));
    }
}
