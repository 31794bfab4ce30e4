//! Application state definitions

use super::address::AddressCandidate;
use super::error::WorkflowError;
use super::forms::{AddressForm, PersonalInfoForm};

/// Section of the screen that receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    AddressForm,
    Candidates,
    PersonalForm,
}

impl Focus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AddressForm => "Find an address",
            Self::Candidates => "Addresses",
            Self::PersonalForm => "Personal info",
        }
    }
}

/// Result of one spawned lookup, tagged with the generation that started it
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub generation: u64,
    pub result: Result<Vec<AddressCandidate>, WorkflowError>,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub focus: Focus,

    // Forms
    pub address_form: AddressForm,
    pub personal_form: PersonalInfoForm,

    // Candidates from the latest applied lookup
    pub candidates: Vec<AddressCandidate>,
    pub candidate_cursor: usize,
    pub selected_address_id: Option<String>,

    // Feedback
    pub error: Option<WorkflowError>,
    pub status_message: Option<String>,

    // Lookup tracking
    lookup_generation: u64,
    lookup_in_flight: bool,
}

impl AppState {
    /// Start a lookup attempt. Clears the previous error and returns the
    /// generation the outcome must carry to be applied.
    pub fn begin_lookup(&mut self) -> u64 {
        self.error = None;
        self.status_message = None;
        self.lookup_generation += 1;
        self.lookup_in_flight = true;
        self.lookup_generation
    }

    /// Apply a lookup outcome if it belongs to the most recently started
    /// lookup. Returns false when the outcome was superseded and dropped.
    pub fn finish_lookup(&mut self, outcome: LookupOutcome) -> bool {
        if outcome.generation != self.lookup_generation {
            tracing::debug!(
                "Discarding lookup outcome {} (latest is {})",
                outcome.generation,
                self.lookup_generation
            );
            return false;
        }

        self.lookup_in_flight = false;
        match outcome.result {
            Ok(candidates) => {
                self.replace_candidates(candidates);
                self.focus = Focus::Candidates;
            }
            Err(err) => self.set_error(err),
        }
        true
    }

    pub fn is_lookup_in_flight(&self) -> bool {
        self.lookup_in_flight
    }

    /// Replace the candidate list. Any selection refers to the old list, so it is cleared.
    pub fn replace_candidates(&mut self, candidates: Vec<AddressCandidate>) {
        self.candidates = candidates;
        self.candidate_cursor = 0;
        self.selected_address_id = None;
        if self.focus == Focus::PersonalForm {
            self.focus = Focus::Candidates;
        }
    }

    /// Record the chosen candidate id. Validated at submission time.
    pub fn select_address(&mut self, id: impl Into<String>) {
        self.selected_address_id = Some(id.into());
    }

    /// Select the candidate under the cursor
    pub fn select_candidate_at_cursor(&mut self) {
        if let Some(id) = self
            .candidates
            .get(self.candidate_cursor)
            .map(|c| c.id.clone())
        {
            self.select_address(id);
        }
    }

    pub fn selected_candidate(&self) -> Option<&AddressCandidate> {
        let id = self.selected_address_id.as_deref()?;
        self.candidates.iter().find(|c| c.id == id)
    }

    pub fn is_selected(&self, candidate: &AddressCandidate) -> bool {
        self.selected_address_id.as_deref() == Some(candidate.id.as_str())
    }

    /// Move candidate cursor down
    pub fn move_cursor_down(&mut self) {
        let max = self.candidates.len();
        if max > 0 && self.candidate_cursor < max - 1 {
            self.candidate_cursor += 1;
        }
    }

    /// Move candidate cursor up
    pub fn move_cursor_up(&mut self) {
        if self.candidate_cursor > 0 {
            self.candidate_cursor -= 1;
        }
    }

    /// Whether a section can currently take focus
    pub fn is_focusable(&self, focus: Focus) -> bool {
        match focus {
            Focus::AddressForm => true,
            Focus::Candidates => !self.candidates.is_empty(),
            Focus::PersonalForm => self.selected_address_id.is_some(),
        }
    }

    /// Cycle focus forward through the sections that can take it
    pub fn next_focus(&mut self) {
        let order = [Focus::AddressForm, Focus::Candidates, Focus::PersonalForm];
        let start = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        for step in 1..=order.len() {
            let candidate = order[(start + step) % order.len()];
            if self.is_focusable(candidate) {
                self.focus = candidate;
                return;
            }
        }
    }

    /// Cycle focus backward through the sections that can take it
    pub fn prev_focus(&mut self) {
        let order = [Focus::AddressForm, Focus::Candidates, Focus::PersonalForm];
        let start = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        for step in 1..=order.len() {
            let candidate = order[(start + order.len() - step) % order.len()];
            if self.is_focusable(candidate) {
                self.focus = candidate;
                return;
            }
        }
    }

    pub fn set_error(&mut self, error: WorkflowError) {
        self.error = Some(error);
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, city: &str) -> AddressCandidate {
        AddressCandidate {
            id: id.to_string(),
            street: "Dorpsstraat".to_string(),
            house_number: "60".to_string(),
            postcode: "1211EP".to_string(),
            city: city.to_string(),
            municipality: String::new(),
            province: String::new(),
        }
    }

    mod lookup_generations {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_begin_lookup_clears_error() {
            let mut state = AppState::default();
            state.set_error(WorkflowError::NoResults);
            state.begin_lookup();
            assert!(!state.has_error());
            assert!(state.is_lookup_in_flight());
        }

        #[test]
        fn test_latest_lookup_is_applied() {
            let mut state = AppState::default();
            let generation = state.begin_lookup();
            let applied = state.finish_lookup(LookupOutcome {
                generation,
                result: Ok(vec![candidate("a", "Town")]),
            });
            assert!(applied);
            assert!(!state.is_lookup_in_flight());
            assert_eq!(state.candidates.len(), 1);
            assert_eq!(state.focus, Focus::Candidates);
        }

        #[test]
        fn test_superseded_lookup_finishing_last_is_discarded() {
            let mut state = AppState::default();
            let first = state.begin_lookup();
            let second = state.begin_lookup();

            assert!(state.finish_lookup(LookupOutcome {
                generation: second,
                result: Ok(vec![candidate("new", "Newtown")]),
            }));
            assert!(!state.finish_lookup(LookupOutcome {
                generation: first,
                result: Ok(vec![candidate("old", "Oldtown")]),
            }));

            assert_eq!(state.candidates, vec![candidate("new", "Newtown")]);
        }

        #[test]
        fn test_superseded_lookup_finishing_first_is_discarded() {
            let mut state = AppState::default();
            let first = state.begin_lookup();
            let second = state.begin_lookup();

            assert!(!state.finish_lookup(LookupOutcome {
                generation: first,
                result: Err(WorkflowError::NoResults),
            }));
            assert!(state.is_lookup_in_flight());
            assert!(!state.has_error());

            assert!(state.finish_lookup(LookupOutcome {
                generation: second,
                result: Ok(vec![candidate("new", "Newtown")]),
            }));
            assert_eq!(state.candidates[0].id, "new");
        }

        #[test]
        fn test_failed_lookup_keeps_previous_candidates() {
            let mut state = AppState::default();
            state.replace_candidates(vec![candidate("a", "Town")]);
            state.select_address("a");

            let generation = state.begin_lookup();
            state.finish_lookup(LookupOutcome {
                generation,
                result: Err(WorkflowError::TransportFailure("timeout".to_string())),
            });

            assert_eq!(state.candidates.len(), 1);
            assert_eq!(state.selected_address_id.as_deref(), Some("a"));
            assert_eq!(
                state.error,
                Some(WorkflowError::TransportFailure("timeout".to_string()))
            );
        }
    }

    mod selection {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_replace_candidates_clears_selection() {
            let mut state = AppState::default();
            state.replace_candidates(vec![candidate("a", "Town"), candidate("b", "Town")]);
            state.select_address("b");
            state.focus = Focus::PersonalForm;

            state.replace_candidates(vec![candidate("c", "Elsewhere")]);

            assert!(state.selected_address_id.is_none());
            assert_eq!(state.candidate_cursor, 0);
            assert_eq!(state.focus, Focus::Candidates);
        }

        #[test]
        fn test_select_candidate_at_cursor() {
            let mut state = AppState::default();
            state.replace_candidates(vec![candidate("a", "Town"), candidate("b", "Town")]);
            state.move_cursor_down();
            state.select_candidate_at_cursor();
            assert_eq!(state.selected_candidate().map(|c| c.id.as_str()), Some("b"));
            assert!(state.is_selected(&state.candidates[1]));
            assert!(!state.is_selected(&state.candidates[0]));
        }

        #[test]
        fn test_select_at_cursor_with_no_candidates_is_noop() {
            let mut state = AppState::default();
            state.select_candidate_at_cursor();
            assert!(state.selected_address_id.is_none());
        }

        #[test]
        fn test_cursor_is_clamped() {
            let mut state = AppState::default();
            state.replace_candidates(vec![candidate("a", "Town"), candidate("b", "Town")]);
            state.move_cursor_up();
            assert_eq!(state.candidate_cursor, 0);
            state.move_cursor_down();
            state.move_cursor_down();
            assert_eq!(state.candidate_cursor, 1);
        }

        #[test]
        fn test_stale_selection_has_no_candidate() {
            let mut state = AppState::default();
            state.replace_candidates(vec![candidate("a", "Town")]);
            state.select_address("zzz");
            assert!(state.selected_candidate().is_none());
        }
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_only_address_form_without_candidates() {
            let mut state = AppState::default();
            state.next_focus();
            assert_eq!(state.focus, Focus::AddressForm);
            state.prev_focus();
            assert_eq!(state.focus, Focus::AddressForm);
        }

        #[test]
        fn test_personal_form_requires_selection() {
            let mut state = AppState::default();
            state.replace_candidates(vec![candidate("a", "Town")]);
            state.focus = Focus::AddressForm;

            state.next_focus();
            assert_eq!(state.focus, Focus::Candidates);
            state.next_focus();
            assert_eq!(state.focus, Focus::AddressForm);

            state.select_address("a");
            state.focus = Focus::Candidates;
            state.next_focus();
            assert_eq!(state.focus, Focus::PersonalForm);
        }

        #[test]
        fn test_prev_focus_goes_backward() {
            let mut state = AppState::default();
            state.replace_candidates(vec![candidate("a", "Town")]);
            state.select_address("a");
            state.focus = Focus::AddressForm;
            state.prev_focus();
            assert_eq!(state.focus, Focus::PersonalForm);
        }
    }
}
