//! Application state and core logic

use crate::config::TuiConfig;
use crate::postcode::{AddressLookup, PostcodeClient};
use crate::state::{AddressField, AppState, Focus, LookupOutcome};
use crate::store::{AddressBookStore, JsonAddressBook, StoredEntry};
use crate::workflow;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Postcode lookup service, shared with spawned lookups
    lookup_client: Arc<dyn AddressLookup>,
    /// Destination for submitted entries
    book: Box<dyn AddressBookStore>,
    /// Spawned lookups report back through this channel
    lookup_tx: mpsc::UnboundedSender<LookupOutcome>,
    lookup_rx: mpsc::UnboundedReceiver<LookupOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let client = PostcodeClient::new(config)?;
        let book = JsonAddressBook::open(config.address_book_path())?;
        Ok(Self::with_services(Arc::new(client), Box::new(book)))
    }

    /// Create an App on top of the given lookup service and store
    pub fn with_services(
        lookup_client: Arc<dyn AddressLookup>,
        book: Box<dyn AddressBookStore>,
    ) -> Self {
        let (lookup_tx, lookup_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            lookup_client,
            book,
            lookup_tx,
            lookup_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Entries currently in the address book
    pub fn book_entries(&self) -> Vec<StoredEntry> {
        self.book.entries()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle error dialog dismissal first (modal)
        if self.state.has_error() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        if Self::is_reset_key(&key) {
            self.reset_focused_form();
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus_forward();
                return;
            }
            KeyCode::BackTab => {
                self.focus_backward();
                return;
            }
            _ => {}
        }

        match self.state.focus {
            Focus::AddressForm => self.handle_address_form_key(key),
            Focus::Candidates => self.handle_candidates_key(key),
            Focus::PersonalForm => self.handle_personal_form_key(key),
        }
    }

    fn is_reset_key(key: &KeyEvent) -> bool {
        key.code == KeyCode::Char('r')
            && key.modifiers.intersects(crate::platform::RESET_MODIFIERS)
    }

    /// Handle keys in the "Find an address" form
    fn handle_address_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.start_lookup(),
            KeyCode::Char(c) => self.state.address_form.push_char(c),
            KeyCode::Backspace => self.state.address_form.pop_char(),
            KeyCode::Down => self.state.address_form.next_field(),
            KeyCode::Up => self.state.address_form.prev_field(),
            _ => {}
        }
    }

    /// Handle keys in the candidate list
    fn handle_candidates_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.move_cursor_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.move_cursor_up(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.state.select_candidate_at_cursor();
                if self.state.is_focusable(Focus::PersonalForm) {
                    self.state.focus = Focus::PersonalForm;
                    self.state.personal_form.focus_first();
                }
            }
            KeyCode::Esc => self.state.focus = Focus::AddressForm,
            _ => {}
        }
    }

    /// Handle keys in the personal info form
    fn handle_personal_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_entry(),
            KeyCode::Char(c) => self.state.personal_form.push_char(c),
            KeyCode::Backspace => self.state.personal_form.pop_char(),
            KeyCode::Down => self.state.personal_form.next_field(),
            KeyCode::Up => self.state.personal_form.prev_field(),
            KeyCode::Esc => self.state.focus = Focus::Candidates,
            _ => {}
        }
    }

    /// Tab: next field, or the next section after a form's last field
    fn focus_forward(&mut self) {
        match self.state.focus {
            Focus::AddressForm if !self.state.address_form.is_last_field_active() => {
                self.state.address_form.next_field();
            }
            Focus::PersonalForm if !self.state.personal_form.is_last_field_active() => {
                self.state.personal_form.next_field();
            }
            _ => {
                self.state.next_focus();
                match self.state.focus {
                    Focus::AddressForm => self.state.address_form.focus_first(),
                    Focus::PersonalForm => self.state.personal_form.focus_first(),
                    Focus::Candidates => {}
                }
            }
        }
    }

    /// Shift+Tab: previous field, or the previous section before a form's first field
    fn focus_backward(&mut self) {
        match self.state.focus {
            Focus::AddressForm if !self.state.address_form.is_first_field_active() => {
                self.state.address_form.prev_field();
            }
            Focus::PersonalForm if !self.state.personal_form.is_first_field_active() => {
                self.state.personal_form.prev_field();
            }
            _ => {
                self.state.prev_focus();
                match self.state.focus {
                    Focus::AddressForm => self.state.address_form.focus_last(),
                    Focus::PersonalForm => self.state.personal_form.focus_last(),
                    Focus::Candidates => {}
                }
            }
        }
    }

    /// Clear the focused form back to its initial values
    fn reset_focused_form(&mut self) {
        match self.state.focus {
            Focus::AddressForm => self.state.address_form.reset(),
            Focus::PersonalForm => self.state.personal_form.reset(),
            Focus::Candidates => {}
        }
    }

    /// Spawn a lookup for the current zip code and house number.
    ///
    /// The outcome arrives on the lookup channel and is applied by
    /// [`App::poll_lookup_outcomes`]; only the most recently started lookup
    /// can change the candidate list.
    pub fn start_lookup(&mut self) {
        let zip_code = self
            .state
            .address_form
            .value(AddressField::ZipCode)
            .to_string();
        let house_number = self
            .state
            .address_form
            .value(AddressField::HouseNumber)
            .to_string();
        let generation = self.state.begin_lookup();
        let client = Arc::clone(&self.lookup_client);
        let tx = self.lookup_tx.clone();

        tokio::spawn(async move {
            let result = workflow::lookup(client.as_ref(), &zip_code, &house_number).await;
            if tx.send(LookupOutcome { generation, result }).is_err() {
                tracing::debug!("Lookup {} finished after the app closed", generation);
            }
        });
    }

    /// Apply every lookup outcome that has arrived. Returns true if any was applied.
    pub fn poll_lookup_outcomes(&mut self) -> bool {
        let mut applied = false;
        while let Ok(outcome) = self.lookup_rx.try_recv() {
            applied |= self.state.finish_lookup(outcome);
        }
        applied
    }

    /// Submit the selected address with the personal info to the address book
    pub fn submit_entry(&mut self) {
        self.state.dismiss_error();
        self.state.status_message = None;

        let personal_info = self.state.personal_form.values();
        let result = workflow::submit(
            self.book.as_mut(),
            self.state.selected_address_id.as_deref(),
            &personal_info,
            &self.state.candidates,
        );

        match result {
            Ok(entry) => {
                self.state.status_message =
                    Some(format!("Added {} to the address book", entry.full_name()));
            }
            Err(err) => self.state.set_error(err),
        }
    }

    /// Wait for the next lookup outcome and apply it
    #[cfg(test)]
    async fn wait_for_lookup(&mut self) -> bool {
        match self.lookup_rx.recv().await {
            Some(outcome) => self.state.finish_lookup(outcome),
            None => false,
        }
    }
}
