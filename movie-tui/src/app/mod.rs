use omdb::MovieSummary;
use std::time::{Duration, Instant};

use crate::controller::{LookupRequest, Panel, SearchController};
use crate::recents::RecentTerms;
use crate::term_store::TermStore;

mod state;
pub use state::{Focus, TextInput};

pub type Controller = SearchController<Box<dyn TermStore>>;

pub struct App {
    pub running: bool,
    pub controller: Controller,
    pub input: TextInput,
    pub focus: Focus,
    /// Highlighted row in whichever list is showing.
    pub selected_index: usize,
    pub status_message: Option<String>,
    /// Shown in the header, e.g. "OMDb" or "dev catalog".
    pub source_label: String,

    // Loading indicator
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

/// A row of the list panel.
#[derive(Debug, Clone, PartialEq)]
pub enum ListRow<'a> {
    Movie(&'a MovieSummary),
    Term(String),
    LoadMore,
}

impl App {
    pub fn new(store: Box<dyn TermStore>, debounce: Duration, source_label: &str) -> Self {
        Self {
            running: true,
            controller: SearchController::new(RecentTerms::load(store), debounce),
            input: TextInput::new(),
            focus: Focus::Input,
            selected_index: 0,
            status_message: None,
            source_label: source_label.to_string(),
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    fn input_changed(&mut self, now: Instant) {
        self.controller.on_query_changed(&self.input.value, now);
    }

    pub fn input_char(&mut self, c: char, now: Instant) {
        self.input.insert(c);
        self.input_changed(now);
    }

    pub fn input_backspace(&mut self, now: Instant) {
        if self.input.backspace() {
            self.input_changed(now);
        }
    }

    pub fn input_clear(&mut self, now: Instant) {
        if !self.input.value.is_empty() {
            self.input.clear();
            self.input_changed(now);
        }
    }

    /// Search the typed text right away instead of waiting for the debounce.
    pub fn search_now(&mut self) -> Option<LookupRequest> {
        let term = self.input.value.clone();
        self.selected_index = 0;
        self.controller.select_term(&term)
    }

    /// Run a suggested or recent term and mirror it into the input box.
    pub fn search_term(&mut self, term: &str) -> Option<LookupRequest> {
        self.input.set(term);
        self.focus = Focus::Input;
        self.selected_index = 0;
        self.controller.select_term(term)
    }

    pub fn reset(&mut self) -> bool {
        if !self.controller.reset() {
            return false;
        }
        self.input.clear();
        self.focus = Focus::Input;
        self.selected_index = 0;
        true
    }

    /// Terms offered while no query is active: recents matching the typed
    /// text, or the full recents/suggestions list when nothing is typed.
    pub fn suggestion_terms(&self) -> Vec<String> {
        let typed = self.controller.query().trim();
        if typed.is_empty() {
            self.controller.recents().suggestions()
        } else {
            self.controller.recents().matching(typed)
        }
    }

    pub fn rows(&self) -> Vec<ListRow<'_>> {
        match self.controller.panel() {
            Panel::Suggestions => self
                .suggestion_terms()
                .into_iter()
                .map(ListRow::Term)
                .collect(),
            Panel::Results => {
                let mut rows: Vec<ListRow<'_>> = self
                    .controller
                    .results()
                    .iter()
                    .map(ListRow::Movie)
                    .collect();
                if self.controller.can_load_more() {
                    rows.push(ListRow::LoadMore);
                }
                rows
            }
            Panel::Searching | Panel::NoResults { .. } => Vec::new(),
        }
    }

    pub fn select_next(&mut self) {
        let len = self.rows().len();
        if len > 0 && self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Keep the selection inside the list after it shrinks.
    pub fn clamp_selection(&mut self) {
        let len = self.rows().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// Act on the highlighted row.
    pub fn activate_selected(&mut self) -> Option<LookupRequest> {
        let row = self
            .rows()
            .get(self.selected_index)
            .map(|row| match row {
                ListRow::Term(term) => Some(term.clone()),
                ListRow::Movie(_) | ListRow::LoadMore => None,
            });

        match row {
            Some(Some(term)) => self.search_term(&term),
            Some(None) if self.is_load_more_selected() => self.controller.load_next_page(),
            _ => None,
        }
    }

    fn is_load_more_selected(&self) -> bool {
        matches!(self.rows().get(self.selected_index), Some(ListRow::LoadMore))
    }
}
