use std::sync::mpsc::Receiver;

use crate::autocomplete::AutocompleteState;
use crate::catalog::CatalogState;
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::lookup::worker::{LookupRequest, LookupResponse, WorkerHandle};
use crate::lookup::{LookupOutcome, LookupState};
use crate::results::ResultsScroll;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    ResultsPane,
}

/// Application state
///
/// Owns the whole session: search field, cached catalog, suggestion popup,
/// lookup lifecycle, and the channel pair to the lookup worker.
pub struct App {
    pub input: InputState,
    pub focus: Focus,
    pub catalog: CatalogState,
    pub autocomplete: AutocompleteState,
    pub lookup: LookupState,
    pub results_scroll: ResultsScroll,
    pub layout_regions: LayoutRegions,
    /// Shown in place of the help line (config warnings, worker errors)
    pub status_message: Option<String>,
    pub should_quit: bool,
    worker: WorkerHandle,
    response_rx: Receiver<LookupResponse>,
}

impl App {
    pub fn new(worker: WorkerHandle, response_rx: Receiver<LookupResponse>) -> Self {
        Self {
            input: InputState::new(),
            focus: Focus::InputField,
            catalog: CatalogState::new(),
            autocomplete: AutocompleteState::new(),
            lookup: LookupState::new(),
            results_scroll: ResultsScroll::new(),
            layout_regions: LayoutRegions::new(),
            status_message: None,
            should_quit: false,
            worker,
            response_rx,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn query(&self) -> &str {
        self.input.query()
    }

    /// Heading above the search field
    pub fn heading(&self) -> &str {
        self.lookup.heading()
    }

    /// Replace the query text without recomputing suggestions
    pub fn set_query(&mut self, text: &str) {
        self.input.set_text(text);
    }

    /// React to an edit of the query text
    ///
    /// An empty query hides the popup and blanks the results pane; anything
    /// else recomputes the suggestion list from the cached catalog.
    pub fn on_query_changed(&mut self) {
        if self.query().is_empty() {
            self.autocomplete.hide();
            self.lookup.clear_display();
            self.results_scroll.reset();
            return;
        }

        let suggestions = self.catalog.suggestions_for(self.query());
        self.autocomplete.update_suggestions(suggestions);
    }

    /// Move focus to the search field, loading the catalog if needed
    pub fn focus_input(&mut self) {
        self.focus = Focus::InputField;
        self.ensure_catalog_loaded();
    }

    pub fn focus_results(&mut self) {
        self.focus = Focus::ResultsPane;
        self.autocomplete.hide();
    }

    /// Request the catalog unless it is cached or already on its way
    pub fn ensure_catalog_loaded(&mut self) {
        if !self.catalog.needs_load() {
            return;
        }
        if self.worker.send(LookupRequest::LoadCatalog) {
            self.catalog.mark_loading();
        } else {
            log::debug!("Lookup worker unavailable, catalog not requested");
        }
    }

    /// Enter: confirm the highlighted suggestion, if any
    pub fn confirm_selection(&mut self) {
        if let Some(name) = self.autocomplete.confirm() {
            self.select_name(&name);
        }
    }

    /// Mouse: confirm the suggestion at `index`
    pub fn confirm_suggestion_at(&mut self, index: usize) {
        if let Some(name) = self.autocomplete.confirm_index(index) {
            self.select_name(&name);
        }
    }

    fn select_name(&mut self, name: &str) {
        self.set_query(name);
        self.submit_lookup(name);
    }

    /// Ctrl+S: look up whatever is typed
    pub fn search(&mut self) {
        let query = self.query().to_string();
        self.autocomplete.hide();
        self.submit_lookup(&query);
    }

    /// Start a lookup; blank input is ignored
    pub fn submit_lookup(&mut self, raw: &str) {
        let query = raw.trim().to_lowercase();
        if query.is_empty() {
            return;
        }

        let request_id = self.lookup.start_request();
        self.results_scroll.reset();

        let sent = self.worker.send(LookupRequest::Lookup {
            query: query.clone(),
            request_id,
        });
        if !sent {
            log::debug!("Lookup worker unavailable, lookup {} for {} failed", request_id, query);
            self.lookup.apply_response(
                request_id,
                LookupOutcome::Failed {
                    reason: "lookup worker stopped".to_string(),
                },
            );
        }
    }

    /// Ctrl+L: empty everything and return to the search field
    pub fn clear(&mut self) {
        self.set_query("");
        self.autocomplete.hide();
        self.lookup.clear();
        self.results_scroll.reset();
        self.focus_input();
    }

    /// Drain worker responses without blocking
    pub fn poll_responses(&mut self) {
        while let Ok(response) = self.response_rx.try_recv() {
            self.handle_response(response);
        }
    }

    pub fn handle_response(&mut self, response: LookupResponse) {
        match response {
            LookupResponse::Catalog(Ok(names)) => {
                log::debug!("Catalog loaded with {} names", names.len());
                if self.catalog.populate(names) && !self.query().is_empty() {
                    let suggestions = self.catalog.suggestions_for(self.query());
                    self.autocomplete.update_suggestions(suggestions);
                }
            }
            LookupResponse::Catalog(Err(e)) => {
                log::debug!("Catalog load failed: {}", e);
                self.catalog.mark_failed();
            }
            LookupResponse::Lookup {
                request_id,
                outcome,
            } => {
                if self.lookup.apply_response(request_id, outcome) {
                    self.results_scroll.reset();
                }
            }
        }
    }

    /// Stop the lookup worker
    pub fn shutdown(&mut self) {
        self.worker.shutdown();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
