//! Lookup lifecycle state
//!
//! Tracks the request generation so only the newest lookup can change what
//! the results pane shows, plus the current entity and heading.

use super::detail::PokemonDetail;
use super::pipeline::LookupOutcome;

/// Heading shown when no entity is current
pub const DEFAULT_HEADING: &str = "Gotta Catch 'Em All!";

/// What the results pane displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultView {
    #[default]
    Idle,
    Loading,
    /// Shows the current entity
    Found,
    NotFound,
    Failed,
}

/// Lookup state owned by the session controller
#[derive(Debug, Clone, Default)]
pub struct LookupState {
    /// Generation of the newest lookup, incremented per request
    request_id: u64,
    /// Generation still waiting for a response, if any
    in_flight_request_id: Option<u64>,
    view: ResultView,
    /// Most recent successful lookup
    current: Option<PokemonDetail>,
    /// Overrides the default heading after a successful lookup
    heading: Option<String>,
}

impl LookupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ResultView {
        self.view
    }

    pub fn current(&self) -> Option<&PokemonDetail> {
        self.current.as_ref()
    }

    pub fn heading(&self) -> &str {
        self.heading.as_deref().unwrap_or(DEFAULT_HEADING)
    }

    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    /// Begin a new lookup and return its generation
    ///
    /// Responses for any earlier generation are discarded from now on.
    pub fn start_request(&mut self) -> u64 {
        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight_request_id = Some(self.request_id);
        self.view = ResultView::Loading;
        self.request_id
    }

    /// Apply a pipeline outcome
    ///
    /// Returns false without touching any state when `request_id` is stale.
    pub fn apply_response(&mut self, request_id: u64, outcome: LookupOutcome) -> bool {
        if request_id != self.request_id {
            log::debug!(
                "Discarding stale lookup response {} (current: {})",
                request_id,
                self.request_id
            );
            return false;
        }

        self.in_flight_request_id = None;
        match outcome {
            LookupOutcome::Found(detail) => {
                self.heading = Some(detail.heading());
                self.current = Some(*detail);
                self.view = ResultView::Found;
            }
            LookupOutcome::NotFound { query } => {
                log::debug!("No Pokemon matches {}", query);
                self.heading = None;
                self.view = ResultView::NotFound;
            }
            LookupOutcome::Failed { reason } => {
                log::debug!("Lookup {} failed: {}", request_id, reason);
                self.view = ResultView::Failed;
            }
        }
        true
    }

    /// Blank the results pane and reset the heading (query emptied)
    ///
    /// Also retires any in-flight lookup so it cannot repopulate the pane.
    pub fn clear_display(&mut self) {
        if self.in_flight_request_id.take().is_some() {
            self.request_id = self.request_id.wrapping_add(1);
        }
        self.view = ResultView::Idle;
        self.heading = None;
    }

    /// Clear action: blank the display and forget the current entity
    pub fn clear(&mut self) {
        self.clear_display();
        self.current = None;
    }
}

#[cfg(test)]
#[path = "lookup_state_tests.rs"]
mod lookup_state_tests;
