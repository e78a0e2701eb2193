//! Session-scoped catalog index
//!
//! Tracks whether the name list has been requested and holds it once it
//! arrives. The list is only ever populated once; later arrivals are ignored.

use super::filter::filter_suggestions;

/// Load status of the catalog index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    /// Nothing requested yet
    #[default]
    Empty,
    /// Request sent, waiting for the worker
    Loading,
    /// Names available
    Ready,
    /// Last request failed; the next focus of the search field retries
    Failed,
}

/// Catalog index cache
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    names: Vec<String>,
    status: CatalogStatus,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> CatalogStatus {
        self.status
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.status == CatalogStatus::Loading
    }

    /// Whether a catalog request should be sent now
    ///
    /// False once names are cached or while a request is in flight.
    pub fn needs_load(&self) -> bool {
        self.names.is_empty() && self.status != CatalogStatus::Loading
    }

    pub fn mark_loading(&mut self) {
        self.status = CatalogStatus::Loading;
    }

    /// Store the fetched names
    ///
    /// Returns false (and keeps the existing index) if the cache was already
    /// populated.
    pub fn populate(&mut self, names: Vec<String>) -> bool {
        if !self.names.is_empty() {
            log::debug!("Ignoring catalog response, index already populated");
            return false;
        }
        self.names = names;
        self.status = if self.names.is_empty() {
            CatalogStatus::Failed
        } else {
            CatalogStatus::Ready
        };
        true
    }

    pub fn mark_failed(&mut self) {
        if self.names.is_empty() {
            self.status = CatalogStatus::Failed;
        }
    }

    /// Suggestions for the current query text
    pub fn suggestions_for(&self, query: &str) -> Vec<String> {
        filter_suggestions(query, &self.names)
    }
}

#[cfg(test)]
#[path = "catalog_state_tests.rs"]
mod catalog_state_tests;
