//! Suggestion list and keyboard selection
//!
//! Holds the suggestion list handed over by the same call that triggers a
//! re-render, so navigation always works on what is on screen. The selection
//! is reset whenever the list is replaced.

/// Autocomplete popup state
#[derive(Debug, Clone, Default)]
pub struct AutocompleteState {
    suggestions: Vec<String>,
    /// Highlighted row (None = no selection)
    selected_index: Option<usize>,
    /// First suggestion shown in the popup viewport
    scroll_offset: usize,
    /// Rows the popup could show on the last render (0 = not rendered yet)
    viewport_rows: usize,
}

impl AutocompleteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the suggestion list, clearing selection and highlight
    pub fn update_suggestions(&mut self, suggestions: Vec<String>) {
        self.suggestions = suggestions;
        self.selected_index = None;
        self.scroll_offset = 0;
    }

    /// Clear and hide the suggestion list
    pub fn hide(&mut self) {
        self.update_suggestions(Vec::new());
    }

    /// The popup is shown only while there is something to pick
    pub fn is_visible(&self) -> bool {
        !self.suggestions.is_empty()
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected_index
            .and_then(|i| self.suggestions.get(i))
            .map(String::as_str)
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Move the highlight down, wrapping to the top
    ///
    /// No-op on an empty list.
    pub fn select_next(&mut self) {
        let count = self.suggestions.len();
        if count == 0 {
            return;
        }

        self.selected_index = Some(match self.selected_index {
            Some(current) => (current + 1) % count,
            None => 0,
        });
        self.scroll_to_selected();
    }

    /// Move the highlight up, wrapping to the bottom
    ///
    /// No selection counts as index -1, so the first Up from a fresh list
    /// lands on the second-to-last row (the last row when there is only one).
    /// No-op on an empty list.
    pub fn select_previous(&mut self) {
        let count = self.suggestions.len() as isize;
        if count == 0 {
            return;
        }

        let current = self.selected_index.map_or(-1, |i| i as isize);
        self.selected_index = Some((current - 1 + count).rem_euclid(count) as usize);
        self.scroll_to_selected();
    }

    /// Take the highlighted suggestion, clearing the list
    ///
    /// Returns None, leaving the list untouched, when nothing is highlighted.
    pub fn confirm(&mut self) -> Option<String> {
        let text = self.selected()?.to_string();
        self.hide();
        Some(text)
    }

    /// Take the suggestion at `index`, clearing the list (mouse click)
    pub fn confirm_index(&mut self, index: usize) -> Option<String> {
        let text = self.suggestions.get(index)?.clone();
        self.hide();
        Some(text)
    }

    /// Suggestion index for a row inside the popup viewport
    pub fn index_at_row(&self, row: usize) -> Option<usize> {
        if self.viewport_rows > 0 && row >= self.viewport_rows {
            return None;
        }
        let index = self.scroll_offset + row;
        (index < self.suggestions.len()).then_some(index)
    }

    /// Record how many rows the popup can show
    ///
    /// Only clamps the offset so the viewport stays filled; it never follows
    /// the selection by itself.
    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows;
        let max_offset = self.suggestions.len().saturating_sub(rows.max(1));
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    /// Scroll the smallest distance that brings the highlight into view
    fn scroll_to_selected(&mut self) {
        let Some(selected) = self.selected_index else {
            return;
        };
        if self.viewport_rows == 0 {
            return;
        }

        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + self.viewport_rows {
            self.scroll_offset = selected + 1 - self.viewport_rows;
        }
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
