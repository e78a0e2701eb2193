//! Mouse click handling
//!
//! Clicking a suggestion selects it; clicking anywhere outside the popup
//! dismisses it.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::Suggestions) => click_suggestions(app, mouse),
        Some(Region::InputField) => app.focus_input(),
        Some(Region::ResultsPane) => app.focus_results(),
        Some(Region::Header) | Some(Region::HelpLine) | None => app.autocomplete.hide(),
    }
}

fn click_suggestions(app: &mut App, mouse: MouseEvent) {
    let Some(area) = app.layout_regions.suggestions else {
        return;
    };

    // First list row sits just inside the top border
    let first_row = area.y + 1;
    if mouse.row < first_row {
        return;
    }

    let row = (mouse.row - first_row) as usize;
    if let Some(index) = app.autocomplete.index_at_row(row) {
        app.confirm_suggestion_at(index);
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
