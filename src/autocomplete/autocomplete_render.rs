//! Autocomplete popup rendering
//!
//! Draws the suggestion list directly under the search field.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::catalog::MAX_SUGGESTIONS;
use crate::widgets::popup;

// Autocomplete popup display constants
const MIN_POPUP_WIDTH: u16 = 20;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 1;

/// Render the suggestion popup below the input field
///
/// Returns the popup area, or None when nothing was drawn.
pub fn render_popup(app: &mut App, frame: &mut Frame, input_area: Rect) -> Option<Rect> {
    let count = app.autocomplete.suggestions().len();
    if count == 0 {
        return None;
    }

    let visible_count = count.min(MAX_SUGGESTIONS) as u16;
    let max_text_width = app
        .autocomplete
        .suggestions()
        .iter()
        .map(|s| s.width())
        .max()
        .unwrap_or(0) as u16;
    let popup_width = (max_text_width + POPUP_PADDING).max(MIN_POPUP_WIDTH);
    let popup_height = visible_count + POPUP_BORDER_HEIGHT;

    let popup_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
    )?;
    let rows = popup_area.height.saturating_sub(POPUP_BORDER_HEIGHT) as usize;
    if rows == 0 {
        return None;
    }

    app.autocomplete.set_viewport_rows(rows);
    let state = &app.autocomplete;
    let offset = state.scroll_offset();

    let items: Vec<ListItem> = state
        .suggestions()
        .iter()
        .enumerate()
        .skip(offset)
        .take(rows)
        .map(|(i, name)| {
            let line = if state.selected_index() == Some(i) {
                // Highlight selected item with high contrast colors
                Line::from(Span::styled(
                    format!("► {}", name),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", name),
                    Style::default().fg(Color::White).bg(Color::Black),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, popup_area);

    Some(popup_area)
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
