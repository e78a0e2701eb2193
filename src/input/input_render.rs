//! Input field rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

use crate::app::{App, Focus};

/// Render the search field
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::InputField;

    // Border color and cursor only when focused
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let cursor_style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    let title = if app.catalog.is_loading() {
        " Search (loading names…) "
    } else {
        " Search "
    };

    let textarea = &mut app.input.textarea;
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color)),
    );
    textarea.set_cursor_style(cursor_style);
    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(&*textarea, area);
}
