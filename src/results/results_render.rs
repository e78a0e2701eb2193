//! Results pane rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::detail_lines::detail_lines;
use crate::app::{App, Focus};
use crate::lookup::ResultView;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const NOT_FOUND_MESSAGE: &str =
    "Pokemon not found. Please check the name or ID and try again.";
pub const ERROR_MESSAGE: &str = "Error loading Pokemon. Please try again.";
const IDLE_HINT: &str = "Start typing to see matching Pokemon.";

/// Render the results pane
pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) {
    let border_color = if app.focus == Focus::ResultsPane {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Results ")
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    let lines = pane_lines(app, inner.width);
    app.results_scroll.update_bounds(lines.len(), inner.height);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.results_scroll.offset, 0));
    frame.render_widget(paragraph, area);
}

fn pane_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    let message = |text: &'static str, color: Color| vec![Line::styled(text, Style::default().fg(color))];

    match app.lookup.view() {
        ResultView::Idle => message(IDLE_HINT, Color::DarkGray),
        ResultView::Loading => message(LOADING_MESSAGE, Color::Yellow),
        ResultView::NotFound => message(NOT_FOUND_MESSAGE, Color::Red),
        ResultView::Failed => message(ERROR_MESSAGE, Color::Red),
        ResultView::Found => match app.lookup.current() {
            Some(detail) => detail_lines(detail, width),
            None => Vec::new(),
        },
    }
}

#[cfg(test)]
#[path = "results_render_tests.rs"]
mod results_render_tests;
