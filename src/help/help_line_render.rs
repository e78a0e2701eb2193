//! Help line rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::{App, Focus};

pub const INPUT_HELP: &str =
    " ↑/↓: Suggestions | Enter: Select | Ctrl+S: Search | Ctrl+L: Clear | Tab: Results | Ctrl+C: Quit";
pub const RESULTS_HELP: &str =
    " j/k: Scroll | PgUp/PgDn: Page | g/G: Top/Bottom | Tab/Esc: Search Field | q: Quit";

/// Render the help line, or the status message when one is set
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let line = if let Some(message) = &app.status_message {
        Paragraph::new(format!(" {}", message)).style(Style::default().fg(Color::Yellow))
    } else {
        let help_text = match app.focus {
            Focus::InputField => INPUT_HELP,
            Focus::ResultsPane => RESULTS_HELP,
        };
        Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray))
    };

    frame.render_widget(line, area);
}
