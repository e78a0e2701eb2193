use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Lines moved by J/K
pub const FAST_SCROLL_LINES: u16 = 10;

pub fn handle_results_pane_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.focus_input();
        }

        KeyCode::Char('q') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        KeyCode::Up | KeyCode::Char('k') => {
            app.results_scroll.scroll_up(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.results_scroll.scroll_down(1);
        }

        KeyCode::Char('K') => {
            app.results_scroll.scroll_up(FAST_SCROLL_LINES);
        }
        KeyCode::Char('J') => {
            app.results_scroll.scroll_down(FAST_SCROLL_LINES);
        }

        KeyCode::PageUp => {
            app.results_scroll.page_up();
        }
        KeyCode::PageDown => {
            app.results_scroll.page_down();
        }

        KeyCode::Char('g') | KeyCode::Home => {
            app.results_scroll.jump_to_top();
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.results_scroll.jump_to_bottom();
        }

        _ => {}
    }
}

#[cfg(test)]
#[path = "results_events_tests.rs"]
mod results_events_tests;
