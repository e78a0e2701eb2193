use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::{App, Focus};
use super::mouse_click;
use crate::layout::{Region, region_at};
use crate::results::results_events;

const WHEEL_SCROLL_LINES: u16 = 3;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => self.handle_paste(&text),
            Event::FocusGained if self.focus == Focus::InputField => {
                self.ensure_catalog_loaded();
            }
            _ => {}
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Try global keys first
        if self.handle_global_keys(key) {
            return;
        }

        // Not a global key, delegate to focused pane
        match self.focus {
            Focus::InputField => self.handle_input_field_key(key),
            Focus::ResultsPane => results_events::handle_results_pane_key(self, key),
        }
    }

    /// Handle global keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('s') if ctrl => {
                self.search();
                true
            }
            KeyCode::Char('l') if ctrl => {
                self.clear();
                true
            }
            KeyCode::Tab | KeyCode::BackTab => {
                match self.focus {
                    Focus::InputField => self.focus_results(),
                    Focus::ResultsPane => self.focus_input(),
                }
                true
            }
            _ => false,
        }
    }

    /// Handle keys when the search field is focused
    fn handle_input_field_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down => self.autocomplete.select_next(),
            KeyCode::Up => self.autocomplete.select_previous(),
            KeyCode::Enter => self.confirm_selection(),
            KeyCode::Esc => self.autocomplete.hide(),
            _ => {
                if self.input.handle_key(key) {
                    self.on_query_changed();
                }
            }
        }
    }

    fn handle_paste(&mut self, text: &str) {
        if self.focus != Focus::InputField {
            return;
        }
        if self.input.insert_paste(text) {
            self.on_query_changed();
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = region_at(&self.layout_regions, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                mouse_click::handle_click(self, region, mouse);
            }
            MouseEventKind::ScrollDown if region == Some(Region::ResultsPane) => {
                self.results_scroll.scroll_down(WHEEL_SCROLL_LINES);
            }
            MouseEventKind::ScrollUp if region == Some(Region::ResultsPane) => {
                self.results_scroll.scroll_up(WHEEL_SCROLL_LINES);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
