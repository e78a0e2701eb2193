use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

pub const PLACEHOLDER: &str = "Enter a Pokemon name or ID";

/// Single-line search field
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(PLACEHOLDER);

        Self { textarea }
    }

    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the whole field and put the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(single_line(text));
    }

    /// Feed an editing key to the field; returns true when the text changed
    ///
    /// Keys that would add a second line are dropped.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if inserts_newline(&key) {
            return false;
        }
        self.textarea.input(key)
    }

    pub fn insert_paste(&mut self, text: &str) -> bool {
        self.textarea.insert_str(single_line(text))
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn inserts_newline(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn single_line(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{key, key_with_mods};

    fn typed(text: &str) -> InputState {
        let mut input = InputState::new();
        for c in text.chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        input
    }

    #[test]
    fn test_typing_builds_query() {
        let input = typed("pika");
        assert_eq!(input.query(), "pika");
    }

    #[test]
    fn test_handle_key_reports_change() {
        let mut input = typed("pika");
        assert!(input.handle_key(key(KeyCode::Backspace)));
        assert_eq!(input.query(), "pik");
        assert!(!input.handle_key(key(KeyCode::Left)));
    }

    #[test]
    fn test_newline_keys_are_dropped() {
        let mut input = typed("pika");
        assert!(!input.handle_key(key(KeyCode::Enter)));
        assert!(!input.handle_key(key_with_mods(KeyCode::Char('m'), KeyModifiers::CONTROL)));
        assert!(!input.handle_key(key_with_mods(KeyCode::Char('j'), KeyModifiers::CONTROL)));
        assert_eq!(input.textarea.lines().len(), 1);
        assert_eq!(input.query(), "pika");
    }

    #[test]
    fn test_set_text_replaces_everything() {
        let mut input = typed("pika");
        input.textarea.move_cursor(CursorMove::Head);

        input.set_text("raichu");

        assert_eq!(input.query(), "raichu");
        assert_eq!(input.textarea.cursor(), (0, 6));
    }

    #[test]
    fn test_set_text_empty_clears() {
        let mut input = typed("pika");
        input.set_text("");
        assert_eq!(input.query(), "");
    }

    #[test]
    fn test_paste_strips_line_breaks() {
        let mut input = InputState::new();
        assert!(input.insert_paste("mew\r\ntwo"));
        assert_eq!(input.query(), "mewtwo");
        assert_eq!(input.textarea.lines().len(), 1);
    }
}
