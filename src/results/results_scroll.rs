/// Vertical scroll position of the results pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultsScroll {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
}

impl ResultsScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the scroll limit after the content or pane size changed
    pub fn update_bounds(&mut self, content_lines: usize, viewport_height: u16) {
        self.viewport_height = viewport_height;

        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_lines
            .saturating_sub(viewport_height as usize)
            .min(u16::MAX as usize) as u16;

        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height.max(1));
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height.max(1));
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}
