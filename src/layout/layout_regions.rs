use ratatui::layout::Rect;

/// Screen regions captured during the last render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub header: Option<Rect>,
    pub input_field: Option<Rect>,
    pub results_pane: Option<Rect>,
    pub help_line: Option<Rect>,
    /// Only set while the suggestion popup is drawn
    pub suggestions: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Header,
    InputField,
    ResultsPane,
    HelpLine,
    Suggestions,
}
