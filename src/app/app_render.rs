use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (header_area, input_area, results_area, help_area) =
            (layout[0], layout[1], layout[2], layout[3]);

        self.render_header(frame, header_area);
        crate::input::input_render::render_field(self, frame, input_area);
        crate::results::results_render::render_pane(self, frame, results_area);
        crate::help::help_line_render::render_line(self, frame, help_area);

        // Popup last so it overlays the results pane
        let suggestions_area =
            crate::autocomplete::autocomplete_render::render_popup(self, frame, input_area);

        self.layout_regions.header = Some(header_area);
        self.layout_regions.input_field = Some(input_area);
        self.layout_regions.results_pane = Some(results_area);
        self.layout_regions.help_line = Some(help_area);
        self.layout_regions.suggestions = suggestions_area;
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Pokédex ")
            .border_style(Style::default().fg(Color::Red));

        let heading = Paragraph::new(self.heading().to_string())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .block(block);

        frame.render_widget(heading, area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
