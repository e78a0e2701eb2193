//! Text layout of a successful lookup
//!
//! Pure conversion from `PokemonDetail` to styled lines. The renderer only
//! adds the surrounding block and scrolling.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::lookup::{BaseStat, EvolutionStage, PokemonDetail, TypeMatchups};

/// Only the first moves are listed
pub const MAX_MOVES: usize = 8;

const INDENT: &str = "  ";
const LABEL_WIDTH: usize = 18;
const STAT_BAR_MAX: u32 = 255;
const STAT_BAR_WIDTH: u32 = 20;

fn section_style() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

fn label_style() -> Style {
    Style::default().fg(Color::Cyan)
}

fn dim_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Lines for every section of `detail`, wrapped to `width` columns
pub fn detail_lines(detail: &PokemonDetail, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(
            detail.heading(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  #{}", detail.id), dim_style()),
    ]));
    lines.push(labelled("Image", detail.image_url.clone()));
    lines.push(labelled("Types", detail.types.join(", ")));
    lines.push(labelled("Abilities", detail.abilities.join(", ")));

    section(&mut lines, "Description");
    indented_paragraph(&mut lines, &detail.description, width);

    section(&mut lines, "Physical");
    lines.push(labelled_indented("Height", format_height(detail.height)));
    lines.push(labelled_indented("Weight", format_weight(detail.weight)));
    lines.push(labelled_indented(
        "Base experience",
        detail
            .base_experience
            .map(|xp| xp.to_string())
            .unwrap_or_else(|| "unknown".to_string()),
    ));

    section(&mut lines, "Base stats");
    lines.extend(detail.stats.iter().map(stat_line));

    section(&mut lines, "Moves");
    let moves: Vec<&str> = detail
        .moves
        .iter()
        .take(MAX_MOVES)
        .map(String::as_str)
        .collect();
    if moves.is_empty() {
        lines.push(Line::styled(format!("{}None", INDENT), dim_style()));
    } else {
        indented_paragraph(&mut lines, &moves.join(", "), width);
    }

    if let Some(matchups) = &detail.matchups {
        matchup_lines(&mut lines, matchups);
    }

    if let Some(stages) = &detail.evolution {
        evolution_lines(&mut lines, stages);
    }

    lines
}

/// Greedy word wrap by display width
///
/// Words wider than `width` are placed on their own line unbroken.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut wrapped = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            wrapped.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        wrapped.push(current);
    }
    wrapped
}

fn section(lines: &mut Vec<Line<'static>>, title: &str) {
    lines.push(Line::default());
    lines.push(Line::styled(title.to_string(), section_style()));
}

fn labelled(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), label_style()),
        Span::raw(value),
    ])
}

fn labelled_indented(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}{:<width$}", INDENT, label, width = LABEL_WIDTH),
            label_style(),
        ),
        Span::raw(value),
    ])
}

fn indented_paragraph(lines: &mut Vec<Line<'static>>, text: &str, width: usize) {
    let available = width.saturating_sub(INDENT.len());
    lines.extend(
        wrap_text(text, available)
            .into_iter()
            .map(|row| Line::raw(format!("{}{}", INDENT, row))),
    );
}

fn format_height(decimetres: u32) -> String {
    format!("{:.1} m", decimetres as f64 / 10.0)
}

fn format_weight(hectograms: u32) -> String {
    format!("{:.1} kg", hectograms as f64 / 10.0)
}

fn stat_line(stat: &BaseStat) -> Line<'static> {
    let filled = stat.value.min(STAT_BAR_MAX) * STAT_BAR_WIDTH / STAT_BAR_MAX;
    Line::from(vec![
        Span::styled(
            format!("{}{:<width$}", INDENT, stat.name, width = LABEL_WIDTH),
            label_style(),
        ),
        Span::raw(format!("{:>3} ", stat.value)),
        Span::styled("█".repeat(filled as usize), Style::default().fg(Color::Green)),
    ])
}

fn matchup_lines(lines: &mut Vec<Line<'static>>, matchups: &TypeMatchups) {
    section(lines, &format!("Type matchups ({})", matchups.type_name));
    lines.push(labelled_indented(
        "Strong against",
        none_if_empty(&matchups.strong_against),
    ));
    lines.push(labelled_indented(
        "Weak against",
        none_if_empty(&matchups.weak_against),
    ));
}

fn evolution_lines(lines: &mut Vec<Line<'static>>, stages: &[EvolutionStage]) {
    section(lines, "Evolution");
    if stages.is_empty() {
        lines.push(Line::styled(
            format!("{}Does not evolve.", INDENT),
            dim_style(),
        ));
        return;
    }

    for (i, stage) in stages.iter().enumerate() {
        let marker = if i == 0 { "  " } else { "→ " };
        lines.push(Line::from(vec![
            Span::raw(format!("{}{}", INDENT, marker)),
            Span::styled(stage.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" #{}", stage.id), dim_style()),
        ]));
        lines.push(Line::styled(
            format!("{}    {}", INDENT, stage.image_url),
            dim_style(),
        ));
    }
}

fn none_if_empty(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
#[path = "detail_lines_tests.rs"]
mod detail_lines_tests;
