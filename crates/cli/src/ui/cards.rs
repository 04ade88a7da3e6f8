//! Recommendation cards and the rationale panel.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use fontpair_core::loader::specimen_url;
use fontpair_core::pairing::INPUT_FONT_WEIGHT;
use fontpair_core::{FontRecommendation, FontRole, PairingResult};

use crate::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    input_font: &str,
    result: &PairingResult,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(3)])
        .split(area);

    render_card_row(frame, rows[0], theme, input_font, result);
    render_rationale(frame, rows[1], theme, &result.reasoning);
}

fn render_card_row(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    input_font: &str,
    result: &PairingResult,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let input = FontRecommendation::new(input_font, INPUT_FONT_WEIGHT);
    render_card(frame, columns[0], theme, "Input Font", &input);
    for (i, role) in FontRole::ALL.iter().enumerate() {
        render_card(frame, columns[i + 1], theme, role.label(), result.role(*role));
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    role_label: &str,
    font: &FontRecommendation,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(false))
        .title(Line::styled(format!(" {} ", role_label), theme.muted_style()));

    let lines = vec![
        Line::styled(font.name.clone(), theme.title_style()),
        Line::styled(format!("wght {}", font.weight), theme.muted_style()),
        Line::styled("Ag", theme.accent_style()),
        Line::styled(specimen_url(&font.name), theme.muted_style()),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_rationale(frame: &mut Frame, area: Rect, theme: &Theme, reasoning: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(false))
        .title(Line::styled(" Pairing Rationale ", theme.title_style()));

    let paragraph = Paragraph::new(reasoning.to_string()).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
