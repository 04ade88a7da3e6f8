//! Loading, error, and loaded-stylesheet panels.
//!
//! The loading panel mirrors the web original's pulsing skeleton: four card
//! placeholders over a wide rationale placeholder, shaded from the time the
//! search started.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use fontpair_core::FontLink;

use crate::theme::Theme;

const PULSE_FRAMES: [char; 4] = ['░', '▒', '▓', '▒'];

pub fn render_loading(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    font_name: &str,
    started: Instant,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status line
            Constraint::Length(5), // card placeholders
            Constraint::Length(4), // rationale placeholder
            Constraint::Min(0),
        ])
        .split(area);

    let elapsed = started.elapsed();
    let dots = ".".repeat((elapsed.as_millis() / 500) as usize % 4);
    frame.render_widget(
        Paragraph::new(Line::styled(
            format!("Finding pairings for \"{font_name}\"{dots}"),
            theme.accent_style(),
        ))
        .centered(),
        rows[0],
    );

    let shade = PULSE_FRAMES[(elapsed.as_millis() / 300) as usize % PULSE_FRAMES.len()];
    render_placeholder_row(frame, rows[1], theme, shade, 4);
    render_placeholder_row(frame, rows[2], theme, shade, 1);
}

fn render_placeholder_row(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    shade: char,
    count: u32,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); count as usize])
        .split(area);

    for column in columns.iter() {
        let block =
            Block::default().borders(Borders::ALL).border_style(theme.border_style(false));
        let inner = block.inner(*column);
        frame.render_widget(block, *column);

        let fill = shade.to_string().repeat(inner.width as usize);
        let lines: Vec<Line> =
            (0..inner.height).map(|_| Line::styled(fill.clone(), theme.muted_style())).collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

pub fn render_error(frame: &mut Frame, area: Rect, theme: &Theme, message: &str) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let block = Block::default().borders(Borders::ALL).border_style(theme.error_style());
    let paragraph = Paragraph::new(message.to_string())
        .style(theme.error_style())
        .block(block)
        .centered()
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, rows[0]);
}

pub fn render_links(frame: &mut Frame, area: Rect, theme: &Theme, links: &[FontLink]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(false))
        .title(Line::styled(" Loaded Stylesheets ", theme.title_style()));

    if links.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "No stylesheets registered yet. Run a search first.",
                theme.muted_style(),
            ))
            .block(block),
            area,
        );
        return;
    }

    let mut lines = Vec::with_capacity(links.len() * 2 + 2);
    lines.push(Line::styled(
        format!("{} stylesheet references this session", links.len()),
        theme.muted_style(),
    ));
    lines.push(Line::default());
    for link in links {
        lines.push(Line::from(vec![
            Span::styled(link.id.clone(), theme.accent_style()),
            Span::styled(format!("  {} wght {}", link.family, link.weight), theme.muted_style()),
        ]));
        lines.push(Line::styled(format!("  {}", link.css_url), theme.muted_style()));
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
