//! Presentation surfaces.
//!
//! Pure functions from controller state to terminal panels, re-evaluated
//! every frame. Layout mirrors the web original: header with tagline,
//! search box, result area (cards, rationale, preview, export), footer.

mod cards;
mod export;
mod preview;
mod status;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use fontpair_core::{PairingResult, SearchPhase, SnippetController};

use crate::app::App;
use crate::input::InputState;
use crate::theme::Theme;

const TAGLINE: &str =
    "Enter one font. Get three perfect pairs. Professional font pairings in seconds.";
const FOOTER: &str = "Powered by Google Gemini. Designed for creators.";
const PLACEHOLDER: &str = "Enter a font name (e.g., Lato)";
const KEY_HINTS: &str = "Ctrl+Y copy · Ctrl+T theme · Ctrl+L stylesheets · Esc quit";

pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = app.theme.clone();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        frame.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Length(3), // search box
            Constraint::Min(0),    // content
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], &theme);
    render_search(frame, chunks[1], &theme, &mut app.input, app.pairing.is_loading());
    render_content(frame, chunks[2], &theme, app);
    render_footer(frame, chunks[3], &theme);
}

fn render_header(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::styled("FontPairer", theme.title_style()).centered(),
        Line::styled(TAGLINE, theme.muted_style()).centered(),
        Line::default(),
        Line::styled(KEY_HINTS, theme.muted_style()).centered(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_search(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    input: &mut InputState,
    loading: bool,
) {
    let mut block =
        Block::default().borders(Borders::ALL).border_style(theme.border_style(true));
    if loading {
        block = block.title(Line::styled(" Searching… ", theme.accent_style()));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    input.update_scroll(inner.width as usize);

    if input.content.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(PLACEHOLDER, theme.muted_style())),
            inner,
        );
    } else {
        frame.render_widget(
            Paragraph::new(Line::styled(
                input.visible_content(inner.width as usize).to_string(),
                Style::default().fg(theme.fg),
            )),
            inner,
        );
    }

    let cursor_col = input.cursor_position.saturating_sub(input.scroll_offset) as u16;
    frame.set_cursor_position((inner.x + cursor_col.min(inner.width.saturating_sub(1)), inner.y));
}

fn render_content(frame: &mut Frame, area: Rect, theme: &Theme, app: &App) {
    if app.show_links {
        status::render_links(frame, area, theme, &app.library.links());
        return;
    }

    match app.pairing.phase() {
        SearchPhase::Idle => {}
        SearchPhase::Loading => {
            status::render_loading(frame, area, theme, app.pairing.input_font(), app.launched_at);
        }
        SearchPhase::Failed => {
            status::render_error(frame, area, theme, app.pairing.error().unwrap_or_default());
        }
        SearchPhase::Success => {
            if let Some(result) = app.pairing.result() {
                render_result(frame, area, theme, app.pairing.input_font(), result, &app.snippets);
            }
        }
    }
}

fn render_result(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    input_font: &str,
    result: &PairingResult,
    snippets: &SnippetController,
) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11), // cards + rationale
            Constraint::Length(9),  // visual preview
            Constraint::Min(8),     // export panel
        ])
        .split(area);

    cards::render(frame, sections[0], theme, input_font, result);
    preview::render(frame, sections[1], theme, result);
    export::render(frame, sections[2], theme, snippets);
}

fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(Line::styled(FOOTER, theme.muted_style()).centered()),
        area,
    );
}
