//! Export panel with the snippet tabs and copy acknowledgment.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};

use fontpair_core::{SnippetController, SnippetTab, SnippetView};

use crate::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, theme: &Theme, controller: &SnippetController) {
    let hint = if controller.copied_ack() {
        Line::styled(" Copied! ", theme.accent_style())
    } else {
        Line::styled(" Tab switch · Ctrl+Y copy ", theme.muted_style())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(false))
        .title(Line::styled(" Export & Use ", theme.title_style()))
        .title_bottom(hint.right_aligned());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match controller.view() {
        SnippetView::Idle => {}
        SnippetView::Loading => {
            frame.render_widget(
                Paragraph::new(Line::styled("Generating code snippets…", theme.muted_style())),
                inner,
            );
        }
        SnippetView::Error(message) => {
            frame.render_widget(
                Paragraph::new(Line::styled(message.to_string(), theme.error_style())),
                inner,
            );
        }
        SnippetView::Ready(snippets) => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(0)])
                .split(inner);

            let titles: Vec<Line> =
                SnippetTab::ALL.iter().map(|tab| Line::from(tab.label())).collect();
            let selected = match controller.active_tab() {
                SnippetTab::Html => 0,
                SnippetTab::Css => 1,
                SnippetTab::Tailwind => 2,
            };
            let tabs = Tabs::new(titles)
                .select(selected)
                .style(theme.muted_style())
                .highlight_style(theme.accent_style());
            frame.render_widget(tabs, rows[0]);

            let body = Paragraph::new(snippets.tab(controller.active_tab()).to_string())
                .style(Style::default().fg(theme.fg))
                .wrap(Wrap { trim: false });
            frame.render_widget(body, rows[1]);
        }
    }
}
