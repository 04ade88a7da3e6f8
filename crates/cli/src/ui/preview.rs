//! Visual preview panel.
//!
//! A terminal cannot change typefaces, so each sample line is labeled with
//! the family and weight that would drive it on a real page.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use fontpair_core::PairingResult;

use crate::theme::Theme;

const HEADLINE_SAMPLE: &str = "The Quick Brown Fox Jumps Over";
const ACCENT_SAMPLE: &str = "A story of typography and design";
const BODY_SAMPLE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed non \
    risus. Suspendisse lectus tortor, dignissim sit amet, adipiscing nec, ultricies sed, dolor. \
    Cras elementum ultrices diam.";

pub fn render(frame: &mut Frame, area: Rect, theme: &Theme, result: &PairingResult) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(false))
        .title(Line::styled(" Visual Preview ", theme.title_style()));

    let lines = vec![
        Line::styled(HEADLINE_SAMPLE, theme.title_style()),
        Line::styled(
            format!("Headline · {} {}", result.headline.name, result.headline.weight),
            theme.muted_style(),
        ),
        Line::styled(
            ACCENT_SAMPLE,
            Style::default().fg(theme.primary).add_modifier(Modifier::ITALIC),
        ),
        Line::styled(
            format!("Accent · {} {}", result.accent.name, result.accent.weight),
            theme.muted_style(),
        ),
        Line::styled(
            format!("Body · {} {}", result.body.name, result.body.weight),
            theme.muted_style(),
        ),
        Line::from(BODY_SAMPLE),
    ];

    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}
