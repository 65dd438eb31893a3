//! Landing gate shown before any page is reachable.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::content::GATE_TAGLINE;
use crate::tui::styles::ThemeStyles;

const GLOBE: &str = r#"
   .-'';'-.
 ,'   <_,-.`.
/)   ,--,_>\_\
|'   (      \_ |
|_    `-.    / |
 \`-.   ;  _(`/
  `.(    \/ ,'
    `-....-'
"#;

pub fn render_landing(f: &mut Frame, area: Rect, styles: &ThemeStyles) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Length(18),
            Constraint::Min(0),
        ])
        .split(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(rows[1]);

    let mut lines: Vec<Line> = GLOBE
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), styles.subtitle())))
        .collect();

    lines.extend([
        Line::from(Span::styled("Healthcare Global Trends", styles.title())),
        Line::from(""),
        Line::from(Span::styled(GATE_TAGLINE, styles.text())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter] ", styles.key_hint()),
            Span::styled("ENTER SITE", styles.text_bold()),
        ]),
        Line::from(vec![
            Span::styled("[T] ", styles.key_hint()),
            Span::styled("Theme  ", styles.key_desc()),
            Span::styled("[Q] ", styles.key_hint()),
            Span::styled("Quit", styles.key_desc()),
        ]),
    ]);

    let banner = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles.border_focused())
            .style(styles.panel()),
    );

    f.render_widget(banner, cols[1]);
}
