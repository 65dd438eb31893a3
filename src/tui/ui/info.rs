//! Static pages: Home, Travel, Education, About.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::content::{
    ABOUT_ENTRIES, EDUCATION_ENTRIES, HOME_HEADLINE, HOME_TAGLINE, TRAVEL_ADVISORIES,
};
use crate::tui::styles::ThemeStyles;

fn panel<'a>(title: &'a str, styles: &ThemeStyles) -> Block<'a> {
    Block::default()
        .title(Span::styled(format!(" {title} "), styles.subtitle()))
        .borders(Borders::ALL)
        .border_style(styles.border())
        .style(styles.panel())
}

pub fn render_home(f: &mut Frame, area: Rect, styles: &ThemeStyles) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(7),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(HOME_HEADLINE, styles.title())),
        Line::from(""),
        Line::from(Span::styled(HOME_TAGLINE, styles.text_muted())),
    ])
    .alignment(Alignment::Center)
    .block(panel("Home", styles));

    f.render_widget(content, rows[1]);
}

pub fn render_travel(f: &mut Frame, area: Rect, styles: &ThemeStyles) {
    let lines: Vec<Line> = TRAVEL_ADVISORIES
        .iter()
        .map(|advisory| {
            Line::from(vec![
                Span::styled("  • ", styles.subtitle()),
                Span::styled(*advisory, styles.text()),
            ])
        })
        .collect();

    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel("Travel Advisories", styles));
    f.render_widget(p, area);
}

pub fn render_education(f: &mut Frame, area: Rect, styles: &ThemeStyles) {
    let lines: Vec<Line> = EDUCATION_ENTRIES
        .iter()
        .map(|(disease, summary)| {
            Line::from(vec![
                Span::styled("  • ", styles.subtitle()),
                Span::styled(format!("{disease}: "), styles.text_bold()),
                Span::styled(*summary, styles.text()),
            ])
        })
        .collect();

    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel("Education Center", styles));
    f.render_widget(p, area);
}

pub fn render_about(f: &mut Frame, area: Rect, styles: &ThemeStyles) {
    let lines: Vec<Line> = ABOUT_ENTRIES
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled("  • ", styles.subtitle()),
                Span::styled(format!("{label}: "), styles.text_bold()),
                Span::styled(*value, styles.text()),
            ])
        })
        .collect();

    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel("About This Project", styles));
    f.render_widget(p, area);
}

#[cfg(test)]
mod tests {
    use crate::domain::{Action, Page, Session};
    use crate::tui::ui::test_support::{draw, text};
    use crate::tui::ui::PageStates;

    fn screen(page: Page) -> String {
        let mut session = Session::new();
        session.apply(Action::EnterSite);
        session.apply(Action::SelectPage(page));
        text(&draw(&session, &PageStates::default()))
    }

    #[test]
    fn test_home_copy() {
        let s = screen(Page::Home);
        assert!(s.contains("Empowering Global Healthcare"));
        assert!(s.contains("Smart Health Alerts"));
    }

    #[test]
    fn test_travel_lists_advisories() {
        let s = screen(Page::Travel);
        assert!(s.contains("Dengue outbreak in Southeast Asia"));
        assert!(s.contains("Monkeypox alerts in France, USA"));
    }

    #[test]
    fn test_education_lists_diseases() {
        let s = screen(Page::Education);
        assert!(s.contains("Dengue: Mosquito-borne illness."));
    }

    #[test]
    fn test_about_lists_goal() {
        let s = screen(Page::About);
        assert!(s.contains("Goal: Track global disease trends"));
    }
}
