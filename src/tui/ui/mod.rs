//! UI module: View components for the TUI.
//!
//! [`render`] is a pure function of the session and the per-page state; the
//! app redraws the whole frame on every tick.

pub mod forms;
pub mod info;
pub mod landing;
pub mod map;
pub mod trends;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::domain::{DataView, Disease, DiseaseDataset, Page, Session};
use crate::tui::styles::ThemeStyles;

use forms::FormState;

/// State of a page that shows a dataset.
#[derive(Debug, Clone)]
pub struct ChartPageState {
    pub view: DataView,
    pub disease: Disease,
    pub dataset: Option<DiseaseDataset>,
    pub loading: bool,
}

impl ChartPageState {
    #[must_use]
    pub fn new(view: DataView) -> Self {
        Self {
            view,
            disease: Disease::default(),
            dataset: None,
            loading: false,
        }
    }
}

/// Per-page view state owned by the app.
#[derive(Debug, Clone)]
pub struct PageStates {
    pub dashboard: ChartPageState,
    pub trends: ChartPageState,
    pub alerts: FormState,
    pub chatbot: FormState,
}

impl Default for PageStates {
    fn default() -> Self {
        Self {
            dashboard: ChartPageState::new(DataView::Map),
            trends: ChartPageState::new(DataView::Trend),
            alerts: FormState::default(),
            chatbot: FormState::default(),
        }
    }
}

impl PageStates {
    /// Chart state for `page`, if it shows a dataset.
    pub fn chart_mut(&mut self, page: Page) -> Option<&mut ChartPageState> {
        match page {
            Page::Dashboard => Some(&mut self.dashboard),
            Page::Trends => Some(&mut self.trends),
            _ => None,
        }
    }

    /// Form state for `page`, if it has a text input.
    pub fn form_mut(&mut self, page: Page) -> Option<&mut FormState> {
        match page {
            Page::Alerts => Some(&mut self.alerts),
            Page::Chatbot => Some(&mut self.chatbot),
            _ => None,
        }
    }
}

/// Draw the whole frame.
pub fn render(f: &mut Frame, session: &Session, pages: &PageStates) {
    let styles = ThemeStyles::new(session.theme());
    let area = f.area();

    f.render_widget(Block::default().style(styles.base()), area);

    if !session.entered() {
        landing::render_landing(f, area, &styles);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Navigation
            Constraint::Min(0),    // Page
            Constraint::Length(2), // Key hints
        ])
        .split(area);

    render_header(f, chunks[0], session, &styles);
    render_nav(f, chunks[1], session.active_page(), &styles);

    let content = chunks[2];
    match session.active_page() {
        Page::Home => info::render_home(f, content, &styles),
        Page::Dashboard => map::render_dashboard(f, content, &pages.dashboard, &styles),
        Page::Trends => trends::render_trends(f, content, &pages.trends, &styles),
        Page::Travel => info::render_travel(f, content, &styles),
        Page::Education => info::render_education(f, content, &styles),
        Page::Alerts => forms::render_alerts(f, content, &pages.alerts, &styles),
        Page::About => info::render_about(f, content, &styles),
        Page::Chatbot => forms::render_chatbot(f, content, &pages.chatbot, &styles),
    }

    render_key_hints(f, chunks[3], session.active_page(), &styles);
}

fn render_header(f: &mut Frame, area: Rect, session: &Session, styles: &ThemeStyles) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" Healthcare Global Trends", styles.title()),
        Span::styled(" │ ", styles.text_muted()),
        Span::styled(session.active_page().title(), styles.subtitle()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(styles.border()),
    );
    f.render_widget(title, chunks[0]);

    let theme = Paragraph::new(Line::from(vec![
        Span::styled("Theme: ", styles.text_muted()),
        Span::styled(session.theme().to_string(), styles.text_bold()),
        Span::styled(" [^T]", styles.key_hint()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(styles.border()),
    );
    f.render_widget(theme, chunks[1]);
}

fn render_nav(f: &mut Frame, area: Rect, active: Page, styles: &ThemeStyles) {
    let titles: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| Line::from(format!("{} {}", i + 1, page.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(styles.tab())
        .highlight_style(styles.tab_selected())
        .divider(Span::styled("│", styles.text_muted()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles.border()),
        );

    f.render_widget(tabs, area);
}

fn render_key_hints(f: &mut Frame, area: Rect, page: Page, styles: &ThemeStyles) {
    let mut hints: Vec<(&str, &str)> = vec![("Tab", "Next page")];

    match page {
        Page::Dashboard | Page::Trends => {
            hints.push(("↑/↓", "Disease"));
            hints.push(("R", "Reload"));
        }
        Page::Alerts => {
            hints.push(("Enter", "Subscribe"));
            hints.push(("Esc", "Clear"));
        }
        Page::Chatbot => {
            hints.push(("Enter", "Get Response"));
            hints.push(("Esc", "Clear"));
        }
        _ => {}
    }

    if page.takes_text_input() {
        hints.push(("^T", "Theme"));
        hints.push(("^Q", "Quit"));
    } else {
        hints.push(("1-8", "Jump"));
        hints.push(("T", "Theme"));
        hints.push(("Q", "Quit"));
    }

    let spans: Vec<Span> = hints
        .into_iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(format!(" [{key}] "), styles.key_hint()),
                Span::styled(desc, styles.key_desc()),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(styles.border()),
    );

    f.render_widget(footer, area);
}

/// Loading placeholder shared by the chart pages.
pub(crate) fn render_loading(f: &mut Frame, area: Rect, styles: &ThemeStyles) {
    let p = Paragraph::new(Line::from(Span::styled(
        "Loading data...",
        styles.text_muted(),
    )))
    .alignment(ratatui::layout::Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles.border())
            .style(styles.panel()),
    );
    f.render_widget(p, area);
}

/// Format a count with thousands separators.
#[must_use]
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;

    /// Render one frame into a test buffer.
    pub fn draw(session: &Session, pages: &PageStates) -> Buffer {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).expect("Should create terminal");
        terminal
            .draw(|f| render(f, session, pages))
            .expect("Should draw");
        terminal.backend().buffer().clone()
    }

    /// All cell symbols, row by row.
    pub fn text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{draw, text};
    use super::*;
    use crate::domain::Action;

    fn entered(page: Page) -> Session {
        let mut session = Session::new();
        session.apply(Action::EnterSite);
        session.apply(Action::SelectPage(page));
        session
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(704_753_890), "704,753,890");
    }

    #[test]
    fn test_gate_hides_navigation() {
        let screen = text(&draw(&Session::new(), &PageStates::default()));
        assert!(screen.contains("ENTER SITE"));
        assert!(!screen.contains("Dashboard"));
    }

    #[test]
    fn test_navigation_lists_every_page() {
        let screen = text(&draw(&entered(Page::Home), &PageStates::default()));
        for page in Page::ALL {
            assert!(screen.contains(page.title()), "missing {page}");
        }
        assert!(screen.contains("Theme: Light"));
    }

    #[test]
    fn test_chart_page_shows_loading() {
        let mut pages = PageStates::default();
        pages.trends.loading = true;
        let screen = text(&draw(&entered(Page::Trends), &pages));
        assert!(screen.contains("Loading data..."));
    }
}
