//! Main TUI application loop.
//!
//! Handles:
//! - Key input, translated into session actions and form edits
//! - Dataset loading via the background fetch worker
//! - Redrawing the whole frame every tick

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::adapters::{DiseaseShClient, SyntheticGenerator};
use crate::application::{AlertDesk, Assistant, DataService};
use crate::domain::{Action, Page, Session};
use crate::ports::StatsSource;

use super::ui::{render, PageStates};
use super::worker::{FetchRequest, FetchStatus, FetchWorker, FetchWorkerHandle};

/// Main application state
pub struct App<S = DiseaseShClient>
where
    S: StatsSource + 'static,
{
    /// Gate, page and theme
    session: Session,

    /// Whether the app should quit
    should_quit: bool,

    /// Dataset loading (shared with worker threads)
    data_service: Arc<DataService<S>>,

    /// Chatbot responder
    assistant: Assistant,

    /// Alert subscriptions
    alert_desk: AlertDesk,

    /// Per-page view state
    pages: PageStates,

    /// Fetch in flight, if any
    pending_fetch: Option<FetchWorkerHandle>,

    /// Dataset the UI is waiting for; may differ from the one in flight
    wanted_fetch: Option<FetchRequest>,
}

impl App<DiseaseShClient> {
    /// Create a new application instance using the disease.sh adapter.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        let client =
            DiseaseShClient::new().map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        let config = client.config();
        tracing::info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout.as_secs(),
            "Statistics API configured"
        );

        let history_days = config.history_days;

        let data_service = DataService::new(
            Arc::new(client),
            SyntheticGenerator::new(),
            history_days,
        );

        Ok(Self::with_dependencies(Arc::new(data_service)))
    }
}

impl<S> App<S>
where
    S: StatsSource + 'static,
{
    /// Create application with an injected data service.
    pub fn with_dependencies(data_service: Arc<DataService<S>>) -> Self {
        Self {
            session: Session::new(),
            should_quit: false,
            data_service,
            assistant: Assistant::default(),
            alert_desk: AlertDesk::new(),
            pages: PageStates::default(),
            pending_fetch: None,
            wanted_fetch: None,
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            self.poll_fetch();

            terminal.draw(|f| render(f, &self.session, &self.pages))?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Apply a session action and react to page changes.
    fn dispatch(&mut self, action: Action) {
        if !self.session.apply(action).changed() {
            return;
        }

        if let Action::SelectPage(page) = action {
            self.cancel_fetch();
            if self.pages.chart_mut(page).is_some() {
                self.start_fetch(page);
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        if !self.session.entered() {
            self.handle_gate_key(key);
            return;
        }

        let page = self.session.active_page();
        match key {
            KeyCode::Char('t') if ctrl => self.dispatch(Action::ToggleTheme),
            KeyCode::Tab => self.dispatch(Action::SelectPage(page.next())),
            KeyCode::BackTab => self.dispatch(Action::SelectPage(page.prev())),
            _ if page.takes_text_input() => self.handle_form_key(page, key, ctrl),
            _ => self.handle_page_key(page, key),
        }
    }

    fn handle_gate_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                self.dispatch(Action::EnterSite);
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.dispatch(Action::ToggleTheme);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_page_key(&mut self, page: Page, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.dispatch(Action::ToggleTheme);
            }
            KeyCode::Char(c @ '1'..='8') => {
                let index = c as usize - '1' as usize;
                if let Some(target) = Page::from_index(index) {
                    self.dispatch(Action::SelectPage(target));
                }
            }
            KeyCode::Down | KeyCode::Right => self.select_disease(page, true),
            KeyCode::Up | KeyCode::Left => self.select_disease(page, false),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                if self.pages.chart_mut(page).is_some() {
                    self.cancel_fetch();
                    self.start_fetch(page);
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, page: Page, key: KeyCode, ctrl: bool) {
        match key {
            KeyCode::Enter => self.submit_form(page),
            KeyCode::Esc => {
                if let Some(form) = self.pages.form_mut(page) {
                    form.clear();
                }
            }
            KeyCode::Backspace => {
                if let Some(form) = self.pages.form_mut(page) {
                    form.delete_char();
                }
            }
            // Unbound Ctrl chords are not text.
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(c) => {
                if let Some(form) = self.pages.form_mut(page) {
                    form.input_char(c);
                }
            }
            _ => {}
        }
    }

    fn submit_form(&mut self, page: Page) {
        match page {
            Page::Alerts => {
                let notice = self.alert_desk.subscribe(&self.pages.alerts.input);
                self.pages.alerts.notice = Some(notice);
            }
            Page::Chatbot => {
                let notice = self.assistant.ask(&self.pages.chatbot.input);
                self.pages.chatbot.notice = Some(notice);
            }
            _ => {}
        }
    }

    fn select_disease(&mut self, page: Page, forward: bool) {
        let Some(chart) = self.pages.chart_mut(page) else {
            return;
        };
        chart.disease = if forward {
            chart.disease.next()
        } else {
            chart.disease.prev()
        };
        tracing::debug!(page = %page, disease = %chart.disease, "Disease selected");

        self.cancel_fetch();
        self.start_fetch(page);
    }

    /// Load a fresh dataset for a chart page in the background.
    ///
    /// Only one fetch runs at a time. A request made while another is in
    /// flight waits until that one reports back.
    fn start_fetch(&mut self, page: Page) {
        let Some(chart) = self.pages.chart_mut(page) else {
            return;
        };
        chart.dataset = None;
        chart.loading = true;

        let request = FetchRequest {
            page,
            view: chart.view,
            disease: chart.disease,
        };
        self.wanted_fetch = Some(request);

        if self.pending_fetch.is_none() {
            self.spawn_fetch(request);
        } else {
            tracing::debug!(page = %page, disease = %request.disease, "Fetch queued");
        }
    }

    fn spawn_fetch(&mut self, request: FetchRequest) {
        self.pending_fetch = Some(FetchWorker::spawn(self.data_service.clone(), request));
    }

    /// Stop waiting for the wanted dataset; a running fetch is left to finish
    /// and its result is discarded.
    fn cancel_fetch(&mut self) {
        if let Some(request) = self.wanted_fetch.take() {
            if let Some(chart) = self.pages.chart_mut(request.page) {
                chart.loading = false;
            }
        }
    }

    /// Hand a finished fetch to its page, or start the one queued behind it.
    fn poll_fetch(&mut self) {
        let status = match &self.pending_fetch {
            Some(handle) => handle.poll(),
            None => return,
        };

        let dataset = match status {
            FetchStatus::Pending => return,
            FetchStatus::Done(dataset) => Some(dataset),
            FetchStatus::Lost => {
                tracing::error!("Fetch worker exited without a result");
                None
            }
        };

        let Some(handle) = self.pending_fetch.take() else {
            return;
        };
        let finished = handle.request();

        match self.wanted_fetch {
            Some(wanted) if wanted == finished => {
                self.wanted_fetch = None;
                if let Some(chart) = self.pages.chart_mut(finished.page) {
                    chart.dataset = dataset;
                    chart.loading = false;
                }
            }
            Some(wanted) => self.spawn_fetch(wanted),
            None => {}
        }
    }
}
