//! Text-input pages: Alerts subscription and the health chatbot.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::Notice;
use crate::tui::styles::ThemeStyles;

/// Longest accepted input, in characters.
pub const MAX_INPUT_CHARS: usize = 256;

/// A single-line input with the last action's notice.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub input: String,
    pub notice: Option<Notice>,
}

impl FormState {
    /// Append a typed character.
    pub fn input_char(&mut self, c: char) {
        if !c.is_control() && self.input.chars().count() < MAX_INPUT_CHARS {
            self.input.push(c);
        }
    }

    /// Delete the last character.
    pub fn delete_char(&mut self) {
        self.input.pop();
    }

    /// Clear the input and any notice.
    pub fn clear(&mut self) {
        self.input.clear();
        self.notice = None;
    }
}

pub fn render_alerts(f: &mut Frame, area: Rect, state: &FormState, styles: &ThemeStyles) {
    render_form(
        f,
        area,
        state,
        styles,
        FormLabels {
            title: "Subscribe to Health Alerts",
            prompt: "Enter your email:",
            submit: "Subscribe",
        },
    );
}

pub fn render_chatbot(f: &mut Frame, area: Rect, state: &FormState, styles: &ThemeStyles) {
    render_form(
        f,
        area,
        state,
        styles,
        FormLabels {
            title: "Healthcare Chatbot",
            prompt: "Ask your health question:",
            submit: "Get Response",
        },
    );
}

struct FormLabels {
    title: &'static str,
    prompt: &'static str,
    submit: &'static str,
}

fn render_form(
    f: &mut Frame,
    area: Rect,
    state: &FormState,
    styles: &ThemeStyles,
    labels: FormLabels,
) {
    let outer = Block::default()
        .title(Span::styled(format!(" {} ", labels.title), styles.subtitle()))
        .borders(Borders::ALL)
        .border_style(styles.border())
        .style(styles.panel());
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Prompt
            Constraint::Length(3), // Input
            Constraint::Length(1), // Submit hint
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Notice
        ])
        .margin(1)
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(labels.prompt, styles.text())),
        chunks[0],
    );

    let input = Paragraph::new(Line::from(vec![
        Span::styled(state.input.as_str(), styles.text()),
        Span::styled("█", styles.key_hint()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles.border_focused()),
    );
    f.render_widget(input, chunks[1]);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[Enter] ", styles.key_hint()),
            Span::styled(labels.submit, styles.key_desc()),
        ])),
        chunks[2],
    );

    if let Some(notice) = &state.notice {
        let p = Paragraph::new(Span::styled(notice.message.as_str(), styles.notice(notice.level)))
            .wrap(Wrap { trim: true });
        f.render_widget(p, chunks[4]);
    }
}
