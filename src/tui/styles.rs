//! Theme-dependent color palette and styles.
//!
//! Surface colors come from the active theme's [`ThemeTokens`]; semantic
//! colors (success, warning, info, danger) are shared by both themes.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::{ChartStyle, NoticeLevel, Rgb, Theme, ThemeTokens};

/// Styles for one theme.
#[derive(Debug, Clone, Copy)]
pub struct ThemeStyles {
    tokens: ThemeTokens,
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Halfway between two colors.
fn blend(a: Rgb, b: Rgb) -> Color {
    let mid = |x: u8, y: u8| ((u16::from(x) + u16::from(y)) / 2) as u8;
    Color::Rgb(mid(a.0, b.0), mid(a.1, b.1), mid(a.2, b.2))
}

impl ThemeStyles {
    // === Semantic Colors ===

    /// Emerald - Success
    pub const SUCCESS: Color = Color::Rgb(16, 185, 129); // #10B981

    /// Amber - Warning
    pub const WARNING: Color = Color::Rgb(251, 191, 36); // #FBBF24

    /// Rose - High case counts
    pub const DANGER: Color = Color::Rgb(244, 63, 94); // #F43F5E

    /// Blue - Info
    pub const INFO: Color = Color::Rgb(59, 130, 246); // #3B82F6

    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            tokens: theme.tokens(),
        }
    }

    /// Page background
    #[must_use]
    pub fn base(&self) -> Style {
        Style::default()
            .fg(color(self.tokens.text_color))
            .bg(color(self.tokens.background))
    }

    /// Content panels
    #[must_use]
    pub fn panel(&self) -> Style {
        Style::default()
            .fg(color(self.tokens.text_color))
            .bg(color(self.tokens.container_color))
    }

    #[must_use]
    pub fn panel_color(&self) -> Color {
        color(self.tokens.container_color)
    }

    #[must_use]
    pub fn title(&self) -> Style {
        Style::default()
            .fg(color(self.tokens.text_color))
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn subtitle(&self) -> Style {
        Style::default()
            .fg(color(self.tokens.hover_color))
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text(&self) -> Style {
        Style::default().fg(color(self.tokens.text_color))
    }

    #[must_use]
    pub fn text_bold(&self) -> Style {
        self.text().add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.muted_color())
    }

    #[must_use]
    pub fn muted_color(&self) -> Color {
        blend(self.tokens.text_color, self.tokens.background)
    }

    #[must_use]
    pub fn accent_color(&self) -> Color {
        color(self.tokens.hover_color)
    }

    #[must_use]
    pub fn border(&self) -> Style {
        Style::default().fg(self.muted_color())
    }

    #[must_use]
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.accent_color())
    }

    /// Unselected navigation tab
    #[must_use]
    pub fn tab(&self) -> Style {
        self.text()
    }

    /// Selected navigation tab
    #[must_use]
    pub fn tab_selected(&self) -> Style {
        Style::default()
            .fg(color(self.tokens.background))
            .bg(self.accent_color())
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_color())
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_desc(&self) -> Style {
        self.text_muted()
    }

    /// Style for a form notice.
    #[must_use]
    pub fn notice(&self, level: NoticeLevel) -> Style {
        let fg = match level {
            NoticeLevel::Success => Self::SUCCESS,
            NoticeLevel::Warning => Self::WARNING,
            NoticeLevel::Info => Self::INFO,
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    /// Line series color, following the theme's chart style.
    #[must_use]
    pub fn series(&self) -> Style {
        let fg = match self.tokens.chart_style {
            ChartStyle::Light => Color::Rgb(31, 119, 180), // #1F77B4
            ChartStyle::Dark => Color::Rgb(99, 110, 250),  // #636EFA
        };
        Style::default().fg(fg)
    }

    #[must_use]
    pub fn axis(&self) -> Style {
        self.text_muted()
    }

    /// Map marker color scaled by share of the largest count.
    #[must_use]
    pub fn marker(&self, share: f64) -> Color {
        if share >= 0.66 {
            Self::DANGER
        } else if share >= 0.33 {
            Self::WARNING
        } else {
            Self::SUCCESS
        }
    }
}
