//! Session state: landing gate, active page and theme.
//!
//! All mutation goes through [`Session::apply`], a small reducer over tagged
//! [`Action`]s. The session lives for exactly one interactive run and is never
//! persisted.

/// Logical page of the dashboard, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Dashboard,
    Trends,
    Travel,
    Education,
    Alerts,
    About,
    Chatbot,
}

impl Page {
    /// Every page, in the order shown in the navigation bar.
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::Dashboard,
        Page::Trends,
        Page::Travel,
        Page::Education,
        Page::Alerts,
        Page::About,
        Page::Chatbot,
    ];

    /// Navigation label.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Dashboard => "Dashboard",
            Self::Trends => "Trends",
            Self::Travel => "Travel",
            Self::Education => "Education",
            Self::Alerts => "Alerts",
            Self::About => "About",
            Self::Chatbot => "Chatbot",
        }
    }

    /// Position in [`Page::ALL`].
    #[must_use]
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|p| p == self)
            .unwrap_or_default()
    }

    /// Page at `index` in navigation order, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Page> {
        Self::ALL.get(index).copied()
    }

    /// Next page, wrapping around.
    #[must_use]
    pub fn next(&self) -> Page {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous page, wrapping around.
    #[must_use]
    pub fn prev(&self) -> Page {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// Whether the page owns a free-text input (typed keys go to the input).
    #[must_use]
    pub fn takes_text_input(&self) -> bool {
        matches!(self, Self::Alerts | Self::Chatbot)
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Display theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Theme {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "Light"),
            Self::Dark => write!(f, "Dark"),
        }
    }
}

/// Named user actions that mutate the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Dismiss the landing gate.
    EnterSite,
    /// Flip between light and dark.
    ToggleTheme,
    /// Switch the active page.
    SelectPage(Page),
}

/// Result of applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// State changed; the whole view must be redrawn.
    Changed,
    /// Nothing changed.
    Unchanged,
}

impl Transition {
    #[must_use]
    pub fn changed(&self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// One interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    entered: bool,
    active_page: Page,
    theme: Theme,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            entered: false,
            active_page: Page::Home,
            theme: Theme::Light,
        }
    }
}

impl Session {
    /// Fresh session: gated, on Home, light theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the landing gate has been passed.
    #[must_use]
    pub fn entered(&self) -> bool {
        self.entered
    }

    #[must_use]
    pub fn active_page(&self) -> Page {
        self.active_page
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Apply an action.
    ///
    /// The gate only ever opens. Page selection is ignored until the gate is
    /// open; the theme toggle always flips.
    pub fn apply(&mut self, action: Action) -> Transition {
        match action {
            Action::EnterSite => {
                if self.entered {
                    return Transition::Unchanged;
                }
                self.entered = true;
                tracing::debug!("Landing gate passed");
                Transition::Changed
            }
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                tracing::debug!(theme = %self.theme, "Theme toggled");
                Transition::Changed
            }
            Action::SelectPage(page) => {
                if !self.entered || self.active_page == page {
                    return Transition::Unchanged;
                }
                self.active_page = page;
                tracing::debug!(page = %page, "Page selected");
                Transition::Changed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entered_session() -> Session {
        let mut session = Session::new();
        session.apply(Action::EnterSite);
        session
    }

    #[test]
    fn test_initial_session() {
        let session = Session::new();
        assert!(!session.entered());
        assert_eq!(session.active_page(), Page::Home);
        assert_eq!(session.theme(), Theme::Light);
    }

    #[test]
    fn test_select_page_changes_only_page() {
        for page in Page::ALL {
            let mut session = entered_session();
            session.apply(Action::ToggleTheme);
            let before = session.clone();

            session.apply(Action::SelectPage(page));

            assert_eq!(session.active_page(), page);
            assert_eq!(session.entered(), before.entered());
            assert_eq!(session.theme(), before.theme());
        }
    }

    #[test]
    fn test_enter_is_monotonic() {
        let mut session = Session::new();
        assert_eq!(session.apply(Action::EnterSite), Transition::Changed);
        assert_eq!(session.apply(Action::EnterSite), Transition::Unchanged);
        assert!(session.entered());

        for page in Page::ALL {
            session.apply(Action::SelectPage(page));
            session.apply(Action::ToggleTheme);
            assert!(session.entered());
        }
    }

    #[test]
    fn test_select_page_ignored_while_gated() {
        let mut session = Session::new();
        assert_eq!(
            session.apply(Action::SelectPage(Page::Trends)),
            Transition::Unchanged
        );
        assert_eq!(session.active_page(), Page::Home);
    }

    #[test]
    fn test_theme_toggle_is_involution() {
        let mut session = Session::new();
        let original = session.theme();
        session.apply(Action::ToggleTheme);
        assert_ne!(session.theme(), original);
        session.apply(Action::ToggleTheme);
        assert_eq!(session.theme(), original);
    }

    #[test]
    fn test_theme_toggle_works_while_gated() {
        let mut session = Session::new();
        assert!(session.apply(Action::ToggleTheme).changed());
        assert_eq!(session.theme(), Theme::Dark);
        assert!(!session.entered());
    }

    #[test]
    fn test_page_cycling_wraps() {
        assert_eq!(Page::Chatbot.next(), Page::Home);
        assert_eq!(Page::Home.prev(), Page::Chatbot);
        assert_eq!(Page::from_index(2), Some(Page::Trends));
        assert_eq!(Page::from_index(8), None);
        for (i, page) in Page::ALL.iter().enumerate() {
            assert_eq!(page.index(), i);
        }
    }
}
