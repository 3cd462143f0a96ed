//! Mobile menu state
//!
//! The header owns one [`MenuState`] in a signal and feeds every click
//! through [`MenuState::apply`].

/// Visibility of the mobile navigation panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// User input that affects the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Click on the hamburger / close button.
    Toggle,
    /// Click on a link inside the mobile panel.
    SelectLink,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Next state after `event`. Selecting a link always closes the panel.
    pub fn apply(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::Toggle => self.toggled(),
            MenuEvent::SelectLink => MenuState::Closed,
        }
    }

    /// Value for the toggle button's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }

    /// Accessible label for the toggle button.
    pub fn toggle_label(self) -> &'static str {
        match self {
            MenuState::Closed => "Open menu",
            MenuState::Open => "Close menu",
        }
    }
}
