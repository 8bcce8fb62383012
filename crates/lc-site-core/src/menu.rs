//! Mobile menu state machine.
//!
//! States: `Closed` ⇄ `Open`. The `active` class on `#mobileMenu` and
//! `#menuToggle` and the body `overflow` value are all derived from the state.

pub const ACTIVE_CLASS: &str = "active";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Inline `overflow` for `<body>`. Empty restores the stylesheet default.
    pub fn body_overflow(self) -> &'static str {
        match self {
            MenuState::Open => "hidden",
            MenuState::Closed => "",
        }
    }
}
