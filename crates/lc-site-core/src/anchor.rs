//! In-page fragment navigation.

use crate::menu::MenuState;

/// Selector for every link the anchor handler is attached to.
pub const FRAGMENT_LINK_SELECTOR: &str = "a[href^=\"#\"]";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    /// Not an in-page link; let the browser navigate.
    Passthrough,
    /// Suppress the jump; there is nothing to scroll to (`href="#"`).
    Suppress,
    /// Suppress the jump and scroll to the element with this id, if any.
    ScrollTo(&'a str),
}

pub fn classify(href: &str) -> AnchorAction<'_> {
    match href.strip_prefix('#') {
        None => AnchorAction::Passthrough,
        Some("") => AnchorAction::Suppress,
        Some(id) => AnchorAction::ScrollTo(id),
    }
}

/// Menu state after a fragment link is activated. Only a resolved target
/// closes the menu; an unknown fragment is a silent no-op.
pub fn menu_after_activation(menu: MenuState, target_found: bool) -> MenuState {
    if target_found { MenuState::Closed } else { menu }
}
