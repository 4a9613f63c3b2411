//! Mobile menu state
//!
//! The menu has one canonical open/closed boolean. Every visual flag is
//! derived from it through [`MenuState::visual_flags`], so the menu element,
//! the toggle button and the page body can never disagree.

use derive_more::Display;

use super::config::InteractionConfig;

/// Widths at or below this value are treated as mobile
pub const MOBILE_BREAKPOINT: f64 = InteractionConfig::DEFAULT.mobile_breakpoint;

/// DOM targets that mirror the menu state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum MenuTarget {
    /// The `.nav-links` list
    #[display("menu")]
    Menu,
    /// The `.menu-toggle` button
    #[display("toggle")]
    ToggleButton,
    /// The document body
    #[display("body")]
    Body,
}

impl MenuTarget {
    pub const ALL: [MenuTarget; 3] = [MenuTarget::Menu, MenuTarget::ToggleButton, MenuTarget::Body];

    /// CSS selector locating the target element
    pub fn selector(&self) -> &'static str {
        match self {
            MenuTarget::Menu => ".nav-links",
            MenuTarget::ToggleButton => ".menu-toggle",
            MenuTarget::Body => "body",
        }
    }

    /// Class carried by the target while the menu is open
    pub fn class_name(&self) -> &'static str {
        match self {
            MenuTarget::Menu | MenuTarget::ToggleButton => "active",
            MenuTarget::Body => "menu-open",
        }
    }
}

/// One visual flag to apply to a target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisualFlag {
    pub target: MenuTarget,
    pub class_name: &'static str,
    pub enabled: bool,
}

/// Open/closed state of the mobile menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the state, returning the new value
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Force the menu closed. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    /// Flags every target must carry for the current state
    pub fn visual_flags(&self) -> [VisualFlag; 3] {
        MenuTarget::ALL.map(|target| VisualFlag {
            target,
            class_name: target.class_name(),
            enabled: self.open,
        })
    }
}

/// Whether a viewport width counts as mobile
pub fn is_mobile_width(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT
}

/// A click on an in-page nav link closes the menu on mobile only
pub fn should_close_on_link_click(width: f64) -> bool {
    is_mobile_width(width)
}

/// A click outside the navbar closes an open menu on mobile
pub fn should_close_on_outside_click(state: MenuState, width: f64, inside_nav: bool) -> bool {
    state.is_open() && is_mobile_width(width) && !inside_nav
}

/// Escape closes an open menu at any width
pub fn should_close_on_key(state: MenuState, key: &str) -> bool {
    state.is_open() && key == "Escape"
}
