//! Mobile navigation menu and active-section tracking.

use crate::action::Action;

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Visibility of the mobile nav panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Where a document click landed relative to the menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub in_panel: bool,
    pub in_trigger: bool,
}

impl ClickTarget {
    #[must_use]
    pub fn is_outside(self) -> bool {
        !self.in_panel && !self.in_trigger
    }
}

/// A navigable section: its id and the document offset of its top edge.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
}

/// Owns the menu state.
#[derive(Clone, Debug, Default)]
pub struct NavController {
    menu: MenuState,
}

impl NavController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn open_menu(&mut self) -> Action {
        self.set(MenuState::Open)
    }

    pub fn close_menu(&mut self) -> Action {
        self.set(MenuState::Closed)
    }

    pub fn toggle_menu(&mut self) -> Action {
        match self.menu {
            MenuState::Open => self.close_menu(),
            MenuState::Closed => self.open_menu(),
        }
    }

    /// Close when the click landed outside both the panel and its trigger.
    pub fn close_on_outside_click(&mut self, target: ClickTarget) -> Option<Action> {
        target.is_outside().then(|| self.close_menu())
    }

    /// Close once the viewport is wider than the mobile breakpoint.
    pub fn close_on_wide_viewport(&mut self, width: f64, breakpoint: f64) -> Option<Action> {
        (width > breakpoint).then(|| self.close_menu())
    }

    fn set(&mut self, state: MenuState) -> Action {
        self.menu = state;
        Action::SetMenuOpen(state.is_open())
    }
}

/// The section whose top sits closest above the offset line.
///
/// Sections are scanned in document order and the last one with
/// `scroll_y >= top - offset` wins, so the lowest reached section is chosen.
#[must_use]
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.top - offset)
        .map(|section| section.id.as_str())
}

/// Section id targeted by an in-page link such as `#about`.
#[must_use]
pub fn link_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
