//! The composed page controller.
//!
//! [`PageCore`] owns every piece of mutable page state (theme, menu, header
//! flag, active section, entrance states) and turns browser events into
//! [`Action`]s. It holds no DOM handles, so the whole event surface is tested
//! natively; `dom::Page` wraps it with the real document.

use crate::action::Action;
use crate::config::PageConfig;
use crate::input::{Key, Modifiers, Shortcut, shortcut_for};
use crate::nav::{ClickTarget, MenuState, NavController, SectionBounds, active_section};
use crate::scroll::{EntranceState, EntranceTracker, header_scrolled};
use crate::theme::{PreferenceStore, Theme, ThemeController};

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Result of a key press.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyOutcome {
    pub actions: Vec<Action>,
    pub prevent_default: bool,
}

/// Page state and event handling, independent of the browser.
pub struct PageCore<S> {
    config: PageConfig,
    theme: ThemeController<S>,
    nav: NavController,
    header_scrolled: bool,
    active_section: Option<String>,
    entrances: EntranceTracker,
}

impl<S: PreferenceStore> PageCore<S> {
    /// Build the controller for a page with `section_count` observed sections.
    pub fn new(config: PageConfig, store: S, system_prefers_dark: Option<bool>, section_count: usize) -> Self {
        Self {
            config,
            theme: ThemeController::new(store, system_prefers_dark),
            nav: NavController::new(),
            header_scrolled: false,
            active_section: None,
            entrances: EntranceTracker::new(section_count),
        }
    }

    /// Startup effects: paint and persist the resolved initial theme.
    pub fn init(&mut self) -> Vec<Action> {
        let theme = self.theme.current();
        self.theme.apply(theme)
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        self.theme.store()
    }

    #[must_use]
    pub fn menu(&self) -> MenuState {
        self.nav.menu()
    }

    #[must_use]
    pub fn is_header_scrolled(&self) -> bool {
        self.header_scrolled
    }

    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    #[must_use]
    pub fn entrance_state(&self, index: usize) -> Option<EntranceState> {
        self.entrances.state(index)
    }

    // --- Theme ---

    pub fn toggle_theme(&mut self) -> Vec<Action> {
        self.theme.toggle()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Vec<Action> {
        self.theme.apply(theme)
    }

    // --- Navigation ---

    pub fn toggle_menu(&mut self) -> Vec<Action> {
        vec![self.nav.toggle_menu()]
    }

    pub fn close_menu(&mut self) -> Vec<Action> {
        vec![self.nav.close_menu()]
    }

    /// Any document click; closes the menu when it landed outside it.
    pub fn on_document_click(&mut self, target: ClickTarget) -> Vec<Action> {
        self.nav.close_on_outside_click(target).into_iter().collect()
    }

    /// Debounced resize with the new viewport width.
    pub fn on_resize(&mut self, width: f64) -> Vec<Action> {
        self.nav
            .close_on_wide_viewport(width, self.config.nav_breakpoint)
            .into_iter()
            .collect()
    }

    pub fn on_key(&mut self, key: &Key, modifiers: Modifiers) -> KeyOutcome {
        let Some(shortcut) = shortcut_for(key, modifiers) else {
            return KeyOutcome::default();
        };
        let actions = match shortcut {
            Shortcut::CloseMenu => self.close_menu(),
            Shortcut::ToggleTheme => self.toggle_theme(),
        };
        KeyOutcome { actions, prevent_default: shortcut.prevents_default() }
    }

    // --- Scroll ---

    /// Debounced scroll: header style, then the active nav link.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds]) -> Vec<Action> {
        self.header_scrolled = header_scrolled(scroll_y, self.config.header_scrolled_threshold);
        let mut actions = vec![Action::SetHeaderScrolled(self.header_scrolled)];
        actions.extend(self.highlight_active_section(scroll_y, sections));
        actions
    }

    /// Mark the nav link of the lowest section reached by `scroll_y`.
    pub fn highlight_active_section(&mut self, scroll_y: f64, sections: &[SectionBounds]) -> Vec<Action> {
        self.active_section =
            active_section(sections, scroll_y, self.config.section_header_offset).map(str::to_owned);
        vec![Action::SetActiveLink(self.active_section.clone())]
    }

    /// The page became hidden or visible; visible pages re-sync the nav link.
    pub fn on_visibility_change(&mut self, hidden: bool, scroll_y: f64, sections: &[SectionBounds]) -> Vec<Action> {
        if hidden {
            return Vec::new();
        }
        self.highlight_active_section(scroll_y, sections)
    }

    /// Intersection sample for section `index` with `child_count` animatable children.
    pub fn on_section_intersect(&mut self, index: usize, intersecting: bool, child_count: usize) -> Vec<Action> {
        self.entrances
            .observe(index, intersecting, child_count, self.config.entrance_stagger_ms)
            .map(|plan| Action::RevealSection { index, plan })
            .into_iter()
            .collect()
    }
}

/// Console line for a page visibility change.
#[must_use]
pub fn visibility_notice(hidden: bool) -> &'static str {
    if hidden { "Page hidden" } else { "Page visible" }
}
