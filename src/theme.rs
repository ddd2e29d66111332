//! Theme preference and the light/dark controller.
//!
//! The preference lives under a single storage key. Only a missing or empty
//! value counts as "no preference"; the controller then falls back to the
//! system hint, then to light. Any other stored value that is not `"dark"`
//! means light.

use crate::action::Action;
use crate::consts::{ICON_MOON, ICON_SUN};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Binary visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Storage literal for this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored literal. Anything unrecognized yields `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Icon class for the toggle control: a sun offers the way back to light.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => ICON_MOON,
            Self::Dark => ICON_SUN,
        }
    }
}

/// Durable per-browser storage for the theme preference.
pub trait PreferenceStore {
    /// Stored raw value, or `None` when absent or unreadable.
    fn load(&self) -> Option<String>;
    /// Overwrite the stored value. Failures are the store's to report.
    fn save(&mut self, value: &str);
}

/// In-memory store used off-browser.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    value: Option<String>,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value(value: &str) -> Self {
        Self { value: Some(value.to_owned()), writes: 0 }
    }

    /// Number of `save` calls seen so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) {
        self.value = Some(value.to_owned());
        self.writes += 1;
    }
}

/// Resolve the starting theme from storage, then the system hint, then light.
#[must_use]
pub fn initial_theme(stored: Option<&str>, system_prefers_dark: Option<bool>) -> Theme {
    if let Some(raw) = stored.filter(|raw| !raw.is_empty()) {
        return match Theme::parse(raw) {
            Some(Theme::Dark) => Theme::Dark,
            Some(Theme::Light) | None => Theme::Light,
        };
    }
    match system_prefers_dark {
        Some(true) => Theme::Dark,
        Some(false) | None => Theme::Light,
    }
}

/// Applies themes to the document and keeps the store in sync.
pub struct ThemeController<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Build a controller positioned at the resolved initial theme.
    ///
    /// Nothing is applied yet; call [`ThemeController::apply`] with
    /// [`ThemeController::current`] to paint the document.
    pub fn new(store: S, system_prefers_dark: Option<bool>) -> Self {
        let current = initial_theme(store.load().as_deref(), system_prefers_dark);
        Self { store, current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply `theme`, persist it, and return the DOM effects.
    pub fn apply(&mut self, theme: Theme) -> Vec<Action> {
        self.current = theme;
        self.store.save(theme.as_str());
        vec![Action::SetDarkMode(theme.is_dark()), Action::SetThemeIcon(theme.icon())]
    }

    /// Flip the current theme and apply it.
    pub fn toggle(&mut self) -> Vec<Action> {
        self.apply(self.current.toggled())
    }
}
