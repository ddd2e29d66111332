//! Keyboard input types and shortcut mapping.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Modifier keys held during a key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// A key identifier as reported by `KeyboardEvent.key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Page-level keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// `Escape`: close the mobile menu.
    CloseMenu,
    /// `Ctrl`/`Cmd` + `d`: flip the theme. The browser default is suppressed.
    ToggleTheme,
}

impl Shortcut {
    /// Whether the host must call `preventDefault` for this shortcut.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::ToggleTheme)
    }
}

/// Map a key press to a shortcut.
#[must_use]
pub fn shortcut_for(key: &Key, modifiers: Modifiers) -> Option<Shortcut> {
    match key.0.as_str() {
        "Escape" => Some(Shortcut::CloseMenu),
        "d" if modifiers.ctrl || modifiers.meta => Some(Shortcut::ToggleTheme),
        _ => None,
    }
}
