//! DOM effects requested by the page controllers.
//!
//! Controllers never touch the document. They return [`Action`]s and the
//! browser adapter applies them, which keeps every decision testable natively.

use crate::scroll::EntrancePlan;

/// A single DOM effect for the host to apply.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Add (`true`) or remove the dark-mode class on `<body>`.
    SetDarkMode(bool),
    /// Replace the class list of the theme toggle's icon.
    SetThemeIcon(&'static str),
    /// Open or close the mobile nav (hamburger and panel).
    SetMenuOpen(bool),
    /// Add or remove the header's `scrolled` class.
    SetHeaderScrolled(bool),
    /// Mark the nav link targeting this section id active; `None` clears all.
    SetActiveLink(Option<String>),
    /// Play the one-shot entrance animation for the section at `index`.
    RevealSection { index: usize, plan: EntrancePlan },
}
