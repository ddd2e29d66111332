//! Small stateless helpers plus the debounce state machine.

use std::sync::LazyLock;

use regex::Regex;

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

static EMAIL: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

/// Trailing-edge debounce bookkeeping.
///
/// Every [`Debouncer::call`] supersedes the previous one and returns a ticket.
/// When a timer scheduled for a ticket expires, [`Debouncer::fire`] hands back
/// the arguments only if that ticket is still the latest, so a burst of calls
/// delivers exactly once with the last call's arguments.
#[derive(Debug)]
pub struct Debouncer<T> {
    latest: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self { latest: 0, pending: None }
    }
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a call and return the ticket its timer must present.
    pub fn call(&mut self, args: T) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.pending = Some(args);
        self.latest
    }

    /// Timer for `ticket` expired: take the arguments if nothing superseded it.
    pub fn fire(&mut self, ticket: u64) -> Option<T> {
        if ticket != self.latest {
            return None;
        }
        self.pending.take()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// An element's bounding box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// True when any part of `rect` is vertically inside the viewport.
#[must_use]
pub fn is_in_viewport(rect: &Rect, viewport_height: f64) -> bool {
    rect.top <= viewport_height && rect.bottom() >= 0.0
}

/// Usable viewport height: the window's inner height unless it is missing or
/// zero, otherwise the root element's client height.
#[must_use]
pub fn viewport_height(inner_height: Option<f64>, root_client_height: f64) -> f64 {
    inner_height
        .filter(|height| *height > 0.0)
        .unwrap_or(root_client_height)
}

/// Permissive email shape check: one `@` with a dot somewhere after it.
#[must_use]
pub fn validate_email(value: &str) -> bool {
    EMAIL.as_ref().is_ok_and(|re| re.is_match(value))
}

/// Size and offset of a click ripple inside a button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

/// Square ripple covering the button, centered on the click point.
#[must_use]
pub fn ripple_geometry(button: &Rect, client_x: f64, client_y: f64) -> RippleGeometry {
    let size = button.width.max(button.height);
    RippleGeometry {
        size,
        left: client_x - button.left - size / 2.0,
        top: client_y - button.top - size / 2.0,
    }
}
