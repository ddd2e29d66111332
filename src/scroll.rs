//! Scroll-driven header state and one-shot entrance animations.
//!
//! Each observed section moves `Pending -> Animated` exactly once. The
//! intersection callback is the only writer, and an animated section ignores
//! every later sample, so re-entering the viewport never replays it.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Animation applied to a section on its first sufficient visibility.
pub const SECTION_ANIMATION: &str = "slideUp 0.6s ease-out forwards";

/// Selector for the children that stagger in after their section.
pub const ANIMATABLE_CHILDREN: &str = "[class*=\"card\"], [class*=\"item\"], .skill-category, .education-item";

/// Whether the header should carry its `scrolled` style.
#[must_use]
pub fn header_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// How far down the document the viewport is, in percent.
///
/// A document that cannot scroll reports 0.
#[must_use]
pub fn scroll_percentage(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if range <= 0.0 {
        return 0.0;
    }
    scroll_y / range * 100.0
}

/// Document offset to scroll to so an anchor lands below the fixed header.
#[must_use]
pub fn anchor_scroll_top(element_viewport_top: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    element_viewport_top + page_y_offset - header_offset
}

/// Entrance lifecycle of one section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntranceState {
    #[default]
    Pending,
    Animated,
}

/// Styles to apply when a section enters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntrancePlan {
    pub section_animation: &'static str,
    /// One `animation` value per animatable child, in document order.
    pub child_animations: Vec<String>,
}

impl EntrancePlan {
    #[must_use]
    pub fn new(child_count: usize, stagger_ms: u32) -> Self {
        let child_animations = (0..child_count)
            .map(|i| {
                let delay_ms = u64::try_from(i).unwrap_or(u64::MAX).saturating_mul(u64::from(stagger_ms));
                format!("scaleIn 0.5s ease-out {delay_ms}ms forwards")
            })
            .collect();
        Self { section_animation: SECTION_ANIMATION, child_animations }
    }
}

/// Per-section entrance states, indexed in document order.
#[derive(Clone, Debug, Default)]
pub struct EntranceTracker {
    states: Vec<EntranceState>,
}

impl EntranceTracker {
    #[must_use]
    pub fn new(section_count: usize) -> Self {
        Self { states: vec![EntranceState::Pending; section_count] }
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<EntranceState> {
        self.states.get(index).copied()
    }

    /// Record an intersection sample.
    ///
    /// Returns a plan only on the first intersecting sample of a pending
    /// section; the caller must then stop observing it.
    pub fn observe(
        &mut self,
        index: usize,
        intersecting: bool,
        child_count: usize,
        stagger_ms: u32,
    ) -> Option<EntrancePlan> {
        if !intersecting {
            return None;
        }
        let state = self.states.get_mut(index)?;
        match state {
            EntranceState::Animated => None,
            EntranceState::Pending => {
                *state = EntranceState::Animated;
                Some(EntrancePlan::new(child_count, stagger_ms))
            }
        }
    }
}
