//! Page configuration.
//!
//! Every threshold the controllers consult travels through [`PageConfig`] so
//! tests can exercise edge values without touching the constants.

use serde::Deserialize;

use crate::consts::{
    ANCHOR_SCROLL_OFFSET_PX, CHART_INIT_DELAY_MS, ENTRANCE_STAGGER_MS, HEADER_SCROLLED_THRESHOLD_PX,
    NAV_BREAKPOINT_PX, RESIZE_DEBOUNCE_MS, SCROLL_DEBOUNCE_MS, SECTION_HEADER_OFFSET_PX, SPINNER_HIDE_DELAY_MS,
};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Tunables for the page controller.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub header_scrolled_threshold: f64,
    pub section_header_offset: f64,
    pub anchor_scroll_offset: f64,
    pub nav_breakpoint: f64,
    pub entrance_stagger_ms: u32,
    pub scroll_debounce_ms: u32,
    pub resize_debounce_ms: u32,
    pub chart_init_delay_ms: u32,
    pub spinner_hide_delay_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_scrolled_threshold: HEADER_SCROLLED_THRESHOLD_PX,
            section_header_offset: SECTION_HEADER_OFFSET_PX,
            anchor_scroll_offset: ANCHOR_SCROLL_OFFSET_PX,
            nav_breakpoint: NAV_BREAKPOINT_PX,
            entrance_stagger_ms: ENTRANCE_STAGGER_MS,
            scroll_debounce_ms: SCROLL_DEBOUNCE_MS,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            chart_init_delay_ms: CHART_INIT_DELAY_MS,
            spinner_hide_delay_ms: SPINNER_HIDE_DELAY_MS,
        }
    }
}
