//! Interactivity layer for the portfolio site.
//!
//! This crate is compiled to WebAssembly and loaded by the static page. It
//! owns theme switching, the mobile navigation menu, scroll-driven header and
//! nav-link state, one-shot entrance animations, and the specialization radar
//! chart (drawn by Chart.js). The page's HTML and CSS stay outside the crate.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | [`page::PageCore`]: all page state and event handling, browser-free |
//! | [`action`] | DOM effects returned by the controllers |
//! | [`theme`] | Theme preference store and light/dark controller |
//! | [`nav`] | Mobile menu state and active-section selection |
//! | [`scroll`] | Header threshold, entrance states, scroll geometry |
//! | [`input`] | Keyboard shortcut mapping |
//! | [`chart`] | Chart.js radar configuration |
//! | [`util`] | Debounce, viewport test, email check, ripple geometry |
//! | [`config`] | [`config::PageConfig`] tunables |
//! | [`consts`] | Shared constants (storage key, thresholds, delays) |
//! | [`error`] | Adapter error types |
//! | `dom` | `wasm32` only: DOM bindings, listeners, Chart.js bridge, startup |

pub mod action;
pub mod chart;
pub mod config;
pub mod consts;
pub mod error;
pub mod input;
pub mod nav;
pub mod page;
pub mod scroll;
pub mod theme;
pub mod util;

#[cfg(target_arch = "wasm32")]
pub mod dom;
