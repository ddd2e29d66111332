//! Shared numeric and string constants for the portfolio page.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the persisted theme.
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

/// Class placed on `<body>` while dark mode is active.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Icon class shown on the toggle while dark mode is active.
pub const ICON_SUN: &str = "fas fa-sun";

/// Icon class shown on the toggle while light mode is active.
pub const ICON_MOON: &str = "fas fa-moon";

// ── Navigation ──────────────────────────────────────────────────

/// Viewport width (CSS px) above which the mobile menu auto-closes.
pub const NAV_BREAKPOINT_PX: f64 = 768.0;

/// Distance from the viewport top at which a section counts as reached.
pub const SECTION_HEADER_OFFSET_PX: f64 = 100.0;

/// Space left for the fixed header when jumping to an anchor.
pub const ANCHOR_SCROLL_OFFSET_PX: f64 = 80.0;

// ── Scroll ──────────────────────────────────────────────────────

/// Vertical offset past which the header takes its `scrolled` style.
pub const HEADER_SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Fraction of a section that must be visible to trigger its entrance.
pub const ENTRANCE_THRESHOLD: f64 = 0.1;

/// Observer root margin; the negative bottom keeps sections from firing early.
pub const ENTRANCE_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Per-child delay increment for staggered entrance animations.
pub const ENTRANCE_STAGGER_MS: u32 = 80;

// ── Timers ──────────────────────────────────────────────────────

pub const SCROLL_DEBOUNCE_MS: u32 = 10;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
pub const CHART_INIT_DELAY_MS: u32 = 500;
pub const SPINNER_HIDE_DELAY_MS: u32 = 1200;
