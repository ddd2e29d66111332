//! Specialization radar chart configuration.
//!
//! Only the Chart.js config object is built here; rendering belongs to the
//! library. Colors come from the theme's CSS custom properties at build time,
//! so a chart built in one theme keeps those colors after a later toggle.

use serde_json::{Value, json};

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

/// Element id of the chart canvas.
pub const CHART_CANVAS_ID: &str = "specializationChart";

/// Chart.js chart type.
pub const CHART_TYPE: &str = "radar";

/// Axis labels, in drawing order.
pub const SPECIALIZATION_LABELS: [&str; 6] = [
    "Public Health Analysis",
    "Patient Data Analytics",
    "Healthcare Quality Metrics",
    "Epidemiological Analysis",
    "Health Systems Knowledge",
    "Clinical Data Interpretation",
];

/// Expertise level per axis, 0–100.
pub const SPECIALIZATION_VALUES: [u8; 6] = [90, 88, 85, 87, 80, 83];

pub const SCALE_MAX: u8 = 100;
pub const SCALE_STEP: u8 = 20;

const ACCENT: &str = "#4F46E5";
const ACCENT_FILL: &str = "rgba(79, 70, 229, 0.1)";
const TOOLTIP_BG: &str = "rgba(79, 70, 229, 0.9)";
const FONT_FAMILY: &str = "'Poppins', sans-serif";

/// CSS custom properties the chart reads its text colors from.
pub const TEXT_PRIMARY_VAR: &str = "--text-primary";
pub const TEXT_LIGHT_VAR: &str = "--text-light";
pub const TEXT_SECONDARY_VAR: &str = "--text-secondary";

/// Text colors resolved from the active theme.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartPalette {
    /// Legend labels.
    pub text_primary: String,
    /// Scale tick labels.
    pub text_light: String,
    /// Axis point labels.
    pub text_secondary: String,
}

impl ChartPalette {
    /// Build from raw computed-style values, trimming the whitespace browsers keep.
    #[must_use]
    pub fn from_raw(primary: &str, light: &str, secondary: &str) -> Self {
        Self {
            text_primary: primary.trim().to_owned(),
            text_light: light.trim().to_owned(),
            text_secondary: secondary.trim().to_owned(),
        }
    }
}

/// Tooltip body text for one data point.
#[must_use]
pub fn tooltip_label(raw: f64) -> String {
    format!("{raw}% expertise")
}

/// Full Chart.js configuration for the specialization radar chart.
///
/// The tooltip label callback is a JS function and is attached by the host.
#[must_use]
pub fn radar_config(palette: &ChartPalette) -> Value {
    json!({
        "type": CHART_TYPE,
        "data": {
            "labels": SPECIALIZATION_LABELS,
            "datasets": [{
                "label": "Expertise Level",
                "data": SPECIALIZATION_VALUES,
                "borderColor": ACCENT,
                "backgroundColor": ACCENT_FILL,
                "borderWidth": 2,
                "pointBackgroundColor": ACCENT,
                "pointBorderColor": "#fff",
                "pointHoverBackgroundColor": "#fff",
                "pointHoverBorderColor": ACCENT,
                "pointRadius": 5,
                "pointHoverRadius": 7,
                "fill": true,
                "tension": 0.4,
            }],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": true,
            "plugins": {
                "legend": {
                    "display": true,
                    "labels": {
                        "color": palette.text_primary,
                        "font": { "family": FONT_FAMILY, "size": 12, "weight": "600" },
                        "padding": 20,
                    },
                },
                "tooltip": {
                    "backgroundColor": TOOLTIP_BG,
                    "titleColor": "#fff",
                    "bodyColor": "#fff",
                    "borderColor": ACCENT,
                    "borderWidth": 1,
                    "padding": 12,
                    "displayColors": false,
                    "callbacks": {},
                },
            },
            "scales": {
                "r": {
                    "beginAtZero": true,
                    "max": SCALE_MAX,
                    "ticks": {
                        "stepSize": SCALE_STEP,
                        "color": palette.text_light,
                        "font": { "family": FONT_FAMILY, "size": 11 },
                    },
                    "grid": { "color": ACCENT_FILL },
                    "pointLabels": {
                        "color": palette.text_secondary,
                        "font": { "family": FONT_FAMILY, "size": 12, "weight": "500" },
                        "padding": 10,
                    },
                },
            },
        },
    })
}
