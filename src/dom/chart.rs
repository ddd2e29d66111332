//! Chart.js bridge for the specialization radar chart.

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::chart::{
    CHART_CANVAS_ID, ChartPalette, TEXT_LIGHT_VAR, TEXT_PRIMARY_VAR, TEXT_SECONDARY_VAR, radar_config, tooltip_label,
};
use crate::dom::bindings::DomBindings;
use crate::error::{ChartError, js_error_text};

#[wasm_bindgen]
extern "C" {
    /// A live Chart.js instance.
    #[wasm_bindgen(js_name = Chart)]
    pub type ChartHandle;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(context: &JsValue, config: &JsValue) -> Result<ChartHandle, JsValue>;
}

/// Build the radar chart on `#specializationChart`.
pub fn render_specialization_chart(dom: &DomBindings) -> Result<ChartHandle, ChartError> {
    if !chart_library_loaded() {
        return Err(ChartError::LibraryMissing);
    }
    let canvas = dom
        .document
        .get_element_by_id(CHART_CANVAS_ID)
        .and_then(|el| el.dyn_ref::<HtmlCanvasElement>().cloned())
        .ok_or(ChartError::CanvasMissing(CHART_CANVAS_ID))?;
    let context = canvas
        .get_context("2d")
        .map_err(|err| ChartError::Construct(js_error_text(&err)))?
        .ok_or(ChartError::NoContext)?;

    let config = radar_config(&palette(dom))
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|err| ChartError::Config(err.to_string()))?;
    attach_tooltip_label(&config).map_err(|err| ChartError::Config(js_error_text(&err)))?;

    ChartHandle::new(&context, &config).map_err(|err| ChartError::Construct(js_error_text(&err)))
}

fn chart_library_loaded() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("Chart")).unwrap_or(false)
}

/// Text colors of the theme active right now.
fn palette(dom: &DomBindings) -> ChartPalette {
    let style = match dom.window.get_computed_style(&dom.root) {
        Ok(style) => style,
        Err(err) => {
            log::warn!("computed style unavailable: {}", js_error_text(&err));
            None
        }
    };
    let read = |name: &str| match style.as_ref().map(|style| style.get_property_value(name)) {
        Some(Ok(value)) => value,
        Some(Err(_)) | None => String::new(),
    };
    ChartPalette::from_raw(&read(TEXT_PRIMARY_VAR), &read(TEXT_LIGHT_VAR), &read(TEXT_SECONDARY_VAR))
}

/// Install `options.plugins.tooltip.callbacks.label`.
fn attach_tooltip_label(config: &JsValue) -> Result<(), JsValue> {
    let mut callbacks = config.clone();
    for key in ["options", "plugins", "tooltip", "callbacks"] {
        callbacks = js_sys::Reflect::get(&callbacks, &JsValue::from_str(key))?;
    }
    let label = Closure::<dyn Fn(JsValue) -> JsValue>::new(|context: JsValue| {
        let raw = js_sys::Reflect::get(&context, &JsValue::from_str("raw"))
            .unwrap_or(JsValue::UNDEFINED)
            .as_f64()
            .unwrap_or(f64::NAN);
        JsValue::from_str(&tooltip_label(raw))
    });
    // The chart keeps the callback for the page's lifetime.
    js_sys::Reflect::set(&callbacks, &JsValue::from_str("label"), &label.into_js_value())?;
    Ok(())
}
