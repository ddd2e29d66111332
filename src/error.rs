//! Error types for the browser adapter.

/// Failure to wire the page against its DOM.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// The global `window` or `document` is unavailable.
    #[error("no browser window or document")]
    NoDocument,
    /// A required element is absent from the page.
    #[error("missing required element: {0}")]
    MissingElement(&'static str),
    /// A DOM call threw.
    #[error("dom call failed: {0}")]
    Js(String),
}

/// Reasons the specialization chart was not rendered.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// Chart.js is not loaded on the page.
    #[error("Chart.js not loaded")]
    LibraryMissing,
    /// The target canvas is absent.
    #[error("chart canvas #{0} not found")]
    CanvasMissing(&'static str),
    /// The canvas refused a 2d context.
    #[error("2d context unavailable")]
    NoContext,
    /// The chart configuration could not be converted for JS.
    #[error("chart config conversion failed: {0}")]
    Config(String),
    /// The Chart constructor threw.
    #[error("chart construction failed: {0}")]
    Construct(String),
}

/// Render a thrown JS value as text for error reporting.
#[cfg(target_arch = "wasm32")]
pub(crate) fn js_error_text(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    if let Some(text) = value.as_string() {
        return text;
    }
    match js_sys::JSON::stringify(value) {
        Ok(text) => String::from(text),
        Err(_) => "unknown js error".to_owned(),
    }
}
