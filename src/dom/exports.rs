//! `window.portfolioUtils`: page operations callable from other scripts.

use std::rc::{Rc, Weak};

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::debounce::Debounced;
use crate::dom::page::Page;
use crate::error::{DomError, js_error_text};
use crate::theme::Theme;

const GLOBAL_NAME: &str = "portfolioUtils";

/// Publish the utility object on `window`.
pub fn install(page: &Rc<Page>) -> Result<(), DomError> {
    let utils = Object::new();
    let weak = Rc::downgrade(page);

    set(&utils, "toggleTheme", page_op(&weak, Page::toggle_theme))?;
    set(&utils, "enableDarkMode", page_op(&weak, |page| page.set_theme(Theme::Dark)))?;
    set(&utils, "disableDarkMode", page_op(&weak, |page| page.set_theme(Theme::Light)))?;
    set(&utils, "toggleNavMenu", page_op(&weak, Page::toggle_menu))?;
    set(&utils, "closeNavMenu", page_op(&weak, Page::close_menu))?;

    let debounce = Closure::<dyn Fn(Function, f64) -> Result<JsValue, JsValue>>::new(debounce_js);
    set(&utils, "debounce", debounce.into_js_value())?;

    let in_viewport = weak.clone();
    let is_in_viewport = Closure::<dyn Fn(JsValue) -> bool>::new(move |value: JsValue| {
        match (in_viewport.upgrade(), value.dyn_ref::<Element>()) {
            (Some(page), Some(element)) => page.is_in_viewport(element),
            _ => false,
        }
    });
    set(&utils, "isInViewport", is_in_viewport.into_js_value())?;

    let percentage = weak;
    let get_scroll_percentage = Closure::<dyn Fn() -> f64>::new(move || {
        percentage.upgrade().map_or(0.0, |page| page.scroll_percentage())
    });
    set(&utils, "getScrollPercentage", get_scroll_percentage.into_js_value())?;

    let window = web_sys::window().ok_or(DomError::NoDocument)?;
    set(&window, GLOBAL_NAME, utils.into())
}

fn page_op(weak: &Weak<Page>, op: impl Fn(&Page) + 'static) -> JsValue {
    let weak = weak.clone();
    Closure::<dyn Fn()>::new(move || {
        if let Some(page) = weak.upgrade() {
            op(&page);
        }
    })
    .into_js_value()
}

/// `debounce(fn, wait)`: a trailing-edge wrapper that calls `fn` with every
/// argument of the last call.
fn debounce_js(func: Function, wait: f64) -> Result<JsValue, JsValue> {
    let debounced = Debounced::new(wait_millis(wait), move |args: Array| {
        if let Err(err) = func.apply(&JsValue::NULL, &args) {
            log::warn!("debounced callback threw: {}", js_error_text(&err));
        }
    });
    let collect = Closure::<dyn Fn(Array)>::new(move |args: Array| debounced.call(args)).into_js_value();
    // Rust closures take a fixed arity; the shim packs `arguments` into one array.
    let variadic = Function::new_with_args("deliver", "return function(...args) { deliver(args); };");
    variadic.call1(&JsValue::NULL, &collect)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn wait_millis(wait: f64) -> u32 {
    if wait.is_nan() {
        return 0;
    }
    wait.clamp(0.0, f64::from(u32::MAX)) as u32
}

fn set(target: &JsValue, key: &str, value: JsValue) -> Result<(), DomError> {
    Reflect::set(target, &JsValue::from_str(key), &value).map_err(|err| DomError::Js(js_error_text(&err)))?;
    Ok(())
}
