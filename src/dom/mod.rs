//! Browser adapter: binds [`crate::page::PageCore`] to the live document.
//!
//! Startup runs once the document has parsed. Critical DOM failures stop it
//! with an error log; optional features (chart, spinner) are skipped with a
//! warning.

pub mod bindings;
pub mod chart;
pub mod debounce;
pub mod exports;
pub mod page;
pub mod storage;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config::PageConfig;
use crate::dom::page::Page;

thread_local! {
    /// The page controller, alive for as long as the document.
    static PAGE: RefCell<Option<Rc<Page>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("portfolio init halted: no document");
        return;
    };
    if document.ready_state() == "loading" {
        let boot = Closure::once_into_js(boot);
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", boot.unchecked_ref()) {
            log::error!("portfolio init halted: {}", crate::error::js_error_text(&err));
        }
    } else {
        boot();
    }
}

fn boot() {
    let page = match Page::mount(PageConfig::default()) {
        Ok(page) => page,
        Err(err) => {
            log::error!("portfolio init halted: {err}");
            return;
        }
    };
    if let Err(err) = exports::install(&page) {
        log::warn!("portfolioUtils not published: {err}");
    }
    PAGE.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&page)));

    let config = page.config();
    let chart_delay = Duration::from_millis(u64::from(config.chart_init_delay_ms));
    let spinner_delay = Duration::from_millis(u64::from(config.spinner_hide_delay_ms));
    let animations = Rc::clone(&page);
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = animations.setup_entrance_animations() {
            log::warn!("entrance animations disabled: {err}");
        }
        gloo_timers::future::sleep(chart_delay).await;
        animations.render_chart();
    });
    let spinner = Rc::clone(&page);
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::sleep(spinner_delay).await;
        spinner.hide_loading_spinner();
    });

    log::info!("portfolio initialized");
    log::info!("Welcome to My Portfolio!");
    log::info!("Data Analyst | Healthcare Analytics Specialist");
    log::info!("Shortcuts: Ctrl/Cmd + D for Dark Mode");
}
