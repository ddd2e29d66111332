//! Browser page controller.
//!
//! ARCHITECTURE
//! ============
//! [`Page`] pairs the resolved [`DomBindings`] with a [`PageCore`]. Listeners
//! translate DOM events into core calls and apply the returned actions. Every
//! closure holds a `Weak<Page>` and is leaked to JS once registered, so a
//! listener stays valid even if mounting fails after it was added.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MouseEvent, Node, ScrollBehavior, ScrollToOptions, Window,
};

use crate::action::Action;
use crate::config::PageConfig;
use crate::consts::{DARK_MODE_CLASS, ENTRANCE_ROOT_MARGIN, ENTRANCE_THRESHOLD};
use crate::dom::bindings::{DomBindings, client_rect};
use crate::dom::chart::{ChartHandle, render_specialization_chart};
use crate::dom::debounce::Debounced;
use crate::dom::storage::LocalStorage;
use crate::error::{DomError, js_error_text};
use crate::input::{Key, Modifiers};
use crate::nav::ClickTarget;
use crate::page::{PageCore, visibility_notice};
use crate::scroll::{EntrancePlan, anchor_scroll_top, scroll_percentage};
use crate::theme::Theme;
use crate::util::{is_in_viewport, ripple_geometry};

type EventClosure = Closure<dyn FnMut(Event)>;
type ObserverClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct Page {
    dom: DomBindings,
    core: RefCell<PageCore<LocalStorage>>,
    chart: RefCell<Option<ChartHandle>>,
    observer: RefCell<Option<(IntersectionObserver, ObserverClosure)>>,
}

impl Page {
    /// Resolve the DOM, paint the initial theme, and wire every listener.
    pub fn mount(config: PageConfig) -> Result<Rc<Self>, DomError> {
        let dom = DomBindings::resolve()?;
        let store = LocalStorage::open(&dom.window);
        let system_prefers_dark = media_matches(&dom.window, "(prefers-color-scheme: dark)");
        let mut core = PageCore::new(config, store, system_prefers_dark, dom.sections.len());
        let initial = core.init();

        let page = Rc::new(Self {
            dom,
            core: RefCell::new(core),
            chart: RefCell::new(None),
            observer: RefCell::new(None),
        });
        page.apply(&initial);
        page.wire_listeners()?;
        page.apply_reduced_motion();
        Ok(page)
    }

    #[must_use]
    pub fn config(&self) -> PageConfig {
        self.core.borrow().config().clone()
    }

    // --- Operations shared with the global export surface ---

    pub fn toggle_theme(&self) {
        let actions = self.core.borrow_mut().toggle_theme();
        self.apply(&actions);
    }

    pub fn set_theme(&self, theme: Theme) {
        let actions = self.core.borrow_mut().set_theme(theme);
        self.apply(&actions);
    }

    pub fn toggle_menu(&self) {
        let actions = self.core.borrow_mut().toggle_menu();
        self.apply(&actions);
    }

    pub fn close_menu(&self) {
        let actions = self.core.borrow_mut().close_menu();
        self.apply(&actions);
    }

    /// Recompute header style and active link from the current scroll offset.
    pub fn sync_scroll(&self) {
        let sections = self.dom.section_bounds();
        let actions = self.core.borrow_mut().on_scroll(self.dom.scroll_y(), &sections);
        self.apply(&actions);
    }

    pub fn is_in_viewport(&self, element: &Element) -> bool {
        is_in_viewport(&client_rect(element), self.dom.viewport_height())
    }

    pub fn scroll_percentage(&self) -> f64 {
        scroll_percentage(
            self.dom.scroll_y(),
            f64::from(self.dom.root.scroll_height()),
            f64::from(self.dom.root.client_height()),
        )
    }

    // --- Deferred startup steps ---

    /// Hide every section and reveal each once it is sufficiently on screen.
    pub fn setup_entrance_animations(self: &Rc<Self>) -> Result<(), DomError> {
        let weak = Rc::downgrade(self);
        let callback = ObserverClosure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            if let Some(page) = weak.upgrade() {
                page.on_intersections(&entries, &observer);
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(ENTRANCE_THRESHOLD));
        options.set_root_margin(ENTRANCE_ROOT_MARGIN);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|err| DomError::Js(js_error_text(&err)))?;

        for section in &self.dom.sections {
            set_style(section, "opacity", "0");
            observer.observe(section);
        }
        *self.observer.borrow_mut() = Some((observer, callback));
        Ok(())
    }

    /// Render the specialization chart, or log why it was skipped.
    pub fn render_chart(&self) {
        match render_specialization_chart(&self.dom) {
            Ok(chart) => *self.chart.borrow_mut() = Some(chart),
            Err(err) => log::warn!("specialization chart skipped: {err}"),
        }
    }

    pub fn hide_loading_spinner(&self) {
        if let Some(spinner) = &self.dom.loading_spinner {
            set_class(spinner, "hidden", true);
        }
    }

    // --- Wiring ---

    fn wire_listeners(self: &Rc<Self>) -> Result<(), DomError> {
        let dom = &self.dom;

        self.listen(&dom.hamburger, "click", |page, _| page.toggle_menu())?;
        for link in &dom.nav_links {
            self.listen(&link.element, "click", |page, _| page.close_menu())?;
        }
        self.listen(&dom.theme_toggle, "click", |page, _| page.toggle_theme())?;
        self.listen(&dom.document, "click", |page, event| page.on_document_click(&event))?;
        self.listen(&dom.document, "keydown", |page, event| page.on_keydown(&event))?;
        self.listen(&dom.document, "visibilitychange", |page, _| page.on_visibility_change())?;
        for button in &dom.buttons {
            self.listen(button, "click", |page, event| page.on_button_click(&event))?;
        }

        let config = self.config();
        let scroll = Debounced::new(
            config.scroll_debounce_ms,
            deferred(Rc::downgrade(self), |page, ()| page.sync_scroll()),
        );
        self.listen(&dom.window, "scroll", move |_, _| scroll.call(()))?;

        let resize = Debounced::new(
            config.resize_debounce_ms,
            deferred(Rc::downgrade(self), |page, ()| page.on_resize()),
        );
        self.listen(&dom.window, "resize", move |_, _| resize.call(()))?;

        self.listen(&dom.window, "load", |_, _| {
            wasm_bindgen_futures::spawn_local(async {
                // loadEventEnd is only stamped once the load handlers return.
                gloo_timers::future::TimeoutFuture::new(0).await;
                log_performance_metrics();
            });
        })?;
        Ok(())
    }

    fn listen(
        self: &Rc<Self>,
        target: &EventTarget,
        event: &str,
        handler: impl Fn(&Rc<Self>, Event) + 'static,
    ) -> Result<(), DomError> {
        let weak = Rc::downgrade(self);
        let closure = EventClosure::new(move |event: Event| {
            if let Some(page) = weak.upgrade() {
                handler(&page, event);
            }
        });
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|err| DomError::Js(js_error_text(&err)))?;
        closure.forget();
        Ok(())
    }

    // --- Event handlers ---

    fn on_document_click(&self, event: &Event) {
        let node = event.target().and_then(|target| target.dyn_ref::<Node>().cloned());
        let target = node.as_ref().map_or_else(ClickTarget::default, |node| ClickTarget {
            in_panel: self.dom.nav_menu.contains(Some(node)),
            in_trigger: self.dom.hamburger.contains(Some(node)),
        });
        let actions = self.core.borrow_mut().on_document_click(target);
        self.apply(&actions);

        if let Some(anchor) = node.as_ref().and_then(|node| node.dyn_ref::<Element>()) {
            self.scroll_to_anchor(anchor, event);
        }
    }

    /// Smoothly scroll to the target of an in-page `#id` link.
    fn scroll_to_anchor(&self, anchor: &Element, event: &Event) {
        if !anchor.matches("a[href^=\"#\"]").unwrap_or(false) {
            return;
        }
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        if href == "#" {
            return;
        }
        let Ok(Some(destination)) = self.dom.document.query_selector(&href) else {
            return;
        };
        event.prevent_default();

        let top = anchor_scroll_top(
            destination.get_bounding_client_rect().top(),
            self.dom.window.page_y_offset().unwrap_or(0.0),
            self.core.borrow().config().anchor_scroll_offset,
        );
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.dom.window.scroll_to_with_scroll_to_options(&options);
    }

    fn on_keydown(&self, event: &Event) {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let modifiers = Modifiers { ctrl: event.ctrl_key(), meta: event.meta_key() };
        let outcome = self.core.borrow_mut().on_key(&Key(event.key()), modifiers);
        if outcome.prevent_default {
            event.prevent_default();
        }
        self.apply(&outcome.actions);
    }

    fn on_visibility_change(&self) {
        let hidden = self.dom.document.hidden();
        log::info!("{}", visibility_notice(hidden));
        let sections = self.dom.section_bounds();
        let actions = self
            .core
            .borrow_mut()
            .on_visibility_change(hidden, self.dom.scroll_y(), &sections);
        self.apply(&actions);
    }

    fn on_resize(&self) {
        let Ok(width) = self.dom.window.inner_width() else {
            return;
        };
        let Some(width) = width.as_f64() else {
            return;
        };
        let actions = self.core.borrow_mut().on_resize(width);
        self.apply(&actions);
    }

    fn on_intersections(&self, entries: &js_sys::Array, observer: &IntersectionObserver) {
        for entry in entries.iter() {
            let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(index) = self.dom.section_index(&target) else {
                continue;
            };
            let Some(section) = self.dom.sections.get(index) else {
                continue;
            };
            let child_count = DomBindings::animatable_children(section).len();
            let actions = self
                .core
                .borrow_mut()
                .on_section_intersect(index, entry.is_intersecting(), child_count);
            if !actions.is_empty() {
                observer.unobserve(&target);
            }
            self.apply(&actions);
        }
    }

    /// Replace any existing ripple in the clicked `.btn` with a fresh one.
    fn on_button_click(&self, event: &Event) {
        let (Some(event), Some(button)) = (
            event.dyn_ref::<MouseEvent>(),
            event.current_target().and_then(|t| t.dyn_ref::<HtmlElement>().cloned()),
        ) else {
            return;
        };
        let geometry = ripple_geometry(
            &client_rect(&button),
            f64::from(event.client_x()),
            f64::from(event.client_y()),
        );
        let ripple = match self.dom.document.create_element("span") {
            Ok(el) => el,
            Err(err) => {
                log::warn!("ripple not created: {}", js_error_text(&err));
                return;
            }
        };
        let Some(ripple) = ripple.dyn_ref::<HtmlElement>() else {
            return;
        };
        let size = format!("{}px", geometry.size);
        set_style(ripple, "width", &size);
        set_style(ripple, "height", &size);
        set_style(ripple, "left", &format!("{}px", geometry.left));
        set_style(ripple, "top", &format!("{}px", geometry.top));
        set_class(ripple, "ripple", true);

        if let Ok(Some(existing)) = button.query_selector(".ripple") {
            existing.remove();
        }
        if let Err(err) = button.append_child(ripple) {
            log::warn!("ripple not attached: {}", js_error_text(&err));
        }
    }

    // --- Effects ---

    fn apply(&self, actions: &[Action]) {
        for action in actions {
            match action {
                Action::SetDarkMode(on) => set_class(&self.dom.body, DARK_MODE_CLASS, *on),
                Action::SetThemeIcon(icon) => self.dom.theme_icon.set_class_name(icon),
                Action::SetMenuOpen(open) => {
                    set_class(&self.dom.hamburger, "active", *open);
                    set_class(&self.dom.nav_menu, "active", *open);
                }
                Action::SetHeaderScrolled(on) => set_class(&self.dom.header, "scrolled", *on),
                Action::SetActiveLink(active) => {
                    for link in &self.dom.nav_links {
                        let on = active.is_some() && link.target == *active;
                        set_class(&link.element, "active", on);
                    }
                }
                Action::RevealSection { index, plan } => self.reveal_section(*index, plan),
            }
        }
    }

    fn reveal_section(&self, index: usize, plan: &EntrancePlan) {
        let Some(section) = self.dom.sections.get(index) else {
            return;
        };
        set_style(section, "opacity", "1");
        set_style(section, "animation", plan.section_animation);
        let children = DomBindings::animatable_children(section);
        for (child, animation) in children.iter().zip(&plan.child_animations) {
            set_style(child, "opacity", "0");
            set_style(child, "animation", animation);
        }
    }

    fn apply_reduced_motion(&self) {
        if media_matches(&self.dom.window, "(prefers-reduced-motion: reduce)") == Some(true) {
            set_style(&self.dom.root, "scroll-behavior", "auto");
        }
    }
}

/// Adapt a page handler for a debounced callback.
fn deferred<T>(weak: Weak<Page>, handler: impl Fn(&Rc<Page>, T) + 'static) -> impl Fn(T) + 'static {
    move |args| {
        if let Some(page) = weak.upgrade() {
            handler(&page, args);
        }
    }
}

/// Evaluate a media query; `None` when the browser cannot.
fn media_matches(window: &Window, query: &str) -> Option<bool> {
    match window.match_media(query) {
        Ok(list) => list.map(|list| list.matches()),
        Err(err) => {
            log::debug!("media query {query} failed: {}", js_error_text(&err));
            None
        }
    }
}

fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        log::warn!("class {class} not toggled: {}", js_error_text(&err));
    }
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::warn!("style {property} not set: {}", js_error_text(&err));
    }
}

/// Log load timings once the navigation has finished.
fn log_performance_metrics() {
    let Some(performance) = web_sys::window().and_then(|w| w.performance()) else {
        return;
    };
    let timing = performance.timing();
    let start = timing.navigation_start();
    log::info!(
        "performance: total load {}ms, dom content loaded {}ms",
        timing.load_event_end() - start,
        timing.dom_content_loaded_event_end() - start,
    );
}
