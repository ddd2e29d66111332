//! Element handles resolved once at startup.
//!
//! Critical navigation and theme elements must exist; a missing one fails
//! [`DomBindings::resolve`] so startup stops at a single, logged point. The
//! loading spinner is optional.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node, Window};

use crate::error::{DomError, js_error_text};
use crate::nav::{SectionBounds, link_target};
use crate::scroll::ANIMATABLE_CHILDREN;
use crate::util::{Rect, viewport_height};

/// A `.nav-link` anchor and the section id it points at.
pub struct NavLink {
    pub element: Element,
    pub target: Option<String>,
}

pub struct DomBindings {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
    pub root: HtmlElement,
    pub hamburger: Element,
    pub nav_menu: Element,
    pub nav_links: Vec<NavLink>,
    pub header: Element,
    pub theme_toggle: Element,
    pub theme_icon: Element,
    pub loading_spinner: Option<Element>,
    pub sections: Vec<HtmlElement>,
    pub buttons: Vec<HtmlElement>,
}

impl DomBindings {
    /// Look up every element the page controller touches.
    pub fn resolve() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoDocument)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        let body = document.body().ok_or(DomError::MissingElement("body"))?;
        let root = document
            .document_element()
            .and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
            .ok_or(DomError::MissingElement("html"))?;

        let hamburger = by_id(&document, "hamburger")?;
        let nav_menu = by_id(&document, "navMenu")?;
        let theme_toggle = by_id(&document, "themeToggle")?;
        let theme_icon = theme_toggle
            .query_selector("i")
            .map_err(|err| DomError::Js(js_error_text(&err)))?
            .ok_or(DomError::MissingElement("#themeToggle i"))?;
        let header = document
            .query_selector(".header")
            .map_err(|err| DomError::Js(js_error_text(&err)))?
            .ok_or(DomError::MissingElement(".header"))?;

        let nav_links = all::<Element>(&document, ".nav-link")?
            .into_iter()
            .map(|element| {
                let target = element
                    .get_attribute("href")
                    .as_deref()
                    .and_then(link_target)
                    .map(str::to_owned);
                NavLink { element, target }
            })
            .collect();

        Ok(Self {
            loading_spinner: document.get_element_by_id("loadingSpinner"),
            sections: all::<HtmlElement>(&document, "section")?,
            buttons: all::<HtmlElement>(&document, ".btn")?,
            window,
            document,
            body,
            root,
            hamburger,
            nav_menu,
            nav_links,
            header,
            theme_toggle,
            theme_icon,
        })
    }

    /// Current vertical scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    /// Id and document top of every section, in document order.
    pub fn section_bounds(&self) -> Vec<SectionBounds> {
        self.sections
            .iter()
            .map(|section| SectionBounds { id: section.id(), top: f64::from(section.offset_top()) })
            .collect()
    }

    /// Document-order index of the section `target` refers to.
    pub fn section_index(&self, target: &Node) -> Option<usize> {
        self.sections
            .iter()
            .position(|section| section.is_same_node(Some(target)))
    }

    /// Children of a section that stagger in behind it.
    pub fn animatable_children(section: &HtmlElement) -> Vec<HtmlElement> {
        match section.query_selector_all(ANIMATABLE_CHILDREN) {
            Ok(list) => (0..list.length())
                .filter_map(|i| list.item(i))
                .flat_map(|node| node.dyn_into::<HtmlElement>())
                .collect(),
            Err(err) => {
                log::warn!("animatable children lookup failed: {}", js_error_text(&err));
                Vec::new()
            }
        }
    }

    /// Viewport height, falling back to the root element's client height.
    pub fn viewport_height(&self) -> f64 {
        let inner = match self.window.inner_height() {
            Ok(height) => height.as_f64(),
            Err(_) => None,
        };
        viewport_height(inner, f64::from(self.root.client_height()))
    }
}

/// Bounding box of `element` in viewport coordinates.
pub fn client_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() }
}

fn by_id(document: &Document, id: &'static str) -> Result<Element, DomError> {
    document.get_element_by_id(id).ok_or(DomError::MissingElement(id))
}

fn all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, DomError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|err| DomError::Js(js_error_text(&err)))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .flat_map(|node| node.dyn_into::<T>())
        .collect())
}
