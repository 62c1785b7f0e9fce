//! Ids and classes shared between the markup and the behaviour attached to
//! it, plus small lookups over `web_sys`.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::SiteError;

pub const PRELOADER: &str = "preloader";
pub const MOBILE_TOGGLE: &str = "mobile-toggle";
pub const MAIN_NAV: &str = "main-nav";
pub const HERO: &str = ".hero";
pub const HERO_INNER: &str = ".hero-inner";
pub const ABOUT_LINES: &str = "about-lines";
pub const ABOUT_LINE: &str = ".about-line";
pub const CHAR: &str = ".char";
pub const HISTORY: &str = "history";
pub const HISTORY_YEAR: &str = "history-year";
pub const TIMELINE_MODULE: &str = ".timeline-module";
pub const GALLERY: &str = "gallery";
pub const WIPE: &str = ".wipe";
pub const LIGHTBOX: &str = "lightbox";
pub const CONTACT_FORM: &str = "contact-form";
pub const CONTACT_STATUS: &str = "contact-status";

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoWindow)
}

pub fn by_id(id: &'static str) -> Result<Element, SiteError> {
    document()?
        .get_element_by_id(id)
        .ok_or(SiteError::MissingElement(id))
}

pub fn query(selector: &'static str) -> Result<Element, SiteError> {
    document()?
        .query_selector(selector)?
        .ok_or(SiteError::MissingElement(selector))
}

pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, SiteError> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn html(element: Element, name: &'static str) -> Result<HtmlElement, SiteError> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| SiteError::MissingElement(name))
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (read(window.inner_width()), read(window.inner_height()))
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::debug!("style {} not applied: {:?}", property, e);
    }
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    if let Err(e) = result {
        log::debug!("class {} not toggled: {:?}", class, e);
    }
}
