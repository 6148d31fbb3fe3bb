//! Thin helpers over `web-sys` that map JavaScript failures into [`SiteError`].

use std::time::Duration;

use cheapfan_core::animation::StyleDecl;
use cheapfan_core::{ElementId, Result, SiteError};
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn js_error(value: JsValue) -> SiteError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"));
    SiteError::js(message)
}

pub fn to_js(err: &SiteError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| SiteError::js("no global window"))
}

pub fn document(window: &Window) -> Result<Document> {
    window
        .document()
        .ok_or_else(|| SiteError::js("window has no document"))
}

pub fn query(document: &Document, selector: &str) -> Result<Option<Element>> {
    document.query_selector(selector).map_err(js_error)
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    document
        .query_selector_all(selector)
        .map(elements)
        .map_err(js_error)
}

pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>> {
    root.query_selector_all(selector)
        .map(elements)
        .map_err(js_error)
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Element registered at position `id`.
#[inline]
pub fn nth(elements: &[Element], id: ElementId) -> Option<&Element> {
    elements.get(id.get() as usize)
}

pub fn apply_styles(element: &Element, styles: &[StyleDecl]) -> Result<()> {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let style = html.style();
    for decl in styles {
        style
            .set_property(decl.property, &decl.value)
            .map_err(js_error)?;
    }
    Ok(())
}

/// Attach `handler` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

/// Run `f` once after `delay`.
pub fn after<F>(delay: Duration, f: F)
where
    F: FnOnce() + 'static,
{
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    Timeout::new(millis, f).forget();
}

pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}
