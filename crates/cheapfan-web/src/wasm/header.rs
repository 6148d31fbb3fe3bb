//! Sticky header wiring.

use std::cell::RefCell;
use std::rc::Rc;

use cheapfan_core::{Result, SiteError};
use cheapfan_core::config::HeaderConfig;
use cheapfan_core::header::{HeaderUpdate, StickyHeader};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, Window};

use super::Mounted;
use super::dom::{self, js_error};

fn apply(header: &Element, scrolled_class: &str, update: HeaderUpdate) -> Result<()> {
    header
        .class_list()
        .toggle_with_force(scrolled_class, update.scrolled)
        .map_err(js_error)?;
    if let (Some(position), Some(html)) = (update.position, header.dyn_ref::<HtmlElement>()) {
        html.style()
            .set_property("transform", position.transform())
            .map_err(js_error)?;
    }
    Ok(())
}

fn run_frame(window: &Window, element: &Element, state: &RefCell<StickyHeader>) {
    let y = window.scroll_y().unwrap_or(0.0);
    let mut state = state.borrow_mut();
    let update = state.on_frame(y);
    if let Err(err) = apply(element, &state.config().scrolled_class, update) {
        tracing::warn!(%err, "header update failed");
    }
}

pub fn mount(window: &Window, document: &Document, config: &HeaderConfig) -> Result<Mounted> {
    let Some(element) = dom::query(document, &config.selector)? else {
        return Err(SiteError::missing(&config.selector));
    };
    let state = Rc::new(RefCell::new(StickyHeader::new(config.clone())));
    let frame_window = window.clone();

    dom::listen(window, "scroll", move |_| {
        if !state.borrow().on_scroll_event() {
            return;
        }
        let callback = {
            let (window, element, state) = (frame_window.clone(), element.clone(), Rc::clone(&state));
            Closure::once_into_js(move || run_frame(&window, &element, &state))
        };
        if frame_window
            .request_animation_frame(callback.unchecked_ref())
            .is_err()
        {
            tracing::warn!("requestAnimationFrame failed; updating header synchronously");
            run_frame(&frame_window, &element, &state);
        }
    })?;

    Ok(Mounted::wired(1))
}
