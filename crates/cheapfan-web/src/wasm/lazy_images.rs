//! Deferred image loading.

use std::cell::RefCell;
use std::rc::Rc;

use cheapfan_core::config::LazyImageConfig;
use cheapfan_core::lazy_images::{LazyImages, LazyStrategy, Registration};
use cheapfan_core::{ElementId, ObserverOptions, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlImageElement, Window};

use super::Mounted;
use super::dom;
use super::observer;

/// `'loading' in HTMLImageElement.prototype`
fn native_lazy_supported(window: &Window) -> bool {
    js_sys::Reflect::get(window, &JsValue::from_str("HTMLImageElement"))
        .and_then(|ctor| js_sys::Reflect::get(&ctor, &JsValue::from_str("prototype")))
        .ok()
        .filter(JsValue::is_object)
        .is_some_and(|proto| {
            js_sys::Reflect::has(&proto, &JsValue::from_str("loading")).unwrap_or(false)
        })
}

fn set_src(element: &Element, src: &str) {
    match element.dyn_ref::<HtmlImageElement>() {
        Some(image) => image.set_src(src),
        None => {
            if let Err(err) = element.set_attribute("src", src) {
                tracing::warn!(error = ?err, "lazy image src failed");
            }
        }
    }
}

pub fn mount(window: &Window, document: &Document, config: &LazyImageConfig) -> Result<Mounted> {
    let elements: Rc<[Element]> = dom::query_all(document, &config.selector)?.into();
    if elements.is_empty() {
        return Ok(Mounted::none());
    }
    let mut lazy = LazyImages::new(LazyStrategy::detect(native_lazy_supported(window)));

    let mut observe = Vec::new();
    for (id, element) in ElementId::range(elements.len()).zip(elements.iter()) {
        match lazy.register(id, element.get_attribute(&config.source_attribute)) {
            Registration::Swap(swap) => set_src(element, &swap.src),
            Registration::Observe => observe.push(id),
            Registration::Skip => {}
        }
    }
    tracing::debug!(
        strategy = ?lazy.strategy(),
        observed = lazy.pending_count(),
        "lazy images registered"
    );
    if observe.is_empty() {
        return Ok(Mounted::wired(elements.len()));
    }

    let count = elements.len();
    let lazy = Rc::new(RefCell::new(lazy));
    let attribute = config.source_attribute.clone();
    let watch = observer::watch(elements, &observe, &ObserverOptions::new(0.0), move |batch, targets| {
        let swaps = lazy.borrow_mut().on_intersections(batch);
        for swap in swaps {
            if let Some(element) = targets.element(swap.element) {
                set_src(element, &swap.src);
                if let Err(err) = element.remove_attribute(&attribute) {
                    tracing::warn!(error = ?err, "lazy image attribute removal failed");
                }
            }
            targets.unobserve(swap.element);
        }
    })?;
    Ok(Mounted::observed(count, watch))
}
