//! `IntersectionObserver` binding that speaks [`IntersectionEntry`].
//!
//! Elements are addressed by their position in the slice handed to [`watch`];
//! that position is the [`ElementId`] the core controllers see. A `Map` keyed
//! by element resolves each entry target back to its position.

use std::rc::Rc;

use cheapfan_core::{ElementId, IntersectionEntry, ObserverOptions, Result};
use js_sys::Map;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom::{self, js_error};

type BatchCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// A live observer. Dropping it disconnects.
pub struct Watch {
    observer: IntersectionObserver,
    _callback: BatchCallback,
}

impl Drop for Watch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// View of the observed elements handed to each batch callback.
pub struct Targets {
    observer: IntersectionObserver,
    elements: Rc<[Element]>,
    index: Map,
}

impl Targets {
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        dom::nth(&self.elements, id)
    }

    pub fn unobserve(&self, id: ElementId) {
        if let Some(element) = self.element(id) {
            self.observer.unobserve(element);
        }
    }

    fn id_of(&self, target: &Element) -> Option<ElementId> {
        let index = self.index.get(target).as_f64()?;
        Some(ElementId::new(index as u32))
    }

    fn entry(&self, raw: &IntersectionObserverEntry) -> Option<IntersectionEntry> {
        Some(IntersectionEntry {
            element: self.id_of(&raw.target())?,
            is_intersecting: raw.is_intersecting(),
        })
    }
}

/// Observe the elements at `observe` and forward every non-empty batch.
pub fn watch<F>(
    elements: Rc<[Element]>,
    observe: &[ElementId],
    options: &ObserverOptions,
    mut on_batch: F,
) -> Result<Watch>
where
    F: FnMut(&[IntersectionEntry], &Targets) + 'static,
{
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if let Some(margin) = &options.root_margin {
        init.set_root_margin(margin);
    }

    let index = Map::new();
    for (position, element) in elements.iter().enumerate() {
        index.set(element, &JsValue::from(position as u32));
    }

    let lookup = Rc::clone(&elements);
    let callback = BatchCallback::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        let targets = Targets {
            observer,
            elements: Rc::clone(&lookup),
            index: index.clone(),
        };
        let batch: Vec<IntersectionEntry> = entries
            .iter()
            .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
            .filter_map(|raw| targets.entry(&raw))
            .collect();
        if !batch.is_empty() {
            on_batch(&batch, &targets);
        }
    });

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(js_error)?;
    for id in observe {
        if let Some(element) = dom::nth(&elements, *id) {
            observer.observe(element);
        }
    }
    tracing::debug!(count = observe.len(), threshold = options.threshold, "observer attached");
    Ok(Watch {
        observer,
        _callback: callback,
    })
}
