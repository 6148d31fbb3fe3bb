//! Statistic count-up wiring.

use std::cell::RefCell;
use std::rc::Rc;

use cheapfan_core::animation::CountUpController;
use cheapfan_core::config::CountUpConfig;
use cheapfan_core::{ElementId, Result};
use web_sys::{Document, Element, Window};
use web_time::Instant;

use super::Mounted;
use super::dom;
use super::frame_loop::FrameLoop;
use super::observer;

pub fn mount(window: &Window, document: &Document, config: &CountUpConfig) -> Result<Mounted> {
    let elements: Rc<[Element]> = dom::query_all(document, &config.selector)?.into();
    let attribute = format!("data-{}", config.attribute);
    let mut controller = CountUpController::new(config.clone());

    let mut observe = Vec::new();
    for (id, element) in ElementId::range(elements.len()).zip(elements.iter()) {
        let raw = element.get_attribute(&attribute);
        if controller.register(id, raw.as_deref()) {
            observe.push(id);
        }
    }
    if observe.is_empty() {
        return Ok(Mounted::none());
    }

    let controller = Rc::new(RefCell::new(controller));
    let frames = {
        let controller = Rc::clone(&controller);
        let elements = Rc::clone(&elements);
        FrameLoop::new(window.clone(), move || {
            let mut controller = controller.borrow_mut();
            for render in controller.tick(Instant::now()) {
                if let Some(element) = dom::nth(&elements, render.element) {
                    element.set_text_content(Some(&render.text));
                }
                if render.done {
                    tracing::debug!(element = %render.element, text = %render.text, "count-up finished");
                }
            }
            controller.is_animating()
        })
    };

    let count = observe.len();
    let watch = observer::watch(elements, &observe, &config.observer(), move |batch, targets| {
        let mut controller = controller.borrow_mut();
        let started = controller.on_intersections(batch, Instant::now());
        for id in &started {
            targets.unobserve(*id);
        }
        if !started.is_empty() {
            tracing::debug!(
                started = started.len(),
                waiting = controller.waiting_count(),
                "count-up started"
            );
            frames.request();
        }
    })?;

    Ok(Mounted::observed(count, watch))
}
