//! Scroll-reveal wiring.

use std::cell::RefCell;
use std::rc::Rc;

use cheapfan_core::animation::{RevealController, StyleDecl};
use cheapfan_core::config::RevealConfig;
use cheapfan_core::{ElementId, Result};
use web_sys::{Document, Element};
use web_time::Instant;

use super::Mounted;
use super::dom;
use super::observer;

pub fn mount(document: &Document, config: &RevealConfig, reduced_motion: bool) -> Result<Mounted> {
    let mut controller = RevealController::new(config.clone(), reduced_motion);
    if !controller.is_enabled() {
        return Ok(Mounted::none());
    }
    let elements: Rc<[Element]> = dom::query_all(document, &config.selector())?.into();
    let observe = controller.prepare(ElementId::range(elements.len()));
    if observe.is_empty() {
        return Ok(Mounted::none());
    }

    let hidden = controller.hidden_style();
    for id in &observe {
        if let Some(element) = dom::nth(&elements, *id) {
            dom::apply_styles(element, &hidden)?;
        }
    }

    let shown: Rc<[StyleDecl]> = Rc::new(controller.shown_style());
    let transition = config.transition();
    let controller = Rc::new(RefCell::new(controller));
    let count = observe.len();

    let watch = observer::watch(elements, &observe, &config.observer(), move |batch, targets| {
        let commands = controller.borrow_mut().on_intersections(batch, Instant::now());
        for command in commands {
            targets.unobserve(command.element);
            let Some(element) = targets.element(command.element).cloned() else {
                continue;
            };
            let shown = Rc::clone(&shown);
            dom::after(command.delay, move || {
                if let Err(err) = dom::apply_styles(&element, &shown) {
                    tracing::warn!(%err, "reveal style failed");
                }
            });
            let controller = Rc::clone(&controller);
            dom::after(command.delay + transition, move || {
                let mut controller = controller.borrow_mut();
                let settled = controller.poll_settled(Instant::now());
                tracing::trace!(
                    count = settled.len(),
                    pending = controller.pending_count(),
                    "reveal settled"
                );
            });
        }
    })?;

    Ok(Mounted::observed(count, watch))
}
