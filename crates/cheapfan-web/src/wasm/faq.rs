//! FAQ `<details>` wiring. Only exclusive mode needs listeners.

use std::cell::RefCell;
use std::rc::Rc;

use cheapfan_core::Result;
use cheapfan_core::config::FaqConfig;
use cheapfan_core::faq::FaqAccordion;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDetailsElement};

use super::Mounted;
use super::dom;

pub fn mount(document: &Document, config: &FaqConfig) -> Result<Mounted> {
    let items: Vec<HtmlDetailsElement> = dom::query_all(document, &config.selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlDetailsElement>().ok())
        .collect();
    if items.is_empty() {
        return Ok(Mounted::none());
    }
    if !config.exclusive {
        tracing::debug!(count = items.len(), "faq left to native toggling");
        return Ok(Mounted::wired(items.len()));
    }

    let accordion = Rc::new(RefCell::new(FaqAccordion::new(
        true,
        items.iter().map(HtmlDetailsElement::open),
    )));
    let items: Rc<[HtmlDetailsElement]> = items.into();
    for (index, item) in items.iter().enumerate() {
        let (accordion, all) = (Rc::clone(&accordion), Rc::clone(&items));
        let this = item.clone();
        dom::listen(item, "toggle", move |_| {
            let close = accordion.borrow_mut().on_toggle(index, this.open());
            for other in close {
                if let Some(details) = all.get(other) {
                    details.set_open(false);
                }
            }
        })?;
    }
    Ok(Mounted::wired(items.len()))
}
