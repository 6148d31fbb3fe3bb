//! Smooth in-page anchor scrolling.

use cheapfan_core::Result;
use cheapfan_core::config::SmoothScrollConfig;
use cheapfan_core::scroll::{ScrollRequest, anchor_target};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::Mounted;
use super::dom::{self, js_error};

fn header_height(document: &Document, selector: &str) -> Option<f64> {
    dom::query(document, selector)
        .ok()
        .flatten()
        .and_then(|header| header.dyn_into::<HtmlElement>().ok())
        .map(|header| f64::from(header.offset_height()))
}

fn perform(window: &Window, request: &ScrollRequest) -> Result<()> {
    let options = ScrollToOptions::new();
    options.set_top(request.top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    window
        .history()
        .map_err(js_error)?
        .push_state_with_url(&JsValue::NULL, "", Some(&request.hash))
        .map_err(js_error)
}

pub fn mount(
    window: &Window,
    document: &Document,
    config: &SmoothScrollConfig,
    header_selector: &str,
) -> Result<Mounted> {
    let anchors = dom::query_all(document, &config.anchor_selector)?;
    for anchor in &anchors {
        let (window, document) = (window.clone(), document.clone());
        let header_selector = header_selector.to_string();
        let source = anchor.clone();
        dom::listen(anchor, "click", move |event| {
            let Some(href) = source.get_attribute("href") else {
                return;
            };
            let Some(hash) = anchor_target(&href) else {
                return;
            };
            // Unknown ids and unparsable fragments fall through to the browser.
            let Ok(Some(target)) = document.query_selector(hash) else {
                return;
            };
            event.prevent_default();
            let request = ScrollRequest::new(
                hash,
                target.get_bounding_client_rect().top(),
                window.page_y_offset().unwrap_or(0.0),
                header_height(&document, &header_selector),
            );
            if let Err(err) = perform(&window, &request) {
                tracing::warn!(%err, hash, "smooth scroll failed");
            }
        })?;
    }
    Ok(Mounted::wired(anchors.len()))
}
