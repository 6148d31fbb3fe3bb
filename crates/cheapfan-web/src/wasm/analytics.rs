//! CTA click tracking forwarded to `gtag` when the page loads it.

use cheapfan_core::Result;
use cheapfan_core::analytics::{AnalyticsEvent, AnalyticsSink, cta_click};
use cheapfan_core::config::AnalyticsConfig;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

use super::Mounted;
use super::dom;

/// Sink that calls the global `gtag('event', action, {...})`, if defined.
pub struct GtagSink {
    window: Window,
}

impl GtagSink {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn gtag(&self) -> Option<js_sys::Function> {
        js_sys::Reflect::get(&self.window, &JsValue::from_str("gtag"))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()
    }
}

impl AnalyticsSink for GtagSink {
    fn track(&self, event: &AnalyticsEvent) {
        let Some(gtag) = self.gtag() else {
            tracing::trace!(label = %event.label, "gtag absent; event dropped");
            return;
        };
        let params = js_sys::Object::new();
        let fields = [
            ("event_category", event.category.as_str()),
            ("event_label", event.label.as_str()),
        ];
        for (key, value) in fields {
            if js_sys::Reflect::set(&params, &JsValue::from_str(key), &JsValue::from_str(value)).is_err() {
                return;
            }
        }
        if let Err(err) = gtag.call3(
            &JsValue::UNDEFINED,
            &JsValue::from_str("event"),
            &JsValue::from_str(&event.action),
            &params,
        ) {
            tracing::warn!(error = ?err, "gtag call failed");
        }
    }
}

pub fn mount(window: &Window, document: &Document, config: &AnalyticsConfig) -> Result<Mounted> {
    let sink = GtagSink::new(window.clone());
    let config = config.clone();
    dom::listen(document, "click", move |event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(cta)) = target.closest(&config.cta_selector) else {
            return;
        };
        let text = cta.text_content().unwrap_or_default();
        sink.track(&cta_click(&config, &text));
    })?;
    Ok(Mounted::wired(1))
}
