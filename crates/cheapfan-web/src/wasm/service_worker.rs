//! Optional service worker registration.

use cheapfan_core::Result;
use cheapfan_core::config::ServiceWorkerConfig;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{ServiceWorkerRegistration, Window};

use super::Mounted;
use super::dom::{self, js_error};

async fn register(window: Window, script_url: String) {
    let promise = window.navigator().service_worker().register(&script_url);
    match JsFuture::from(promise).await {
        Ok(value) => {
            let scope = value
                .dyn_into::<ServiceWorkerRegistration>()
                .map(|registration| registration.scope())
                .unwrap_or_default();
            web_sys::console::log_2(&"SW registered:".into(), &JsValue::from_str(&scope));
            tracing::info!(%scope, "service worker registered");
        }
        Err(err) => {
            web_sys::console::log_2(&"SW registration failed:".into(), &err);
            tracing::warn!(err = %js_error(err), "service worker registration failed");
        }
    }
}

pub fn mount(window: &Window, config: &ServiceWorkerConfig) -> Result<Mounted> {
    if !config.enabled {
        return Ok(Mounted::none());
    }
    let supported = js_sys::Reflect::has(&window.navigator(), &JsValue::from_str("serviceWorker"))
        .unwrap_or(false);
    if !supported {
        tracing::debug!("service workers unsupported");
        return Ok(Mounted::none());
    }

    let loaded = dom::document(window)?.ready_state() == "complete";
    if loaded {
        spawn_local(register(window.clone(), config.script_url.clone()));
    } else {
        let (handle, script_url) = (window.clone(), config.script_url.clone());
        let mut pending = Some(script_url);
        dom::listen(window, "load", move |_| {
            if let Some(script_url) = pending.take() {
                spawn_local(register(handle.clone(), script_url));
            }
        })?;
    }
    Ok(Mounted::wired(1))
}
