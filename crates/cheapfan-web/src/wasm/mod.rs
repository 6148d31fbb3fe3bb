//! Browser bindings: `boot` mounts every component against the live document.
//!
//! # Failure Modes
//!
//! - A malformed configuration object rejects `boot` before anything is
//!   mounted, and a later `boot` may retry.
//! - A component whose markup is missing is skipped with a debug event.
//! - A component that hits a JavaScript error is logged and skipped; the
//!   remaining components still mount.

mod analytics;
mod count_up;
mod dom;
mod faq;
mod frame_loop;
mod header;
mod lazy_images;
mod logging;
mod nav;
mod newsletter;
mod observer;
mod reveal;
mod scroll;
mod service_worker;

use std::cell::{Cell, RefCell};

use cheapfan_core::{Result, SiteConfig, SiteError};
use wasm_bindgen::prelude::*;

use crate::banner::BANNER;
use crate::summary::BootSummary;
use observer::Watch;

thread_local! {
    static BOOTED: Cell<bool> = const { Cell::new(false) };
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

/// What one component wired up: how many elements, and the observer that
/// must outlive the page if it needed one.
struct Mounted {
    count: usize,
    watch: Option<Watch>,
}

impl Mounted {
    fn none() -> Self {
        Self {
            count: 0,
            watch: None,
        }
    }

    fn wired(count: usize) -> Self {
        Self { count, watch: None }
    }

    fn observed(count: usize, watch: Watch) -> Self {
        Self {
            count,
            watch: Some(watch),
        }
    }
}

struct Site {
    summary: BootSummary,
    watches: Vec<Watch>,
}

impl Site {
    fn attach(&mut self, component: &'static str, mounted: Result<Mounted>) -> usize {
        match mounted {
            Ok(Mounted { count, watch }) => {
                self.watches.extend(watch);
                tracing::debug!(component, count, "component mounted");
                count
            }
            Err(SiteError::MissingElement { selector }) => {
                tracing::debug!(component, %selector, "markup absent; skipped");
                0
            }
            Err(err) => {
                tracing::warn!(component, %err, "component skipped");
                0
            }
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    logging::init();
}

/// Mount the site. `config` is an optional plain object matching
/// `SiteConfig`; `undefined` or `null` selects the defaults.
#[wasm_bindgen]
pub fn boot(config: JsValue) -> std::result::Result<(), JsValue> {
    boot_with(config).map_err(|err| dom::to_js(&err))
}

/// Counts from the last completed mount, or `null` before one finished.
#[wasm_bindgen(js_name = bootSummary)]
pub fn boot_summary() -> std::result::Result<JsValue, JsValue> {
    SITE.with(|site| match site.borrow().as_ref() {
        Some(site) => serde_wasm_bindgen::to_value(&site.summary).map_err(Into::into),
        None => Ok(JsValue::NULL),
    })
}

fn parse_config(value: JsValue) -> Result<SiteConfig> {
    if value.is_undefined() || value.is_null() {
        return Ok(SiteConfig::default());
    }
    let config: SiteConfig =
        serde_wasm_bindgen::from_value(value).map_err(|err| SiteError::config(err.to_string()))?;
    config.validate()?;
    Ok(config)
}

fn boot_with(config: JsValue) -> Result<()> {
    if BOOTED.with(Cell::get) {
        return Err(SiteError::AlreadyBooted);
    }
    let config = parse_config(config)?;
    BOOTED.with(|booted| booted.set(true));

    if config.banner {
        web_sys::console::log_1(&JsValue::from_str(BANNER));
    }

    let window = dom::window()?;
    let document = dom::document(&window)?;
    if document.ready_state() == "loading" {
        tracing::debug!("waiting for DOMContentLoaded");
        let mut pending = Some(config);
        dom::listen(&document, "DOMContentLoaded", move |_| {
            if let Some(config) = pending.take() {
                finish_boot(&config);
            }
        })?;
    } else {
        finish_boot(&config);
    }
    Ok(())
}

fn finish_boot(config: &SiteConfig) {
    match mount(config) {
        Ok(site) => {
            tracing::info!(summary = %site.summary, "cheapfan booted");
            SITE.with(|slot| *slot.borrow_mut() = Some(site));
        }
        Err(err) => tracing::error!(%err, "cheapfan boot failed"),
    }
}

fn mount(config: &SiteConfig) -> Result<Site> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let reduced_motion = dom::prefers_reduced_motion(&window);

    let mut site = Site {
        summary: BootSummary::default(),
        watches: Vec::new(),
    };

    let navigation = site.attach("navigation", nav::mount(&document, &config.nav));
    let header = site.attach(
        "sticky header",
        header::mount(&window, &document, &config.header),
    );
    let anchors = site.attach(
        "smooth scroll",
        scroll::mount(&window, &document, &config.smooth_scroll, &config.header.selector),
    );
    let reveal = site.attach(
        "reveal",
        reveal::mount(&document, &config.reveal, reduced_motion),
    );
    let count_up = site.attach(
        "count-up",
        count_up::mount(&window, &document, &config.count_up),
    );
    let faq = site.attach("faq", faq::mount(&document, &config.faq));
    let newsletter = site.attach("newsletter", newsletter::mount(&document, &config.newsletter));
    let lazy = site.attach(
        "lazy images",
        lazy_images::mount(&window, &document, &config.lazy_images),
    );
    let analytics = site.attach(
        "analytics",
        analytics::mount(&window, &document, &config.analytics),
    );
    let service_worker = site.attach(
        "service worker",
        service_worker::mount(&window, &config.service_worker),
    );

    site.summary = BootSummary {
        reduced_motion,
        reveal_elements: reveal,
        count_up_elements: count_up,
        lazy_images: lazy,
        faq_items: faq,
        anchors,
        navigation: navigation > 0,
        sticky_header: header > 0,
        newsletter: newsletter > 0,
        analytics: analytics > 0,
        service_worker: service_worker > 0,
    };
    Ok(site)
}
