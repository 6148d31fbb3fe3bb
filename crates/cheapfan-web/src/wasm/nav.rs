//! Mobile navigation wiring.

use std::cell::RefCell;
use std::rc::Rc;

use cheapfan_core::{Result, SiteError};
use cheapfan_core::config::NavConfig;
use cheapfan_core::nav::{NavView, NavigationToggle};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use super::Mounted;
use super::dom::{self, js_error};

struct NavDom {
    toggle: Element,
    menu: Element,
    body: Option<HtmlElement>,
    active_class: String,
}

impl NavDom {
    fn apply(&self, view: NavView) {
        if let Err(err) = self.try_apply(view) {
            tracing::warn!(%err, "nav update failed");
        }
    }

    fn try_apply(&self, view: NavView) -> Result<()> {
        self.toggle
            .set_attribute("aria-expanded", view.aria_expanded())
            .map_err(js_error)?;
        self.menu
            .class_list()
            .toggle_with_force(&self.active_class, view.open)
            .map_err(js_error)?;
        if let Some(body) = &self.body {
            body.style()
                .set_property("overflow", view.body_overflow())
                .map_err(js_error)?;
        }
        Ok(())
    }
}

pub fn mount(document: &Document, config: &NavConfig) -> Result<Mounted> {
    let Some(toggle) = dom::query(document, &config.toggle_selector)? else {
        return Err(SiteError::missing(&config.toggle_selector));
    };
    let Some(menu) = dom::query(document, &config.menu_selector)? else {
        return Err(SiteError::missing(&config.menu_selector));
    };

    let initially_open = toggle.get_attribute("aria-expanded").as_deref() == Some("true");
    let state = Rc::new(RefCell::new(NavigationToggle::with_state(initially_open)));
    let links = dom::query_all_in(&menu, "a")?;
    let view = Rc::new(NavDom {
        toggle: toggle.clone(),
        menu,
        body: document.body(),
        active_class: config.active_class.clone(),
    });

    {
        let (state, view) = (Rc::clone(&state), Rc::clone(&view));
        dom::listen(&toggle, "click", move |_| {
            let next = state.borrow_mut().toggle();
            view.apply(next);
        })?;
    }

    for link in &links {
        let (state, view) = (Rc::clone(&state), Rc::clone(&view));
        dom::listen(link, "click", move |_| {
            let next = state.borrow_mut().link_clicked();
            view.apply(next);
        })?;
    }

    dom::listen(document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        if let Some(next) = state.borrow_mut().key_pressed(&key) {
            view.apply(next);
        }
    })?;

    Ok(Mounted::wired(1 + links.len()))
}
