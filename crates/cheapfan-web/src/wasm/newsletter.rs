//! Newsletter form wiring.
//!
//! Submission is simulated: a fixed delay stands in for the network call.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use cheapfan_core::{Result, SiteError};
use cheapfan_core::config::NewsletterConfig;
use cheapfan_core::newsletter::{Completion, FormMessage, NewsletterForm, SubmitStep};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement};

use super::Mounted;
use super::dom::{self, js_error};

struct FormDom {
    document: Document,
    form: Element,
    input: Option<HtmlInputElement>,
    button: Option<HtmlButtonElement>,
    message_lifetime: Duration,
}

impl FormDom {
    fn email(&self) -> String {
        self.input
            .as_ref()
            .map(HtmlInputElement::value)
            .unwrap_or_default()
    }

    fn button_label(&self) -> String {
        self.button
            .as_ref()
            .and_then(|button| button.text_content())
            .unwrap_or_default()
    }

    fn set_busy(&self, label: &str) {
        if let Some(button) = &self.button {
            button.set_disabled(true);
            button.set_text_content(Some(label));
        }
    }

    fn complete(&self, completion: &Completion) {
        self.show(&completion.message);
        if completion.clear_input {
            if let Some(input) = &self.input {
                input.set_value("");
            }
        }
        if let Some(button) = &self.button {
            button.set_disabled(false);
            button.set_text_content(Some(&completion.restore_label));
        }
    }

    fn show(&self, message: &FormMessage) {
        if let Err(err) = self.try_show(message) {
            tracing::warn!(%err, "form message failed");
        }
    }

    fn try_show(&self, message: &FormMessage) -> Result<()> {
        let existing = self
            .form
            .query_selector(&format!(".{}", FormMessage::CLASS))
            .map_err(js_error)?;
        if let Some(existing) = existing {
            existing.remove();
        }

        let element = self.document.create_element("p").map_err(js_error)?;
        element.set_class_name(&message.class_name());
        element.set_text_content(Some(&message.text));
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            html.style().set_css_text(message.inline_style());
        }
        self.form.append_child(&element).map_err(js_error)?;
        dom::after(self.message_lifetime, move || element.remove());
        Ok(())
    }
}

async fn simulated_subscribe(email: &str, delay: Duration) -> Result<()> {
    tracing::debug!(email, "newsletter subscription simulated");
    TimeoutFuture::new(u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)).await;
    Ok(())
}

pub fn mount(document: &Document, config: &NewsletterConfig) -> Result<Mounted> {
    let Some(form) = dom::query(document, &config.form_selector)? else {
        return Err(SiteError::missing(&config.form_selector));
    };
    let input = form
        .query_selector(&config.input_selector)
        .map_err(js_error)?
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    let button = form
        .query_selector(&config.button_selector)
        .map_err(js_error)?
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());

    let view = Rc::new(FormDom {
        document: document.clone(),
        form: form.clone(),
        input,
        button,
        message_lifetime: config.message_lifetime(),
    });
    let state = Rc::new(RefCell::new(NewsletterForm::new(config.clone())));
    let delay = config.submit_delay();

    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        let step = state.borrow_mut().begin(&view.email(), &view.button_label());
        match step {
            SubmitStep::Rejected(message) => view.show(&message),
            SubmitStep::Busy => tracing::debug!("newsletter submission already in flight"),
            SubmitStep::Started { email, busy_label } => {
                view.set_busy(&busy_label);
                let (state, view) = (Rc::clone(&state), Rc::clone(&view));
                spawn_local(async move {
                    let outcome = simulated_subscribe(&email, delay).await;
                    let completion = state.borrow_mut().finish(outcome);
                    if let Some(completion) = completion {
                        view.complete(&completion);
                    }
                });
            }
        }
    })?;

    Ok(Mounted::wired(1))
}
