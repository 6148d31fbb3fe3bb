//! Newsletter signup: email validation and the submit lifecycle.
//!
//! ```text
//! Idle --submit(valid)--> Submitting --finish--> Idle
//!   \--submit(invalid)--> Idle (error message)
//! ```
//!
//! While submitting the button is disabled and relabelled; a second submit
//! is ignored. Finishing always restores the button; only success clears the
//! input.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::NewsletterConfig;
use crate::error::Result;

/// `local@domain.tld`, no whitespace, exactly one `@`.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Trimmed address if it passes the syntax check.
#[must_use]
pub fn normalize_email(raw: &str) -> Option<&str> {
    let email = raw.trim();
    EMAIL.is_match(email).then_some(email)
}

#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    normalize_email(raw).is_some()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Transient inline message appended to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl FormMessage {
    /// Class marking the message; also used to find and replace the previous one.
    pub const CLASS: &'static str = "form-message";

    #[must_use]
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn class_name(&self) -> String {
        format!("{} {}--{}", Self::CLASS, Self::CLASS, self.kind.as_str())
    }

    #[must_use]
    pub fn inline_style(&self) -> &'static str {
        match self.kind {
            MessageKind::Success => {
                "margin-top: 1rem; padding: 0.75rem 1rem; border-radius: 0.5rem; \
                 font-size: 0.875rem; font-weight: 500; \
                 background: rgba(16, 185, 129, 0.2); color: #10B981;"
            }
            MessageKind::Error => {
                "margin-top: 1rem; padding: 0.75rem 1rem; border-radius: 0.5rem; \
                 font-size: 0.875rem; font-weight: 500; \
                 background: rgba(239, 68, 68, 0.2); color: #EF4444;"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStep {
    /// Validation failed; show the message, change nothing else.
    Rejected(FormMessage),
    /// A submission is already in flight.
    Busy,
    /// Disable the button, show `busy_label`, and send `email`.
    Started { email: String, busy_label: String },
}

/// What to do once the simulated call resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub message: FormMessage,
    pub clear_input: bool,
    pub restore_label: String,
}

#[derive(Debug)]
enum FormState {
    Idle,
    Submitting { original_label: String },
}

#[derive(Debug)]
pub struct NewsletterForm {
    config: NewsletterConfig,
    state: FormState,
}

impl NewsletterForm {
    #[must_use]
    pub fn new(config: NewsletterConfig) -> Self {
        Self {
            config,
            state: FormState::Idle,
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.state, FormState::Submitting { .. })
    }

    pub fn begin(&mut self, raw_email: &str, button_label: &str) -> SubmitStep {
        if self.is_submitting() {
            return SubmitStep::Busy;
        }
        let Some(email) = normalize_email(raw_email) else {
            tracing::debug!("newsletter email rejected");
            return SubmitStep::Rejected(FormMessage::new(
                MessageKind::Error,
                self.config.invalid_text.clone(),
            ));
        };
        self.state = FormState::Submitting {
            original_label: button_label.to_string(),
        };
        SubmitStep::Started {
            email: email.to_string(),
            busy_label: self.config.busy_label.clone(),
        }
    }

    /// Resolve the in-flight submission. `None` if nothing was in flight.
    pub fn finish(&mut self, outcome: Result<()>) -> Option<Completion> {
        let FormState::Submitting { original_label } =
            std::mem::replace(&mut self.state, FormState::Idle)
        else {
            return None;
        };
        let completion = match outcome {
            Ok(()) => Completion {
                message: FormMessage::new(MessageKind::Success, self.config.success_text.clone()),
                clear_input: true,
                restore_label: original_label,
            },
            Err(err) => {
                tracing::warn!(%err, "newsletter submission failed");
                Completion {
                    message: FormMessage::new(MessageKind::Error, self.config.failure_text.clone()),
                    clear_input: false,
                    restore_label: original_label,
                }
            }
        };
        Some(completion)
    }
}
