//! Analytics pass-through.
//!
//! The site does not own an analytics pipeline; CTA clicks are forwarded to
//! whatever sink the host provides and dropped otherwise.

use crate::config::AnalyticsConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub category: String,
    pub action: String,
    pub label: String,
}

pub trait AnalyticsSink {
    fn track(&self, event: &AnalyticsEvent);
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl AnalyticsSink for NullSink {
    fn track(&self, _event: &AnalyticsEvent) {}
}

/// Event for a click on a call-to-action with visible text `text`.
#[must_use]
pub fn cta_click(config: &AnalyticsConfig, text: &str) -> AnalyticsEvent {
    AnalyticsEvent {
        category: config.category.clone(),
        action: config.action.clone(),
        label: text.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recording(RefCell<Vec<AnalyticsEvent>>);

    impl AnalyticsSink for Recording {
        fn track(&self, event: &AnalyticsEvent) {
            self.0.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn cta_label_is_trimmed() {
        let event = cta_click(&AnalyticsConfig::default(), "\n  Get Tickets  ");
        assert_eq!(
            event,
            AnalyticsEvent {
                category: "CTA".to_string(),
                action: "click".to_string(),
                label: "Get Tickets".to_string(),
            }
        );
    }

    #[test]
    fn sink_receives_events() {
        let sink = Recording::default();
        let config = AnalyticsConfig::default();
        sink.track(&cta_click(&config, "Join"));
        NullSink.track(&cta_click(&config, "Join"));
        assert_eq!(sink.0.borrow().len(), 1);
    }
}
