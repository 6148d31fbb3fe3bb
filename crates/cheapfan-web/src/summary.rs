//! What `boot` found on the page.

use std::fmt;

use serde::Serialize;

/// Per-component wiring report, logged at boot and exposed to JavaScript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BootSummary {
    pub reduced_motion: bool,
    pub reveal_elements: usize,
    pub count_up_elements: usize,
    pub lazy_images: usize,
    pub faq_items: usize,
    pub anchors: usize,
    pub navigation: bool,
    pub sticky_header: bool,
    pub newsletter: bool,
    pub analytics: bool,
    pub service_worker: bool,
}

impl BootSummary {
    /// Number of components that found something to do.
    #[must_use]
    pub fn active_components(&self) -> usize {
        [
            self.reveal_elements > 0,
            self.count_up_elements > 0,
            self.lazy_images > 0,
            self.faq_items > 0,
            self.anchors > 0,
            self.navigation,
            self.sticky_header,
            self.newsletter,
            self.analytics,
            self.service_worker,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

impl fmt::Display for BootSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reveal={} count_up={} lazy={} faq={} anchors={} nav={} header={} newsletter={}",
            self.reveal_elements,
            self.count_up_elements,
            self.lazy_images,
            self.faq_items,
            self.anchors,
            self.navigation,
            self.sticky_header,
            self.newsletter,
        )?;
        if self.reduced_motion {
            f.write_str(" (reduced motion)")?;
        }
        Ok(())
    }
}
