#![forbid(unsafe_code)]

//! Site configuration.
//!
//! Every field has a default matching the production markup, so an empty
//! object (or no object at all) yields a working page. The host may pass a
//! partial override from JavaScript; unknown keys are rejected so typos
//! surface at boot instead of silently falling back.
//!
//! Durations are carried as integer milliseconds (`*_ms`) on the wire and
//! exposed as [`Duration`] through accessors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::count_up::Pacing;
use crate::element::ObserverOptions;
use crate::error::{Result, SiteError};

/// Top-level configuration for every page controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub reveal: RevealConfig,
    pub count_up: CountUpConfig,
    pub header: HeaderConfig,
    pub nav: NavConfig,
    pub smooth_scroll: SmoothScrollConfig,
    pub newsletter: NewsletterConfig,
    pub faq: FaqConfig,
    pub lazy_images: LazyImageConfig,
    pub analytics: AnalyticsConfig,
    pub service_worker: ServiceWorkerConfig,
    /// Print the console banner at boot.
    pub banner: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            reveal: RevealConfig::default(),
            count_up: CountUpConfig::default(),
            header: HeaderConfig::default(),
            nav: NavConfig::default(),
            smooth_scroll: SmoothScrollConfig::default(),
            newsletter: NewsletterConfig::default(),
            faq: FaqConfig::default(),
            lazy_images: LazyImageConfig::default(),
            analytics: AnalyticsConfig::default(),
            service_worker: ServiceWorkerConfig::default(),
            banner: true,
        }
    }
}

impl SiteConfig {
    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        self.reveal.validate()?;
        self.count_up.validate()?;
        self.header.validate()?;
        self.newsletter.validate()?;
        non_empty("nav.toggle_selector", &self.nav.toggle_selector)?;
        non_empty("nav.menu_selector", &self.nav.menu_selector)?;
        non_empty("faq.selector", &self.faq.selector)?;
        non_empty("lazy_images.selector", &self.lazy_images.selector)?;
        non_empty("analytics.cta_selector", &self.analytics.cta_selector)?;
        if self.service_worker.enabled {
            non_empty("service_worker.script_url", &self.service_worker.script_url)?;
        }
        Ok(())
    }
}

fn non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::config(format!("{field} must not be empty")));
    }
    Ok(())
}

fn positive_ms(field: &str, value: u64) -> Result<()> {
    if value == 0 {
        return Err(SiteError::config(format!("{field} must be greater than zero")));
    }
    Ok(())
}

fn unit_interval(field: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(SiteError::config(format!(
            "{field} must be within [0, 1], got {value}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Reveal
// ---------------------------------------------------------------------------

/// Scroll-triggered reveal animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Classes that opt an element into the reveal.
    pub selectors: Vec<String>,
    /// Intersection ratio that counts as visible.
    pub threshold: f64,
    /// Observer root margin; the negative bottom edge triggers slightly early.
    pub root_margin: String,
    /// Delay between consecutive elements of one batch.
    pub stagger_ms: u64,
    /// Length of the opacity/transform transition.
    pub transition_ms: u64,
    /// Initial downward offset in pixels.
    pub offset_px: f64,
    /// CSS timing function.
    pub easing: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: [
                ".coverage-card",
                ".sport-card",
                ".collection-card",
                ".story-card",
                ".step",
                ".principle",
                ".tier",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            stagger_ms: 50,
            transition_ms: 600,
            offset_px: 20.0,
            easing: "ease".to_string(),
        }
    }
}

impl RevealConfig {
    /// Combined selector list for `querySelectorAll`.
    #[must_use]
    pub fn selector(&self) -> String {
        self.selectors.join(", ")
    }

    #[must_use]
    pub fn observer(&self) -> ObserverOptions {
        ObserverOptions::new(self.threshold).with_root_margin(self.root_margin.clone())
    }

    #[must_use]
    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }

    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    fn validate(&self) -> Result<()> {
        if self.selectors.iter().all(|s| s.trim().is_empty()) {
            return Err(SiteError::config("reveal.selectors must name at least one selector"));
        }
        unit_interval("reveal.threshold", self.threshold)?;
        positive_ms("reveal.transition_ms", self.transition_ms)
    }
}

// ---------------------------------------------------------------------------
// Count-up
// ---------------------------------------------------------------------------

/// Numeric count-up for statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CountUpConfig {
    pub selector: String,
    /// `data-*` attribute holding the target, without the `data-` prefix.
    pub attribute: String,
    pub threshold: f64,
    pub duration_ms: u64,
    /// Nominal display-refresh interval used to derive the step count.
    pub frame_ms: u64,
    pub pacing: Pacing,
    /// Thousands separator.
    pub separator: char,
    /// Marker appended to every rendered value.
    pub suffix: String,
}

impl Default for CountUpConfig {
    fn default() -> Self {
        Self {
            selector: ".stat-number[data-count]".to_string(),
            attribute: "count".to_string(),
            threshold: 0.5,
            duration_ms: 2000,
            frame_ms: 16,
            pacing: Pacing::FrameBudget,
            separator: ',',
            suffix: "+".to_string(),
        }
    }
}

impl CountUpConfig {
    #[must_use]
    pub fn observer(&self) -> ObserverOptions {
        ObserverOptions::new(self.threshold)
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Logical step count: `duration / frame`.
    #[must_use]
    pub fn steps(&self) -> f64 {
        self.duration_ms as f64 / self.frame_ms as f64
    }

    fn validate(&self) -> Result<()> {
        non_empty("count_up.selector", &self.selector)?;
        non_empty("count_up.attribute", &self.attribute)?;
        unit_interval("count_up.threshold", self.threshold)?;
        positive_ms("count_up.duration_ms", self.duration_ms)?;
        positive_ms("count_up.frame_ms", self.frame_ms)
    }
}

// ---------------------------------------------------------------------------
// Header / nav / scroll
// ---------------------------------------------------------------------------

/// Sticky header scroll behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
    pub selector: String,
    /// Class toggled once the page scrolls past `shadow_threshold_px`.
    pub scrolled_class: String,
    pub shadow_threshold_px: f64,
    /// Direction-based hide/show only applies past this offset.
    pub hide_threshold_px: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            selector: ".header".to_string(),
            scrolled_class: "scrolled".to_string(),
            shadow_threshold_px: 10.0,
            hide_threshold_px: 100.0,
        }
    }
}

impl HeaderConfig {
    fn validate(&self) -> Result<()> {
        non_empty("header.selector", &self.selector)?;
        non_empty("header.scrolled_class", &self.scrolled_class)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    pub toggle_selector: String,
    pub menu_selector: String,
    pub active_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".nav-toggle".to_string(),
            menu_selector: ".nav-menu".to_string(),
            active_class: "active".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SmoothScrollConfig {
    pub anchor_selector: String,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            anchor_selector: r##"a[href^="#"]"##.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Newsletter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NewsletterConfig {
    pub form_selector: String,
    pub input_selector: String,
    pub button_selector: String,
    /// Simulated round-trip of the subscription call.
    pub submit_delay_ms: u64,
    /// How long an inline message stays before removing itself.
    pub message_lifetime_ms: u64,
    pub busy_label: String,
    pub success_text: String,
    pub failure_text: String,
    pub invalid_text: String,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            form_selector: ".newsletter-form".to_string(),
            input_selector: r#"input[type="email"]"#.to_string(),
            button_selector: r#"button[type="submit"]"#.to_string(),
            submit_delay_ms: 1000,
            message_lifetime_ms: 5000,
            busy_label: "Subscribing...".to_string(),
            success_text: "Welcome to the CheapFan family! Check your inbox.".to_string(),
            failure_text: "Something went wrong. Please try again.".to_string(),
            invalid_text: "Please enter a valid email address.".to_string(),
        }
    }
}

impl NewsletterConfig {
    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    #[must_use]
    pub fn message_lifetime(&self) -> Duration {
        Duration::from_millis(self.message_lifetime_ms)
    }

    fn validate(&self) -> Result<()> {
        non_empty("newsletter.form_selector", &self.form_selector)?;
        non_empty("newsletter.input_selector", &self.input_selector)?;
        non_empty("newsletter.button_selector", &self.button_selector)?;
        positive_ms("newsletter.message_lifetime_ms", self.message_lifetime_ms)
    }
}

// ---------------------------------------------------------------------------
// Auxiliary behaviors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaqConfig {
    pub selector: String,
    /// Close other open items when one opens.
    pub exclusive: bool,
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            selector: ".faq-item".to_string(),
            exclusive: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LazyImageConfig {
    pub selector: String,
    /// Attribute carrying the deferred source URL.
    pub source_attribute: String,
}

impl Default for LazyImageConfig {
    fn default() -> Self {
        Self {
            selector: "img[data-src]".to_string(),
            source_attribute: "data-src".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyticsConfig {
    pub cta_selector: String,
    pub category: String,
    pub action: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            cta_selector: ".btn-primary, .btn-secondary".to_string(),
            category: "CTA".to_string(),
            action: "click".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceWorkerConfig {
    pub enabled: bool,
    pub script_url: String,
}

impl Default for ServiceWorkerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            script_url: "/sw.js".to_string(),
        }
    }
}
