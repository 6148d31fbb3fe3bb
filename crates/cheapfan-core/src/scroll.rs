//! Smooth scrolling for in-page anchors.

/// Fragment selector for an anchor `href`, or `None` when the click should
/// fall through to default navigation (`"#"` alone, or not a fragment).
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    let href = href.trim();
    match href.strip_prefix('#') {
        Some(rest) if !rest.is_empty() => Some(href),
        _ => None,
    }
}

/// Document offset to scroll to so the target clears the sticky header.
#[must_use]
pub fn scroll_offset(target_top: f64, page_y_offset: f64, header_height: Option<f64>) -> f64 {
    target_top + page_y_offset - header_height.unwrap_or(0.0)
}

/// A smooth scroll plus history update for the host to perform.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    /// Pushed with `history.pushState`, not assigned to `location`.
    pub hash: String,
}

impl ScrollRequest {
    #[must_use]
    pub fn new(
        hash: &str,
        target_top: f64,
        page_y_offset: f64,
        header_height: Option<f64>,
    ) -> Self {
        Self {
            top: scroll_offset(target_top, page_y_offset, header_height),
            hash: hash.to_string(),
        }
    }
}
