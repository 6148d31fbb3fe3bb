//! Opaque element handles and intersection notifications.

use std::fmt;

/// Handle for a watched markup node.
///
/// The host assigns ids densely in DOM order, so comparing ids compares
/// document position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

impl ElementId {
    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Ids `0..count` in DOM order.
    pub fn range(count: usize) -> impl Iterator<Item = Self> {
        (0..count).map(|i| Self(i as u32))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One entry of an intersection notification batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub element: ElementId,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    #[must_use]
    pub const fn visible(element: ElementId) -> Self {
        Self {
            element,
            is_intersecting: true,
        }
    }

    #[must_use]
    pub const fn hidden(element: ElementId) -> Self {
        Self {
            element,
            is_intersecting: false,
        }
    }
}

/// Options for a viewport-intersection observer.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: Option<String>,
}

impl ObserverOptions {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: None,
        }
    }

    #[must_use]
    pub fn with_root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = Some(margin.into());
        self
    }
}
