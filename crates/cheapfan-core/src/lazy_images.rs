//! Deferred image sources (`img[data-src]`).
//!
//! Browsers with native lazy loading get their `src` immediately and defer
//! the fetch themselves. Elsewhere each image is observed and its source
//! swapped in on first intersection.

use std::collections::BTreeMap;

use crate::element::{ElementId, IntersectionEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LazyStrategy {
    /// Assign every `src` up front.
    Native,
    /// Observe and swap on intersection.
    Observe,
}

impl LazyStrategy {
    #[must_use]
    pub const fn detect(native_supported: bool) -> Self {
        if native_supported {
            Self::Native
        } else {
            Self::Observe
        }
    }
}

/// Source swap for the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSwap {
    pub element: ElementId,
    pub src: String,
}

/// Outcome of registering one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// Assign `src` now (native strategy).
    Swap(SourceSwap),
    /// Observe; the swap arrives through [`LazyImages::on_intersections`],
    /// after which the host drops the deferred attribute and unobserves.
    Observe,
    /// No usable source.
    Skip,
}

#[derive(Debug)]
pub struct LazyImages {
    strategy: LazyStrategy,
    pending: BTreeMap<ElementId, String>,
}

impl LazyImages {
    #[must_use]
    pub fn new(strategy: LazyStrategy) -> Self {
        Self {
            strategy,
            pending: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn strategy(&self) -> LazyStrategy {
        self.strategy
    }

    /// Register an image by its deferred source. Blank sources are skipped.
    pub fn register(&mut self, element: ElementId, data_src: Option<String>) -> Registration {
        let Some(src) = data_src.filter(|s| !s.trim().is_empty()) else {
            return Registration::Skip;
        };
        match self.strategy {
            LazyStrategy::Native => Registration::Swap(SourceSwap { element, src }),
            LazyStrategy::Observe => {
                self.pending.insert(element, src);
                Registration::Observe
            }
        }
    }

    pub fn on_intersections(&mut self, batch: &[IntersectionEntry]) -> Vec<SourceSwap> {
        batch
            .iter()
            .filter(|e| e.is_intersecting)
            .filter_map(|e| {
                self.pending.remove(&e.element).map(|src| SourceSwap {
                    element: e.element,
                    src,
                })
            })
            .collect()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
