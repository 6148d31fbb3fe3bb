#![forbid(unsafe_code)]

//! Viewport-triggered animations.
//!
//! Both controllers share one shape: observe a set of elements, trigger once
//! when an element first becomes visible, and stop observing it at that
//! moment. Re-entering the viewport never re-triggers.
//!
//! - [`reveal`]: staggered fade/slide-in.
//! - [`count_up`]: numeric interpolation from zero to a target.
//! - [`stagger`]: delay computation shared by batched triggers.

pub mod count_up;
pub mod reveal;
pub mod stagger;

pub use count_up::{CountUp, CountUpController, Frame, Pacing};
pub use reveal::{RevealCommand, RevealController, RevealState};
pub use stagger::Stagger;

/// A single inline style property assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDecl {
    pub property: &'static str,
    pub value: String,
}

impl StyleDecl {
    #[must_use]
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}
