//! Sticky header: shadow past a small offset, hide while scrolling down.
//!
//! Scroll events arrive far more often than frames. [`StickyHeader`] owns a
//! [`FrameGuard`] so at most one frame-aligned update is ever pending, and
//! owns the last observed offset so direction is computed per instance.

use crate::config::HeaderConfig;
use crate::frame_guard::FrameGuard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPosition {
    Shown,
    Hidden,
}

impl HeaderPosition {
    #[must_use]
    pub const fn transform(self) -> &'static str {
        match self {
            Self::Shown => "translateY(0)",
            Self::Hidden => "translateY(-100%)",
        }
    }
}

/// Changes to apply to the header element for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderUpdate {
    /// Whether the shadow class should be present.
    pub scrolled: bool,
    /// `None` leaves the current transform untouched.
    pub position: Option<HeaderPosition>,
}

#[derive(Debug)]
pub struct StickyHeader {
    config: HeaderConfig,
    last_scroll: f64,
    guard: FrameGuard,
}

impl StickyHeader {
    #[must_use]
    pub fn new(config: HeaderConfig) -> Self {
        Self {
            config,
            last_scroll: 0.0,
            guard: FrameGuard::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    /// Called for every scroll event. Returns `true` when the host should
    /// request a frame; `false` means one is already pending.
    #[must_use]
    pub fn on_scroll_event(&self) -> bool {
        self.guard.try_acquire()
    }

    /// Frame callback: compute the update for offset `y` and free the slot.
    pub fn on_frame(&mut self, y: f64) -> HeaderUpdate {
        let scrolled = y > self.config.shadow_threshold_px;
        let position = (y > self.config.hide_threshold_px).then(|| {
            if y > self.last_scroll {
                HeaderPosition::Hidden
            } else {
                HeaderPosition::Shown
            }
        });
        self.last_scroll = y;
        self.guard.release();
        HeaderUpdate { scrolled, position }
    }

    #[must_use]
    pub fn last_scroll(&self) -> f64 {
        self.last_scroll
    }

    #[must_use]
    pub fn frame_pending(&self) -> bool {
        self.guard.is_pending()
    }
}
