//! Single-flight guard for frame-aligned callbacks.
//!
//! High-frequency events (scroll) only need their latest effect applied once
//! per display refresh. The guard admits one pending callback at a time: the
//! event handler calls [`FrameGuard::try_acquire`] and requests a frame only
//! on success; the frame callback calls [`FrameGuard::release`] when done.

use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
pub struct FrameGuard {
    pending: AtomicBool,
}

impl FrameGuard {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Claim the single pending slot. Returns `false` if a callback is
    /// already scheduled.
    #[must_use]
    pub fn try_acquire(&self) -> bool {
        self.pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn release(&self) {
        self.pending.store(false, Ordering::Release);
    }

    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}
