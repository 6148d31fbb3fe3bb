//! Stagger: offset start times across a batch of simultaneous triggers.
//!
//! When several elements cross the viewport threshold in the same
//! notification (typically on initial load), starting them together reads as
//! a single "pop". A [`Stagger`] spaces their start times by a fixed step in
//! batch order.
//!
//! # Invariants
//!
//! 1. `delay_for(0)` is always zero.
//! 2. `delay_for(i)` is `i * step`.
//! 3. Delays are non-decreasing in batch position.
//!
//! # Failure Modes
//!
//! - A zero step degenerates to "all at once"; no error.
//! - Positions beyond `u32::MAX` saturate rather than overflow.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    step: Duration,
}

impl Stagger {
    #[must_use]
    pub const fn new(step: Duration) -> Self {
        Self { step }
    }

    /// Start delay for the element at `position` within its batch.
    #[must_use]
    pub fn delay_for(&self, position: usize) -> Duration {
        let position = u32::try_from(position).unwrap_or(u32::MAX);
        self.step.saturating_mul(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_50: Duration = Duration::from_millis(50);

    #[test]
    fn first_position_has_no_delay() {
        assert_eq!(Stagger::new(MS_50).delay_for(0), Duration::ZERO);
    }

    #[test]
    fn delays_step_linearly() {
        let stagger = Stagger::new(MS_50);
        let delays: Vec<u128> = (0..4).map(|i| stagger.delay_for(i).as_millis()).collect();
        assert_eq!(delays, vec![0, 50, 100, 150]);
    }

    #[test]
    fn zero_step_starts_everything_together() {
        let stagger = Stagger::new(Duration::ZERO);
        assert!((0..5).all(|i| stagger.delay_for(i).is_zero()));
    }

    #[test]
    fn huge_position_saturates() {
        let stagger = Stagger::new(Duration::MAX);
        assert_eq!(stagger.delay_for(usize::MAX), Duration::MAX);
    }
}
