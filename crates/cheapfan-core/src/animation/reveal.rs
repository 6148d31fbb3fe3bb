//! Scroll-triggered reveal.
//!
//! Watched elements start hidden (transparent, offset downward). The first
//! time one becomes visible it is scheduled to fade and slide into place,
//! with a per-batch [`Stagger`] so elements entering together cascade in DOM
//! order. The stagger position is the entry's index in the notification
//! batch, hidden entries included. Scheduling and deregistration happen in
//! the same step, so a second notification for the same element cannot
//! schedule it twice.
//!
//! # States
//!
//! ```text
//! Pending --first intersection--> Animating --transition elapsed--> Settled
//! ```
//!
//! No other transitions exist.
//!
//! # Reduced motion
//!
//! A controller built with `reduced_motion = true` is inert: [`prepare`]
//! registers nothing, so the host never applies the hidden style and content
//! stays visible. Hiding first and relying on the observer would leave
//! content invisible for anyone who never scrolls it into view.
//!
//! [`prepare`]: RevealController::prepare

use std::collections::BTreeMap;
use std::time::Duration;

use web_time::Instant;

use crate::config::RevealConfig;
use crate::element::{ElementId, IntersectionEntry};
use super::StyleDecl;
use super::stagger::Stagger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Animating,
    Settled,
}

/// Instruction for the host: stop observing `element` now, and apply the
/// shown style after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealCommand {
    pub element: ElementId,
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy)]
struct Tracked {
    state: RevealState,
    settles_at: Option<Instant>,
}

#[derive(Debug)]
pub struct RevealController {
    config: RevealConfig,
    stagger: Stagger,
    enabled: bool,
    elements: BTreeMap<ElementId, Tracked>,
}

impl RevealController {
    #[must_use]
    pub fn new(config: RevealConfig, reduced_motion: bool) -> Self {
        let stagger = Stagger::new(config.stagger());
        Self {
            config,
            stagger,
            enabled: !reduced_motion,
            elements: BTreeMap::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Register elements in DOM order.
    ///
    /// Returns the ids the host must hide and observe; empty when the
    /// controller is disabled.
    pub fn prepare(&mut self, elements: impl IntoIterator<Item = ElementId>) -> Vec<ElementId> {
        if !self.enabled {
            tracing::debug!("reduced motion preferred; reveal disabled");
            return Vec::new();
        }
        let mut registered = Vec::new();
        for id in elements {
            if self.elements.contains_key(&id) {
                continue;
            }
            self.elements.insert(
                id,
                Tracked {
                    state: RevealState::Pending,
                    settles_at: None,
                },
            );
            registered.push(id);
        }
        tracing::debug!(count = registered.len(), "reveal elements registered");
        registered
    }

    /// Handle one intersection notification batch.
    ///
    /// Only intersecting entries for still-pending elements produce commands.
    /// Each command's delay comes from its entry's index in `batch`.
    pub fn on_intersections(
        &mut self,
        batch: &[IntersectionEntry],
        now: Instant,
    ) -> Vec<RevealCommand> {
        let mut commands = Vec::new();
        if !self.enabled {
            return commands;
        }
        let transition = self.config.transition();
        for (position, entry) in batch.iter().enumerate() {
            if !entry.is_intersecting {
                continue;
            }
            let Some(tracked) = self.elements.get_mut(&entry.element) else {
                continue;
            };
            if tracked.state != RevealState::Pending {
                continue;
            }
            let delay = self.stagger.delay_for(position);
            tracked.state = RevealState::Animating;
            tracked.settles_at = Some(now + delay + transition);
            commands.push(RevealCommand {
                element: entry.element,
                delay,
            });
        }
        commands
    }

    /// Move every element whose transition has finished to `Settled`.
    pub fn poll_settled(&mut self, now: Instant) -> Vec<ElementId> {
        let mut settled = Vec::new();
        for (id, tracked) in &mut self.elements {
            if tracked.state != RevealState::Animating {
                continue;
            }
            if tracked.settles_at.is_some_and(|at| at <= now) {
                tracked.state = RevealState::Settled;
                tracked.settles_at = None;
                settled.push(*id);
            }
        }
        settled
    }

    #[must_use]
    pub fn state(&self, id: ElementId) -> Option<RevealState> {
        self.elements.get(&id).map(|t| t.state)
    }

    /// Number of elements still waiting for their first intersection.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.elements
            .values()
            .filter(|t| t.state == RevealState::Pending)
            .count()
    }

    /// Inline style applied before observation starts.
    #[must_use]
    pub fn hidden_style(&self) -> [StyleDecl; 3] {
        let secs = self.config.transition().as_secs_f64();
        let easing = &self.config.easing;
        [
            StyleDecl::new("opacity", "0"),
            StyleDecl::new(
                "transform",
                format!("translateY({}px)", self.config.offset_px),
            ),
            StyleDecl::new(
                "transition",
                format!("opacity {secs}s {easing}, transform {secs}s {easing}"),
            ),
        ]
    }

    /// Inline style applied when the staggered delay elapses.
    #[must_use]
    pub fn shown_style(&self) -> [StyleDecl; 2] {
        [
            StyleDecl::new("opacity", "1"),
            StyleDecl::new("transform", "translateY(0)"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn ids(n: usize) -> Vec<ElementId> {
        ElementId::range(n).collect()
    }

    fn visible(ids: &[ElementId]) -> Vec<IntersectionEntry> {
        ids.iter().copied().map(IntersectionEntry::visible).collect()
    }

    fn controller() -> RevealController {
        RevealController::new(RevealConfig::default(), false)
    }

    #[test]
    fn prepare_registers_all_in_order() {
        let mut reveal = controller();
        assert_eq!(reveal.prepare(ids(3)), ids(3));
        assert_eq!(reveal.pending_count(), 3);
        assert_eq!(reveal.state(ElementId::new(1)), Some(RevealState::Pending));
    }

    #[test]
    fn prepare_skips_duplicates() {
        let mut reveal = controller();
        reveal.prepare(ids(2));
        assert_eq!(reveal.prepare(ids(3)), vec![ElementId::new(2)]);
    }

    #[test]
    fn batch_is_staggered_by_position() {
        let mut reveal = controller();
        let all = ids(4);
        reveal.prepare(all.clone());

        let commands = reveal.on_intersections(&visible(&all), Instant::now());
        let delays: Vec<Duration> = commands.iter().map(|c| c.delay).collect();
        assert_eq!(delays, vec![ms(0), ms(50), ms(100), ms(150)]);
        assert!(all
            .iter()
            .all(|id| reveal.state(*id) == Some(RevealState::Animating)));
    }

    #[test]
    fn stagger_follows_batch_index() {
        let mut reveal = controller();
        reveal.prepare(ids(3));

        let batch = [
            IntersectionEntry::hidden(ElementId::new(0)),
            IntersectionEntry::visible(ElementId::new(1)),
            IntersectionEntry::visible(ElementId::new(2)),
        ];
        let commands = reveal.on_intersections(&batch, Instant::now());
        assert_eq!(
            commands,
            vec![
                RevealCommand {
                    element: ElementId::new(1),
                    delay: ms(50),
                },
                RevealCommand {
                    element: ElementId::new(2),
                    delay: ms(100),
                },
            ]
        );
        assert_eq!(reveal.state(ElementId::new(0)), Some(RevealState::Pending));
    }

    #[test]
    fn trailing_visible_entry_waits_for_its_index() {
        let mut reveal = controller();
        reveal.prepare(ids(3));
        let batch = [
            IntersectionEntry::hidden(ElementId::new(0)),
            IntersectionEntry::hidden(ElementId::new(1)),
            IntersectionEntry::visible(ElementId::new(2)),
        ];
        let commands = reveal.on_intersections(&batch, Instant::now());
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].delay, ms(100));
    }

    #[test]
    fn already_revealed_entries_still_hold_their_slot() {
        let mut reveal = controller();
        reveal.prepare(ids(2));
        let now = Instant::now();
        reveal.on_intersections(&visible(&ids(1)), now);

        let commands = reveal.on_intersections(&visible(&ids(2)), now);
        assert_eq!(
            commands,
            vec![RevealCommand {
                element: ElementId::new(1),
                delay: ms(50),
            }]
        );
    }

    #[test]
    fn repeated_intersection_triggers_once() {
        let mut reveal = controller();
        reveal.prepare(ids(1));
        let now = Instant::now();

        assert_eq!(reveal.on_intersections(&visible(&ids(1)), now).len(), 1);
        assert!(reveal.on_intersections(&visible(&ids(1)), now).is_empty());
        assert!(reveal
            .on_intersections(&visible(&ids(1)), now + ms(5000))
            .is_empty());
    }

    #[test]
    fn duplicate_entry_within_batch_triggers_once() {
        let mut reveal = controller();
        reveal.prepare(ids(1));
        let batch = visible(&[ElementId::new(0), ElementId::new(0)]);
        assert_eq!(reveal.on_intersections(&batch, Instant::now()).len(), 1);
    }

    #[test]
    fn unknown_elements_ignored() {
        let mut reveal = controller();
        reveal.prepare(ids(1));
        let batch = visible(&[ElementId::new(7)]);
        assert!(reveal.on_intersections(&batch, Instant::now()).is_empty());
    }

    #[test]
    fn settles_after_delay_plus_transition() {
        let mut reveal = controller();
        reveal.prepare(ids(2));
        let t0 = Instant::now();
        reveal.on_intersections(&visible(&ids(2)), t0);

        assert!(reveal.poll_settled(t0 + ms(599)).is_empty());
        assert_eq!(reveal.poll_settled(t0 + ms(600)), vec![ElementId::new(0)]);
        assert_eq!(reveal.poll_settled(t0 + ms(650)), vec![ElementId::new(1)]);
        assert!(reveal.poll_settled(t0 + ms(10_000)).is_empty());
        assert_eq!(reveal.state(ElementId::new(1)), Some(RevealState::Settled));
    }

    #[test]
    fn settled_elements_never_retrigger() {
        let mut reveal = controller();
        reveal.prepare(ids(1));
        let t0 = Instant::now();
        reveal.on_intersections(&visible(&ids(1)), t0);
        reveal.poll_settled(t0 + ms(600));
        assert!(reveal
            .on_intersections(&visible(&ids(1)), t0 + ms(700))
            .is_empty());
    }

    #[test]
    fn reduced_motion_is_inert() {
        let mut reveal = RevealController::new(RevealConfig::default(), true);
        assert!(!reveal.is_enabled());
        assert!(reveal.prepare(ids(3)).is_empty());
        assert!(reveal
            .on_intersections(&visible(&ids(3)), Instant::now())
            .is_empty());
        assert_eq!(reveal.state(ElementId::new(0)), None);
    }

    #[test]
    fn hidden_style_matches_markup_contract() {
        let reveal = controller();
        let style = reveal.hidden_style();
        assert_eq!(style[0], StyleDecl::new("opacity", "0"));
        assert_eq!(style[1], StyleDecl::new("transform", "translateY(20px)"));
        assert_eq!(
            style[2],
            StyleDecl::new("transition", "opacity 0.6s ease, transform 0.6s ease")
        );
    }

    #[test]
    fn shown_style_clears_offset() {
        let style = controller().shown_style();
        assert_eq!(style[0].value, "1");
        assert_eq!(style[1].value, "translateY(0)");
    }
}
