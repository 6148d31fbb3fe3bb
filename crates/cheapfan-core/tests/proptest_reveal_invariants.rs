//! Property-based invariant tests for the reveal controller.
//!
//! 1. Every element is triggered at most once, however many batches mention it.
//! 2. Every element that was ever visible is triggered exactly once.
//! 3. A trigger's delay is `50ms` times its entry's index in the batch.
//! 4. Reduced motion never produces a command or a registration.
//! 5. Settling never happens before `delay + transition`.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use cheapfan_core::animation::{RevealController, RevealState};
use cheapfan_core::config::RevealConfig;
use cheapfan_core::{ElementId, IntersectionEntry};
use proptest::prelude::*;
use web_time::Instant;

// ── Helpers ─────────────────────────────────────────────────────────────

const ELEMENTS: u32 = 12;

fn entry_strategy() -> impl Strategy<Value = IntersectionEntry> {
    (0..ELEMENTS, any::<bool>()).prop_map(|(id, visible)| {
        let element = ElementId::new(id);
        if visible {
            IntersectionEntry::visible(element)
        } else {
            IntersectionEntry::hidden(element)
        }
    })
}

fn batches_strategy() -> impl Strategy<Value = Vec<Vec<IntersectionEntry>>> {
    proptest::collection::vec(proptest::collection::vec(entry_strategy(), 0..8), 0..20)
}

fn prepared(reduced_motion: bool) -> RevealController {
    let mut reveal = RevealController::new(RevealConfig::default(), reduced_motion);
    reveal.prepare(ElementId::range(ELEMENTS as usize));
    reveal
}

// ═════════════════════════════════════════════════════════════════════════
// 1 + 2. Exactly-once triggering
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn each_element_triggers_exactly_once(batches in batches_strategy()) {
        let mut reveal = prepared(false);
        let t0 = Instant::now();
        let mut triggers: BTreeMap<ElementId, usize> = BTreeMap::new();
        let mut ever_visible = BTreeSet::new();

        for (i, batch) in batches.iter().enumerate() {
            ever_visible.extend(batch.iter().filter(|e| e.is_intersecting).map(|e| e.element));
            let now = t0 + Duration::from_millis(i as u64 * 100);
            for cmd in reveal.on_intersections(batch, now) {
                *triggers.entry(cmd.element).or_default() += 1;
            }
        }

        prop_assert!(triggers.values().all(|&n| n == 1), "double trigger: {:?}", triggers);
        let triggered: BTreeSet<_> = triggers.keys().copied().collect();
        prop_assert_eq!(triggered, ever_visible);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Stagger delays follow batch index
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn delay_is_batch_index_times_step(batches in batches_strategy()) {
        let mut reveal = prepared(false);
        let now = Instant::now();
        for batch in &batches {
            for cmd in reveal.on_intersections(batch, now) {
                let index = batch
                    .iter()
                    .position(|e| e.is_intersecting && e.element == cmd.element)
                    .expect("command comes from an intersecting entry");
                prop_assert_eq!(cmd.delay, Duration::from_millis(50 * index as u64));
            }
        }
    }
}

proptest! {
    #[test]
    fn fresh_visible_batch_gets_full_cascade(n in 0usize..=ELEMENTS as usize) {
        let mut reveal = prepared(false);
        let batch: Vec<_> = ElementId::range(n).map(IntersectionEntry::visible).collect();
        let delays: Vec<u64> = reveal
            .on_intersections(&batch, Instant::now())
            .iter()
            .map(|c| c.delay.as_millis() as u64)
            .collect();
        let expected: Vec<u64> = (0..n as u64).map(|i| i * 50).collect();
        prop_assert_eq!(delays, expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Reduced motion is inert
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reduced_motion_never_touches_elements(batches in batches_strategy()) {
        let mut reveal = prepared(true);
        let now = Instant::now();
        for batch in &batches {
            prop_assert!(reveal.on_intersections(batch, now).is_empty());
        }
        prop_assert!(reveal.poll_settled(now + Duration::from_secs(60)).is_empty());
        for id in ElementId::range(ELEMENTS as usize) {
            prop_assert_eq!(reveal.state(id), None);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Settle timing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn settle_not_before_transition_end(batch in proptest::collection::vec(entry_strategy(), 0..16)) {
        let mut reveal = prepared(false);
        let t0 = Instant::now();
        let commands = reveal.on_intersections(&batch, t0);

        for cmd in &commands {
            let end = cmd.delay + Duration::from_millis(600);
            let before = reveal.poll_settled(t0 + end - Duration::from_millis(1));
            prop_assert!(!before.contains(&cmd.element));
            prop_assert_eq!(reveal.state(cmd.element), Some(RevealState::Animating));
            reveal.poll_settled(t0 + end);
            prop_assert_eq!(reveal.state(cmd.element), Some(RevealState::Settled));
        }
    }
}
