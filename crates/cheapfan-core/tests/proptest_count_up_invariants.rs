//! Property-based invariant tests for count-up interpolation and formatting.
//!
//! 1. The rendered sequence is non-decreasing.
//! 2. The final frame is exactly the target, formatted with grouping and `+`.
//! 3. Every intermediate frame is strictly below the target.
//! 4. Frame-budget pacing finishes in about `duration / frame` steps.
//! 5. Elapsed pacing finishes once `duration` has passed, whatever the frame count.
//! 6. Grouped output strips back to the plain decimal.

use std::time::Duration;

use cheapfan_core::ElementId;
use cheapfan_core::animation::{CountUp, Frame, Pacing};
use cheapfan_core::config::CountUpConfig;
use cheapfan_core::format::{format_count, group_thousands};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use web_time::Instant;

fn frames(target: u64, config: &CountUpConfig, frame_gap: Duration) -> Vec<Frame> {
    let t0 = Instant::now();
    let mut count = CountUp::new(ElementId::new(0), target, config, t0);
    let mut out = Vec::new();
    let mut now = t0;
    loop {
        now += frame_gap;
        let frame = count.step(now);
        out.push(frame);
        if frame.is_final() || out.len() > 100_000 {
            return out;
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1-3. Sequence shape
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn sequence_non_decreasing_and_ends_at_target(target in 0u64..5_000_000) {
        let seq = frames(target, &CountUpConfig::default(), Duration::from_millis(16));
        prop_assert!(seq.windows(2).all(|w| w[0].value() <= w[1].value()));
        let last = *seq.last().unwrap();
        prop_assert_eq!(last, Frame::Final(target));
        for frame in &seq[..seq.len() - 1] {
            prop_assert!(!frame.is_final());
            prop_assert!(frame.value() < target);
        }
    }
}

proptest! {
    #[test]
    fn elapsed_sequence_non_decreasing(target in 0u64..5_000_000, gap_ms in 1u64..400) {
        let config = CountUpConfig { pacing: Pacing::Elapsed, ..CountUpConfig::default() };
        let seq = frames(target, &config, Duration::from_millis(gap_ms));
        prop_assert!(seq.windows(2).all(|w| w[0].value() <= w[1].value()));
        prop_assert_eq!(*seq.last().unwrap(), Frame::Final(target));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-5. Pacing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn frame_budget_step_count_ignores_frame_gap(target in 1u64..1_000_000, gap_ms in 1u64..200) {
        let seq = frames(target, &CountUpConfig::default(), Duration::from_millis(gap_ms));
        // 125 nominal steps, give or take float accumulation.
        prop_assert!((124..=126).contains(&seq.len()), "len {}", seq.len());
    }
}

proptest! {
    #[test]
    fn elapsed_finishes_at_duration(target in 1u64..1_000_000, gap_ms in 1u64..400) {
        let config = CountUpConfig { pacing: Pacing::Elapsed, ..CountUpConfig::default() };
        let seq = frames(target, &config, Duration::from_millis(gap_ms));
        let expected = 2000u64.div_ceil(gap_ms) as usize;
        prop_assert_eq!(seq.len(), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Formatting
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn grouping_round_trips(value in any::<u64>()) {
        let grouped = group_thousands(value, ',');
        let plain: String = grouped.chars().filter(|c| *c != ',').collect();
        prop_assert_eq!(plain, value.to_string());
        for (i, group) in grouped.split(',').enumerate() {
            if i == 0 {
                prop_assert!((1..=3).contains(&group.len()));
            } else {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }
}

#[test]
fn count_to_1500_renders_grouped_sequence() {
    let config = CountUpConfig::default();
    let rendered: Vec<String> = frames(1500, &config, Duration::from_millis(16))
        .into_iter()
        .map(|f| format_count(f.value(), config.separator, &config.suffix))
        .collect();

    assert_eq!(rendered.len(), 125);
    assert_eq!(&rendered[..3], &["12+", "24+", "36+"]);
    assert_eq!(rendered[82], "996+");
    assert_eq!(rendered[83], "1,008+");
    assert_eq!(rendered.last().map(String::as_str), Some("1,500+"));
    for (i, text) in rendered.iter().enumerate() {
        let value = ((i as u64 + 1) * 12).min(1500);
        assert_eq!(text.contains(','), value >= 1000, "frame {i}: {text}");
    }
}
