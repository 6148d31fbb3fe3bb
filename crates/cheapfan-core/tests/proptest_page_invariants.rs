//! Property-based invariant tests for the smaller page controllers.
//!
//! 1. Header shadow class is present iff the offset exceeds 10px.
//! 2. Header transform only changes above 100px, and follows scroll direction.
//! 3. Any burst of scroll events requests exactly one frame.
//! 4. Surrounding whitespace never changes email validity.
//! 5. Nav state after any input sequence matches a simple flag model.

use cheapfan_core::config::HeaderConfig;
use cheapfan_core::header::{HeaderPosition, StickyHeader};
use cheapfan_core::nav::NavigationToggle;
use cheapfan_core::newsletter::{is_valid_email, normalize_email};
use proptest::prelude::*;

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Header classes and transforms
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn header_update_matches_thresholds(offsets in proptest::collection::vec(0.0f64..5000.0, 1..50)) {
        let mut header = StickyHeader::new(HeaderConfig::default());
        let mut last = 0.0;
        for y in offsets {
            let update = header.on_frame(y);
            prop_assert_eq!(update.scrolled, y > 10.0);
            let expected = if y <= 100.0 {
                None
            } else if y > last {
                Some(HeaderPosition::Hidden)
            } else {
                Some(HeaderPosition::Shown)
            };
            prop_assert_eq!(update.position, expected);
            last = y;
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Single-flight frame requests
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scroll_bursts_request_one_frame(bursts in proptest::collection::vec(1usize..40, 1..20)) {
        let mut header = StickyHeader::new(HeaderConfig::default());
        for (i, events) in bursts.into_iter().enumerate() {
            let requested = (0..events).filter(|_| header.on_scroll_event()).count();
            prop_assert_eq!(requested, 1);
            header.on_frame(i as f64 * 25.0);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Email trimming
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn surrounding_whitespace_is_ignored(
        local in "[a-z0-9._%+-]{1,12}",
        domain in "[a-z0-9-]{1,12}",
        tld in "[a-z]{2,6}",
        pad_left in "[ \t\n]{0,3}",
        pad_right in "[ \t\n]{0,3}",
    ) {
        let email = format!("{local}@{domain}.{tld}");
        let padded = format!("{pad_left}{email}{pad_right}");
        prop_assert!(is_valid_email(&email));
        prop_assert_eq!(normalize_email(&padded), Some(email.as_str()));
    }
}

proptest! {
    #[test]
    fn missing_at_is_invalid(text in "[^@]{0,30}") {
        prop_assert!(!is_valid_email(&text));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Nav model
// ═════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
enum NavInput {
    Toggle,
    Link,
    Key(&'static str),
}

fn nav_input() -> impl Strategy<Value = NavInput> {
    prop_oneof![
        Just(NavInput::Toggle),
        Just(NavInput::Link),
        Just(NavInput::Key("Escape")),
        Just(NavInput::Key("Tab")),
    ]
}

proptest! {
    #[test]
    fn nav_follows_flag_model(inputs in proptest::collection::vec(nav_input(), 0..40)) {
        let mut nav = NavigationToggle::new();
        let mut open = false;
        for input in inputs {
            match input {
                NavInput::Toggle => {
                    open = !open;
                    prop_assert_eq!(nav.toggle().open, open);
                }
                NavInput::Link => {
                    open = false;
                    prop_assert!(!nav.link_clicked().open);
                }
                NavInput::Key(key) => {
                    let update = nav.key_pressed(key);
                    prop_assert_eq!(update.is_some(), key == "Escape" && open);
                    if update.is_some() {
                        open = false;
                    }
                }
            }
            prop_assert_eq!(nav.is_open(), open);
        }
    }
}
