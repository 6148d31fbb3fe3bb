//! Number formatting for rendered statistics.

/// Group `value` in threes from the right with `separator`.
///
/// Matches the default `en-US` locale rendering (`1500` → `1,500`).
#[must_use]
pub fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len_utf8());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Grouped value followed by the trailing marker.
#[must_use]
pub fn format_count(value: u64, separator: char, suffix: &str) -> String {
    let mut out = group_thousands(value, separator);
    out.push_str(suffix);
    out
}
