// Normalize raw report text before field recovery.
// Upstream input is routinely cut off mid-object, which leaves dangling
// commas and half-open lists behind.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static REPEATED_COMMA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*,").unwrap());
static COMMA_AFTER_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\s*,").unwrap());
static COMMA_BEFORE_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*\]").unwrap());

/// Collapse whitespace runs to single spaces and repair common break
/// patterns (`,,` → `,`, `[,` → `[`, `,]` → `]`), then trim. Each repair is
/// a single non-overlapping pass. Total for any input, including empty
/// strings and non-JSON garbage.
pub fn normalize_text(raw: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(raw, " ");
    let no_repeats = REPEATED_COMMA.replace_all(&collapsed, ",");
    let open_fixed = COMMA_AFTER_OPEN.replace_all(&no_repeats, "[");
    let close_fixed = COMMA_BEFORE_CLOSE.replace_all(&open_fixed, "]");
    close_fixed.trim().to_string()
}
