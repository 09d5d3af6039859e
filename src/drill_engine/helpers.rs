//! Small text helpers shared by the parser, session and report.

use chrono::Duration;

/// Width of every record marker (`[I]`, `[Q]`, `[A]`, ...).
pub const MARKER_LEN: usize = 3;

/// Drop the 3-character record marker and trim what remains.
///
/// Character based, so a short or non-ASCII line never splits a code point.
pub fn strip_marker(line: &str) -> &str {
    match line.char_indices().nth(MARKER_LEN) {
        Some((at, _)) => line[at..].trim(),
        None => "",
    }
}

/// Render an elapsed time as `H:MM:SS`, fractional seconds dropped.
///
/// A day or more is prefixed the way the legacy reports show it
/// (`"1 day, 2:03:04"`). Negative spans clamp to zero.
pub fn format_duration(elapsed: Duration) -> String {
    let total = elapsed.num_seconds().max(0);
    let days = total / 86_400;
    let rem = total % 86_400;
    let clock = format!("{}:{:02}:{:02}", rem / 3600, (rem % 3600) / 60, rem % 60);
    match days {
        0 => clock,
        1 => format!("1 day, {clock}"),
        d => format!("{d} days, {clock}"),
    }
}
