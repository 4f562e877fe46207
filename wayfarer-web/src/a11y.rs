// Accessibility helpers

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the page load.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #38bdf8;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Announcement for the polite live region when the selected day changes.
#[must_use]
pub fn day_status(day_number: u32, total: usize, city: &str, title: &str) -> String {
    format!("Day {day_number} of {total}: {city}, {title}")
}

/// Label of a navigator dot. Dots are numbered from one.
#[must_use]
pub fn go_to_day_label(index: usize) -> String {
    format!("Go to day {}", index + 1)
}
