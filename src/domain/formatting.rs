/// Format a duration in seconds as `MM:SS`.
///
/// Both parts are zero-padded to two digits; minutes keep growing past 99
/// ("100:00") rather than rolling over into hours.
pub fn format_time(seconds: u64) -> String {
    let minutes = seconds / 60;
    let remaining_seconds = seconds % 60;

    format!("{minutes:02}:{remaining_seconds:02}")
}

/// Format an average rating for display with one decimal place.
pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

/// Format a key idea count for display.
pub fn format_key_ideas(count: u64) -> String {
    if count == 1 {
        "1 key idea".to_string()
    } else {
        format!("{count} key ideas")
    }
}

/// Em dash constant for use as a placeholder when a value is absent.
pub const EM_DASH: &str = "\u{2014}";
