/// Splits raw text into the ordered word sequence displayed by the reader.
///
/// All whitespace runs (spaces, tabs, newlines) collapse into single
/// delimiters; leading/trailing whitespace is trimmed; empty fragments are
/// dropped. No returned word is empty or contains internal whitespace.
/// Empty or whitespace-only input yields an empty vector, never an error.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Estimated reading time in whole seconds, rounded up.
///
/// Returns 0 for an empty sequence or a zero rate.
pub fn reading_time_secs(word_count: usize, wpm: u32) -> u64 {
    if word_count == 0 || wpm == 0 {
        return 0;
    }
    ((word_count as f64 / f64::from(wpm)) * 60.0).ceil() as u64
}

/// Formats a duration in seconds as "45s", "2m" or "2m 30s".
pub fn format_reading_time(seconds: u64) -> String {
    if seconds < 60 {
        return format!("{}s", seconds);
    }
    let mins = seconds / 60;
    let secs = seconds % 60;
    if secs > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}m", mins)
    }
}
