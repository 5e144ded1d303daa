// Output formatting — terminal display for the CLI.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..."
/// when something was cut. Counts characters, not bytes, so multi-byte
/// input never panics.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars).collect();
    format!("{kept}...")
}
