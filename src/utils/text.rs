/// Char-counted truncation where the ellipsis counts against the budget:
/// strings within `max_chars` pass through, longer ones keep the first
/// `max_chars - 3` chars plus `"..."`.
#[must_use]
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}
