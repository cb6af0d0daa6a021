//! Text helpers for log lines.

/// Single-line preview of user text, cut at `max_chars` characters.
///
/// Line breaks are folded into spaces so a multi-line question stays on one
/// log line.
pub fn preview(s: &str, max_chars: usize) -> String {
    let folded: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    let trimmed = folded.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let mut out: String = trimmed.chars().take(max_chars).collect();
    out.push_str("...");
    out
}
