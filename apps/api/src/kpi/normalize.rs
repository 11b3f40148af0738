//! Reason normalization — reduces a model-produced justification to exactly
//! one well-formed sentence suitable for display and embedding.

/// Maximum reason length in characters, matching the prompt's format rules.
pub const MAX_REASON_LEN: usize = 80;

/// Normalizes a free-text justification into a single sentence of at most
/// `max_len` characters, ending in exactly one period.
///
/// Returns `None` when the input is missing, blank, or reduces to a bare
/// period. Pure, total, and idempotent on already-normalized input.
pub fn normalize_reason(reason: Option<&str>, max_len: usize) -> Option<String> {
    let trimmed = reason?.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Keep only the first sentence: up to and including the first period,
    // or the whole string when there is none.
    let mut s = match trimmed.find('.') {
        Some(idx) => trimmed[..=idx].to_string(),
        None => trimmed.to_string(),
    };

    if !s.ends_with('.') {
        s.truncate(s.trim_end().len());
        s.push('.');
    }
    let mut s = s.trim().to_string();

    if s.chars().count() > max_len {
        // Cut to max_len - 1 characters, then back off to the last word
        // boundary so no word is split, then re-terminate.
        let head: String = s.chars().take(max_len.saturating_sub(1)).collect();
        s = match head.rfind(' ') {
            Some(i) => head[..i].to_string(),
            None => head,
        };
        s.push('.');
    }

    if s == "." {
        None
    } else {
        Some(s)
    }
}
