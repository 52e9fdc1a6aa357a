//! Log sanitization utilities
//!
//! Prevents API keys and secrets from being fully exposed in debug logs
//! and `Debug` output.

/// Number of leading characters kept visible when masking a secret.
const VISIBLE_PREFIX: usize = 4;

/// Secrets shorter than this are masked completely.
const MIN_PARTIAL_LEN: usize = 8;

/// Mask a secret for safe logging.
///
/// Empty input stays empty so that "unset" remains visible in logs.
/// Short secrets are replaced entirely, longer ones keep a short prefix.
pub fn mask_secret(s: &str) -> String {
    if s.is_empty() {
        String::new()
    } else if s.chars().count() < MIN_PARTIAL_LEN {
        "***".to_string()
    } else {
        let cut = s
            .char_indices()
            .nth(VISIBLE_PREFIX)
            .map_or(s.len(), |(i, _)| i);
        format!("{}***", &s[..cut])
    }
}
