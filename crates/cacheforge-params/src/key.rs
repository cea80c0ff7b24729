//! Parameter key naming
//!
//! Schema keys are camel-case identifiers on the API surface; the
//! provisioning engine expects lowercase hyphen-separated names.

/// Convert a camel-case or underscore-joined key to its lowercase
/// hyphen-separated wire form
///
/// Already-hyphenated lowercase input passes through unchanged, so the
/// transform is idempotent.
///
/// ```rust
/// use cacheforge_params::hyphenate;
///
/// assert_eq!(
///     hyphenate("clientOutputBufferLimitNormalHardLimit"),
///     "client-output-buffer-limit-normal-hard-limit"
/// );
/// assert_eq!(hyphenate("repl_backlog_size"), "repl-backlog-size");
/// assert_eq!(hyphenate("appendonly"), "appendonly");
/// ```
#[must_use]
pub fn hyphenate(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 8);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else if ch == '_' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
        } else {
            out.push(ch);
        }
    }
    out
}
