//! Log sanitization utilities
//!
//! The console returns whole HTML pages, and the requests carry account
//! credentials. Nothing here is allowed to reach a log line verbatim.

/// Maximum number of bytes of a response body included in a log line.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of an account name kept by [`mask_account`].
const MASK_KEEP: usize = 2;

/// Largest char boundary not greater than `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Truncate a response body for logging.
///
/// Bodies within the limit are returned unchanged; longer ones are cut at a
/// char boundary and suffixed with the original length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    format!(
        "{}... [truncated, total {} bytes]",
        &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
        s.len()
    )
}

/// Mask an account name, keeping only its first characters.
///
/// `"admin@example.com"` becomes `"ad***"`.
pub fn mask_account(account: &str) -> String {
    let kept: String = account.chars().take(MASK_KEEP).collect();
    format!("{kept}***")
}
