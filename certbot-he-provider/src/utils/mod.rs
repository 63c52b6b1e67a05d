//! Utility modules.

/// Log sanitization: response truncation and account masking.
pub mod log_sanitizer;
