//! Utility modules.

/// Serde helpers for timeouts expressed in whole seconds.
pub mod duration;

/// Log sanitization utilities to prevent credential exposure.
pub mod log_sanitizer;
