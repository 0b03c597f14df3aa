//! Global configuration for InterComp runtime behavior.
//!
//! This module provides thread-safe global configuration that affects
//! parsing without threading a settings object through every reader.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::reader::FIELD_COUNT;

/// Global flag for lenient column handling.
///
/// When enabled, data lines with more than [`FIELD_COUNT`] tab-separated
/// fields are accepted and the trailing columns are ignored. Lines with
/// fewer fields are rejected regardless of this flag.
///
/// This is set once at startup and read during parsing.
static LENIENT_COLUMNS: AtomicBool = AtomicBool::new(false);

/// Enable or disable lenient column handling.
///
/// # Example
///
/// ```
/// use intercomp::config;
///
/// // Enable at startup before any parsing
/// config::set_lenient_columns(true);
///
/// // A 13-column line is now accepted, its last column dropped
/// assert!(config::accepts_field_count(13));
/// # config::set_lenient_columns(false);
/// ```
#[inline]
pub fn set_lenient_columns(enabled: bool) {
    LENIENT_COLUMNS.store(enabled, Ordering::Release);
}

/// Check if lenient column handling is enabled.
#[inline]
pub fn is_lenient_columns() -> bool {
    LENIENT_COLUMNS.load(Ordering::Acquire)
}

/// Decide whether a data line with `fields` columns may be parsed.
///
/// Strict mode (default) requires exactly [`FIELD_COUNT`] columns.
/// Lenient mode additionally accepts wider lines.
#[inline]
pub fn accepts_field_count(fields: usize) -> bool {
    if is_lenient_columns() {
        fields >= FIELD_COUNT
    } else {
        fields == FIELD_COUNT
    }
}
