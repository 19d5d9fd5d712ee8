//! Conversion warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the XML parser to report markup that has no JSON counterpart and
//! is dropped (declarations, processing instructions).

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about dropped or unsupported markup (prints once per unique message)
///
/// Returns `true` if the warning was printed, `false` if it had already been
/// reported since the last [`clear_warnings`].
///
/// # Example
/// ```
/// use xmljson_common::warning::warn_once;
///
/// let _ = warn_once("XML", "skipping <!DOCTYPE note> declaration");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{}", format!("[xmljson {component}] ⚠ {message}").yellow());
    }
    should_print
}

/// Clear all recorded warnings (call between documents in a batch)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
