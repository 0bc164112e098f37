//! Diagnostic warnings with colored terminal output.
//!
//! Provides deduplication so a caller that hits the same questionable input
//! in a loop reports it once. Used by the selector assembler to flag
//! combinator tokens it does not recognise.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn registry() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock cannot leave the set half-updated.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about questionable input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("CSS", "non-standard combinator token '|'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = registry()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        let line = format!("[Sable {component}] ⚠ {message}");
        eprintln!("{}", line.yellow());
    }
}

/// Whether `warn_once` has already reported this message.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    registry()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings
pub fn clear_warnings() {
    if let Some(set) = registry().as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_is_recorded() {
        warn_once("test", "recorded once");
        assert!(has_warned("test", "recorded once"));
        assert!(!has_warned("other", "recorded once"));
    }

    #[test]
    fn test_repeated_warning_is_harmless() {
        warn_once("test", "repeat me");
        warn_once("test", "repeat me");
        assert!(has_warned("test", "repeat me"));
    }

    #[test]
    fn test_unknown_message_not_warned() {
        assert!(!has_warned("test", "never emitted"));
    }
}
