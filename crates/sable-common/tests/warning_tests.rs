//! Warning registry lifecycle. Kept to a single test so no other test in
//! this binary races on the global registry.

use sable_common::warning::{clear_warnings, has_warned, warn_once};

#[test]
fn test_clear_warnings_forgets_everything() {
    warn_once("CSS", "first");
    warn_once("JSON", "second");
    assert!(has_warned("CSS", "first"));
    assert!(has_warned("JSON", "second"));

    clear_warnings();
    assert!(!has_warned("CSS", "first"));
    assert!(!has_warned("JSON", "second"));

    // Cleared messages are reported again.
    warn_once("CSS", "first");
    assert!(has_warned("CSS", "first"));
}
