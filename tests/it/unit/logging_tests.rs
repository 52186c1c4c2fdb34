//! Unit tests for the one-time logging setup.

use mapview_input::logging;

#[test]
fn test_init_is_guarded() {
    logging::init("debug");
    assert!(logging::is_initialized());

    // Any later call is a no-op
    assert!(!logging::init("trace"));
    assert!(!logging::init("info"));
}
