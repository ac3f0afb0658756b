#![allow(missing_docs)]

use chrono::{DateTime, Duration, Utc};
use evo_arena::simulation::clock::{Clock, ManualClock};

#[test]
fn test_manual_clock_starts_at_epoch() {
    assert_eq!(ManualClock::default().now(), DateTime::<Utc>::UNIX_EPOCH);
}

#[test]
fn test_manual_clock_is_shared() {
    let clock = ManualClock::default();
    let handle = clock.clone();
    let start = clock.now();

    handle.advance_secs(1.5);
    assert_eq!(clock.now() - start, Duration::milliseconds(1500));

    clock.advance(Duration::seconds(2));
    assert_eq!(handle.now() - start, Duration::milliseconds(3500));
}
