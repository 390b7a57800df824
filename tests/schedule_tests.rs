// Host-side tests for the single pending-handle slot.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod schedule {
    include!("../src/core/schedule.rs");
}

use schedule::*;

#[test]
fn arming_returns_the_displaced_handle() {
    let mut slot = ScheduleSlot::new();
    assert!(!slot.is_pending());
    assert_eq!(slot.arm(1), None);
    assert!(slot.is_pending());
    assert_eq!(slot.arm(2), Some(1));
    assert_eq!(slot.take(), Some(2));
    assert_eq!(slot.take(), None);
}

#[test]
fn firing_spends_the_handle() {
    let mut slot = ScheduleSlot::new();
    slot.arm(7);
    slot.fired();
    assert!(!slot.is_pending());
    assert_eq!(slot.arm(8), None);
}

#[test]
fn at_most_one_handle_is_ever_pending() {
    let mut slot = ScheduleSlot::new();
    let mut cancelled = Vec::new();
    for id in 0..10 {
        if let Some(stale) = slot.arm(id) {
            cancelled.push(stale);
        }
    }
    assert_eq!(cancelled, (0..9).collect::<Vec<_>>());
    assert_eq!(slot.take(), Some(9));
}

#[test]
fn shutdown_returns_pending_and_refuses_new_handles() {
    let mut slot = ScheduleSlot::<i32>::default();
    slot.arm(3);
    assert_eq!(slot.shutdown(), Some(3));
    assert!(!slot.is_active());
    // The refused handle comes straight back for cancellation.
    assert_eq!(slot.arm(4), Some(4));
    assert!(!slot.is_pending());
}

#[test]
fn timer_millis_saturates_instead_of_wrapping() {
    use std::time::Duration;
    assert_eq!(timer_millis(Duration::from_millis(150)), 150);
    assert_eq!(timer_millis(Duration::ZERO), 0);
    assert_eq!(timer_millis(Duration::from_millis(u32::MAX as u64)), i32::MAX);
    assert_eq!(timer_millis(Duration::from_secs(u64::MAX)), i32::MAX);
}
