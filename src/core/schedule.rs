// Holds the one pending callback handle (animation frame id, timeout id) an
// engine instance may own at a time.

use std::time::Duration;

/// Milliseconds for a browser timer, saturating at the largest delay
/// `setTimeout` accepts instead of wrapping negative.
pub fn timer_millis(delay: Duration) -> i32 {
    delay.as_millis().min(i32::MAX as u128) as i32
}

#[derive(Debug)]
pub struct ScheduleSlot<H> {
    pending: Option<H>,
    active: bool,
}

impl<H> Default for ScheduleSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> ScheduleSlot<H> {
    pub fn new() -> Self {
        Self {
            pending: None,
            active: true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a newly scheduled handle. The displaced handle, if any, is
    /// returned so the caller can cancel it. A shut-down slot hands the new
    /// handle straight back instead of storing it.
    pub fn arm(&mut self, handle: H) -> Option<H> {
        if !self.active {
            return Some(handle);
        }
        self.pending.replace(handle)
    }

    /// The scheduled callback is running; its handle is spent.
    pub fn fired(&mut self) {
        self.pending = None;
    }

    /// Remove the pending handle for cancellation, leaving the slot usable.
    pub fn take(&mut self) -> Option<H> {
        self.pending.take()
    }

    /// Stop accepting new handles and return the one still pending.
    pub fn shutdown(&mut self) -> Option<H> {
        self.active = false;
        self.pending.take()
    }
}
