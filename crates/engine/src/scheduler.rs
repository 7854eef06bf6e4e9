//! Frame scheduling port.
//!
//! The controller never sleeps or spawns. It asks a [`FrameScheduler`] for
//! "call me back later" and receives an opaque [`FrameHandle`]; the host
//! later hands that handle back to `Controller::on_frame`. Cancelling a
//! handle guarantees it is never delivered.

use std::time::{Duration, Instant};

/// Opaque identifier of one scheduled frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Host-provided recurring-frame primitive.
pub trait FrameScheduler {
    /// Schedule one future frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Drop a scheduled frame. Unknown or already-delivered handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

impl<T: FrameScheduler + ?Sized> FrameScheduler for &mut T {
    fn request_frame(&mut self) -> FrameHandle {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        (**self).cancel_frame(handle)
    }
}

/// Deterministic scheduler driven by hand.
///
/// Frames are delivered only when [`fire`](Self::fire) is called.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Option<FrameHandle>,
    requested: u64,
    cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver the pending frame, if any.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Total frames requested so far.
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Total cancel calls that removed a pending frame.
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        debug_assert!(self.pending.is_none(), "frame requested while one is pending");
        self.next_id += 1;
        self.requested += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}

/// Fixed-interval scheduler for a polling host loop.
#[derive(Debug)]
pub struct TickScheduler {
    interval: Duration,
    next_id: u64,
    pending: Option<(FrameHandle, Instant)>,
}

impl TickScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_id: 0,
            pending: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Schedule a frame `interval` after `now`.
    pub fn request_frame_at(&mut self, now: Instant) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some((handle, now + self.interval));
        handle
    }

    /// Take the pending frame if its deadline has passed.
    pub fn due(&mut self, now: Instant) -> Option<FrameHandle> {
        match self.pending {
            Some((handle, deadline)) if deadline <= now => {
                self.pending = None;
                Some(handle)
            }
            _ => None,
        }
    }

    /// How long the host may block before the pending frame is due.
    ///
    /// `None` when nothing is scheduled.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
    }
}

impl FrameScheduler for TickScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.request_frame_at(Instant::now())
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if matches!(self.pending, Some((pending, _)) if pending == handle) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_scheduler_delivers_once() {
        let mut s = ManualScheduler::new();
        let h = s.request_frame();
        assert_eq!(s.pending(), Some(h));
        assert_eq!(s.fire(), Some(h));
        assert_eq!(s.fire(), None);
        assert_eq!(s.requested(), 1);
    }

    #[test]
    fn manual_cancel_prevents_delivery() {
        let mut s = ManualScheduler::new();
        let h = s.request_frame();
        s.cancel_frame(h);
        assert_eq!(s.fire(), None);
        assert_eq!(s.cancelled(), 1);

        // Cancelling a delivered handle is a no-op.
        let h2 = s.request_frame();
        assert_ne!(h, h2);
        assert_eq!(s.fire(), Some(h2));
        s.cancel_frame(h2);
        assert_eq!(s.cancelled(), 1);
    }

    #[test]
    fn tick_scheduler_waits_for_deadline() {
        let mut s = TickScheduler::new(Duration::from_millis(100));
        let t0 = Instant::now();
        let h = s.request_frame_at(t0);

        assert_eq!(s.time_until_due(t0), Some(Duration::from_millis(100)));
        assert_eq!(s.due(t0 + Duration::from_millis(99)), None);
        assert_eq!(s.due(t0 + Duration::from_millis(100)), Some(h));
        assert_eq!(s.due(t0 + Duration::from_secs(5)), None);
        assert_eq!(s.time_until_due(t0), None);
    }

    #[test]
    fn tick_scheduler_cancel() {
        let mut s = TickScheduler::new(Duration::ZERO);
        let t0 = Instant::now();
        let h = s.request_frame_at(t0);
        s.cancel_frame(FrameHandle(h.id() + 1));
        assert!(s.time_until_due(t0).is_some());
        s.cancel_frame(h);
        assert_eq!(s.due(t0 + Duration::from_secs(1)), None);
    }
}
