//! Timestamp-based rate limiting for pointer motion.

use std::time::{Duration, Instant};

/// A motion event held back by the throttle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Drag with the button held.
    Drag(i32),
    /// Pointer move with no button held.
    Hover(i32),
}

/// Limits how often drag/move events are processed.
///
/// Events inside the interval are not dropped: the latest one is kept and
/// handed back by [`MotionThrottle::take_due`] once the interval has passed.
/// Nothing here ever sleeps.
#[derive(Debug, Clone)]
pub struct MotionThrottle {
    interval: Duration,
    last_processed: Option<Instant>,
    pending: Option<Motion>,
}

impl MotionThrottle {
    /// Throttle processing at most one motion per `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_processed: None,
            pending: None,
        }
    }

    fn is_due(&self, now: Instant) -> bool {
        self.last_processed
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval)
    }

    /// Decide whether `motion` arriving at `now` is processed right away.
    ///
    /// Returns `true` and records the timestamp if the interval has passed;
    /// otherwise `motion` replaces any pending one and `false` is returned.
    pub fn admit(&mut self, motion: Motion, now: Instant) -> bool {
        if self.is_due(now) {
            self.last_processed = Some(now);
            self.pending = None;
            true
        } else {
            self.pending = Some(motion);
            false
        }
    }

    /// Take the coalesced motion if its interval has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<Motion> {
        if self.pending.is_some() && self.is_due(now) {
            self.last_processed = Some(now);
            self.pending.take()
        } else {
            None
        }
    }

    /// Latest held-back motion, if any.
    pub fn pending(&self) -> Option<Motion> {
        self.pending
    }

    /// Forget any held-back motion and the last timestamp.
    pub fn clear(&mut self) {
        self.pending = None;
        self.last_processed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(25);

    #[test]
    fn test_first_motion_is_admitted() {
        let mut throttle = MotionThrottle::new(INTERVAL);
        assert!(throttle.admit(Motion::Hover(1), Instant::now()));
        assert_eq!(throttle.pending(), None);
    }

    #[test]
    fn test_fast_motions_are_coalesced() {
        let start = Instant::now();
        let mut throttle = MotionThrottle::new(INTERVAL);
        assert!(throttle.admit(Motion::Drag(1), start));
        assert!(!throttle.admit(Motion::Drag(2), start + Duration::from_millis(5)));
        assert!(!throttle.admit(Motion::Drag(3), start + Duration::from_millis(10)));
        assert_eq!(throttle.pending(), Some(Motion::Drag(3)));

        assert_eq!(throttle.take_due(start + Duration::from_millis(20)), None);
        assert_eq!(
            throttle.take_due(start + Duration::from_millis(25)),
            Some(Motion::Drag(3))
        );
        assert_eq!(throttle.pending(), None);
    }

    #[test]
    fn test_admit_after_interval_discards_pending() {
        let start = Instant::now();
        let mut throttle = MotionThrottle::new(INTERVAL);
        assert!(throttle.admit(Motion::Hover(1), start));
        assert!(!throttle.admit(Motion::Hover(2), start + Duration::from_millis(1)));
        assert!(throttle.admit(Motion::Hover(3), start + Duration::from_millis(30)));
        assert_eq!(throttle.pending(), None);
    }

    #[test]
    fn test_zero_interval_admits_everything() {
        let now = Instant::now();
        let mut throttle = MotionThrottle::new(Duration::ZERO);
        assert!(throttle.admit(Motion::Hover(1), now));
        assert!(throttle.admit(Motion::Hover(2), now));
    }

    #[test]
    fn test_clear() {
        let now = Instant::now();
        let mut throttle = MotionThrottle::new(INTERVAL);
        throttle.admit(Motion::Drag(1), now);
        throttle.admit(Motion::Drag(2), now);
        throttle.clear();
        assert_eq!(throttle.pending(), None);
        assert!(throttle.admit(Motion::Drag(3), now));
    }
}
