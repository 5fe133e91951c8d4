//! One-shot timers
//!
//! Timers run over an explicit monotonic clock advanced by the host, so
//! "wait five seconds" is a clock step rather than a sleep. Every timer
//! returns a `TimerId` handle that can cancel it before it fires.

use std::time::Duration;

/// Handle for a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u32);

#[derive(Debug)]
struct Scheduled<T> {
    id: TimerId,
    fire_at: Duration,
    payload: T,
}

/// One-shot timer wheel
#[derive(Debug)]
pub struct TimerManager<T> {
    timers: Vec<Scheduled<T>>,
    now: Duration,
    next_id: u32,
}

impl<T> TimerManager<T> {
    pub fn new() -> Self {
        Self {
            timers: Vec::new(),
            now: Duration::ZERO,
            next_id: 1,
        }
    }

    /// Current clock reading
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule a one-shot timer `delay` from now
    pub fn set_timeout(&mut self, payload: T, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Scheduled {
            id,
            fire_at: self.now + delay,
            payload,
        });
        id
    }

    /// Cancel a pending timer; false if it already fired or was cancelled
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    /// Advance the clock and collect the payloads of every timer now due,
    /// ordered by fire time then scheduling order
    pub fn advance(&mut self, dt: Duration) -> Vec<T> {
        self.now += dt;
        let now = self.now;

        let mut due = Vec::new();
        let mut remaining = Vec::new();
        for timer in self.timers.drain(..) {
            if timer.fire_at <= now {
                due.push(timer);
            } else {
                remaining.push(timer);
            }
        }
        self.timers = remaining;

        due.sort_by_key(|t| (t.fire_at, t.id));
        due.into_iter().map(|t| t.payload).collect()
    }

    /// Check if there are pending timers
    pub fn has_pending(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Time until the next timer fires
    pub fn time_until_next(&self) -> Option<Duration> {
        self.timers
            .iter()
            .map(|t| t.fire_at.saturating_sub(self.now))
            .min()
    }
}

impl<T> Default for TimerManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_delay() {
        let mut timers: TimerManager<&str> = TimerManager::new();
        timers.set_timeout("dismiss", Duration::from_millis(5000));

        assert!(timers.advance(Duration::from_millis(4999)).is_empty());
        assert_eq!(timers.advance(Duration::from_millis(1)), vec!["dismiss"]);
        assert!(!timers.has_pending());
    }

    #[test]
    fn test_fires_exactly_once() {
        let mut timers: TimerManager<&str> = TimerManager::new();
        timers.set_timeout("once", Duration::from_millis(10));

        assert_eq!(timers.advance(Duration::from_millis(10)).len(), 1);
        assert!(timers.advance(Duration::from_millis(1000)).is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut timers: TimerManager<&str> = TimerManager::new();
        let id = timers.set_timeout("never", Duration::from_millis(10));

        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert!(timers.advance(Duration::from_millis(100)).is_empty());
    }

    #[test]
    fn test_due_order() {
        let mut timers: TimerManager<u32> = TimerManager::new();
        timers.set_timeout(2, Duration::from_millis(20));
        timers.set_timeout(1, Duration::from_millis(10));
        timers.set_timeout(3, Duration::from_millis(20));

        assert_eq!(timers.advance(Duration::from_millis(20)), vec![1, 2, 3]);
    }

    #[test]
    fn test_time_until_next() {
        let mut timers: TimerManager<&str> = TimerManager::new();
        assert_eq!(timers.time_until_next(), None);

        timers.set_timeout("a", Duration::from_millis(50));
        timers.set_timeout("b", Duration::from_millis(30));
        assert_eq!(timers.time_until_next(), Some(Duration::from_millis(30)));

        timers.advance(Duration::from_millis(10));
        assert_eq!(timers.time_until_next(), Some(Duration::from_millis(20)));
    }
}
