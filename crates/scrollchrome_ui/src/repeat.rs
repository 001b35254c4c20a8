//! Repeat clock for click auto-repeat.
//!
//! A cooperative timer: the UI loop calls [`RepeatClock::poll`] and
//! forwards a tick to every subscriber it returns. The clock only runs while
//! it has subscribers.

use std::time::Duration;
use web_time::Instant;

use crate::constants::DEFAULT_REPEAT_INTERVAL;

/// Handle returned by [`RepeatClock::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Fixed-interval tick source shared by scrollable controls.
#[derive(Debug)]
pub struct RepeatClock {
    /// Time between two ticks.
    interval: Duration,

    /// Active subscriptions, in subscription order.
    subscribers: Vec<SubscriptionId>,

    /// Time of the last tick (or of the first subscription).
    last_tick: Option<Instant>,

    next_id: u64,
}

impl RepeatClock {
    /// Create a clock ticking every [`DEFAULT_REPEAT_INTERVAL`].
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_REPEAT_INTERVAL)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            subscribers: Vec::new(),
            last_tick: None,
            next_id: 1,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Add a subscriber. The clock starts counting at `now` if it was idle.
    pub fn subscribe(&mut self, now: Instant) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        if self.subscribers.is_empty() {
            self.last_tick = Some(now);
        }
        self.subscribers.push(id);
        log::debug!(
            "Repeat clock: subscribed {:?} ({} active)",
            id,
            self.subscribers.len()
        );
        id
    }

    /// Remove a subscriber. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| *s != id);
        let removed = self.subscribers.len() != before;
        if removed {
            log::debug!(
                "Repeat clock: unsubscribed {:?} ({} active)",
                id,
                self.subscribers.len()
            );
        }
        if self.subscribers.is_empty() {
            self.last_tick = None;
        }
        removed
    }

    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscribers.contains(&id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// True while at least one subscriber exists.
    pub fn is_running(&self) -> bool {
        !self.subscribers.is_empty()
    }

    /// Advance the clock. When an interval has elapsed since the last tick,
    /// returns the subscribers to notify; otherwise an empty list.
    pub fn poll(&mut self, now: Instant) -> Vec<SubscriptionId> {
        let Some(last_tick) = self.last_tick else {
            return Vec::new();
        };

        if now.saturating_duration_since(last_tick) < self.interval {
            return Vec::new();
        }

        self.last_tick = Some(now);
        log::trace!("Repeat clock: tick for {} subscribers", self.subscribers.len());
        self.subscribers.clone()
    }
}

impl Default for RepeatClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_clock_never_ticks() {
        let mut clock = RepeatClock::new();
        assert!(!clock.is_running());
        assert!(clock.poll(Instant::now()).is_empty());
    }

    #[test]
    fn test_ticks_after_interval() {
        let start = Instant::now();
        let mut clock = RepeatClock::with_interval(Duration::from_millis(50));
        let id = clock.subscribe(start);

        assert!(clock.poll(start + Duration::from_millis(20)).is_empty());
        assert_eq!(clock.poll(start + Duration::from_millis(50)), vec![id]);
        // interval restarts at the tick
        assert!(clock.poll(start + Duration::from_millis(60)).is_empty());
        assert_eq!(clock.poll(start + Duration::from_millis(100)), vec![id]);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let mut clock = RepeatClock::new();
        let id = clock.subscribe(Instant::now());
        assert!(clock.unsubscribe(id));
        assert!(!clock.unsubscribe(id));
        assert_eq!(clock.subscriber_count(), 0);
        assert!(!clock.is_running());
    }
}
