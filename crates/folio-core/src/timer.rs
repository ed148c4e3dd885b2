//! Explicit, cancellable timers on a caller-supplied clock.
//!
//! Nothing here sleeps. The owner schedules timers against its notion of
//! "now" and later asks which ones are due, so tests can simulate time.

/// What a timer is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Boot animation delay.
    Boot,
    /// Simulated command latency.
    Processing,
    /// Quiet period before the idle hint appears.
    IdleHint,
    /// Auto-clear of the active notice.
    Notice,
    /// Grace delay before external navigation.
    Navigate,
    /// Recurring session clock.
    Clock,
}

/// Handle returned by `schedule`, used to cancel a single timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct Timer {
    handle: TimerHandle,
    kind: TimerKind,
    deadline: u64,
    /// Repeat period for interval timers.
    interval: Option<u64>,
}

/// A due timer as reported by `pop_due`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub kind: TimerKind,
    pub handle: TimerHandle,
    /// The deadline that elapsed (not the current time).
    pub at: u64,
}

/// Pending timers ordered by deadline.
#[derive(Debug, Default)]
pub struct TimerQueue {
    timers: Vec<Timer>,
    next_handle: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a one-shot timer `delay_ms` after `now`.
    pub fn schedule(&mut self, kind: TimerKind, now: u64, delay_ms: u64) -> TimerHandle {
        self.push(kind, now.saturating_add(delay_ms), None)
    }

    /// Schedule a recurring timer firing every `interval_ms` after `now`.
    /// A zero interval is clamped to one millisecond.
    pub fn schedule_every(&mut self, kind: TimerKind, now: u64, interval_ms: u64) -> TimerHandle {
        let interval = interval_ms.max(1);
        self.push(kind, now.saturating_add(interval), Some(interval))
    }

    fn push(&mut self, kind: TimerKind, deadline: u64, interval: Option<u64>) -> TimerHandle {
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        self.timers.push(Timer {
            handle,
            kind,
            deadline,
            interval,
        });
        handle
    }

    /// Cancel one timer. Returns whether it was pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.handle != handle);
        self.timers.len() != before
    }

    /// Cancel every timer of `kind`. Returns how many were removed.
    pub fn cancel_kind(&mut self, kind: TimerKind) -> usize {
        let before = self.timers.len();
        self.timers.retain(|t| t.kind != kind);
        before - self.timers.len()
    }

    /// Cancel everything.
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.timers.iter().any(|t| t.kind == kind)
    }

    /// Earliest deadline of a pending timer of `kind`.
    pub fn deadline(&self, kind: TimerKind) -> Option<u64> {
        self.timers
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.deadline)
            .min()
    }

    /// Earliest deadline across all timers.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.iter().map(|t| t.deadline).min()
    }

    /// Remove and return the earliest timer due at or before `now`.
    ///
    /// Ties go to the timer scheduled first. Interval timers are re-armed one
    /// period after the deadline that fired.
    pub fn pop_due(&mut self, now: u64) -> Option<Fired> {
        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= now)
            .min_by_key(|(_, t)| (t.deadline, t.handle))
            .map(|(i, _)| i)?;
        let timer = &self.timers[idx];
        let fired = Fired {
            kind: timer.kind,
            handle: timer.handle,
            at: timer.deadline,
        };
        let interval = timer.interval;
        match interval {
            Some(interval) => self.timers[idx].deadline = fired.at.saturating_add(interval),
            None => {
                self.timers.remove(idx);
            },
        }
        Some(fired)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_deadline_order() {
        let mut q = TimerQueue::new();
        q.schedule(TimerKind::IdleHint, 0, 300);
        q.schedule(TimerKind::Boot, 0, 100);
        q.schedule(TimerKind::Processing, 0, 200);
        let kinds: Vec<TimerKind> = std::iter::from_fn(|| q.pop_due(1000)).map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![TimerKind::Boot, TimerKind::Processing, TimerKind::IdleHint]
        );
        assert!(q.is_empty());
    }

    #[test]
    fn not_due_stays_pending() {
        let mut q = TimerQueue::new();
        q.schedule(TimerKind::Boot, 0, 100);
        assert_eq!(q.pop_due(99), None);
        assert_eq!(q.pop_due(100).map(|f| f.at), Some(100));
    }

    #[test]
    fn ties_go_to_first_scheduled() {
        let mut q = TimerQueue::new();
        q.schedule(TimerKind::Notice, 0, 50);
        q.schedule(TimerKind::Boot, 0, 50);
        assert_eq!(q.pop_due(50).map(|f| f.kind), Some(TimerKind::Notice));
    }

    #[test]
    fn interval_rearms() {
        let mut q = TimerQueue::new();
        q.schedule_every(TimerKind::Clock, 0, 1000);
        let ats: Vec<u64> = std::iter::from_fn(|| q.pop_due(3500)).map(|f| f.at).collect();
        assert_eq!(ats, vec![1000, 2000, 3000]);
        assert_eq!(q.deadline(TimerKind::Clock), Some(4000));
    }

    #[test]
    fn cancel_by_handle_and_kind() {
        let mut q = TimerQueue::new();
        let h = q.schedule(TimerKind::Boot, 0, 10);
        q.schedule(TimerKind::IdleHint, 0, 10);
        q.schedule(TimerKind::IdleHint, 0, 20);
        assert!(q.cancel(h));
        assert!(!q.cancel(h));
        assert_eq!(q.cancel_kind(TimerKind::IdleHint), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn next_deadline_and_clear() {
        let mut q = TimerQueue::new();
        assert_eq!(q.next_deadline(), None);
        q.schedule(TimerKind::Boot, 5, 10);
        q.schedule_every(TimerKind::Clock, 0, 0);
        assert_eq!(q.next_deadline(), Some(1));
        assert!(q.is_pending(TimerKind::Boot));
        q.clear();
        assert_eq!(q.len(), 0);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn due_timers_fire_in_deadline_order(
                delays in proptest::collection::vec(0u64..500, 1..12),
                now in 0u64..600,
            ) {
                let mut q = TimerQueue::new();
                for d in &delays {
                    q.schedule(TimerKind::Processing, 0, *d);
                }
                let ats: Vec<u64> = std::iter::from_fn(|| q.pop_due(now)).map(|f| f.at).collect();
                prop_assert!(ats.windows(2).all(|w| w[0] <= w[1]));
                prop_assert_eq!(ats.len(), delays.iter().filter(|d| **d <= now).count());
                prop_assert_eq!(q.len(), delays.len() - ats.len());
            }
        }
    }
}
