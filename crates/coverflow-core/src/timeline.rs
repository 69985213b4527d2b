//! Deferred work owned by the controller.
//!
//! Time is passed in explicitly as a `Duration` since widget start, so the
//! same code runs under a browser animation frame loop and under host tests.

use std::time::Duration;

/// Cancellation handle for a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Clone, Debug)]
struct Entry<T> {
    handle: TaskHandle,
    due: Duration,
    period: Option<Duration>,
    task: T,
}

/// Ordered set of one-shot and repeating tasks.
#[derive(Clone, Debug)]
pub struct Timeline<T> {
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T: Clone> Timeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, due: Duration, period: Option<Duration>, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            due,
            period,
            task,
        });
        handle
    }

    pub fn schedule_once(&mut self, now: Duration, delay: Duration, task: T) -> TaskHandle {
        self.push(now + delay, None, task)
    }

    /// Repeats every `period`, first firing one period after `now`.
    pub fn schedule_every(&mut self, now: Duration, period: Duration, task: T) -> TaskHandle {
        // a zero period would make pop_due spin forever
        let period = period.max(Duration::from_millis(1));
        self.push(now + period, Some(period), task)
    }

    /// Returns whether the task was still pending.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes and returns the earliest task due at or before `now`.
    ///
    /// Ties fire in scheduling order. A repeating task is re-armed one period
    /// after the time it was due, so a slightly late frame keeps the cadence.
    /// If a whole period has already passed it fires once and is re-armed one
    /// period after `now`; missed periods are skipped, not replayed.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, T)> {
        let pos = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= now)
            .min_by_key(|(_, e)| (e.due, e.handle.0))
            .map(|(i, _)| i)?;
        match self.entries[pos].period {
            Some(period) => {
                let entry = &mut self.entries[pos];
                let fired_at = entry.due;
                let next = fired_at + period;
                entry.due = if next > now { next } else { now + period };
                Some((fired_at, entry.task.clone()))
            }
            None => {
                let entry = self.entries.swap_remove(pos);
                Some((entry.due, entry.task))
            }
        }
    }
}
