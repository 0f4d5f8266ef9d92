//! # Scheduler
//!
//! A cancellable, clock-driven queue of scheduled callbacks.
//!
//! ## Overview
//!
//! Animations never sleep and never spawn timers of their own. Instead they
//! put an event into a [`Scheduler`] together with an absolute deadline and
//! receive a [`TimerHandle`] back. The event loop asks the scheduler for the
//! next deadline (to size its poll timeout) and drains due events with
//! [`Scheduler::pop_due`].
//!
//! Because deadlines are plain [`Instant`]s supplied by the caller, tests
//! drive time forward by arithmetic instead of waiting.
//!
//! ```text
//!  schedule(at, ev) ──► [ (deadline, seq) → ev ] ──► pop_due(now) ──► ev
//!                               ▲
//!  cancel(handle) ──────────────┘ (removes the entry, never fires)
//! ```

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Opaque identity of a scheduled entry, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// An event that became due, along with the deadline it was scheduled for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<E> {
    pub handle: TimerHandle,
    pub deadline: Instant,
    pub event: E,
}

/// Deadline-ordered set of pending events.
#[derive(Debug)]
pub struct Scheduler<E> {
    queue: BTreeMap<(Instant, u64), E>,
    next_seq: u64,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            queue: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// Schedule `event` to fire at `deadline`.
    pub fn schedule_at(&mut self, deadline: Instant, event: E) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.insert((deadline, seq), event);
        TimerHandle(seq)
    }

    /// Schedule `event` to fire `delay` after `now`.
    pub fn schedule_after(&mut self, now: Instant, delay: Duration, event: E) -> TimerHandle {
        self.schedule_at(now + delay, event)
    }

    /// Cancel a pending entry. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let key = self
            .queue
            .keys()
            .find(|(_, seq)| *seq == handle.0)
            .copied();

        match key {
            Some(key) => self.queue.remove(&key).is_some(),
            None => false,
        }
    }

    /// Drop every pending entry.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Remove and return the earliest entry whose deadline is `<= now`.
    ///
    /// Entries with equal deadlines fire in scheduling order.
    pub fn pop_due(&mut self, now: Instant) -> Option<Fired<E>> {
        let (&(deadline, seq), _) = self.queue.first_key_value()?;
        if deadline > now {
            return None;
        }
        let event = self.queue.remove(&(deadline, seq))?;
        Some(Fired {
            handle: TimerHandle(seq),
            deadline,
            event,
        })
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.queue.keys().any(|(_, seq)| *seq == handle.0)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
