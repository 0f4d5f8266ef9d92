//! # Array Operation Engine
//!
//! Owns the array and its highlight, and runs one animated operation at a
//! time.
//!
//! ## Animation Model
//!
//! Each operation is a small state machine:
//!
//! ```text
//!   Idle ──trigger──► Running(step) ──tick──► Running(step') ──tick──► Done
//!     ▲                     │
//!     └────── cancel ───────┘
//! ```
//!
//! A running step arms exactly one [`Scheduler`] entry. When it fires, the
//! step advances and (unless finished) arms the next entry relative to the
//! deadline that just fired. Triggering a new operation cancels the pending
//! entry first, so a stale step can never touch the array or highlight.
//!
//! ## Timings
//!
//! | Operation | Behaviour |
//! |-----------|-----------|
//! | Access    | highlight random index, clear after 1.5s |
//! | Insert    | splice random value at random position, highlight, clear after 1.5s |
//! | Remove    | highlight random index, remove it and clear after 1.0s |
//! | Iterate   | advance highlight every 0.5s, clear after the last index |
//! | Search    | scan every 0.5s until the target is highlighted, clear 1.0s later |

use super::catalog::Operation;
use super::scheduler::{Scheduler, TimerHandle};
use super::Cell;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};
use tracing::debug;

/// Array contents at mount time.
pub const SEED_ARRAY: [i64; 5] = [5, 2, 8, 1, 9];

/// How long Access and Insert keep their highlight.
pub const HIGHLIGHT_HOLD: Duration = Duration::from_millis(1500);

/// Delay between highlighting an element and removing it.
pub const REMOVE_DELAY: Duration = Duration::from_millis(1000);

/// Step interval for Iterate and Search.
pub const STEP_TICK: Duration = Duration::from_millis(500);

/// How long Search keeps the matching element highlighted.
pub const FOUND_HOLD: Duration = Duration::from_millis(1000);

/// Range of values produced by Insert.
pub const INSERT_VALUES: RangeInclusive<i64> = 1..=100;

/// Where a running operation currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Access/Insert: waiting for the highlight to expire.
    Holding { index: usize },
    /// Remove: highlighted, element still present.
    PendingRemoval { index: usize },
    /// Iterate: `index` is highlighted.
    Walking { index: usize },
    /// Search: `index` is highlighted and does not hold `target`.
    Scanning { target: i64, index: usize },
    /// Search: `index` holds `target`, waiting to clear.
    Found { target: i64, index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running { operation: Operation, step: Step },
    Done(Operation),
}

/// What a trigger did, reported immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accessed { index: usize },
    Inserted { index: usize, value: i64 },
    RemovalPending { index: usize },
    Iterating { len: usize },
    Searching { target: i64 },
    /// The array was empty; nothing was scheduled.
    Skipped,
}

/// Animated operations over an integer array.
#[derive(Debug)]
pub struct ArrayEngine<R = StdRng> {
    array: Vec<i64>,
    highlight: Option<usize>,
    phase: Phase,
    timer: Option<TimerHandle>,
    scheduler: Scheduler<Operation>,
    rng: R,
}

impl ArrayEngine<StdRng> {
    /// A freshly mounted engine holding [`SEED_ARRAY`].
    pub fn new() -> Self {
        Self::with_rng(SEED_ARRAY.to_vec(), StdRng::from_os_rng())
    }
}

impl Default for ArrayEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ArrayEngine<R> {
    pub fn with_rng(array: Vec<i64>, rng: R) -> Self {
        Self {
            array,
            highlight: None,
            phase: Phase::Idle,
            timer: None,
            scheduler: Scheduler::new(),
            rng,
        }
    }

    pub fn array(&self) -> &[i64] {
        &self.array
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// Deadline of the pending step, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Boxes for the renderer, one per element.
    pub fn cells(&self) -> Vec<Cell> {
        self.array
            .iter()
            .enumerate()
            .map(|(i, &value)| Cell {
                value,
                highlighted: self.highlight == Some(i),
                is_new: false,
            })
            .collect()
    }

    /// Start `operation`, cancelling whatever was running.
    pub fn trigger(&mut self, operation: Operation, now: Instant) -> Outcome {
        self.cancel();

        let outcome = match operation {
            Operation::Access => self.start_access(now),
            Operation::Insert => self.start_insert(now),
            Operation::Remove => self.start_remove(now),
            Operation::Iterate => self.start_iterate(now),
            Operation::Search => self.start_search(now),
        };
        debug!(%operation, ?outcome, len = self.array.len(), "operation triggered");
        outcome
    }

    /// Abort the running animation without applying its pending step.
    ///
    /// Returns `true` if an animation was running.
    pub fn cancel(&mut self) -> bool {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
        self.highlight = None;

        let was_running = self.is_animating();
        if let Phase::Running { operation, .. } = self.phase {
            debug!(%operation, "animation cancelled");
        }
        self.phase = Phase::Idle;
        was_running
    }

    /// Cancel any animation and restore [`SEED_ARRAY`].
    pub fn reset(&mut self) {
        self.cancel();
        self.array = SEED_ARRAY.to_vec();
    }

    /// Fire every step that is due at `now`. Returns `true` if the visible
    /// state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(fired) = self.scheduler.pop_due(now) {
            if self.timer != Some(fired.handle) {
                continue;
            }
            self.timer = None;
            self.advance(fired.deadline);
            changed = true;
        }
        changed
    }

    fn start_access(&mut self, now: Instant) -> Outcome {
        if self.array.is_empty() {
            return Outcome::Skipped;
        }
        let index = self.rng.random_range(0..self.array.len());
        self.run(Operation::Access, Step::Holding { index }, Some(index));
        self.arm(now, HIGHLIGHT_HOLD, Operation::Access);
        Outcome::Accessed { index }
    }

    fn start_insert(&mut self, now: Instant) -> Outcome {
        let value = self.rng.random_range(INSERT_VALUES);
        let index = self.rng.random_range(0..=self.array.len());
        self.array.insert(index, value);
        self.run(Operation::Insert, Step::Holding { index }, Some(index));
        self.arm(now, HIGHLIGHT_HOLD, Operation::Insert);
        Outcome::Inserted { index, value }
    }

    fn start_remove(&mut self, now: Instant) -> Outcome {
        if self.array.is_empty() {
            return Outcome::Skipped;
        }
        let index = self.rng.random_range(0..self.array.len());
        self.run(Operation::Remove, Step::PendingRemoval { index }, Some(index));
        self.arm(now, REMOVE_DELAY, Operation::Remove);
        Outcome::RemovalPending { index }
    }

    fn start_iterate(&mut self, now: Instant) -> Outcome {
        if self.array.is_empty() {
            return Outcome::Skipped;
        }
        self.run(Operation::Iterate, Step::Walking { index: 0 }, Some(0));
        self.arm(now, STEP_TICK, Operation::Iterate);
        Outcome::Iterating {
            len: self.array.len(),
        }
    }

    fn start_search(&mut self, now: Instant) -> Outcome {
        if self.array.is_empty() {
            return Outcome::Skipped;
        }
        let target = self.array[self.rng.random_range(0..self.array.len())];
        self.scan_to(0, target, now);
        Outcome::Searching { target }
    }

    /// Highlight `index` during a search and arm the next step.
    fn scan_to(&mut self, index: usize, target: i64, at: Instant) {
        if self.array[index] == target {
            self.run(Operation::Search, Step::Found { target, index }, Some(index));
            self.arm(at, FOUND_HOLD, Operation::Search);
        } else {
            self.run(
                Operation::Search,
                Step::Scanning { target, index },
                Some(index),
            );
            self.arm(at, STEP_TICK, Operation::Search);
        }
    }

    fn advance(&mut self, at: Instant) {
        let Phase::Running { operation, step } = self.phase else {
            return;
        };

        match step {
            Step::Holding { .. } | Step::Found { .. } => self.finish(operation),
            Step::PendingRemoval { index } => {
                if index < self.array.len() {
                    let removed = self.array.remove(index);
                    debug!(index, removed, "element removed");
                }
                self.finish(operation);
            }
            Step::Walking { index } => {
                let next = index + 1;
                if next < self.array.len() {
                    self.run(operation, Step::Walking { index: next }, Some(next));
                    self.arm(at, STEP_TICK, operation);
                } else {
                    self.finish(operation);
                }
            }
            Step::Scanning { target, index } => {
                let next = index + 1;
                if next < self.array.len() {
                    self.scan_to(next, target, at);
                } else {
                    debug!(target, "search exhausted without a match");
                    self.finish(operation);
                }
            }
        }
    }

    fn run(&mut self, operation: Operation, step: Step, highlight: Option<usize>) {
        self.phase = Phase::Running { operation, step };
        self.highlight = highlight;
    }

    fn arm(&mut self, at: Instant, delay: Duration, operation: Operation) {
        self.timer = Some(self.scheduler.schedule_after(at, delay, operation));
    }

    fn finish(&mut self, operation: Operation) {
        self.highlight = None;
        self.timer = None;
        self.phase = Phase::Done(operation);
        debug!(%operation, "animation finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(array: &[i64], seed: u64) -> ArrayEngine<StdRng> {
        ArrayEngine::with_rng(array.to_vec(), StdRng::seed_from_u64(seed))
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Advance in `step` increments until the animation stops, recording the
    /// highlight after each increment.
    fn run_to_end(
        engine: &mut ArrayEngine<StdRng>,
        t0: Instant,
        step: Duration,
    ) -> Vec<Option<usize>> {
        let mut seen = Vec::new();
        let mut now = t0;
        while engine.is_animating() {
            now += step;
            engine.tick(now);
            seen.push(engine.highlight());
        }
        seen
    }

    #[test]
    fn test_new_engine_holds_seed() {
        let engine = ArrayEngine::new();
        assert_eq!(engine.array(), &SEED_ARRAY);
        assert_eq!(engine.highlight(), None);
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn test_access_highlights_then_clears() {
        for seed in 0..32 {
            let t0 = Instant::now();
            let mut engine = engine(&[5, 2, 8, 1, 9], seed);

            let Outcome::Accessed { index } = engine.trigger(Operation::Access, t0) else {
                panic!("expected access outcome");
            };
            assert!(index < 5);
            assert_eq!(engine.highlight(), Some(index));

            engine.tick(t0 + ms(1499));
            assert_eq!(engine.highlight(), Some(index));

            engine.tick(t0 + ms(1500));
            assert_eq!(engine.highlight(), None);
            assert_eq!(engine.phase(), Phase::Done(Operation::Access));
            assert_eq!(engine.array(), &[5, 2, 8, 1, 9]);
        }
    }

    #[test]
    fn test_insert_grows_by_one_at_reported_index() {
        for seed in 0..32 {
            let t0 = Instant::now();
            let original = [1, 2, 3, 4, 5];
            let mut engine = engine(&original, seed);

            let Outcome::Inserted { index, value } = engine.trigger(Operation::Insert, t0) else {
                panic!("expected insert outcome");
            };
            assert!(INSERT_VALUES.contains(&value));
            assert!(index <= original.len());
            assert_eq!(engine.array().len(), 6);
            assert_eq!(engine.array()[index], value);
            assert_eq!(engine.highlight(), Some(index));

            let mut rest = engine.array().to_vec();
            rest.remove(index);
            assert_eq!(rest, original);

            engine.tick(t0 + HIGHLIGHT_HOLD);
            assert_eq!(engine.highlight(), None);
        }
    }

    #[test]
    fn test_insert_into_empty_array() {
        let t0 = Instant::now();
        let mut engine = engine(&[], 7);
        let outcome = engine.trigger(Operation::Insert, t0);
        assert!(matches!(outcome, Outcome::Inserted { index: 0, .. }));
        assert_eq!(engine.array().len(), 1);
    }

    #[test]
    fn test_remove_highlights_before_mutating() {
        for seed in 0..32 {
            let t0 = Instant::now();
            let original = vec![5, 2, 8, 1, 9];
            let mut engine = engine(&original, seed);

            let Outcome::RemovalPending { index } = engine.trigger(Operation::Remove, t0) else {
                panic!("expected removal outcome");
            };
            assert_eq!(engine.highlight(), Some(index));

            engine.tick(t0 + ms(999));
            assert_eq!(engine.array(), original.as_slice(), "mutated too early");

            engine.tick(t0 + REMOVE_DELAY);
            let mut expected = original.clone();
            expected.remove(index);
            assert_eq!(engine.array(), expected.as_slice());
            assert_eq!(engine.highlight(), None);
        }
    }

    #[test]
    fn test_remove_on_empty_array_schedules_nothing() {
        let t0 = Instant::now();
        let mut engine = engine(&[], 1);
        assert_eq!(engine.trigger(Operation::Remove, t0), Outcome::Skipped);
        assert!(engine.array().is_empty());
        assert_eq!(engine.next_deadline(), None);
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn test_empty_array_short_circuits() {
        let t0 = Instant::now();
        for op in [Operation::Access, Operation::Iterate, Operation::Search] {
            let mut engine = engine(&[], 3);
            assert_eq!(engine.trigger(op, t0), Outcome::Skipped);
            assert_eq!(engine.highlight(), None);
            assert_eq!(engine.next_deadline(), None);
        }
    }

    #[test]
    fn test_iterate_visits_every_index_in_order() {
        let t0 = Instant::now();
        let mut engine = engine(&[5, 2, 8, 1, 9], 0);

        assert_eq!(
            engine.trigger(Operation::Iterate, t0),
            Outcome::Iterating { len: 5 }
        );
        assert_eq!(engine.highlight(), Some(0));

        let seen = run_to_end(&mut engine, t0, STEP_TICK);
        assert_eq!(seen, vec![Some(1), Some(2), Some(3), Some(4), None]);
        assert_eq!(engine.phase(), Phase::Done(Operation::Iterate));
    }

    #[test]
    fn test_iterate_does_not_advance_between_ticks() {
        let t0 = Instant::now();
        let mut engine = engine(&[1, 2, 3], 0);
        engine.trigger(Operation::Iterate, t0);

        assert!(!engine.tick(t0 + ms(499)));
        assert_eq!(engine.highlight(), Some(0));
        assert!(engine.tick(t0 + ms(500)));
        assert_eq!(engine.highlight(), Some(1));
    }

    #[test]
    fn test_late_tick_catches_up() {
        let t0 = Instant::now();
        let mut engine = engine(&[1, 2, 3], 0);
        engine.trigger(Operation::Iterate, t0);

        engine.tick(t0 + ms(1200));
        assert_eq!(engine.highlight(), Some(2));

        engine.tick(t0 + ms(60_000));
        assert_eq!(engine.highlight(), None);
        assert!(!engine.is_animating());
    }

    #[test]
    fn test_search_stops_on_target() {
        for seed in 0..32 {
            let t0 = Instant::now();
            let array = [5, 2, 8, 1, 9];
            let mut engine = engine(&array, seed);

            let Outcome::Searching { target } = engine.trigger(Operation::Search, t0) else {
                panic!("expected search outcome");
            };
            assert!(array.contains(&target));

            let expected = array.iter().position(|&v| v == target).expect("present");
            let mut now = t0;
            let mut last = engine.highlight();
            while let Phase::Running { step, .. } = engine.phase() {
                if let Step::Found { index, .. } = step {
                    assert_eq!(index, expected);
                    assert_eq!(engine.highlight(), Some(expected));
                    break;
                }
                now += STEP_TICK;
                engine.tick(now);
                last = engine.highlight().or(last);
            }
            assert_eq!(last.map(|i| array[i]), Some(target));

            engine.tick(now + ms(999));
            assert_eq!(engine.highlight(), Some(expected));
            engine.tick(now + FOUND_HOLD);
            assert_eq!(engine.highlight(), None);
            assert_eq!(engine.phase(), Phase::Done(Operation::Search));
        }
    }

    #[test]
    fn test_search_with_duplicates_stops_at_first_occurrence() {
        for seed in 0..16 {
            let t0 = Instant::now();
            let mut engine = engine(&[3, 7, 3, 7], seed);
            let Outcome::Searching { target } = engine.trigger(Operation::Search, t0) else {
                panic!("expected search outcome");
            };
            let expected = if target == 3 { 0 } else { 1 };
            engine.tick(t0 + STEP_TICK);
            assert_eq!(engine.highlight(), Some(expected));
        }
    }

    #[test]
    fn test_switching_operation_cancels_pending_removal() {
        let t0 = Instant::now();
        let mut engine = engine(&[5, 2, 8, 1, 9], 4);

        engine.trigger(Operation::Remove, t0);
        engine.trigger(Operation::Access, t0 + ms(200));

        engine.tick(t0 + ms(5000));
        assert_eq!(engine.array().len(), 5, "cancelled removal must not apply");
        assert_eq!(engine.highlight(), None);
    }

    #[test]
    fn test_switching_operation_replaces_highlight_sequence() {
        let t0 = Instant::now();
        let mut engine = engine(&[5, 2, 8, 1, 9], 4);

        engine.trigger(Operation::Iterate, t0);
        engine.tick(t0 + ms(500));
        assert_eq!(engine.highlight(), Some(1));

        let Outcome::Accessed { index } = engine.trigger(Operation::Access, t0 + ms(700)) else {
            panic!("expected access outcome");
        };
        // the old interval would have fired here
        engine.tick(t0 + ms(1000));
        assert_eq!(engine.highlight(), Some(index));
        assert_eq!(
            engine.phase(),
            Phase::Running {
                operation: Operation::Access,
                step: Step::Holding { index }
            }
        );
    }

    #[test]
    fn test_cancel_and_reset() {
        let t0 = Instant::now();
        let mut engine = engine(&[1], 0);
        engine.trigger(Operation::Insert, t0);
        assert!(engine.cancel());
        assert!(!engine.cancel());
        assert_eq!(engine.next_deadline(), None);

        engine.reset();
        assert_eq!(engine.array(), &SEED_ARRAY);
    }

    #[test]
    fn test_cells_mark_highlight_only() {
        let t0 = Instant::now();
        let mut engine = engine(&[4, 6], 0);
        engine.trigger(Operation::Iterate, t0);

        let cells = engine.cells();
        assert_eq!(cells.len(), 2);
        assert!(cells[0].highlighted);
        assert!(!cells[1].highlighted);
        assert!(cells.iter().all(|c| !c.is_new));
    }
}
