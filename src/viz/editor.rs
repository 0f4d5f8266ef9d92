//! # Array Editor
//!
//! The hands-on variant of the array page: the user types numbers to append,
//! pops the last element, and searches by value. Nothing here is animated
//! step by step; the only timers are the "new" marker decay and the search
//! highlight expiry.

use super::engine::SEED_ARRAY;
use super::scheduler::{Scheduler, TimerHandle};
use super::Cell;
use chrono::Utc;
use std::time::{Duration, Instant};
use tracing::debug;

/// How long a freshly added element keeps its "new" marker after the last
/// change to the array.
pub const NEW_ITEM_DECAY: Duration = Duration::from_millis(500);

/// How long a search result stays highlighted.
pub const SEARCH_HIGHLIGHT: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayItem {
    pub value: i64,
    /// Stable identity, a millisecond timestamp for user-added items.
    pub key: i64,
    pub is_new: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(usize),
    NotFound,
}

impl SearchOutcome {
    /// Index form used by the status line, `-1` when nothing matched.
    pub fn as_index(self) -> i64 {
        match self {
            SearchOutcome::Found(index) => index as i64,
            SearchOutcome::NotFound => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditorTimer {
    Decay,
    ClearSearch,
}

#[derive(Debug)]
pub struct ArrayEditor {
    items: Vec<ArrayItem>,
    search: Option<SearchOutcome>,
    scheduler: Scheduler<EditorTimer>,
    decay_timer: Option<TimerHandle>,
    search_timer: Option<TimerHandle>,
    last_key: i64,
}

impl Default for ArrayEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ArrayEditor {
    pub fn new() -> Self {
        let items = SEED_ARRAY
            .iter()
            .zip(1..)
            .map(|(&value, key)| ArrayItem {
                value,
                key,
                is_new: false,
            })
            .collect();

        Self {
            items,
            search: None,
            scheduler: Scheduler::new(),
            decay_timer: None,
            search_timer: None,
            last_key: 0,
        }
    }

    pub fn items(&self) -> &[ArrayItem] {
        &self.items
    }

    pub fn values(&self) -> Vec<i64> {
        self.items.iter().map(|item| item.value).collect()
    }

    /// The most recent search result while its highlight is still showing.
    pub fn search_result(&self) -> Option<SearchOutcome> {
        self.search
    }

    pub fn highlight(&self) -> Option<usize> {
        match self.search {
            Some(SearchOutcome::Found(index)) => Some(index),
            _ => None,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    pub fn cells(&self) -> Vec<Cell> {
        let highlight = self.highlight();
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| Cell {
                value: item.value,
                highlighted: highlight == Some(i),
                is_new: item.is_new,
            })
            .collect()
    }

    /// Append the number in `input`. Returns the new item, or `None` if the
    /// input does not start with an integer.
    pub fn add(&mut self, input: &str, now: Instant) -> Option<ArrayItem> {
        let value = parse_int(input)?;
        let item = ArrayItem {
            value,
            key: self.next_key(),
            is_new: true,
        };
        self.items.push(item);
        self.touch(now);
        debug!(value, key = item.key, "item appended");
        Some(item)
    }

    /// Pop the last element, if any.
    pub fn remove_last(&mut self, now: Instant) -> Option<ArrayItem> {
        let item = self.items.pop()?;
        self.touch(now);
        debug!(value = item.value, "item popped");
        Some(item)
    }

    /// Look up the first element equal to the number in `input` and
    /// highlight it. Unparseable input changes nothing.
    pub fn search(&mut self, input: &str, now: Instant) -> Option<SearchOutcome> {
        let needle = parse_int(input)?;
        let outcome = match self.items.iter().position(|item| item.value == needle) {
            Some(index) => SearchOutcome::Found(index),
            None => SearchOutcome::NotFound,
        };

        if let Some(handle) = self.search_timer.take() {
            self.scheduler.cancel(handle);
        }
        self.search = Some(outcome);
        self.search_timer = Some(self.scheduler.schedule_after(
            now,
            SEARCH_HIGHLIGHT,
            EditorTimer::ClearSearch,
        ));
        debug!(needle, ?outcome, "search");
        Some(outcome)
    }

    /// Fire due timers. Returns `true` if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(fired) = self.scheduler.pop_due(now) {
            match fired.event {
                EditorTimer::Decay => {
                    self.decay_timer = None;
                    for item in &mut self.items {
                        item.is_new = false;
                    }
                }
                EditorTimer::ClearSearch => {
                    self.search_timer = None;
                    self.search = None;
                }
            }
            changed = true;
        }
        changed
    }

    /// Drop pending timers and transient markers.
    pub fn cancel_timers(&mut self) {
        self.scheduler.clear();
        self.decay_timer = None;
        self.search_timer = None;
        self.search = None;
        for item in &mut self.items {
            item.is_new = false;
        }
    }

    /// Restart the decay countdown after the array changed.
    fn touch(&mut self, now: Instant) {
        if let Some(handle) = self.decay_timer.take() {
            self.scheduler.cancel(handle);
        }
        self.decay_timer = Some(
            self.scheduler
                .schedule_after(now, NEW_ITEM_DECAY, EditorTimer::Decay),
        );
    }

    fn next_key(&mut self) -> i64 {
        let key = Utc::now().timestamp_millis().max(self.last_key + 1);
        self.last_key = key;
        key
    }
}

/// Parse a leading integer the way a browser's `parseInt` does: optional
/// leading whitespace and sign, then decimal digits up to the first
/// non-digit. Returns `None` when there are no digits or the value
/// overflows.
pub fn parse_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
