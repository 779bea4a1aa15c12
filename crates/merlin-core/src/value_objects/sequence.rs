//! Record identity and ordering
//!
//! `IdSequence` hands out auto-increment ids that are never reused.
//! `MonotonicClock` hands out creation timestamps that strictly increase,
//! so "newest first" listings have a total order even when the wall clock
//! stalls or steps backwards.
//!
//! Both take `&mut self`: callers keep them inside the same lock as the table
//! they number.

use chrono::{DateTime, Duration, Utc};

/// Auto-increment ID generator starting at 1
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: i32,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Take the next ID
    pub fn next_id(&mut self) -> i32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Strictly increasing timestamp source
#[derive(Debug, Clone, Default)]
pub struct MonotonicClock {
    last: Option<DateTime<Utc>>,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time, bumped 1µs past the previous value if the clock has not advanced
    pub fn now(&mut self) -> DateTime<Utc> {
        self.stamp(Utc::now())
    }

    fn stamp(&mut self, wall: DateTime<Utc>) -> DateTime<Utc> {
        let next = match self.last {
            Some(last) if wall <= last => last + Duration::microseconds(1),
            _ => wall,
        };
        self.last = Some(next);
        next
    }
}
