//! Hand-written numeric range iterator
//!
//! All state lives in an explicit struct and is mutated only by `advance`.
//! No input validation: a zero step (or a step pointing away from `end`)
//! never reaches the terminal step, and NaN bounds end the range at once.

use tracing::trace;

use crate::protocol::{Advance, Iterable, IteratorStep};

/// Numeric range from `start` (inclusive) to `end` (exclusive) by `step`.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeIterator {
    /// Next value to yield
    current: f64,

    /// Constant increment
    step: f64,

    /// Exclusive bound
    end: f64,

    /// Elements produced so far
    count: usize,
}

impl RangeIterator {
    /// Create an iterator positioned at `start`.
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        Self {
            current: start,
            step,
            end,
            count: 0,
        }
    }

    /// Elements produced so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Advance for RangeIterator {
    type Item = f64;

    fn advance(&mut self) -> IteratorStep<f64> {
        if self.current < self.end {
            let value = self.current;
            self.current += self.step;
            self.count += 1;
            trace!(value, count = self.count, "range step");
            return IteratorStep::Yielded(value);
        }
        IteratorStep::Complete(self.count)
    }
}

impl Iterable for RangeIterator {
    type Item = f64;
    type Iter = Self;

    fn iterate(self) -> Self::Iter {
        self
    }
}

/// Build a hand-written range iterator.
pub fn make_range_iterator(start: f64, end: f64, step: f64) -> RangeIterator {
    RangeIterator::new(start, end, step)
}

/// Re-iterable description of a range.
///
/// Defaults to `0..+inf` by `1`. Every call to [`Iterable::iterate`] starts
/// a fresh [`RangeIterator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSpec {
    /// First value
    pub start: f64,
    /// Exclusive bound
    pub end: f64,
    /// Increment
    pub step: f64,
}

impl Default for RangeSpec {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: f64::INFINITY,
            step: 1.0,
        }
    }
}

impl RangeSpec {
    /// Unbounded range from zero by one.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first value.
    pub fn start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    /// Set the exclusive bound.
    pub fn end(mut self, end: f64) -> Self {
        self.end = end;
        self
    }

    /// Set the increment.
    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }
}

impl Iterable for RangeSpec {
    type Item = f64;
    type Iter = RangeIterator;

    fn iterate(self) -> Self::Iter {
        make_range_iterator(self.start, self.end, self.step)
    }
}
