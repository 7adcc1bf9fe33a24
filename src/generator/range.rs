//! Generator-style numeric range.

use super::{Coroutine, Generator};
use crate::protocol::IteratorStep;

/// Bound used when a generator range is described without one.
pub const DEFAULT_GENERATOR_END: f64 = 10.0;

/// Loop body counting from `start` toward `end`.
///
/// The loop index always moves by one. `step` is accepted and kept, but it
/// does not influence the sequence, unlike [`crate::range::RangeIterator`].
#[derive(Debug, Clone, PartialEq)]
pub struct RangeBody {
    index: f64,
    end: f64,
    step: f64,
    count: usize,
}

impl RangeBody {
    /// Body positioned before its first pass.
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        Self {
            index: start,
            end,
            step,
            count: 0,
        }
    }

    /// The step the body was created with.
    pub fn requested_step(&self) -> f64 {
        self.step
    }
}

impl Coroutine for RangeBody {
    type Yield = f64;

    fn resume(&mut self) -> IteratorStep<f64> {
        if self.index < self.end {
            let value = self.index;
            self.count += 1;
            self.index += 1.0;
            return IteratorStep::Yielded(value);
        }
        IteratorStep::Complete(self.count)
    }
}

/// Generator over a [`RangeBody`].
pub type GeneratorRange = Generator<RangeBody>;

/// Build a generator-style range iterator.
pub fn make_range_iterator2(start: f64, end: f64, step: f64) -> GeneratorRange {
    Generator::new(RangeBody::new(start, end, step))
}
