//! Generator-style iterators
//!
//! A generator body is a loop that suspends after each element. Here each body
//! is an explicit state machine: one [`Coroutine::resume`] runs one pass of the
//! loop and either yields an element or returns the element count.
//! [`Generator`] owns the lifecycle: once the body returns, it is dropped and
//! the generator keeps reporting the same terminal step. A finished generator
//! never restarts; call the factory again for a fresh sequence.

mod chars;
mod range;

pub use chars::{make_string_iterator, CharBody, StringIterator};
pub use range::{make_range_iterator2, GeneratorRange, RangeBody, DEFAULT_GENERATOR_END};

use tracing::{debug, trace};

use crate::protocol::{Advance, Iterable, IteratorStep};

/// One resumable loop body.
pub trait Coroutine {
    /// Element produced at each suspension point.
    type Yield;

    /// Run until the next suspension point or until the body returns.
    ///
    /// Never called again after it returns [`IteratorStep::Complete`].
    fn resume(&mut self) -> IteratorStep<Self::Yield>;
}

#[derive(Debug, Clone)]
enum GeneratorState<C> {
    /// Parked at a suspension point (or not yet started)
    Suspended(C),

    /// Body returned this count
    Completed(usize),
}

/// Single-use iterator driven by a [`Coroutine`] body.
#[derive(Debug, Clone)]
pub struct Generator<C> {
    state: GeneratorState<C>,
}

impl<C: Coroutine> Generator<C> {
    /// Wrap a body that has not started yet.
    pub fn new(body: C) -> Self {
        Self {
            state: GeneratorState::Suspended(body),
        }
    }

    /// `true` once the body has returned.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, GeneratorState::Completed(_))
    }
}

impl<C: Coroutine> Advance for Generator<C> {
    type Item = C::Yield;

    fn advance(&mut self) -> IteratorStep<C::Yield> {
        let body = match &mut self.state {
            GeneratorState::Suspended(body) => body,
            GeneratorState::Completed(count) => return IteratorStep::Complete(*count),
        };

        match body.resume() {
            IteratorStep::Yielded(value) => {
                trace!("generator resumed and suspended");
                IteratorStep::Yielded(value)
            }
            IteratorStep::Complete(count) => {
                debug!(count, "generator returned");
                self.state = GeneratorState::Completed(count);
                IteratorStep::Complete(count)
            }
        }
    }
}

impl<C: Coroutine> Iterable for Generator<C> {
    type Item = C::Yield;
    type Iter = Self;

    fn iterate(self) -> Self::Iter {
        self
    }
}
