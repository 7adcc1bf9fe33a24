//! The `{value, done}` record produced by every advance.

/// Result of a single advance.
///
/// `Yielded` is a step with `done = false`. `Complete` is the terminal step
/// (`done = true`) and carries the number of elements produced instead of an
/// element.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum IteratorStep<T> {
    /// An element of the sequence.
    Yielded(T),

    /// Exhaustion, with the count of elements produced.
    Complete(usize),
}

impl<T> IteratorStep<T> {
    /// `true` on the terminal step.
    pub fn is_done(&self) -> bool {
        matches!(self, IteratorStep::Complete(_))
    }

    /// The element, if this step carries one.
    pub fn value(&self) -> Option<&T> {
        match self {
            IteratorStep::Yielded(value) => Some(value),
            IteratorStep::Complete(_) => None,
        }
    }

    /// The element count, if this is the terminal step.
    pub fn count(&self) -> Option<usize> {
        match self {
            IteratorStep::Yielded(_) => None,
            IteratorStep::Complete(count) => Some(*count),
        }
    }

    /// Consume the step, keeping only a yielded element.
    pub fn into_yielded(self) -> Option<T> {
        match self {
            IteratorStep::Yielded(value) => Some(value),
            IteratorStep::Complete(_) => None,
        }
    }

    /// Transform the element, leaving a terminal step untouched.
    pub fn map<U, F>(self, f: F) -> IteratorStep<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            IteratorStep::Yielded(value) => IteratorStep::Yielded(f(value)),
            IteratorStep::Complete(count) => IteratorStep::Complete(count),
        }
    }
}
