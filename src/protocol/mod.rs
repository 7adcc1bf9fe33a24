//! Iterator protocol: a value is an iterator when it can be advanced one
//! [`IteratorStep`] at a time.
//!
//! Adapters bridge the protocol and [`std::iter::Iterator`] in both
//! directions, and [`Iterable`] describes values that can hand out an
//! iterator.

mod step;

pub use step::IteratorStep;

/// Anything that can be advanced one step at a time.
pub trait Advance {
    /// Element type of non-terminal steps.
    type Item;

    /// Produce the next step.
    ///
    /// After the first [`IteratorStep::Complete`] the iterators in this crate
    /// keep returning that same terminal step.
    fn advance(&mut self) -> IteratorStep<Self::Item>;

    /// View this iterator as a [`std::iter::Iterator`].
    fn steps(self) -> Steps<Self>
    where
        Self: Sized,
    {
        Steps::new(self)
    }
}

impl<A: Advance + ?Sized> Advance for &mut A {
    type Item = A::Item;

    fn advance(&mut self) -> IteratorStep<Self::Item> {
        (**self).advance()
    }
}

impl<A: Advance + ?Sized> Advance for Box<A> {
    type Item = A::Item;

    fn advance(&mut self) -> IteratorStep<Self::Item> {
        (**self).advance()
    }
}

/// Values that can produce an iterator.
///
/// Re-iterable values hand out a fresh iterator on every call; single-use
/// values (generators, hand-written iterators) hand out themselves.
pub trait Iterable {
    /// Element type of the produced iterator.
    type Item;
    /// Produced iterator.
    type Iter: Advance<Item = Self::Item>;

    /// Obtain an iterator.
    fn iterate(self) -> Self::Iter;
}

/// [`std::iter::Iterator`] over an [`Advance`] implementation.
///
/// Yields elements until the terminal step and remembers its count.
#[derive(Debug)]
pub struct Steps<A> {
    inner: A,
    completion: Option<usize>,
}

impl<A: Advance> Steps<A> {
    /// Wrap an iterator.
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            completion: None,
        }
    }

    /// Count carried by the terminal step, once it has been reached.
    pub fn completion(&self) -> Option<usize> {
        self.completion
    }

    /// Recover the wrapped iterator.
    pub fn into_inner(self) -> A {
        self.inner
    }
}

impl<A: Advance> Iterator for Steps<A> {
    type Item = A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.completion.is_some() {
            return None;
        }
        match self.inner.advance() {
            IteratorStep::Yielded(value) => Some(value),
            IteratorStep::Complete(count) => {
                self.completion = Some(count);
                None
            }
        }
    }
}

impl<A: Advance> std::iter::FusedIterator for Steps<A> {}

/// [`Advance`] over a [`std::iter::Iterator`], counting what it yields.
#[derive(Debug, Clone)]
pub struct FromIter<I> {
    inner: I,
    count: usize,
    exhausted: bool,
}

impl<I: Iterator> FromIter<I> {
    /// Wrap anything convertible into an iterator.
    pub fn new<T>(iter: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            inner: iter.into_iter(),
            count: 0,
            exhausted: false,
        }
    }
}

impl<I: Iterator> Advance for FromIter<I> {
    type Item = I::Item;

    fn advance(&mut self) -> IteratorStep<Self::Item> {
        if self.exhausted {
            return IteratorStep::Complete(self.count);
        }
        match self.inner.next() {
            Some(value) => {
                self.count += 1;
                IteratorStep::Yielded(value)
            }
            None => {
                self.exhausted = true;
                IteratorStep::Complete(self.count)
            }
        }
    }
}

impl<I: Iterator> Iterable for FromIter<I> {
    type Item = I::Item;
    type Iter = Self;

    fn iterate(self) -> Self::Iter {
        self
    }
}
