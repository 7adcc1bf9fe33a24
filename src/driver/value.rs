//! Dynamically-typed values handed to the driver.
//!
//! Conformance to the iterator protocol is a run-time property of a
//! [`Value`]: only [`Value::Iterator`] exposes `advance`.

use std::fmt;

use crate::protocol::{Advance, IteratorStep};

/// Element of an erased iterator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Element {
    /// A number
    Number(f64),
    /// A single character
    Char(char),
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Number(n) => write!(f, "{n}"),
            Element::Char(c) => write!(f, "{c}"),
        }
    }
}

impl From<f64> for Element {
    fn from(n: f64) -> Self {
        Element::Number(n)
    }
}

impl From<char> for Element {
    fn from(c: char) -> Self {
        Element::Char(c)
    }
}

/// Boxed iterator over erased elements.
pub type DynIterator = Box<dyn Advance<Item = Element>>;

/// Adapter converting an iterator's items into [`Element`]s.
#[derive(Debug)]
struct Erased<A> {
    inner: A,
}

impl<A> Advance for Erased<A>
where
    A: Advance,
    A::Item: Into<Element>,
{
    type Item = Element;

    fn advance(&mut self) -> IteratorStep<Element> {
        self.inner.advance().map(Into::into)
    }
}

/// A value that may or may not conform to the iterator protocol.
pub enum Value {
    /// No value
    Undefined,
    /// A plain number
    Number(f64),
    /// A string; iterable, but not an iterator itself
    Text(String),
    /// Something exposing `advance`
    Iterator(DynIterator),
}

impl Value {
    /// Erase an iterator into a [`Value`].
    pub fn iterator<A>(inner: A) -> Self
    where
        A: Advance + 'static,
        A::Item: Into<Element>,
    {
        Value::Iterator(Box::new(Erased { inner }))
    }

    /// Short name of the value's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Number(_) => "number",
            Value::Text(_) => "string",
            Value::Iterator(_) => "iterator",
        }
    }

    /// Take the iterator out, if there is one.
    pub fn into_iterator(self) -> Option<DynIterator> {
        match self {
            Value::Iterator(it) => Some(it),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("Undefined"),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Value::Iterator(_) => f.write_str("Iterator(..)"),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}
