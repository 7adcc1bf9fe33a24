//! Generator-style iteration over the characters of a string.

use super::{Coroutine, Generator};
use crate::protocol::{Iterable, IteratorStep};

/// Loop body walking a string one `char` at a time.
///
/// Characters are Unicode scalar values; the cursor is a byte offset that
/// always sits on a char boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct CharBody {
    text: String,
    cursor: usize,
    count: usize,
}

impl CharBody {
    /// Body positioned before the first character.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
            count: 0,
        }
    }
}

impl Coroutine for CharBody {
    type Yield = char;

    fn resume(&mut self) -> IteratorStep<char> {
        match self.text[self.cursor..].chars().next() {
            Some(ch) => {
                self.cursor += ch.len_utf8();
                self.count += 1;
                IteratorStep::Yielded(ch)
            }
            None => IteratorStep::Complete(self.count),
        }
    }
}

/// Generator over a [`CharBody`].
pub type StringIterator = Generator<CharBody>;

/// Build a generator over the characters of `text`.
pub fn make_string_iterator(text: impl Into<String>) -> StringIterator {
    Generator::new(CharBody::new(text))
}

// Strings are re-iterable: each call starts from the first character.
impl Iterable for &str {
    type Item = char;
    type Iter = StringIterator;

    fn iterate(self) -> Self::Iter {
        make_string_iterator(self)
    }
}

impl Iterable for &String {
    type Item = char;
    type Iter = StringIterator;

    fn iterate(self) -> Self::Iter {
        make_string_iterator(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Advance;

    #[test]
    fn test_hello() {
        let mut it = make_string_iterator("Hello");
        for expected in ['H', 'e', 'l', 'l', 'o'] {
            assert_eq!(it.advance(), IteratorStep::Yielded(expected));
        }
        assert_eq!(it.advance(), IteratorStep::Complete(5));
    }

    #[test]
    fn test_empty_string() {
        let mut it = make_string_iterator("");
        assert_eq!(it.advance(), IteratorStep::Complete(0));
        assert!(it.is_finished());
    }

    #[test]
    fn test_multibyte_characters() {
        let chars: String = make_string_iterator("añ√🦀").steps().collect();
        assert_eq!(chars, "añ√🦀");

        let mut it = make_string_iterator("√🦀");
        it.advance();
        it.advance();
        assert_eq!(it.advance(), IteratorStep::Complete(2));
    }

    #[test]
    fn test_str_is_reiterable() {
        let text = "abc";
        let first: String = text.iterate().steps().collect();
        let second: String = text.iterate().steps().collect();
        assert_eq!(first, second);
    }
}
