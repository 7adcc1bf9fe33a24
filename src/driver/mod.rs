//! Driver: advance an iterator to exhaustion, reporting each element.
//!
//! Each non-terminal step's value is written on its own line. The terminal
//! step ends the loop; its count is returned in the [`DriveReport`] but never
//! written. There is no step limit, so an iterator that never completes keeps
//! the driver running.

mod value;

pub use value::{DynIterator, Element, Value};

use std::fmt::Display;
use std::io::Write;

use thiserror::Error;
use tracing::{debug, trace};

use crate::protocol::{Advance, IteratorStep};

/// Errors surfaced while driving an iterator
#[derive(Error, Debug)]
pub enum DriverError {
    /// The value handed to the driver does not expose `advance`
    #[error("{found} is not an iterator: advance() is not available")]
    ProtocolViolation {
        /// Kind of the offending value
        found: &'static str,
    },

    /// Writing a reported value failed
    #[error("failed to report value: {0}")]
    Output(#[from] std::io::Error),
}

/// Outcome of one driver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DriveReport {
    /// Values written to the output
    pub reported: usize,

    /// Count carried by the terminal step
    pub completion: usize,
}

/// Advance `iter` until its terminal step, writing each value to `out`.
pub fn use_iterator<A, W>(mut iter: A, out: &mut W) -> Result<DriveReport, DriverError>
where
    A: Advance,
    A::Item: Display,
    W: Write + ?Sized,
{
    let mut reported = 0;
    loop {
        match iter.advance() {
            IteratorStep::Yielded(value) => {
                trace!(%value, "reporting value");
                writeln!(out, "{value}")?;
                reported += 1;
            }
            IteratorStep::Complete(completion) => {
                debug!(reported, completion, "iterator exhausted");
                return Ok(DriveReport {
                    reported,
                    completion,
                });
            }
        }
    }
}

/// Drive a dynamically-typed value.
///
/// Fails with [`DriverError::ProtocolViolation`] before writing anything when
/// `value` is not an iterator.
pub fn drive_value<W>(value: Value, out: &mut W) -> Result<DriveReport, DriverError>
where
    W: Write + ?Sized,
{
    let found = value.kind();
    match value.into_iterator() {
        Some(iter) => use_iterator(iter, out),
        None => Err(DriverError::ProtocolViolation { found }),
    }
}
