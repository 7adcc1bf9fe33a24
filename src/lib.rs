//! # Stepwise: the iterator protocol, by hand
//!
//! A value is an iterator when it can be advanced one step at a time, each
//! step being either an element or the terminal step carrying the number of
//! elements produced.
//!
//! ## Iterators
//!
//! 1. **Hand-written range**: explicit state, `start..end` by `step`
//! 2. **Generator range**: a loop body suspended after each element
//! 3. **String**: the same suspension model over a string's characters
//!
//! A single driver advances any of them to exhaustion and reports each
//! element on its own line.
//!
//! ## Usage Example
//!
//! ```
//! use stepwise::{make_range_iterator, use_iterator};
//!
//! let mut out: Vec<u8> = Vec::new();
//! let report = use_iterator(make_range_iterator(1.0, 4.0, 1.0), &mut out)?;
//! assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n3\n");
//! assert_eq!(report.completion, 3);
//! # Ok::<(), stepwise::DriverError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod protocol;   // Step record and Advance trait
pub mod range;      // Hand-written range iterator
pub mod generator;  // Suspended loop bodies
pub mod driver;     // Advance-until-done loop

// Re-exports for convenience
pub use protocol::{Advance, FromIter, Iterable, IteratorStep, Steps};
pub use range::{make_range_iterator, RangeIterator, RangeSpec};
pub use generator::{make_range_iterator2, make_string_iterator, Coroutine, Generator};
pub use driver::{drive_value, use_iterator, DriveReport, DriverError, Element, Value};

use std::io::Write;

use tracing::debug;

/// Line printed before the hand-written range is driven.
pub const HAND_WRITTEN_BANNER: &str = "using hand written iterator";

/// Line printed before the generator range is driven.
pub const GENERATOR_BANNER: &str = "using generator function to generate an iterator";

/// Text driven by the string block.
pub const DEMO_TEXT: &str = "Hello";

/// Which demonstration blocks to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    /// Drive the hand-written and generator ranges over `1..10`
    pub run_range_iterator: bool,

    /// Drive the string iterator over [`DEMO_TEXT`]
    pub run_string_iterator: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            run_range_iterator: true,
            run_string_iterator: true,
        }
    }
}

/// Per-block reports from one demo run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoSummary {
    /// Hand-written range, if it ran
    pub hand_written: Option<DriveReport>,

    /// Generator range, if it ran
    pub generator: Option<DriveReport>,

    /// String iterator, if it ran
    pub string: Option<DriveReport>,
}

/// Run the enabled demonstration blocks, writing everything to `out`.
pub fn run_demo<W>(config: &DemoConfig, out: &mut W) -> Result<DemoSummary, DriverError>
where
    W: Write + ?Sized,
{
    let mut summary = DemoSummary::default();

    if config.run_range_iterator {
        debug!("running range block");
        writeln!(out, "{HAND_WRITTEN_BANNER}")?;
        summary.hand_written = Some(use_iterator(make_range_iterator(1.0, 10.0, 1.0), out)?);

        writeln!(out, "{GENERATOR_BANNER}")?;
        summary.generator = Some(use_iterator(make_range_iterator2(1.0, 10.0, 1.0), out)?);
    }

    if config.run_string_iterator {
        debug!("running string block");
        summary.string = Some(use_iterator(make_string_iterator(DEMO_TEXT), out)?);
    }

    Ok(summary)
}
