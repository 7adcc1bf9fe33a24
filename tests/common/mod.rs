use std::fmt::Display;

use stepwise::{use_iterator, Advance, DriveReport};

#[allow(dead_code)]
/// Drive `iter` into memory, returning the reported lines and the report.
pub fn drive_lines<A>(iter: A) -> (Vec<String>, DriveReport)
where
    A: Advance,
    A::Item: Display,
{
    let mut out: Vec<u8> = Vec::new();
    let report = use_iterator(iter, &mut out).expect("in-memory output never fails");
    let text = String::from_utf8(out).expect("driver writes UTF-8");
    (text.lines().map(str::to_string).collect(), report)
}

#[allow(dead_code)]
pub fn numbers(range: std::ops::Range<i32>) -> Vec<String> {
    range.map(|n| n.to_string()).collect()
}
