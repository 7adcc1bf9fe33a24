mod common;

use common::drive_lines;
use stepwise::{
    make_range_iterator, make_range_iterator2, make_string_iterator, Advance, Iterable,
    IteratorStep, RangeSpec,
};
use test_case::test_case;

#[test]
fn exhausted_generators_do_not_restart() {
    let mut range = make_range_iterator2(1.0, 10.0, 1.0);
    let (first, _) = drive_lines(&mut range);
    assert_eq!(first.len(), 9);

    let (second, report) = drive_lines(&mut range);
    assert!(second.is_empty(), "a finished generator yields nothing more");
    assert_eq!(report.reported, 0);
    assert_eq!(report.completion, 9);

    let mut text = make_string_iterator("Hello");
    drive_lines(&mut text);
    let (again, report) = drive_lines(&mut text);
    assert!(again.is_empty());
    assert_eq!(report.completion, 5);
}

#[test]
fn calling_the_factory_again_gives_a_fresh_sequence() {
    let (first, _) = drive_lines(make_string_iterator("Hello"));
    let (second, _) = drive_lines(make_string_iterator("Hello"));
    assert_eq!(first, second);
}

#[test_case(1.0 ; "unit step")]
#[test_case(2.0 ; "step of two")]
#[test_case(5.0 ; "step of five")]
fn generator_range_always_moves_by_one(step: f64) {
    let (lines, report) = drive_lines(make_range_iterator2(0.0, 6.0, step));
    assert_eq!(lines, vec!["0", "1", "2", "3", "4", "5"]);
    assert_eq!(report.completion, 6);
}

#[test]
fn hand_written_range_honors_the_step_the_generator_ignores() {
    let (hand_written, _) = drive_lines(make_range_iterator(0.0, 6.0, 2.0));
    let (generated, _) = drive_lines(make_range_iterator2(0.0, 6.0, 2.0));
    assert_eq!(hand_written, vec!["0", "2", "4"]);
    assert_eq!(generated.len(), 6);
}

#[test]
fn generators_work_with_std_adapters() {
    let upper: String = make_string_iterator("hello")
        .steps()
        .map(|c| c.to_ascii_uppercase())
        .collect();
    assert_eq!(upper, "HELLO");

    let sum: f64 = make_range_iterator2(1.0, 5.0, 1.0).steps().sum();
    assert_eq!(sum, 10.0);
}

#[test]
fn reiterable_values_hand_out_fresh_iterators() {
    let spec = RangeSpec::new().start(1.0).end(4.0);
    let (first, _) = drive_lines(spec.iterate());
    let (second, _) = drive_lines(spec.iterate());
    assert_eq!(first, second);

    let text = String::from("ab");
    let (chars, _) = drive_lines((&text).iterate());
    assert_eq!(chars, vec!["a", "b"]);
    let (chars_again, _) = drive_lines("ab".iterate());
    assert_eq!(chars, chars_again);
}

#[test]
fn single_use_values_iterate_to_themselves() {
    let mut generator = make_string_iterator("xy");
    generator.advance();
    let mut resumed = generator.iterate();
    assert_eq!(resumed.advance(), IteratorStep::Yielded('y'));
    assert_eq!(resumed.advance(), IteratorStep::Complete(2));
}
