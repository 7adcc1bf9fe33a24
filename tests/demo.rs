use stepwise::{run_demo, DemoConfig, DriveReport, GENERATOR_BANNER, HAND_WRITTEN_BANNER};
use test_case::test_case;

fn demo_output(config: DemoConfig) -> String {
    let mut out: Vec<u8> = Vec::new();
    run_demo(&config, &mut out).expect("demo writes to memory");
    String::from_utf8(out).expect("demo writes UTF-8")
}

fn range_block() -> Vec<String> {
    let mut lines = vec![HAND_WRITTEN_BANNER.to_string()];
    lines.extend((1..10).map(|n| n.to_string()));
    lines.push(GENERATOR_BANNER.to_string());
    lines.extend((1..10).map(|n| n.to_string()));
    lines
}

fn string_block() -> Vec<String> {
    ["H", "e", "l", "l", "o"].iter().map(|s| s.to_string()).collect()
}

#[test]
fn full_demo_output() {
    let output = demo_output(DemoConfig::default());
    let mut expected = range_block();
    expected.extend(string_block());
    assert_eq!(output.lines().collect::<Vec<_>>(), expected);
}

#[test_case(true, false ; "range block only")]
#[test_case(false, true ; "string block only")]
fn blocks_can_be_toggled(run_range_iterator: bool, run_string_iterator: bool) {
    let output = demo_output(DemoConfig {
        run_range_iterator,
        run_string_iterator,
    });
    let mut expected = Vec::new();
    if run_range_iterator {
        expected.extend(range_block());
    }
    if run_string_iterator {
        expected.extend(string_block());
    }
    assert_eq!(output.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn summary_carries_terminal_counts() {
    let mut out: Vec<u8> = Vec::new();
    let summary = run_demo(&DemoConfig::default(), &mut out).unwrap();
    let nine = DriveReport {
        reported: 9,
        completion: 9,
    };
    assert_eq!(summary.hand_written, Some(nine));
    assert_eq!(summary.generator, Some(nine));
    assert_eq!(
        summary.string,
        Some(DriveReport {
            reported: 5,
            completion: 5
        })
    );
}
