use input_test_support::diff_lines;
use input_test_support::scenarios::{load_scenarios, run_scenario};
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn scenario_fixtures_match_expected_frames() {
    let path = fixtures_dir().join("scenarios.toml");
    let cases = load_scenarios(&path);
    assert!(!cases.is_empty(), "no scenarios in {path:?}");

    let mut failures = Vec::new();
    for case in &cases {
        let (tb, frames) = run_scenario(case);
        if frames != case.frames {
            failures.push(format!(
                "scenario '{}':\n{}",
                case.id,
                diff_lines(&case.frames, &frames)
            ));
            continue;
        }
        if let Some(expected) = &case.final_text
            && tb.text() != expected
        {
            failures.push(format!(
                "scenario '{}': final text {:?}, expected {expected:?}",
                case.id,
                tb.text()
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "{} of {} scenarios failed:\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}
