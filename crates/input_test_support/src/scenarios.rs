//! TOML scenario fixtures: a starting text box, a list of events, and the
//! frame expected after each event.
//!
//! ```toml
//! format = "textbox-scenarios-v1"
//!
//! [[cases]]
//! id = "scroll-right"
//! text = "HELLO"
//! config = { visible_columns = 3 }
//! events = [{ kind = "home" }, { kind = "move_caret", to = 4 }]
//! frames = [
//!     'caret=0 window=[0,3) sel=- "HEL"',
//!     'caret=4 window=[1,4) sel=- "ELL"',
//! ]
//! ```

use crate::escape_text;
use input_core::{TextBoxConfig, TextBoxEvent, TextWindowTracker};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

pub const SCENARIOS_FORMAT_V1: &str = "textbox-scenarios-v1";

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioFile {
    format: String,
    cases: Vec<Scenario>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub config: TextBoxConfig,
    pub events: Vec<TextBoxEvent>,
    pub frames: Vec<String>,
    /// Stored value expected after the last event.
    #[serde(default)]
    pub final_text: Option<String>,
}

impl Scenario {
    pub fn tracker(&self) -> TextWindowTracker {
        TextWindowTracker::with_text(self.config.clone(), &self.text)
    }
}

pub fn load_scenarios(path: &Path) -> Vec<Scenario> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read scenario file {path:?}: {err}"));
    let file: ScenarioFile = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse scenario file {path:?}: {err}"));

    assert_eq!(
        file.format, SCENARIOS_FORMAT_V1,
        "unsupported format in {path:?}"
    );
    let mut seen = BTreeSet::new();
    for case in &file.cases {
        assert!(
            seen.insert(case.id.as_str()),
            "duplicate scenario id '{}' in {path:?}",
            case.id
        );
        assert_eq!(
            case.events.len(),
            case.frames.len(),
            "scenario '{}' in {path:?} needs exactly one frame per event",
            case.id
        );
    }
    file.cases
}

/// One-line snapshot of what the user sees: caret, window, selection and
/// rendered text.
pub fn frame_line(tb: &TextWindowTracker) -> String {
    let window = tb.window();
    let sel = match tb.selection() {
        Some(sel) => format!("[{},{})", sel.start, sel.end),
        None => "-".to_string(),
    };
    format!(
        "caret={} window=[{},{}) sel={sel} \"{}\"",
        tb.caret(),
        window.start,
        window.end,
        escape_text(&tb.render())
    )
}

/// Replay `scenario` and return one frame per event.
///
/// A rejected event yields `error: <message>` instead of a frame.
pub fn run_scenario(scenario: &Scenario) -> (TextWindowTracker, Vec<String>) {
    let mut tb = scenario.tracker();
    let frames = scenario
        .events
        .iter()
        .map(|event| match tb.apply(event) {
            Ok(()) => frame_line(&tb),
            Err(err) => format!("error: {err}"),
        })
        .collect();
    (tb, frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use input_core::InsertionMode;

    #[test]
    fn scenario_parses_partial_config() {
        let src = r#"
            format = "textbox-scenarios-v1"

            [[cases]]
            id = "x"
            config = { insertion_mode = "overwrite", max_length = 4 }
            events = [{ kind = "input", text = "ab" }]
            frames = ['caret=2 window=[0,2) sel=- "ab"']
        "#;
        let file: ScenarioFile = toml::from_str(src).unwrap();
        let case = &file.cases[0];
        assert_eq!(case.config.insertion_mode, InsertionMode::Overwrite);
        assert_eq!(case.config.max_length, Some(4));
        assert_eq!(case.config.visible_columns, input_core::DEFAULT_VISIBLE_COLUMNS);

        let (_tb, frames) = run_scenario(case);
        assert_eq!(frames, case.frames);
    }
}
