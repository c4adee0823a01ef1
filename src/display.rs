//! What the window currently shows: one result region and one error region,
//! never both at once.

use crate::types::{HistoryEntry, Outcome, Payload};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Text(String),
    History(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayState {
    pub result: Option<ResultView>,
    pub error: Option<String>,
}

impl DisplayState {
    pub fn show_result(&mut self, text: impl Into<String>) {
        self.result = Some(ResultView::Text(text.into()));
        self.error = None;
    }

    /// Transient text while a request is in flight
    pub fn show_progress(&mut self, text: &str) {
        self.show_result(text);
    }

    pub fn show_error(&mut self, message: &str) {
        self.error = Some(format!("Error: {}", message));
        self.result = None;
    }

    /// Local input problems are shown as-is, without the "Error: " prefix
    pub fn show_validation_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.result = None;
    }

    pub fn show_history(&mut self, entries: &[HistoryEntry]) {
        self.result = Some(ResultView::History(
            entries.iter().map(render_history_entry).collect(),
        ));
        self.error = None;
    }

    pub fn apply(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Success(Payload::Conversion(value)) => {
                self.show_result(format!("Result: {}", render_json(value)))
            }
            Outcome::Success(Payload::Message(text)) => self.show_result(text.as_str()),
            Outcome::Success(Payload::History(entries)) => self.show_history(entries),
            Outcome::Failure(message) => self.show_error(message),
        }
    }

    pub fn clear(&mut self) {
        self.result = None;
        self.error = None;
    }
}

/// Compact JSON, object keys in the order the service sent them
pub fn render_json(value: &Value) -> String {
    value.to_string()
}

/// Strings without quotes, anything else as JSON
pub fn render_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => render_json(other),
    }
}

pub fn render_history_entry(entry: &HistoryEntry) -> String {
    format!(
        "Input: {} Output: {}",
        render_text(&entry.input),
        render_json(&entry.output)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn conversion_renders_with_result_prefix() {
        let value: Value = serde_json::from_str(r#"{"value": 5, "unit": "kg"}"#).unwrap();
        let mut state = DisplayState::default();
        state.apply(&Outcome::Success(Payload::Conversion(value)));
        assert_eq!(
            state.result,
            Some(ResultView::Text(r#"Result: {"value":5,"unit":"kg"}"#.into()))
        );
        assert_eq!(state.error, None);
    }

    #[test]
    fn failure_gets_error_prefix_and_clears_result() {
        let mut state = DisplayState::default();
        state.show_progress("Converting...");
        state.apply(&Outcome::Failure("Server unavailable.".into()));
        assert_eq!(state.error.as_deref(), Some("Error: Server unavailable."));
        assert_eq!(state.result, None);
    }

    #[test]
    fn validation_error_has_no_prefix() {
        let mut state = DisplayState::default();
        state.show_result("Result: [1]");
        state.show_validation_error("Please enter a measurement string.");
        assert_eq!(state.error.as_deref(), Some("Please enter a measurement string."));
        assert_eq!(state.result, None);
    }

    #[test]
    fn empty_history_message_is_plain_text() {
        let mut state = DisplayState::default();
        state.apply(&Outcome::Success(Payload::Message("No history found.".into())));
        assert_eq!(state.result, Some(ResultView::Text("No history found.".into())));
    }

    #[test]
    fn history_renders_one_line_per_entry() {
        let entries = vec![HistoryEntry {
            input: "5 km".into(),
            output: json!({"miles": 3.1}),
        }];
        let mut state = DisplayState::default();
        state.apply(&Outcome::Success(Payload::History(entries)));
        match state.result {
            Some(ResultView::History(lines)) => {
                assert_eq!(lines.len(), 1);
                assert!(lines[0].contains("5 km"));
                assert!(lines[0].contains(r#"{"miles":3.1}"#));
                assert_eq!(lines[0], r#"Input: 5 km Output: {"miles":3.1}"#);
            }
            other => panic!("unexpected result view: {:?}", other),
        }
    }

    #[test]
    fn history_line_renders_non_string_input_as_json() {
        let entry = HistoryEntry {
            input: json!(42),
            output: json!([1, 2]),
        };
        assert_eq!(render_history_entry(&entry), "Input: 42 Output: [1,2]");
    }

    #[test]
    fn success_after_error_clears_error() {
        let mut state = DisplayState::default();
        state.show_error("Conversion failed.");
        state.apply(&Outcome::Success(Payload::Conversion(json!([3]))));
        assert_eq!(state.error, None);
        assert_eq!(state.result, Some(ResultView::Text("Result: [3]".into())));
    }

    #[test]
    fn clear_empties_both_regions() {
        let mut state = DisplayState::default();
        state.show_error("x");
        state.clear();
        assert_eq!(state, DisplayState::default());
    }
}
