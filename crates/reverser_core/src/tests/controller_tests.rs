use std::sync::{Arc, Mutex};

use super::*;

#[derive(Default)]
struct RecordingSink {
    entries: Mutex<Vec<(DiagLevel, String)>>,
}

impl RecordingSink {
    fn entries(&self) -> Vec<(DiagLevel, String)> {
        self.entries.lock().expect("sink lock").clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, level: DiagLevel, message: &str) {
        self.entries
            .lock()
            .expect("sink lock")
            .push((level, message.to_string()));
    }
}

fn controller_with_sink() -> (ReversalController, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    (ReversalController::new(sink.clone()), sink)
}

#[test]
fn reverses_character_sequence() {
    let (mut controller, _sink) = controller_with_sink();

    let outcome = controller.submit("hello").expect("submit");
    match outcome {
        Outcome::Inline(result) => {
            assert_eq!(result.original, "hello");
            assert_eq!(result.reversed, "olleh");
        }
        Outcome::Modal(_) => panic!("five chars must stay inline"),
    }
}

#[test]
fn reversal_preserves_char_count_and_is_an_involution() {
    let samples = ["tkinter", "a", "héllo wörld", "日本語のテキスト"];
    for original in samples {
        let once = ReversalResult::compute(original);
        assert_eq!(once.reversed.chars().count(), original.chars().count());

        let twice = ReversalResult::compute(&once.reversed);
        assert_eq!(twice.reversed, original);
    }
}

#[test]
fn trims_surrounding_whitespace_before_reversing() {
    let (mut controller, _sink) = controller_with_sink();

    let outcome = controller.submit("  hello  ").expect("submit");
    assert_eq!(outcome, Outcome::Inline(ReversalResult::compute("hello")));
}

#[test]
fn empty_and_whitespace_input_fail_without_diagnostics() {
    let (mut controller, sink) = controller_with_sink();

    assert_eq!(controller.submit(""), Err(SubmitError::EmptyInput));
    assert_eq!(controller.submit("   "), Err(SubmitError::EmptyInput));
    assert!(sink.entries().is_empty());
}

#[test]
fn routes_by_reversed_length_around_the_threshold() {
    let (mut controller, _sink) = controller_with_sink();

    let at_threshold = "a".repeat(INLINE_DISPLAY_MAX_CHARS);
    assert!(matches!(
        controller.submit(&at_threshold).expect("submit"),
        Outcome::Inline(_)
    ));

    let over_threshold = "a".repeat(INLINE_DISPLAY_MAX_CHARS + 1);
    assert!(matches!(
        controller.submit(&over_threshold).expect("submit"),
        Outcome::Modal(_)
    ));
}

#[test]
fn eleven_chars_take_the_modal_channel() {
    let (mut controller, _sink) = controller_with_sink();

    match controller.submit("abcdefghijk").expect("submit") {
        Outcome::Modal(result) => assert_eq!(result.reversed, "kjihgfedcba"),
        Outcome::Inline(_) => panic!("eleven chars must go modal"),
    }
}

#[test]
fn multibyte_input_routes_by_chars_not_bytes() {
    let (mut controller, _sink) = controller_with_sink();

    // Ten chars but far more than ten bytes; must stay inline.
    let outcome = controller.submit("ありがとう、世界です").expect("submit");
    assert!(matches!(outcome, Outcome::Inline(_)));
}

#[test]
fn successful_submit_records_one_info_entry() {
    let (mut controller, sink) = controller_with_sink();

    controller.submit("hello").expect("submit");

    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, DiagLevel::Info);
    assert_eq!(entries[0].1, "Reversed String: olleh");
}

#[test]
fn phase_returns_to_idle_after_success_and_failure() {
    let (mut controller, _sink) = controller_with_sink();
    assert_eq!(controller.phase(), Phase::Idle);

    controller.submit("hello").expect("submit");
    assert_eq!(controller.phase(), Phase::Idle);

    controller.submit("").expect_err("empty input");
    assert_eq!(controller.phase(), Phase::Idle);
}

#[test]
fn cancel_records_the_shutdown_event() {
    let (controller, sink) = controller_with_sink();

    controller.cancel();

    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, DiagLevel::Info);
    assert_eq!(entries[0].1, "Escape key pressed. Closing the application.");
}

#[test]
fn error_display_matches_user_facing_messages() {
    assert_eq!(SubmitError::EmptyInput.to_string(), "Input cannot be empty!");
    assert_eq!(
        SubmitError::ReversalFailure {
            detail: "boom".to_string()
        }
        .to_string(),
        "An error occurred: boom"
    );
}
