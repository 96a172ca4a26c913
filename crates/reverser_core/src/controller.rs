//! Reversal controller: validates the current input, computes its reversal,
//! and routes the result to a presentation channel.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::diagnostics::{DiagLevel, DiagnosticSink};
use crate::domain::{DisplayChannel, InputRecord, ReversalResult};
use crate::error::SubmitError;

/// Controller state. `Processing` is transient: `submit` is fully
/// synchronous and always returns to `Idle` before the next event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Processing,
}

/// Successful submit, tagged with the channel the result must be shown on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Inline(ReversalResult),
    Modal(ReversalResult),
}

/// Owns the input-reversal interaction loop. One instance per running
/// application; the diagnostic sink is injected at construction and never
/// sits on the correctness path.
pub struct ReversalController {
    diagnostics: Arc<dyn DiagnosticSink>,
    phase: Phase,
}

impl ReversalController {
    pub fn new(diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            diagnostics,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Trims, validates, reverses, and routes `raw_text`.
    ///
    /// Empty input fails with [`SubmitError::EmptyInput`] and records
    /// nothing. Successful reversals are logged at info severity; reversed
    /// text longer than [`crate::domain::INLINE_DISPLAY_MAX_CHARS`] chars is
    /// routed to the modal channel, everything else inline.
    pub fn submit(&mut self, raw_text: &str) -> Result<Outcome, SubmitError> {
        self.phase = Phase::Processing;
        let outcome = self.submit_inner(raw_text);
        self.phase = Phase::Idle;
        outcome
    }

    fn submit_inner(&self, raw_text: &str) -> Result<Outcome, SubmitError> {
        let record = InputRecord::new(raw_text);
        let trimmed = record.trimmed();
        if trimmed.is_empty() {
            return Err(SubmitError::EmptyInput);
        }

        // A pure char-order reversal has no failing path today, but an
        // unexpected panic must surface as a blocking error notification
        // instead of tearing down the event loop.
        let result = panic::catch_unwind(AssertUnwindSafe(|| ReversalResult::compute(trimmed)))
            .map_err(|payload| {
                let detail = panic_detail(&*payload);
                self.diagnostics.record(
                    DiagLevel::Error,
                    &format!("Error while reversing string: {detail}"),
                );
                SubmitError::ReversalFailure { detail }
            })?;

        self.diagnostics.record(
            DiagLevel::Info,
            &format!("Reversed String: {}", result.reversed),
        );

        Ok(match DisplayChannel::for_text(&result.reversed) {
            DisplayChannel::Modal => Outcome::Modal(result),
            DisplayChannel::Inline => Outcome::Inline(result),
        })
    }

    /// Records the cancel gesture. The shell closes the window right after;
    /// process exit code stays 0.
    pub fn cancel(&self) {
        self.diagnostics.record(
            DiagLevel::Info,
            "Escape key pressed. Closing the application.",
        );
    }
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
