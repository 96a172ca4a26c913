//! Core interaction loop for the string reverser desktop app: domain types,
//! error taxonomy, diagnostics, and the reversal controller. No GUI
//! dependencies; the presentation shell lives in `apps/desktop_gui`.

pub mod controller;
pub mod diagnostics;
pub mod domain;
pub mod error;

pub use controller::{Outcome, Phase, ReversalController};
pub use diagnostics::{DiagLevel, DiagnosticSink, TracingSink};
pub use domain::{DisplayChannel, InputRecord, ReversalResult, INLINE_DISPLAY_MAX_CHARS};
pub use error::SubmitError;

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
