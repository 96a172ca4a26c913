use thiserror::Error;

/// Failures of [`crate::ReversalController::submit`]. Display text is shown
/// to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Input was empty after trimming. User-correctable; surfaced inline and
    /// never logged.
    #[error("Input cannot be empty!")]
    EmptyInput,

    /// The reversal computation itself failed. Not expected for pure string
    /// manipulation; surfaced via a blocking modal and logged at error
    /// severity.
    #[error("An error occurred: {detail}")]
    ReversalFailure { detail: String },
}
